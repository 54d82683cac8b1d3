pub mod commands;
pub mod cursor;
pub mod trace;

pub use self::commands::DrawCommand;
pub use self::cursor::Cursor;
pub use self::trace::TraceSummary;
