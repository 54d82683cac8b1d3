//! Text form of command streams, for saving and replaying a trace

mod file;
mod parser;

pub use self::file::CommandScript;
pub use self::parser::parse_line;
