pub mod svg;
mod traits;

pub use self::svg::Svg;
pub use self::traits::Render;
