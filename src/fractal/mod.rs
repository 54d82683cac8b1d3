pub mod edge;
pub mod polygon;

pub use self::edge::{edge_command_count, edge_commands, FractalEdgeSpec, Polarity};
pub use self::polygon::{compose, polygon_commands, PolygonSpec};
