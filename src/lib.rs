//! Recursive indented polygons.
//!
//! A regular polygon whose edges are replaced by Koch-style indented
//! curves, computed as a stream of turtle [`DrawCommand`]s. Rendering is
//! left to a [`Render`] implementation fed by the [`Cursor`].

pub mod config;
pub mod errors;
pub mod fractal;
pub mod geometry;
pub mod render;
pub mod script;
pub mod turtle;

pub use config::DrawingConfig;
pub use errors::{DrawError, LineError, SimpleError};
pub use fractal::{compose, edge_commands, polygon_commands, FractalEdgeSpec, Polarity, PolygonSpec};
pub use render::Render;
pub use turtle::{Cursor, DrawCommand, TraceSummary};
