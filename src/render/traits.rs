//! Rendering traits

pub use crate::geometry::Point;
use std::{fmt::Debug, io::Error};

/// Consumer of a traced path.
///
/// The cursor reports every position change: `move_to` while the pen is
/// up, `line_to` while it draws.
pub trait Render: Debug {
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);

    /// Flush the collected drawing to its destination
    fn finalize(self: Box<Self>) -> Result<(), Error>;
}
