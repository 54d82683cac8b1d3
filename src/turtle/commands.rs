//! Drawing commands

use crate::geometry::{Degrees, Point};
use std::fmt;

/// One step of a traced figure.
///
/// Commands form an ordered stream; the order is the trace order. The
/// `Display` form is the line format understood by [`crate::script`]:
/// `F <len>`, `L <deg>`, `U`, `D`, `G <x> <y>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Move along the current heading
    MoveForward(f64),
    /// Turn counter-clockwise; negative angles turn right
    TurnLeft(Degrees),
    /// Stop drawing while moving
    PenUp,
    /// Resume drawing while moving
    PenDown,
    /// Jump to an absolute position (pen up only)
    GoTo(Point),
}

impl DrawCommand {
    /// Single-letter designator used in the text form
    pub fn letter(&self) -> char {
        use DrawCommand::*;
        match self {
            MoveForward(_) => 'F',
            TurnLeft(_) => 'L',
            PenUp => 'U',
            PenDown => 'D',
            GoTo(_) => 'G',
        }
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, DrawCommand::MoveForward(_))
    }

    pub fn is_turn(&self) -> bool {
        matches!(self, DrawCommand::TurnLeft(_))
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DrawCommand::*;
        let c = self.letter();
        match self {
            MoveForward(len) => write!(f, "{c} {len}"),
            TurnLeft(Degrees(a)) => write!(f, "{c} {a}"),
            PenUp | PenDown => write!(f, "{c}"),
            GoTo(Point { x, y }) => write!(f, "{c} {x} {y}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DrawCommand::*;
    use crate::geometry::{Degrees, Point};

    #[test]
    fn text_form() {
        assert_eq!(MoveForward(100.0).to_string(), "F 100");
        assert_eq!(TurnLeft(Degrees(-120.0)).to_string(), "L -120");
        assert_eq!(PenUp.to_string(), "U");
        assert_eq!(PenDown.to_string(), "D");
        assert_eq!(GoTo(Point::new(-150.0, -86.5)).to_string(), "G -150 -86.5");
    }
}
