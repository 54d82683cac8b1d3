//! Simulation summary of a command stream

use super::{commands::DrawCommand, cursor::Cursor};
use crate::{
    errors::DrawError,
    geometry::{Degrees, Point},
};
use std::fmt;

/// What a command stream does when replayed from a fresh cursor
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSummary {
    pub forwards: usize,
    pub turns: usize,
    /// Sum of all pen-down forward lengths
    pub drawn_length: f64,
    /// Sum of all turn angles
    pub net_turning: Degrees,
    /// Position where drawing begins, after any initial placement
    pub start: Point,
    pub end: Point,
    pub end_heading: Degrees,
}

impl TraceSummary {
    pub fn of(commands: &[DrawCommand]) -> Result<Self, DrawError> {
        let mut cursor = Cursor::new();
        let mut summary = TraceSummary {
            forwards: 0,
            turns: 0,
            drawn_length: 0.0,
            net_turning: Degrees(0.0),
            start: cursor.position(),
            end: cursor.position(),
            end_heading: cursor.heading(),
        };
        let mut started = false;

        for cmd in commands {
            match *cmd {
                DrawCommand::MoveForward(len) => {
                    if cursor.is_pen_down() {
                        if !started {
                            summary.start = cursor.position();
                            started = true;
                        }
                        summary.drawn_length += len.abs();
                    }
                    summary.forwards += 1;
                }
                DrawCommand::TurnLeft(angle) => {
                    summary.turns += 1;
                    summary.net_turning += angle;
                }
                _ => (),
            }
            cursor.execute(cmd)?;
        }

        if !started {
            summary.start = cursor.position();
        }
        summary.end = cursor.position();
        summary.end_heading = cursor.heading();
        Ok(summary)
    }

    /// Whether the trace ends where it started, facing the same way
    pub fn is_closed(&self, tolerance: f64) -> bool {
        self.end.approx_eq(self.start, tolerance)
            && self.net_turning.approx_eq_mod360(Degrees(0.0), tolerance)
    }
}

impl fmt::Display for TraceSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} forward, {} turn, drawn length {:.2}, net turning {}, start {}, end {}",
            self.forwards, self.turns, self.drawn_length, self.net_turning, self.start, self.end
        )
    }
}
