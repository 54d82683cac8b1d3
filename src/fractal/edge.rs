//! Self-similar indented edge
//!
//! An edge of depth `d` is four edges of depth `d - 1`, each a third of
//! the length, joined by the turns `t1, t2, t1`. Since `t1 + t2 + t1 = 0`
//! for both polarities, an edge always ends facing its start heading and
//! displaced by exactly `length` along it. Drawn length grows as
//! `(4/3)^d` and the number of commands as `4^d`, so depths beyond single
//! digits get expensive quickly.

use crate::{
    geometry::Degrees,
    turtle::{Cursor, DrawCommand},
};
use strum::{Display, EnumString};

/// Side of the edge the indentation bulges towards, relative to the
/// interior of a counter-clockwise traced polygon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Polarity {
    #[default]
    Inward,
    Outward,
}

impl Polarity {
    /// The `(t1, t2)` turn pair of one subdivision
    pub fn turns(self) -> (Degrees, Degrees) {
        match self {
            Polarity::Inward => (Degrees(60.0), Degrees(-120.0)),
            Polarity::Outward => (Degrees(-60.0), Degrees(120.0)),
        }
    }
}

/// One fractal edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalEdgeSpec {
    pub length: f64,
    pub depth: u32,
    pub polarity: Polarity,
}

impl FractalEdgeSpec {
    pub fn new(length: f64, depth: u32, polarity: Polarity) -> Self {
        Self {
            length,
            depth,
            polarity,
        }
    }

    /// Drive `cursor` through the whole edge
    pub fn trace(&self, cursor: &mut Cursor) {
        trace_edge(cursor, self.length, self.depth, self.polarity);
    }
}

fn trace_edge(cursor: &mut Cursor, length: f64, depth: u32, polarity: Polarity) {
    if depth == 0 {
        cursor.forward(length);
        return;
    }

    let sub = length / 3.0;
    let (t1, t2) = polarity.turns();

    trace_edge(cursor, sub, depth - 1, polarity);
    cursor.turn_left(t1);
    trace_edge(cursor, sub, depth - 1, polarity);
    cursor.turn_left(t2);
    trace_edge(cursor, sub, depth - 1, polarity);
    cursor.turn_left(t1);
    trace_edge(cursor, sub, depth - 1, polarity);
}

/// Command stream of a single edge traced from a fresh cursor
pub fn edge_commands(spec: &FractalEdgeSpec) -> Vec<DrawCommand> {
    let mut cursor = Cursor::new();
    spec.trace(&mut cursor);
    cursor.finish().0
}

/// Number of commands one edge of `depth` produces: `4^d` forward moves
/// and `4^d - 1` turns. Saturates instead of overflowing.
pub fn edge_command_count(depth: u32) -> u64 {
    4u64.checked_pow(depth)
        .map(|f| f.saturating_mul(2) - 1)
        .unwrap_or(u64::MAX)
}
