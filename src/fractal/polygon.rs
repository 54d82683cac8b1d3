//! Regular polygon with fractal edges

use super::edge::{edge_command_count, FractalEdgeSpec, Polarity};
use crate::{
    errors::DrawError,
    geometry::{Degrees, Point},
    turtle::{Cursor, DrawCommand},
};
use std::f64::consts::PI;
use tracing::debug;

/// Validated polygon parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonSpec {
    sides: u32,
    side_length: f64,
    depth: u32,
    polarity: Polarity,
}

impl PolygonSpec {
    /// Check raw parameters. Signed inputs so that user-supplied negative
    /// values reach validation instead of failing to parse.
    pub fn new(sides: i64, side_length: f64, depth: i64) -> Result<Self, DrawError> {
        if sides < 3 {
            return Err(DrawError::invalid(format!(
                "number of sides must be at least 3, got {sides}"
            )));
        }
        if !side_length.is_finite() || side_length <= 0.0 {
            return Err(DrawError::invalid(format!(
                "side length must be positive, got {side_length}"
            )));
        }
        if depth < 0 {
            return Err(DrawError::invalid(format!(
                "recursion depth must be 0 or greater, got {depth}"
            )));
        }
        let sides = u32::try_from(sides)
            .map_err(|_| DrawError::invalid(format!("number of sides {sides} is too large")))?;
        let depth = u32::try_from(depth)
            .map_err(|_| DrawError::invalid(format!("recursion depth {depth} is too large")))?;

        Ok(Self {
            sides,
            side_length,
            depth,
            polarity: Polarity::Inward,
        })
    }

    pub fn with_polarity(self, polarity: Polarity) -> Self {
        Self { polarity, ..self }
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Turn between consecutive edges
    pub fn exterior_turn(&self) -> Degrees {
        Degrees(Degrees::FULL_TURN.0 / self.sides as f64)
    }

    /// Where the first edge starts so that the base polygon sits around
    /// the origin. The first edge is horizontal, one apothem below it.
    pub fn start_point(&self) -> Point {
        let r = self.side_length / (2.0 * (PI / self.sides as f64).tan());
        Point::new(-self.side_length / 2.0, -r)
    }

    /// Total number of commands of the traced figure, placement included
    pub fn command_count(&self) -> u64 {
        edge_command_count(self.depth)
            .saturating_add(1)
            .saturating_mul(self.sides as u64)
            .saturating_add(3)
    }

    fn edge(&self) -> FractalEdgeSpec {
        FractalEdgeSpec::new(self.side_length, self.depth, self.polarity)
    }
}

/// Place `cursor` and trace the whole polygon with it
pub fn compose(spec: &PolygonSpec, cursor: &mut Cursor) -> Result<(), DrawError> {
    let start = spec.start_point();
    debug!(
        sides = spec.sides,
        side_length = spec.side_length,
        depth = spec.depth,
        polarity = %spec.polarity,
        "tracing polygon from {start}"
    );

    cursor.pen_up();
    cursor.set_heading(Degrees(0.0));
    cursor.teleport(start)?;
    cursor.pen_down();

    let edge = spec.edge();
    let turn = spec.exterior_turn();
    for _ in 0..spec.sides {
        edge.trace(cursor);
        cursor.turn_left(turn);
    }

    Ok(())
}

/// Command stream of the whole polygon
pub fn polygon_commands(spec: &PolygonSpec) -> Result<Vec<DrawCommand>, DrawError> {
    let mut cursor = Cursor::new();
    compose(spec, &mut cursor)?;
    Ok(cursor.finish().0)
}
