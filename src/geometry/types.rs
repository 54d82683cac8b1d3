//! Plane geometry value types

use derive_more::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::fmt;

/// Default tolerance for comparing traced coordinates and angles
pub const EPSILON: f64 = 1e-9;

/// Point (or displacement) in the drawing plane, y axis pointing up
#[derive(Debug, Clone, Copy, Default, PartialEq, Add, AddAssign, Sub, SubAssign, Mul, Neg)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading`
    pub fn unit(heading: Degrees) -> Self {
        let (sin, cos) = heading.to_radians().sin_cos();
        Self { x: cos, y: sin }
    }

    /// Distance to another point
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotate counter-clockwise around the origin
    pub fn rotated(self, angle: Degrees) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    pub fn approx_eq(self, other: Point, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Angle in degrees, counter-clockwise positive.
///
/// The value is never normalized on arithmetic; use [`Degrees::normalized`]
/// or [`Degrees::approx_eq_mod360`] where equivalence modulo a full turn
/// matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Neg)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const FULL_TURN: Degrees = Degrees(360.0);

    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Equivalent angle in `[0, 360)`
    pub fn normalized(self) -> Self {
        let full = Self::FULL_TURN.0;
        let a = self.0.rem_euclid(full);
        // rem_euclid may round up to exactly a full turn for tiny negatives
        Degrees(if a >= full { 0.0 } else { a })
    }

    /// Compare two angles modulo 360°
    pub fn approx_eq_mod360(self, other: Degrees, tolerance: f64) -> bool {
        let d = (self - other).normalized().0;
        d <= tolerance || Self::FULL_TURN.0 - d <= tolerance
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
