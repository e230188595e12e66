//! Polar vectors driving the force simulation
//!
//! Values are stored as single precision while every trigonometric step runs in
//! double precision, so repeated polar/Cartesian round trips stay stable over
//! hundreds of relaxation iterations.

use crate::geometry::rect::Point;
use std::fmt;
use std::ops::{Add, Mul};

/// Displacement expressed as a magnitude and a bearing in degrees
///
/// Construction always normalizes: the magnitude is non-negative and the
/// direction lies in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    magnitude: f32,
    direction: f32,
}

impl Vector {
    /// The zero vector
    pub const ZERO: Self = Self {
        magnitude: 0.0,
        direction: 0.0,
    };

    /// Create a normalized vector
    ///
    /// A negative magnitude flips the direction by 180 degrees.
    pub fn new(magnitude: f32, direction: f32) -> Self {
        let (magnitude, direction) = if magnitude < 0.0 {
            (-magnitude, direction + 180.0)
        } else {
            (magnitude, direction)
        };

        let mut direction = direction.rem_euclid(360.0);
        // rem_euclid rounds tiny negative inputs up to exactly 360
        if direction >= 360.0 {
            direction -= 360.0;
        }

        Self {
            magnitude,
            direction,
        }
    }

    /// Length of the vector
    pub const fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Bearing in degrees, `[0, 360)`
    pub const fn direction(&self) -> f32 {
        self.direction
    }

    /// Multiply the magnitude by `factor`, re-normalizing for negative factors
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.magnitude * factor, self.direction)
    }

    /// Convert to Cartesian coordinates relative to the origin
    pub fn to_point(self) -> Point {
        let radians = f64::from(self.direction).to_radians();
        Point::new(
            self.magnitude * radians.cos() as f32,
            self.magnitude * radians.sin() as f32,
        )
    }

    fn components(self) -> (f64, f64) {
        let radians = f64::from(self.direction).to_radians();
        let magnitude = f64::from(self.magnitude);
        (magnitude * radians.cos(), magnitude * radians.sin())
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let (ax, ay) = self.components();
        let (bx, by) = other.components();
        let x = ax + bx;
        let y = ay + by;

        let magnitude = (x.powi(2) + y.powi(2)).sqrt() as f32;
        // Exact comparison: only a sum that vanishes in storage precision has no bearing
        #[allow(clippy::float_cmp)]
        let direction = if magnitude == 0.0 {
            0.0
        } else {
            y.atan2(x).to_degrees() as f32
        };

        let finite = magnitude.is_finite() && direction.is_finite();
        debug_assert!(
            finite,
            "vector sum of {self} and {other} is not finite ({magnitude}, {direction})"
        );
        if !finite {
            tracing::warn!(
                lhs = %self,
                rhs = %other,
                "non-finite vector sum replaced by zero"
            );
            return Self::ZERO;
        }

        Self::new(magnitude, direction)
    }
}

impl Mul<f32> for Vector {
    type Output = Self;

    fn mul(self, factor: f32) -> Self {
        self.scale(factor)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5} {:.2}°", self.magnitude, self.direction)
    }
}

/// Bearing in degrees of the segment from `start` to `end`
///
/// The angle is measured on the half-way displacement. A segment without
/// horizontal displacement resolves to 0 degrees when pointing down the canvas
/// (or not at all) and to 180 degrees when pointing up.
#[allow(clippy::float_cmp)]
pub fn bearing(start: Point, end: Point) -> f32 {
    let half = Point::new(
        start.x + (end.x - start.x) / 2.0,
        start.y + (end.y - start.y) / 2.0,
    );

    let dx = f64::from(half.x - start.x);
    let dy = f64::from(half.y - start.y);

    if dx != 0.0 {
        dy.atan2(dx).to_degrees() as f32
    } else if dy >= 0.0 {
        0.0
    } else {
        180.0
    }
}

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f32 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx.powi(2) + dy.powi(2)).sqrt() as f32
}
