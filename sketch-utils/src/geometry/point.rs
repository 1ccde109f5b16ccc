use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::errors::{GeometryError, GeometryResult};

/// A position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        let a = self.x - other.x;
        let b = self.y - other.y;
        (a * a + b * b).sqrt()
    }

    /// Rotate about `center` by `angle` degrees, clockwise on screen.
    pub fn rotate_clockwise(&self, angle: f64, center: Point) -> Point {
        let (sin, cos) = angle.to_radians().sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(
            dx * cos - dy * sin + center.x,
            dx * sin + dy * cos + center.y,
        )
    }

    /// Snap to the nearest whole pixel. Only used at final draw time.
    pub fn round(&self) -> Point {
        Point::new(self.x.round(), self.y.round())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn ensure_finite(self) -> GeometryResult<Point> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(GeometryError::NonFinite {
                x: self.x,
                y: self.y,
            })
        }
    }

    /// Approximate equality for derived coordinates.
    pub fn approx_eq(&self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
