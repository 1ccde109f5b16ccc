use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::consts::pacing::MAX_BISECTION_DEPTH;
use crate::errors::{GeometryError, GeometryResult};

/// A directed segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.point_at(0.5)
    }

    /// Point at fraction `t` of the way from start to end.
    fn point_at(&self, t: f64) -> Point {
        Point::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
        )
    }

    pub fn is_degenerate(&self) -> bool {
        self.length() < f64::EPSILON
    }

    fn ensure_direction(&self) -> GeometryResult<()> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateLine {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Direction of travel in degrees, in (-180, 180].
    ///
    /// Measured on screen, so 0 points right and -90 points up.
    pub fn angle(&self) -> GeometryResult<f64> {
        self.ensure_direction()?;
        let dy = self.start.y - self.end.y;
        let dx = self.start.x - self.end.x;
        let mut degrees = dy.atan2(dx).to_degrees();
        if degrees < 0.0 {
            degrees += 360.0;
        }
        degrees -= 180.0;
        if degrees <= -180.0 {
            degrees += 360.0;
        }
        Ok(degrees)
    }

    /// Rotate the end point about the start.
    pub fn rotate_clockwise(&self, angle: f64) -> Line {
        Line::new(self.start, self.end.rotate_clockwise(angle, self.start))
    }

    pub fn split(&self) -> [Line; 2] {
        let midpoint = self.midpoint();
        [Line::new(self.start, midpoint), Line::new(midpoint, self.end)]
    }

    pub fn split3(&self) -> [Line; 3] {
        let first_third = self.point_at(1.0 / 3.0);
        let second_third = self.point_at(2.0 / 3.0);
        [
            Line::new(self.start, first_third),
            Line::new(first_third, second_third),
            Line::new(second_third, self.end),
        ]
    }

    /// Bisect `depth` times, giving `2^depth` pieces in start-to-end order.
    ///
    /// `depth` is clamped to [`MAX_BISECTION_DEPTH`].
    pub fn bisect(&self, depth: u32) -> Vec<Line> {
        let mut parts = vec![*self];
        for _ in 0..depth.min(MAX_BISECTION_DEPTH) {
            parts = parts.iter().flat_map(|part| part.split()).collect();
        }
        parts
    }

    /// Keep the start and direction, rescale to exactly `length`.
    pub fn with_length(&self, length: f64) -> GeometryResult<Line> {
        self.ensure_direction()?;
        let factor = length / self.length();
        let end = self.start + (self.end - self.start) * factor;
        Ok(Line::new(self.start, end.ensure_finite()?))
    }

    pub fn ensure_finite(self) -> GeometryResult<Line> {
        self.start.ensure_finite()?;
        self.end.ensure_finite()?;
        Ok(self)
    }
}
