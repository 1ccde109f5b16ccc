use serde::{Deserialize, Serialize};

use super::line::Line;
use super::point::Point;
use crate::errors::{GeometryError, GeometryResult};

/// Closed shape given by its vertices in drawing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        Self::new(vec![a, b, c])
    }

    /// Axis-aligned square, corners clockwise on screen from `top_left`.
    pub fn square(top_left: Point, side: f64) -> Self {
        Self::new(vec![
            top_left,
            Point::new(top_left.x + side, top_left.y),
            Point::new(top_left.x + side, top_left.y + side),
            Point::new(top_left.x, top_left.y + side),
        ])
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Fail unless the polygon has exactly `expected` vertices.
    pub fn expect_vertices(&self, expected: usize) -> GeometryResult<&[Point]> {
        let found = self.vertex_count();
        if found != expected {
            return Err(GeometryError::MalformedShape { expected, found });
        }
        Ok(&self.points)
    }

    /// Sides in cyclic order; the last side closes back to the first vertex.
    pub fn sides(&self) -> Vec<Line> {
        let n = self.points.len();
        (0..n)
            .map(|i| Line::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    pub fn midpoints(&self) -> Vec<Point> {
        self.sides().iter().map(Line::midpoint).collect()
    }

    pub fn centroid(&self) -> Point {
        let n = self.points.len().max(1) as f64;
        let sum = self
            .points
            .iter()
            .fold(Point::default(), |acc, p| acc + *p);
        Point::new(sum.x / n, sum.y / n)
    }

    pub fn rotate_clockwise(&self, angle: f64, center: Point) -> Polygon {
        Polygon::new(
            self.points
                .iter()
                .map(|p| p.rotate_clockwise(angle, center))
                .collect(),
        )
    }

    pub fn ensure_finite(self) -> GeometryResult<Polygon> {
        for point in &self.points {
            point.ensure_finite()?;
        }
        Ok(self)
    }
}
