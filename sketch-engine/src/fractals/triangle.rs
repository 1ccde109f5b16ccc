// Fractal Sketch: Sierpinski Triangle
//
// Draws the hole pattern: the base outline first, then the inverted
// triangle joining its side midpoints, then three half-size inverted
// triangles around every hole drawn so far.

use sketch_utils::consts::triangle::*;
use sketch_utils::geometry::equilateral_height;
use sketch_utils::{GeometryResult, Point, Polygon};

use super::{Fractal, FractalSettings};

pub struct SierpinskiTriangle {
    settings: FractalSettings,
    base: Polygon,
}

impl SierpinskiTriangle {
    pub fn new() -> Self {
        let height = equilateral_height(BASE_SIDE_LENGTH);
        Self {
            settings: FractalSettings::new(
                ITERATIONS,
                LINE_DRAW_DELAY_MS,
                (
                    BASE_SIDE_LENGTH * CANVAS_WIDTH_MULTIPLE,
                    BASE_SIDE_LENGTH * CANVAS_HEIGHT_MULTIPLE,
                ),
            ),
            base: Polygon::triangle(
                Point::new(0.0, height),
                Point::new(BASE_SIDE_LENGTH / 2.0, 0.0),
                Point::new(BASE_SIDE_LENGTH, height),
            ),
        }
    }

    pub fn with_settings(mut self, settings: FractalSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl Default for SierpinskiTriangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Fractal for SierpinskiTriangle {
    type Shape = Polygon;

    fn name(&self) -> &'static str {
        "sierpinski triangle"
    }

    fn settings(&self) -> &FractalSettings {
        &self.settings
    }

    fn backdrop(&self) -> Option<Polygon> {
        Some(self.base.clone())
    }

    fn seed(&self) -> GeometryResult<Polygon> {
        Ok(Polygon::new(self.base.midpoints()))
    }

    fn children(&self, parent: &Polygon, _round: usize) -> GeometryResult<Vec<Polygon>> {
        parent.expect_vertices(3)?;

        let mut midpoints = parent.midpoints();
        midpoints.sort_by(|a, b| a.x.total_cmp(&b.x));
        let (left, top, right) = (midpoints[0], midpoints[1], midpoints[2]);

        let side = parent.sides()[0].length() / 2.0;
        let height = equilateral_height(side);

        let left_child = Polygon::triangle(
            left,
            Point::new(left.x - side, left.y),
            Point::new(left.x - side / 2.0, left.y + height),
        );
        let right_child = Polygon::triangle(
            right,
            Point::new(right.x + side, right.y),
            Point::new(right.x + side / 2.0, right.y + height),
        );
        let upper_child = Polygon::triangle(
            top,
            Point::new(top.x - side / 2.0, top.y - height),
            Point::new(top.x + side / 2.0, top.y - height),
        );

        Ok(vec![left_child, right_child, upper_child])
    }
}
