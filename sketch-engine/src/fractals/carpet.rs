// Fractal Sketch: Sierpinski Carpet
//
// A square is cut into a 3x3 grid and the centre cell removed. Drawing
// follows the removed cells: the centre ninth of the base first, then for
// every removed cell the centre ninths of the eight cells surrounding it.

use sketch_utils::consts::carpet::*;
use sketch_utils::{GeometryResult, Point, Polygon};

use super::{Fractal, FractalSettings};

pub struct SierpinskiCarpet {
    settings: FractalSettings,
    base: Polygon,
}

impl SierpinskiCarpet {
    pub fn new() -> Self {
        Self {
            settings: FractalSettings::new(
                ITERATIONS,
                LINE_DRAW_DELAY_MS,
                (
                    BASE_SIDE_LENGTH * CANVAS_WIDTH_MULTIPLE,
                    BASE_SIDE_LENGTH * CANVAS_HEIGHT_MULTIPLE,
                ),
            ),
            base: Polygon::square(Point::new(0.0, 0.0), BASE_SIDE_LENGTH),
        }
    }

    pub fn with_settings(mut self, settings: FractalSettings) -> Self {
        self.settings = settings;
        self
    }

    fn centre_ninth(top_left: Point, side: f64) -> Polygon {
        let third = side / 3.0;
        Polygon::square(Point::new(top_left.x + third, top_left.y + third), third)
    }
}

impl Default for SierpinskiCarpet {
    fn default() -> Self {
        Self::new()
    }
}

impl Fractal for SierpinskiCarpet {
    type Shape = Polygon;

    fn name(&self) -> &'static str {
        "sierpinski carpet"
    }

    fn settings(&self) -> &FractalSettings {
        &self.settings
    }

    fn backdrop(&self) -> Option<Polygon> {
        Some(self.base.clone())
    }

    fn seed(&self) -> GeometryResult<Polygon> {
        let corner = self.base.expect_vertices(4)?[0];
        Ok(Self::centre_ninth(corner, BASE_SIDE_LENGTH))
    }

    fn children(&self, parent: &Polygon, _round: usize) -> GeometryResult<Vec<Polygon>> {
        let corners = parent.expect_vertices(4)?;
        let top_left = corners[0];
        let side = corners[0].distance_to(corners[1]);

        let mut children = Vec::with_capacity(8);
        for row in -1i32..=1 {
            for col in -1i32..=1 {
                if row == 0 && col == 0 {
                    continue;
                }
                let cell = Point::new(
                    top_left.x + col as f64 * side,
                    top_left.y + row as f64 * side,
                );
                children.push(Self::centre_ninth(cell, side));
            }
        }
        Ok(children)
    }
}
