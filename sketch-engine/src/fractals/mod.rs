// Fractal Sketch: Subdivision Rules
//
// Each fractal is a strategy for the generic generation driver. It supplies
// the seed shape, an optional backdrop drawn before round 0, and the rule
// mapping one parent to its children. Everything else (drawing, pacing,
// counting) is shared.

mod carpet;
mod snowflake;
mod tree;
mod triangle;

#[cfg(test)]
#[path = "unit/fractal_tests.rs"]
mod fractal_tests;

pub use carpet::SierpinskiCarpet;
pub use snowflake::{ChildFlags, KochSnowflake};
pub use tree::BranchingTree;
pub use triangle::SierpinskiTriangle;

use std::time::Duration;

use sketch_utils::GeometryResult;

use crate::animation::Pacing;
use crate::render::{Pen, Shape};

/// Compile-time tunables of one fractal, gathered in one place
#[derive(Debug, Clone, PartialEq)]
pub struct FractalSettings {
    /// Subdivision steps; the driver draws `iterations + 1` rounds
    pub iterations: usize,
    pub pacing: Pacing,
    /// Pen for the backdrop and round 0
    pub pen: Pen,
    /// Canvas size in pixels (width, height)
    pub canvas: (usize, usize),
}

impl FractalSettings {
    pub fn new(iterations: usize, line_draw_delay_ms: u64, canvas: (f64, f64)) -> Self {
        Self {
            iterations,
            pacing: Pacing::new(Duration::from_millis(line_draw_delay_ms), Default::default()),
            pen: Pen::default(),
            canvas: (canvas.0.ceil() as usize, canvas.1.ceil() as usize),
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Number of rounds a run draws, seed round included
    pub fn rounds(&self) -> usize {
        self.iterations + 1
    }
}

/// Generative grammar of one fractal family
pub trait Fractal {
    type Shape: Shape;

    fn name(&self) -> &'static str;

    fn settings(&self) -> &FractalSettings;

    /// Outline drawn and counted once before round 0
    fn backdrop(&self) -> Option<Self::Shape> {
        None
    }

    /// The single shape of round 0
    fn seed(&self) -> GeometryResult<Self::Shape>;

    /// Children of `parent`, which was drawn in round `round`
    fn children(&self, parent: &Self::Shape, round: usize) -> GeometryResult<Vec<Self::Shape>>;

    /// Stroke width for round `round`
    fn line_width(&self, _round: usize) -> f64 {
        self.settings().pen.width
    }
}
