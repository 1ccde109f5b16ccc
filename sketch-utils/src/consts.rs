//! Compile-time constants for every fractal.
//!
//! Iteration counts are the number of subdivision steps; the driver draws one
//! round for the seed and one more per subdivision.

/// Branching tree ("canopy").
pub mod tree {
    pub const BASE_LENGTH: f64 = 150.0;
    pub const BASE_THICKNESS: f64 = 15.0;
    pub const MIN_THICKNESS: f64 = 1.0;
    pub const ITERATIONS: usize = 13;
    pub const LINE_DRAW_DELAY_MS: u64 = 15;
    pub const RATIO: f64 = 0.75;
    pub const ANGLE_LEFT: f64 = 20.0;
    pub const ANGLE_RIGHT: f64 = 40.0;
    pub const CANVAS_WIDTH_MULTIPLE: f64 = 6.0;
    pub const CANVAS_HEIGHT_MULTIPLE: f64 = 4.0;
}

/// Koch-style snowflake variant.
pub mod snowflake {
    pub const BASE_SIDE_LENGTH: f64 = 500.0;
    pub const ITERATIONS: usize = 4;
    pub const LINE_DRAW_DELAY_MS: u64 = 20;
    pub const BISECTION_DEPTH: u32 = 5;
    pub const CANVAS_WIDTH_MULTIPLE: f64 = 1.0;
    pub const CANVAS_HEIGHT_MULTIPLE: f64 = 2.0;
}

/// Sierpinski triangle.
pub mod triangle {
    pub const BASE_SIDE_LENGTH: f64 = 600.0;
    pub const ITERATIONS: usize = 6;
    pub const LINE_DRAW_DELAY_MS: u64 = 20;
    pub const CANVAS_WIDTH_MULTIPLE: f64 = 1.0;
    pub const CANVAS_HEIGHT_MULTIPLE: f64 = 1.0;
}

/// Sierpinski carpet.
pub mod carpet {
    pub const BASE_SIDE_LENGTH: f64 = 800.0;
    pub const ITERATIONS: usize = 6;
    pub const LINE_DRAW_DELAY_MS: u64 = 24;
    pub const CANVAS_WIDTH_MULTIPLE: f64 = 1.0;
    pub const CANVAS_HEIGHT_MULTIPLE: f64 = 1.0;
}

/// Line reveal pacing shared by the length-dependent fractals.
pub mod pacing {
    /// Lines longer than this are bisected more finely.
    pub const LONG_LINE_THRESHOLD: f64 = 20.0;
    pub const LONG_LINE_DEPTH: u32 = 5;
    pub const SHORT_LINE_DEPTH: u32 = 3;
    /// Upper bound on any bisection depth (65536 sub-segments).
    pub const MAX_BISECTION_DEPTH: u32 = 16;
}

/// Stroke width used when a fractal does not vary it.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
