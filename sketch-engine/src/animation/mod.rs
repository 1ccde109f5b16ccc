// Fractal Sketch: Animation Engine
// Frame-based reveal of lines, paced by a fixed delay between frames

pub mod engine;
pub mod pacing;
pub mod reveal;

pub use engine::{AnimationEngine, AnimationFrame};
pub use pacing::{Bisection, Pacing};
pub use reveal::LineReveal;
