// Fractal Sketch: AnimationEngine trait and core types
use std::time::Duration;

use sketch_utils::Line;

/// A single reveal step: one sub-segment to stroke
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    /// Position of this frame within its animation
    pub index: usize,
    /// The sub-segment drawn by this frame
    pub segment: Line,
}

impl AnimationFrame {
    pub fn new(index: usize, segment: Line) -> Self {
        Self { index, segment }
    }
}

/// Frame-based animation interface
pub trait AnimationEngine: Send + Sync {
    /// Generate the next frame of animation
    /// Returns None once the animation is complete
    fn next_frame(&mut self) -> Option<AnimationFrame>;

    /// Minimum wall-clock gap to leave after each frame
    fn frame_duration(&self) -> Duration;

    /// Total number of frames this animation produces
    fn frame_count(&self) -> usize;

    /// Reset animation to initial state
    fn reset(&mut self);

    /// Lower bound on how long a full playback takes
    fn total_duration(&self) -> Duration {
        self.frame_duration() * self.frame_count() as u32
    }
}
