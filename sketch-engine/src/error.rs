// Fractal Sketch: engine error types

use sketch_utils::GeometryError;
use thiserror::Error;

use crate::driver::DriverState;

/// Errors surfaced to whoever runs a generation
#[derive(Debug, Error)]
pub enum SketchError {
    /// Subdivision produced or received unusable geometry; the run aborts
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// A draw task panicked or was cancelled before the round barrier cleared
    #[error("draw task failed: {0}")]
    DrawTask(String),

    /// `run()` called on a driver that is mid-run or already finished
    #[error("driver is not idle (state: {0})")]
    NotIdle(DriverState),
}

/// Result type for engine operations
pub type SketchResult<T> = Result<T, SketchError>;
