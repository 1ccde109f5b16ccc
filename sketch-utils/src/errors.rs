// Geometry error types
//
// Degenerate input is reported at the primitive boundary instead of letting
// NaN or infinite coordinates leak into later rounds.

use std::fmt;

use crate::geometry::Point;

/// Errors that can occur while deriving or subdividing geometry
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Zero-length line passed to an operation that needs a direction
    DegenerateLine { start: Point, end: Point },
    /// Shape does not have the vertex count its subdivision rule expects
    MalformedShape { expected: usize, found: usize },
    /// Arithmetic produced a NaN or infinite coordinate
    NonFinite { x: f64, y: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateLine { start, end } => write!(
                f,
                "Degenerate line from {} to {}: zero length has no direction",
                start, end
            ),
            Self::MalformedShape { expected, found } => write!(
                f,
                "Malformed shape: expected {} vertices, found {}",
                expected, found
            ),
            Self::NonFinite { x, y } => {
                write!(f, "Non-finite coordinate produced: ({}, {})", x, y)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
