// Fractal Sketch shared utilities
//
// Geometry value types, the geometry error taxonomy, compile-time constants
// for every fractal and the progress readout handed to hosts.

pub mod consts;
pub mod errors;
pub mod geometry;
pub mod progress;

pub use errors::{GeometryError, GeometryResult};
pub use geometry::{Line, Point, Polygon};
pub use progress::Progress;
