//! Immutable 2D geometry used by every subdivision rule.
//!
//! Coordinates follow the screen convention: x grows to the right, y grows
//! downwards, and a positive rotation angle turns clockwise on screen.

mod line;
mod point;
mod polygon;

pub use line::Line;
pub use point::Point;
pub use polygon::Polygon;

/// Tolerance used when comparing derived coordinates in tests and checks.
pub const EPSILON: f64 = 1e-9;

/// Height of an equilateral bump whose slanted side is `side`, i.e.
/// `side * cos(30°)`.
pub fn equilateral_height(side: f64) -> f64 {
    30f64.to_radians().cos() * side
}
