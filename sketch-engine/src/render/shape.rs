use sketch_utils::{GeometryResult, Line, Polygon};

/// Anything the renderer can outline, side by side
pub trait Shape: Clone + 'static {
    /// Sides in drawing order
    fn sides(&self) -> Vec<Line>;

    /// Reject shapes carrying NaN or infinite coordinates
    fn ensure_finite(self) -> GeometryResult<Self>;
}

impl Shape for Line {
    fn sides(&self) -> Vec<Line> {
        vec![*self]
    }

    fn ensure_finite(self) -> GeometryResult<Self> {
        Line::ensure_finite(self)
    }
}

impl Shape for Polygon {
    fn sides(&self) -> Vec<Line> {
        Polygon::sides(self)
    }

    fn ensure_finite(self) -> GeometryResult<Self> {
        Polygon::ensure_finite(self)
    }
}
