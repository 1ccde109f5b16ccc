// Fractal Sketch: Drawing Surface
//
// The contract the renderer draws through. It mirrors a 2D canvas context:
// paths are built with begin/move/line and made visible with stroke, using
// whatever stroke style and line width are current at stroke time.
//
// Two implementations ship with the engine:
//
// - `RecordingSurface` keeps every call, for tests and replay
// - `RasterSurface` rasterises strokes into an in-memory pixel canvas

mod raster;
mod recording;

pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface, StrokedSegment};

use sketch_utils::Point;
use std::fmt;

/// Opaque RGB stroke colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 2D drawing surface driven by the renderer
pub trait Surface {
    /// Discard the current path and start a new one
    fn begin_path(&mut self);

    /// Start a new sub-path at `point`
    fn move_to(&mut self, point: Point);

    /// Extend the current sub-path to `point`
    fn line_to(&mut self, point: Point);

    /// Draw the current path with the current stroke style and line width
    fn stroke(&mut self);

    /// Add a circular arc around `center`; angles are radians, clockwise on
    /// screen from the positive x axis
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);

    fn set_stroke_style(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
        assert_eq!(Color::rgb(1, 171, 255).to_string(), "#01abff");
    }
}
