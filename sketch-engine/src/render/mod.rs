// Fractal Sketch: Animated Line Renderer

mod context;
mod shape;

pub use context::{Pen, RenderContext};
pub use shape::Shape;
