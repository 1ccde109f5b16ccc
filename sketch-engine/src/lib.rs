// Fractal Sketch engine
//
// Recursive subdivision rules, a paced line renderer and the generation
// driver that ties them together.
//
// # Architecture
//
// ```text
// GenerationDriver ──► Fractal (seed, backdrop, children)
//        │
//        ▼  one task per shape, joined per round
// RenderContext ──► LineReveal (sub-segments + delay)
//        │
//        ▼
//     Surface (recording, raster, or a host canvas)
// ```

pub mod animation;
pub mod driver;
pub mod error;
pub mod fractals;
pub mod render;
pub mod surface;

pub use driver::{DriverState, GenerationDriver, GenerationSummary};
pub use error::{SketchError, SketchResult};
pub use fractals::{
    BranchingTree, Fractal, FractalSettings, KochSnowflake, SierpinskiCarpet, SierpinskiTriangle,
};
pub use render::{Pen, RenderContext, Shape};
pub use surface::{Color, RasterSurface, RecordingSurface, Surface};
