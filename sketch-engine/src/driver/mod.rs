// Fractal Sketch: Generation Driver
//
// Runs a fractal round by round:
//
// - draw every shape of the working set concurrently, then wait for all
// - add the working set's size to the running total and report it
// - replace the working set with the children of every shape in it
//
// Draw tasks share one thread and interleave only at the renderer's
// per-segment delays.

mod generation;
mod plan;
mod progress;
mod state;

pub use generation::{GenerationDriver, GenerationSummary};
pub use plan::{next_round, plan_rounds, planned_total};
pub use progress::{LogProgress, ProgressBoard, ProgressSink};
pub use state::DriverState;
