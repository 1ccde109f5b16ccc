// Fractal Sketch: Generation Driver
//
// Owns the fractal, the render context and the progress sink for the
// lifetime of a run. Rounds run strictly in sequence; within a round every
// shape gets its own local task and the round only clears once all of them
// have finished.

use std::rc::Rc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use sketch_utils::Progress;
use tokio::task::{JoinSet, LocalSet};

use super::plan::next_round;
use super::progress::ProgressSink;
use super::state::DriverState;
use crate::error::{SketchError, SketchResult};
use crate::fractals::Fractal;
use crate::render::{RenderContext, Shape};
use crate::surface::Surface;

/// What a finished run hands back to its caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub fractal: String,
    /// Rounds drawn, seed round included
    pub rounds: usize,
    /// Shapes drawn, backdrop included
    pub total: u64,
}

pub struct GenerationDriver<F: Fractal, S: Surface + 'static, P: ProgressSink> {
    fractal: F,
    context: Rc<RenderContext<S>>,
    progress: P,
    state: DriverState,
}

impl<F: Fractal, S: Surface + 'static, P: ProgressSink> GenerationDriver<F, S, P> {
    pub fn new(fractal: F, surface: S, progress: P) -> Self {
        let settings = fractal.settings();
        let context = Rc::new(RenderContext::new(surface, settings.pen, settings.pacing));
        Self {
            fractal,
            context,
            progress,
            state: DriverState::Idle,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn fractal(&self) -> &F {
        &self.fractal
    }

    pub fn context(&self) -> &RenderContext<S> {
        &self.context
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// Allow another run. The surface keeps whatever was drawn on it.
    pub fn reset(&mut self) {
        self.state = DriverState::Idle;
        self.context.set_pen(self.fractal.settings().pen);
    }

    /// Draw every round and resolve once the last barrier clears.
    ///
    /// Must be awaited on a tokio runtime; draw tasks are spawned on a
    /// `LocalSet` owned by this call, so the surface never leaves the
    /// current thread.
    pub async fn run(&mut self) -> SketchResult<GenerationSummary> {
        if self.state != DriverState::Idle {
            return Err(SketchError::NotIdle(self.state));
        }

        let local = LocalSet::new();
        local.run_until(self.run_rounds()).await
    }

    async fn run_rounds(&mut self) -> SketchResult<GenerationSummary> {
        let iterations = self.fractal.settings().iterations;
        info!(
            "Fractal Sketch: starting {} ({} rounds)",
            self.fractal.name(),
            iterations + 1
        );

        let mut total = 0;
        if let Some(backdrop) = self.fractal.backdrop() {
            let backdrop = backdrop.ensure_finite()?;
            self.context.set_line_width(self.fractal.line_width(0));
            self.context.draw_shape(&backdrop).await;

            let progress = Progress::backdrop();
            total = progress.total;
            self.progress.report(progress);
        }

        let mut working = vec![self.fractal.seed()?.ensure_finite()?];
        for round in 0..=iterations {
            self.state = DriverState::Round(round);
            if round > 0 {
                working = next_round(&self.fractal, &working, round - 1).map_err(|e| {
                    warn!(
                        "Fractal Sketch: aborting {} in round {}: {}",
                        self.fractal.name(),
                        round,
                        e
                    );
                    e
                })?;
            }

            let width = self.fractal.line_width(round);
            debug!("Fractal Sketch: round {} line width {}", round, width);
            self.context.set_line_width(width);

            self.draw_round(&working).await?;

            let progress = Progress::after_round(round, working.len(), total);
            total = progress.total;
            info!(
                "Fractal Sketch: {} round {} cleared, {} shapes, total {}",
                self.fractal.name(),
                round,
                working.len(),
                total
            );
            self.progress.report(progress);
        }

        self.state = DriverState::Done;
        Ok(GenerationSummary {
            fractal: self.fractal.name().to_string(),
            rounds: iterations + 1,
            total,
        })
    }

    /// Fan out one task per shape, then wait for every one of them.
    async fn draw_round(&self, shapes: &[F::Shape]) -> SketchResult<()> {
        let mut tasks = JoinSet::new();
        for shape in shapes.iter().cloned() {
            spawn_draw(&mut tasks, Rc::clone(&self.context), shape);
        }

        while let Some(joined) = tasks.join_next().await {
            joined.map_err(|e| SketchError::DrawTask(e.to_string()))?;
        }
        Ok(())
    }
}

fn spawn_draw<S: Surface + 'static, T: Shape>(
    tasks: &mut JoinSet<()>,
    context: Rc<RenderContext<S>>,
    shape: T,
) {
    tasks.spawn_local(async move { context.draw_shape(&shape).await });
}
