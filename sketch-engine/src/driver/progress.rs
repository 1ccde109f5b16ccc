// Fractal Sketch: progress readout
//
// Receives the cumulative shape count after every barrier. Presentation is
// up to the sink.

use sketch_utils::Progress;

/// Receiver of progress updates from the driver
pub trait ProgressSink {
    fn report(&mut self, progress: Progress);
}

impl<T: ProgressSink + ?Sized> ProgressSink for &mut T {
    fn report(&mut self, progress: Progress) {
        (**self).report(progress);
    }
}

/// Sink that writes every update to the log
pub struct LogProgress {
    label: String,
}

impl LogProgress {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl ProgressSink for LogProgress {
    fn report(&mut self, progress: Progress) {
        log::info!(
            "{} {}: drew {} ({})",
            self.label,
            progress.phase,
            progress.drawn,
            progress
        );
    }
}

/// Sink that keeps every update for later inspection
#[derive(Debug, Default)]
pub struct ProgressBoard {
    history: Vec<Progress>,
}

impl ProgressBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent update, if any
    pub fn latest(&self) -> Option<&Progress> {
        self.history.last()
    }

    /// Current cumulative total (0 before the first update)
    pub fn total(&self) -> u64 {
        self.latest().map(|p| p.total).unwrap_or(0)
    }

    pub fn history(&self) -> &[Progress] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl ProgressSink for ProgressBoard {
    fn report(&mut self, progress: Progress) {
        self.history.push(progress);
    }
}
