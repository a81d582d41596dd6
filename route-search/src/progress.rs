/// Snapshot handed to a [`ProgressSink`] when the search first reaches a depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    pub depth: u32,
    pub frontier: usize,
    pub retained: u64,
    pub best_distance: Option<f32>,
}

/// Observer for search progress. Purely informational.
pub trait ProgressSink {
    fn on_depth(&mut self, progress: &Progress);
}

pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_depth(&mut self, _progress: &Progress) {}
}

/// Logs each new depth at info level.
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn on_depth(&mut self, progress: &Progress) {
        tracing::info!(
            depth = progress.depth,
            frontier = progress.frontier,
            retained = progress.retained,
            best = ?progress.best_distance,
            "now at depth"
        );
    }
}

impl ProgressSink for Vec<Progress> {
    fn on_depth(&mut self, progress: &Progress) {
        self.push(*progress);
    }
}
