//! Options for the parallel execution policy.
//!
//! `ParallelOptions` controls how many worker threads the rayon-backed policy
//! spins up and below which problem size it stays on the calling thread.

/// Parallel policy parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelOptions {
    /// Worker threads; `None` uses one per logical CPU.
    pub num_threads: Option<usize>,

    /// Problems with fewer multiply-adds than this run inline.
    pub min_work: usize,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            num_threads: None,
            min_work: 4096,
        }
    }
}

impl ParallelOptions {
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    pub fn with_min_work(mut self, min_work: usize) -> Self {
        self.min_work = min_work;
        self
    }
}
