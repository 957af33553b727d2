use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::BoxFuture;
use futures::FutureExt;

use super::context::RunContext;
use crate::error::TaskError;

pub type TaskFuture = BoxFuture<'static, anyhow::Result<()>>;

/// Type-erased task so differently-shaped closures can share one batch.
pub type BoxTask = Box<dyn FnOnce(RunContext) -> TaskFuture + Send>;

/// Task index -> failure, for every task that did not succeed.
pub type TaskFailures = HashMap<usize, TaskError>;

pub fn task<F, Fut>(f: F) -> BoxTask
where
    F: FnOnce(RunContext) -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Box::new(move |ctx| f(ctx).boxed())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParallelOptions {
    /// Maximum tasks running at once; 0 means unlimited.
    pub concurrency: usize,
    pub stop_on_error: bool,
}

impl ParallelOptions {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn stop_on_error(mut self, stop_on_error: bool) -> Self {
        self.stop_on_error = stop_on_error;
        self
    }

    /// Permit count to enforce for a batch of `total` tasks, if any.
    pub(crate) fn limit_for(&self, total: usize) -> Option<usize> {
        (self.concurrency > 0 && self.concurrency < total).then_some(self.concurrency)
    }
}

/// Set-once flag shared by the tasks of a single run.
#[derive(Debug, Default)]
pub struct StopFlag(AtomicBool);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only for the caller that actually set the flag.
    pub fn trip(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_flag_first_writer_wins() {
        let flag = StopFlag::new();
        assert!(!flag.is_set());
        assert!(flag.trip());
        assert!(!flag.trip());
        assert!(flag.is_set());
    }

    #[test]
    fn limit_only_when_smaller_than_batch() {
        let opts = ParallelOptions::unlimited();
        assert_eq!(opts.limit_for(10), None);

        let opts = opts.with_concurrency(3);
        assert_eq!(opts.limit_for(10), Some(3));
        assert_eq!(opts.limit_for(3), None);
        assert_eq!(opts.limit_for(2), None);
    }
}
