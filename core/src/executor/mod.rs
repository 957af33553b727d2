//! Bounded parallel task runner
//!
//! Fans a batch of independent tasks out onto the tokio runtime, one spawned
//! task per unit of work. It supports:
//! - An optional cap on how many tasks run at the same time
//! - Early stop after the first failure
//! - Panic recovery at the task boundary
//! - Cooperative cancellation through [`RunContext`]
//!
//! # Flow
//!
//! ```text
//! Vec<Task>
//!   ↓
//! acquire permit (only when 0 < concurrency < N)
//!   ↓
//! tokio::spawn ── stop flag set? → skip, no report
//!              ── context done?  → TaskError::Cancelled
//!              ── catch_unwind(task(ctx)) → Failed / Panicked / ok
//!   ↓
//! mpsc (capacity N) → drained until every sender is gone
//!   ↓
//! TaskFailures { index → TaskError }
//! ```

mod context;
mod scheduler;
mod types;

pub use context::RunContext;
pub use scheduler::{run_all, run_all_for_each, run_parallel, run_parallel_for_each};
pub use types::{task, BoxTask, ParallelOptions, StopFlag, TaskFailures, TaskFuture};
