//! Stable re-exports for consumers.
//!
//! Prefer importing from `sift_core::api` instead of reaching into internal modules.

pub use crate::collections::{map, set, slice};
pub use crate::config::{load_from_path, load_from_str, ParallelConfig, SiftConfig};
pub use crate::error::{
    ChunkSizeError, ConfigError, ContextError, EmptyError, FailureKind, OverflowError,
    OverflowSource, ParseNumberError, TaskError,
};
pub use crate::executor::{
    run_all, run_all_for_each, run_parallel, run_parallel_for_each, task, BoxTask,
    ParallelOptions, RunContext, TaskFailures,
};
pub use crate::number::{Number, SafeCast};
pub use crate::random::{sample, samples, shuffle, Picker, RandomSource, RngSource, ThreadSource};
pub use crate::tuple::Entry;
