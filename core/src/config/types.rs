use serde::{Deserialize, Serialize};

use crate::executor::ParallelOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiftConfig {
    #[serde(default)]
    pub parallel: ParallelConfig,
}

/// Defaults for the parallel runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Maximum number of tasks running at once. 0 means unlimited.
    #[serde(default)]
    pub concurrency: usize,

    /// Stop submitting new tasks after the first failure.
    #[serde(default = "default_stop_on_error")]
    pub stop_on_error: bool,
}

fn default_stop_on_error() -> bool {
    false
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            concurrency: 0,
            stop_on_error: default_stop_on_error(),
        }
    }
}

impl From<&ParallelConfig> for ParallelOptions {
    fn from(cfg: &ParallelConfig) -> Self {
        ParallelOptions {
            concurrency: cfg.concurrency,
            stop_on_error: cfg.stop_on_error,
        }
    }
}

impl From<ParallelConfig> for ParallelOptions {
    fn from(cfg: ParallelConfig) -> Self {
        Self::from(&cfg)
    }
}
