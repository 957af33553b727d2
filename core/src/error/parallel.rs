use thiserror::Error;

/// Why a run context stopped being usable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("context canceled")]
    Canceled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Failure recorded for a single task index by the parallel runner.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The task's own error, untouched.
    #[error(transparent)]
    Failed(anyhow::Error),

    #[error("panic occurred: {0}")]
    Panicked(String),

    /// The context was already done when the task was about to start.
    #[error(transparent)]
    Cancelled(#[from] ContextError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Failed,
    Panic,
    Cancelled,
}

impl TaskError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Failed(_) => FailureKind::Failed,
            Self::Panicked(_) => FailureKind::Panic,
            Self::Cancelled(_) => FailureKind::Cancelled,
        }
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// The context error behind a `Cancelled` failure.
    pub fn context_error(&self) -> Option<ContextError> {
        match self {
            Self::Cancelled(e) => Some(*e),
            _ => None,
        }
    }

    /// Borrow the task's own error, if this is a plain failure.
    pub fn as_failure(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for TaskError {
    fn from(err: anyhow::Error) -> Self {
        Self::Failed(err)
    }
}
