#[allow(clippy::module_inception)]
pub mod error;
pub mod parallel;

pub use error::{
    ChunkSizeError, ConfigError, EmptyError, OverflowError, OverflowSource, ParseNumberError,
};
pub use parallel::{ContextError, FailureKind, TaskError};
