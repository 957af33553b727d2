use std::fmt;

use thiserror::Error;

/// Raised by helpers that need at least one element (min/max/first/last/sample/mean).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("empty collection")]
pub struct EmptyError;

/// Narrowing conversion out of the target type's range.
///
/// `truncated` holds what a plain `as` conversion produces, so callers that
/// accept wrapping can still use the value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("overflow: {source_value} does not fit in {target}")]
pub struct OverflowError<T> {
    pub truncated: T,
    pub source_value: OverflowSource,
    pub target: &'static str,
}

/// The out-of-range input, widened to something every integer/float fits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowSource {
    Signed(i128),
    Unsigned(u128),
    Float(u64),
}

impl fmt::Display for OverflowSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("invalid number: {input:?}")]
    Invalid { input: String },
    #[error("number out of range: {input:?}")]
    OutOfRange { input: String },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("chunk size must be greater than 0")]
pub struct ChunkSizeError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
