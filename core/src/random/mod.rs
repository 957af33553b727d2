//! Random draws without replacement.

mod picker;
mod source;

pub use picker::{sample, sample_with, samples, samples_with, shuffle, shuffle_with, Picker};
pub use source::{RandomSource, RngSource, ThreadSource};
