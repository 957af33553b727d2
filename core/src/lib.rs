//! Functional helpers over slices, maps, tuples, numbers and strings, plus a
//! bounded parallel task runner.

pub mod api;
pub mod collections;
pub mod config;
pub mod error;
pub mod executor;
pub mod number;
pub mod random;
pub mod string;
pub mod tuple;
