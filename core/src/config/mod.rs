mod load;
mod types;

pub use load::{load_from_path, load_from_str};
pub use types::{ParallelConfig, SiftConfig};
