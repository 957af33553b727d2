pub mod map;
pub mod set;
pub mod slice;
