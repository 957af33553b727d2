mod cast;
mod math;
mod parse;

pub use cast::{
    to_i16, to_i32, to_i64, to_i8, to_isize, to_u16, to_u32, to_u64, to_u8, to_usize, SafeCast,
};
pub use math::{clamp, mean, range, range_from, range_with_steps, sum, sum_by, Number};
pub use parse::{parse_float, parse_int};
