//! Range-checked numeric conversions.
//!
//! Every integer pair plus `f32`/`f64` → integer is covered. In range the
//! value comes back unchanged; out of range the error carries what `as`
//! would have produced (wrapping for integers, saturating for floats).

use crate::error::{OverflowError, OverflowSource};

pub trait SafeCast<T>: Sized {
    fn safe_cast(self) -> Result<T, OverflowError<T>>;
}

trait Widen {
    fn widen(self) -> OverflowSource;
}

macro_rules! impl_widen {
    (signed: $($t:ty),+) => {
        $(impl Widen for $t {
            fn widen(self) -> OverflowSource {
                OverflowSource::Signed(self as i128)
            }
        })+
    };
    (unsigned: $($t:ty),+) => {
        $(impl Widen for $t {
            fn widen(self) -> OverflowSource {
                OverflowSource::Unsigned(self as u128)
            }
        })+
    };
}

impl_widen!(signed: i8, i16, i32, i64, isize);
impl_widen!(unsigned: u8, u16, u32, u64, usize);

macro_rules! impl_int_cast {
    ($from:ty => $($to:ty),+) => {
        $(impl SafeCast<$to> for $from {
            #[allow(clippy::unnecessary_cast, clippy::useless_conversion)]
            fn safe_cast(self) -> Result<$to, OverflowError<$to>> {
                <$to>::try_from(self).map_err(|_| OverflowError {
                    truncated: self as $to,
                    source_value: self.widen(),
                    target: stringify!($to),
                })
            }
        })+
    };
}

macro_rules! impl_int_casts {
    ($($from:ty),+) => {
        $(impl_int_cast!($from => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);)+
    };
}

impl_int_casts!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_cast {
    ($from:ty => $($to:ty),+) => {
        $(impl SafeCast<$to> for $from {
            #[allow(clippy::unnecessary_cast)]
            fn safe_cast(self) -> Result<$to, OverflowError<$to>> {
                let v = (self as f64).trunc();
                // `MAX as f64` may round up to the next power of two, so the
                // upper bound is exclusive.
                if v.is_finite() && v >= <$to>::MIN as f64 && v < <$to>::MAX as f64 + 1.0 {
                    Ok(v as $to)
                } else {
                    Err(OverflowError {
                        truncated: self as $to,
                        source_value: OverflowSource::Float((self as f64).to_bits()),
                        target: stringify!($to),
                    })
                }
            }
        })+
    };
}

impl_float_cast!(f64 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_cast!(f32 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! to_fns {
    ($($name:ident => $to:ty),+) => {
        $(pub fn $name<N: SafeCast<$to>>(n: N) -> Result<$to, OverflowError<$to>> {
            n.safe_cast()
        })+
    };
}

to_fns!(
    to_i8 => i8,
    to_i16 => i16,
    to_i32 => i32,
    to_i64 => i64,
    to_isize => isize,
    to_u8 => u8,
    to_u16 => u16,
    to_u32 => u32,
    to_u64 => u64,
    to_usize => usize
);
