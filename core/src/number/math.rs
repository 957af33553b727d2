use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use crate::error::EmptyError;

/// Primitive integer or float.
pub trait Number:
    Copy
    + Debug
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// `self + other`, wrapping around on integer overflow.
    fn wrapping_plus(self, other: Self) -> Self;

    /// `self + step`, `None` on integer overflow.
    fn checked_forward(self, step: Self) -> Option<Self>;

    /// `self - step`, `None` on integer overflow.
    fn checked_backward(self, step: Self) -> Option<Self>;

    /// Mean of a non-empty slice, accumulated in a wider type so neither the
    /// running total nor the element count can overflow `Self`.
    fn mean_of(items: &[Self]) -> Self;
}

macro_rules! impl_number_int {
    ($($t:ty => $wide:ty),+) => {
        $(impl Number for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn wrapping_plus(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            fn checked_forward(self, step: Self) -> Option<Self> {
                self.checked_add(step)
            }

            fn checked_backward(self, step: Self) -> Option<Self> {
                self.checked_sub(step)
            }

            fn mean_of(items: &[Self]) -> Self {
                let total = items
                    .iter()
                    .fold(0, |acc: $wide, v| acc.wrapping_add(*v as $wide));
                // A mean always lies between the smallest and largest item.
                (total / items.len().max(1) as $wide) as $t
            }
        })+
    };
}

macro_rules! impl_number_float {
    ($($t:ty),+) => {
        $(impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn wrapping_plus(self, other: Self) -> Self {
                self + other
            }

            fn checked_forward(self, step: Self) -> Option<Self> {
                Some(self + step)
            }

            fn checked_backward(self, step: Self) -> Option<Self> {
                Some(self - step)
            }

            fn mean_of(items: &[Self]) -> Self {
                let total = items.iter().fold(0.0, |acc, v| acc + f64::from(*v));
                (total / items.len().max(1) as f64) as $t
            }
        })+
    };
}

impl_number_int!(
    i8 => i128, i16 => i128, i32 => i128, i64 => i128, isize => i128,
    u8 => u128, u16 => u128, u32 => u128, u64 => u128, usize => u128
);
impl_number_float!(f32, f64);

/// `value` limited to `[min, max]`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Integer sums wrap on overflow.
pub fn sum<T: Number>(items: &[T]) -> T {
    items.iter().fold(T::ZERO, |acc, v| acc.wrapping_plus(*v))
}

pub fn sum_by<T, N: Number>(items: &[T], mut f: impl FnMut(&T) -> N) -> N {
    items.iter().fold(N::ZERO, |acc, v| acc.wrapping_plus(f(v)))
}

/// Arithmetic mean in `T`; integer means truncate toward zero.
pub fn mean<T: Number>(items: &[T]) -> Result<T, EmptyError> {
    if items.is_empty() {
        return Err(EmptyError);
    }
    Ok(T::mean_of(items))
}

/// `count` consecutive integers from 0; a negative count walks down.
pub fn range(count: isize) -> Vec<isize> {
    counting(count).collect()
}

fn counting(count: isize) -> impl Iterator<Item = isize> {
    let descending = count < 0;
    // `i < |count| <= isize::MAX + 1`, so `i` always fits in isize.
    (0..count.unsigned_abs()).map(move |i| {
        let i = i as isize;
        if descending {
            -i
        } else {
            i
        }
    })
}

/// `count.unsigned_abs()` values from `start`, stepping by one in the
/// direction of `count`'s sign. Stops early instead of overflowing.
pub fn range_from<T: Number>(start: T, count: isize) -> Vec<T> {
    let n = count.unsigned_abs();
    let mut out = Vec::with_capacity(n);
    let mut current = Some(start);
    while out.len() < n {
        let Some(value) = current else {
            break;
        };
        out.push(value);
        current = if count < 0 {
            value.checked_backward(T::ONE)
        } else {
            value.checked_forward(T::ONE)
        };
    }
    out
}

/// Values from `start` towards `end` (exclusive) by `step`. A zero step or a
/// step pointing away from `end` yields nothing. Stops once a step no longer
/// moves the value, as with a float step below the spacing at `current`.
pub fn range_with_steps<T: Number>(start: T, end: T, step: T) -> Vec<T> {
    let mut out = Vec::new();
    if step == T::ZERO || start == end {
        return out;
    }
    let ascending = start < end;
    if ascending != (step > T::ZERO) {
        return out;
    }

    let mut current = start;
    while (ascending && current < end) || (!ascending && current > end) {
        out.push(current);
        match current.checked_forward(step) {
            Some(next) if next != current => current = next,
            _ => break,
        }
    }
    out
}
