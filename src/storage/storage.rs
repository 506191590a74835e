use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{Num, NumCast};

/// Values below this many units round down to 0 of the next unit, since they're under 0.1 of it.
const ROUNDING_THRESHOLD: f64 = 103.0;

/// The number of units in the next unit up.
const UNIT_FACTOR: u16 = 1024;

/// Any primitive number that can be wrapped by [`Storage`].
pub trait StorageValue: Num + NumCast + Copy + PartialOrd {}

impl<T: Num + NumCast + Copy + PartialOrd> StorageValue for T {}

/// A size in KiB, which otherwise behaves like the number `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Hash)]
pub struct Storage<T> {
    value: T,
}

impl<T: StorageValue> Storage<T> {
    pub const fn new(value: T) -> Storage<T> {
        Storage { value }
    }

    /// Returns the wrapped value.
    pub const fn raw(&self) -> T {
        self.value
    }

    pub const fn raw_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    pub const fn into_inner(self) -> T {
        self.value
    }

    /// Returns the size in KiB, which is the raw value.
    pub const fn kb(&self) -> T {
        self.value
    }

    /// Returns the size in MiB, rounded to one decimal place (or truncated for integers). Sizes
    /// under 103 KiB are 0.
    pub fn mb(&self) -> T {
        if self.value.is_zero() {
            return T::zero();
        }
        size_division(self.value)
    }

    /// Returns the size in GiB, derived from [`mb`](Storage::mb) with the same rounding.
    pub fn gb(&self) -> T {
        let mb = self.mb();
        if mb.is_zero() {
            return T::zero();
        }
        size_division(mb)
    }
}

/// Converts `value` to the next unit up, rounding to one decimal place. Anything that can't be
/// represented (negative values, or a `T` too small to hold the unit factor) becomes 0.
fn size_division<T: StorageValue>(value: T) -> T {
    if value.to_f64().is_none_or(|v| v < ROUNDING_THRESHOLD) {
        return T::zero();
    }

    let Some(factor) = T::from(UNIT_FACTOR) else {
        return T::zero();
    };

    // Integer types already lose their fraction here.
    let divided = (value / factor).to_f64().unwrap_or_default();
    let tenths = (divided * 10.0 + 0.5).floor();
    T::from(tenths / 10.0).unwrap_or_else(T::zero)
}

impl<T: StorageValue> From<T> for Storage<T> {
    fn from(value: T) -> Self {
        Storage::new(value)
    }
}

macro_rules! impl_storage_op {
    ($op:ident, $fn:ident, $assign_op:ident, $assign_fn:ident) => {
        impl<T: StorageValue> $op<T> for Storage<T> {
            type Output = Storage<T>;

            fn $fn(self, rhs: T) -> Self::Output {
                Storage::new(self.value.$fn(rhs))
            }
        }

        impl<T: StorageValue> $op for Storage<T> {
            type Output = Storage<T>;

            fn $fn(self, rhs: Storage<T>) -> Self::Output {
                Storage::new(self.value.$fn(rhs.value))
            }
        }

        impl<T: StorageValue> $assign_op<T> for Storage<T> {
            fn $assign_fn(&mut self, rhs: T) {
                self.value = self.value.$fn(rhs);
            }
        }

        impl<T: StorageValue> $assign_op for Storage<T> {
            fn $assign_fn(&mut self, rhs: Storage<T>) {
                self.value = self.value.$fn(rhs.value);
            }
        }
    };
}

impl_storage_op!(Add, add, AddAssign, add_assign);
impl_storage_op!(Sub, sub, SubAssign, sub_assign);
impl_storage_op!(Mul, mul, MulAssign, mul_assign);
impl_storage_op!(Div, div, DivAssign, div_assign);
impl_storage_op!(Rem, rem, RemAssign, rem_assign);

impl<T: StorageValue> PartialEq<T> for Storage<T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: StorageValue> PartialOrd<T> for Storage<T> {
    fn partial_cmp(&self, other: &T) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<T: Display> Display for Storage<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: StorageValue + FromStr> FromStr for Storage<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Storage::new)
    }
}
