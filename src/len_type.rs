use core::{
    fmt::{Debug, Display},
    mem,
    ops::{Add, AddAssign, Sub, SubAssign},
};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

#[allow(non_camel_case_types)]
pub enum TypeEnum {
    u8,
    u16,
    u32,
    usize,
}

pub trait Sealed:
    Send
    + Sync
    + Copy
    + Display
    + Debug
    + PartialEq
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + PartialOrd
    + TryFrom<usize, Error: Debug>
    + TryInto<usize, Error: Debug>
{
    /// The zero value of the integer type.
    const ZERO: Self;
    /// The maximum value of the integer type.
    const MAX: Self;
    /// The maximum value of the integer type, as a `usize`.
    const MAX_USIZE: usize;
    /// This type as an enum, for const dispatch.
    const TYPE: TypeEnum;

    /// The one value of the integer type.
    fn one() -> Self;

    /// An infallible conversion from `usize` to the length type.
    #[inline]
    fn from_usize(val: usize) -> Self {
        val.try_into().unwrap()
    }

    /// An infallible conversion from the length type to `usize`.
    #[inline]
    fn into_usize(self) -> usize {
        self.try_into().unwrap()
    }
}

macro_rules! impl_lentype {
    ($($(#[$meta:meta])* $LenT:ident),*) => {$(
        $(#[$meta])*
        impl Sealed for $LenT {
            const ZERO: Self = 0;
            const MAX: Self = Self::MAX;
            const MAX_USIZE: usize = Self::MAX as _;
            const TYPE: TypeEnum = TypeEnum::$LenT;

            fn one() -> Self {
                1
            }
        }

        $(#[$meta])*
        impl LenType for $LenT {}
    )*}
}

/// A sealed trait for the integer type a vector stores its length in.
///
/// This cannot be implemented in user code, and is restricted to `u8`, `u16`,
/// `u32`, and `usize`. Picking the smallest type that fits the capacity can
/// shrink the vector's memory footprint considerably, e.g.
/// `Vec<u8, 3, u8>` occupies 4 bytes instead of 16 on a 64-bit target.
///
/// When the `zeroize` feature is enabled, this trait requires the `Zeroize`
/// trait.
#[cfg(feature = "zeroize")]
pub trait LenType: Sealed + Zeroize {}

/// A sealed trait for the integer type a vector stores its length in.
///
/// This cannot be implemented in user code, and is restricted to `u8`, `u16`,
/// `u32`, and `usize`. Picking the smallest type that fits the capacity can
/// shrink the vector's memory footprint considerably, e.g.
/// `Vec<u8, 3, u8>` occupies 4 bytes instead of 16 on a 64-bit target.
#[cfg(not(feature = "zeroize"))]
pub trait LenType: Sealed {}

impl_lentype!(
    u8,
    u16,
    #[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
    u32,
    usize
);

pub const fn check_capacity_fits<LenT: LenType, const N: usize>() {
    assert!(
        LenT::MAX_USIZE >= N,
        "capacity is larger than `LenT` can hold, increase the size of `LenT` or reduce the capacity"
    );
}

/// Const cast from [`usize`] to [`LenType`] with `as`.
#[inline]
pub const fn as_len_type<L: LenType>(n: usize) -> L {
    unsafe {
        // ALWAYS a compile-time switch.
        match L::TYPE {
            // transmute_copy, instead of transmute - because `L`
            // is a "dependent type".
            TypeEnum::u8 => mem::transmute_copy(&(n as u8)),
            TypeEnum::u16 => mem::transmute_copy(&(n as u16)),
            TypeEnum::u32 => mem::transmute_copy(&(n as u32)),
            TypeEnum::usize => mem::transmute_copy(&n),
        }
    }
}

/// Checked const cast from [`usize`] to [`LenType`].
///
/// # Panics
///
/// Panics if `n` does not fit in `L`.
#[inline]
pub const fn to_len_type<L: LenType>(n: usize) -> L {
    if n > L::MAX_USIZE {
        panic!("length does not fit in `LenT`");
    }
    as_len_type(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_cast_is_const_and_lossless() {
        const {
            assert!(to_len_type::<u8>(150) == 150);
            assert!(to_len_type::<u16>(15_000) == 15_000);
            assert!(to_len_type::<u32>(1_500_000) == 1_500_000);
            assert!(to_len_type::<usize>(usize::MAX) == usize::MAX);
        }

        fn check<T: LenType>() {
            const COUNT: usize = 100;
            for i in 0..COUNT {
                let n = i * (T::MAX_USIZE / COUNT);
                assert_eq!(to_len_type::<T>(n).into_usize(), n);
            }
        }
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<usize>();
    }
}
