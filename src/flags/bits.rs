//! Integral-like values usable as a set of flags.

use core::ops::{BitAnd, BitOr, Not};

/// A value whose bits are independent flags.
///
/// `!` must complement every bit of the representation.
pub trait Flags:
    Copy + PartialEq + BitOr<Output = Self> + BitAnd<Output = Self> + Not<Output = Self>
{
    /// The value with no bit set.
    const EMPTY: Self;

    #[inline]
    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

macro_rules! impl_flags_for_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl Flags for $int {
                const EMPTY: Self = 0;
            }
        )*
    };
}

impl_flags_for_int!(u8, u16, u32, u64, u128, usize);
impl_flags_for_int!(i8, i16, i32, i64, i128, isize);
