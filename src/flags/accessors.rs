//! Generic flag read/write helpers.

use super::bits::Flags;

/// `true` if any bit of `mask` is set in `flags`.
///
/// This is not a subset test: `has_flag(0b01, 0b11)` is `true`.
/// A zero `mask` is never found.
///
/// ```
/// use nano_common::flags::has_flag;
///
/// assert!(has_flag(0b0110u8, 0b0010));
/// assert!(has_flag(0b0110u8, 0b0011));
/// assert!(!has_flag(0b0110u8, 0));
/// ```
///
/// ```compile_fail
/// #![deny(unused_must_use)]
/// nano_common::flags::has_flag(0b0110u8, 0b0010);
/// ```
#[must_use]
#[inline]
pub fn has_flag<F: Flags>(flags: F, mask: F) -> bool {
    (flags & mask) != F::EMPTY
}

/// Set (`value == true`) or clear (`value == false`) every bit of `mask` in
/// `flags`. Other bits are left unchanged.
///
/// ```
/// use nano_common::flags::set_flag;
///
/// let mut flags = 0b1000u16;
/// set_flag(0b0011, true, &mut flags);
/// assert_eq!(flags, 0b1011);
/// set_flag(0b0001, false, &mut flags);
/// assert_eq!(flags, 0b1010);
/// ```
#[inline]
pub fn set_flag<F: Flags>(mask: F, value: bool, flags: &mut F) {
    *flags = if value { *flags | mask } else { *flags & !mask };
}
