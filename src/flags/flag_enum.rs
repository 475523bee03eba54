//! Runtime side of `#[flag_enum]`.
//!
//! The attribute turns a fieldless enum into a transparent newtype over its
//! `#[repr]` integer, keeping one associated constant per enumerator. The
//! generated operators are:
//!
//! | Operator | Result |
//! |----------|--------|
//! | `E \| E`, `E & E` | `E` |
//! | `!E` | `E`, every bit of the representation flipped |
//! | `E \|= E`, `E &= E` | via the binary operator |
//! | `E == repr`, `repr == E` (and `!=`) | compares the representation |
//!
//! Complement is not masked to the declared enumerators:
//! `!Access::Read` also sets every undeclared bit.
//!
//! Conversions to and from the integer only happen through
//! [`FlagEnum::bits`] and [`FlagEnum::from_bits`].

use core::fmt;

use super::bits::Flags;

/// A bitmask type generated by `#[flag_enum]`.
pub trait FlagEnum: Flags + PartialEq<Self::Repr> + fmt::Debug + 'static {
    /// The `#[repr]` integer.
    type Repr: Flags + fmt::LowerHex;

    /// Declared enumerators with their names, in declaration order.
    const VARIANTS: &'static [(&'static str, Self)];

    fn bits(self) -> Self::Repr;

    /// Wraps any representation, including undeclared bits.
    fn from_bits(bits: Self::Repr) -> Self;
}

/// `Debug` rendering shared by generated types: `Name(A | B | 0x40)`.
///
/// Lists every non-empty enumerator fully contained in `value`, then any
/// remaining bits in hex. An empty value prints its zero enumerator if one is
/// declared, `0x0` otherwise.
#[doc(hidden)]
pub fn debug_flags<E: FlagEnum>(value: E, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{name}(")?;

    if value.is_empty() {
        match E::VARIANTS.iter().find(|(_, variant)| variant.is_empty()) {
            Some((label, _)) => f.write_str(label)?,
            None => write!(f, "{:#x}", value.bits())?,
        }
        return f.write_str(")");
    }

    let mut rest = value;
    let mut first = true;
    for &(label, variant) in E::VARIANTS {
        if variant.is_empty() || (value & variant) != variant {
            continue;
        }
        if !first {
            f.write_str(" | ")?;
        }
        f.write_str(label)?;
        first = false;
        rest = rest & !variant;
    }

    if !rest.is_empty() {
        if !first {
            f.write_str(" | ")?;
        }
        write!(f, "{:#x}", rest.bits())?;
    }

    f.write_str(")")
}
