//! # Bitmask Flags
//!
//! - `bits.rs`: the [`Flags`] trait, implemented for every primitive integer
//!   and for every `#[flag_enum]` type.
//! - `accessors.rs`: [`has_flag`] / [`set_flag`].
//! - `flag_enum.rs`: the [`FlagEnum`] trait behind `#[flag_enum]`.
//!
//! ```
//! use nano_common::flag_enum;
//! use nano_common::flags::{has_flag, set_flag};
//!
//! #[flag_enum]
//! #[repr(u8)]
//! pub enum Access {
//!     Read = 1,
//!     Write = 1 << 1,
//!     Exec = 1 << 2,
//! }
//!
//! let mut access = Access::Read | Access::Write;
//! assert!(has_flag(access, Access::Write));
//!
//! set_flag(Access::Write, false, &mut access);
//! assert!(access == 1u8);
//! assert_eq!(format!("{access:?}"), "Access(Read)");
//! ```

pub mod accessors;
pub mod bits;
pub mod flag_enum;

pub use accessors::{has_flag, set_flag};
pub use bits::Flags;
pub use flag_enum::FlagEnum;
