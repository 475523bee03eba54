//! Procedural macros for nano-common
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[flag_enum]` | enum | Bitmask newtype with bitwise operators |
//!
//! ## Example
//!
//! ```ignore
//! #[flag_enum]
//! #[repr(u32)]
//! pub enum Style {
//!     Bold = 1 << 0,
//!     Italic = 1 << 1,
//!     Underline = 1 << 2,
//! }
//!
//! let style = Style::Bold | Style::Underline;
//! assert!(style == 0b101u32);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Turn a fieldless enum into a type-safe bitmask.
///
/// Requires an integer `#[repr(..)]`. Each enumerator becomes an associated
/// constant of the same name; the type gains `|`, `&`, `!`, `|=`, `&=` and
/// equality against its representation, and implements
/// `nano_common::flags::{Flags, FlagEnum}` and `Debug`.
///
/// `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Default` (all bits clear)
/// are always derived; other derives are kept.
///
/// # Usage
/// ```ignore
/// #[flag_enum]
/// #[repr(u8)]
/// enum Access { Read = 1, Write = 2 }
///
/// let mut access = Access::Read;
/// access |= Access::Write;
/// assert!(access == 3u8);
/// ```
#[proc_macro_attribute]
pub fn flag_enum(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::ItemEnum);
    user::expand_flag_enum(attr.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
