#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables the assertion facility (stderr sink, abort)
// - probe: default, enables capability probing and gating
// - tracing: also emit assertion failures as tracing events

//! # nano-common
//!
//! Foundational utilities with zero runtime cost where it matters.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool (Present/Absent), candidate dispatch traits    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability Probing                                      |
//! |  - has_impl!, has_members!, Probe<Op> table, HasMembers, EnableIf |
//! +-------------------------------------------------------------------+
//!
//! +----------------------+  +----------------------+  +---------------+
//! |  Flags               |  |  Diagnostics         |  |  Tolerance    |
//! |  #[flag_enum],       |  |  nano_assert!,       |  |  fcompare     |
//! |  has_flag, set_flag  |  |  nano_error!, trap   |  |               |
//! +----------------------+  +----------------------+  +---------------+
//! ```
//!
//! Probing is built on the primitives; the three bottom facilities are
//! independent of each other.
//!
//! ## Quick Start
//!
//! ```
//! use nano_common::prelude::*;
//! use nano_common::{fcompare, flag_enum, has_members, nano_assert};
//!
//! #[flag_enum]
//! #[repr(u8)]
//! enum Access {
//!     Read = 1,
//!     Write = 2,
//! }
//!
//! let mut access = Access::Read;
//! set_flag(Access::Write, true, &mut access);
//! assert!(has_flag(access, Access::Write));
//!
//! assert!(has_members!(Vec<u8>: Clone, Default));
//! assert!(fcompare(0.1 + 0.2, 0.3));
//!
//! nano_assert!(access == 3u8, "read and write");
//! ```

// Allow `::nano_common` to work inside the crate itself
extern crate self as nano_common;

// Re-export paste for operation! / probe!
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability Probing
// =============================================================================
#[cfg(feature = "probe")]
pub mod probe;

// =============================================================================
// Independent Facilities
// =============================================================================
pub mod flags;
pub mod tolerance;

#[cfg(feature = "std")]
pub mod diagnostic;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use flags::{has_flag, set_flag, FlagEnum, Flags};
pub use macros::flag_enum;
pub use primitives::{Absent, Bool, Present};
pub use tolerance::fcompare;

/// Common items.
pub mod prelude {
    pub use crate::flags::{has_flag, set_flag, FlagEnum, Flags};
    pub use crate::primitives::{Absent, Bool, BoolOf, MethodImpl, Present, StaticMethodImpl};
    #[cfg(feature = "probe")]
    pub use crate::probe::{
        select_call, select_method, supports, EnableIf, HasMembers, Operation, Probe,
        SelectMembers,
    };
    pub use crate::tolerance::fcompare;
    pub use macros::flag_enum;
}
