//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[flag_enum]` | on enum | Bitmask newtype with bitwise operators |

mod flag_enum;

pub use flag_enum::expand_flag_enum;
