//! # Layer 0: Primitives
//!
//! Basic building blocks shared by the probing layer:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `dispatch.rs`: Candidate implementation traits selected by a `Bool`.

pub mod bool;
pub mod dispatch;

// Re-export key types at this level
pub use bool::{Absent, Bool, BoolOf, If, Present, SelectBool};
pub use dispatch::{MethodImpl, NoImpl, StaticMethodImpl};
