//! # Layer 1: Capability Probing
//!
//! Answers "does type `T` support operation `Op`?" at compile time, without a
//! hard error when it does not, and turns the answer into a gate.
//!
//! ## Module Structure
//!
//! ```text
//! probe/
//! ├── detect.rs    - has_impl! / has_members! (const bool, concrete types)
//! ├── operation.rs - Operation markers, Probe<Op> capability table, probe!
//! ├── members.rs   - HasMembers<(Op1, .., OpN)> conjunction
//! └── enable.rs    - EnableIf gate and candidate selection
//! ```
//!
//! ## Usage
//!
//! ```
//! use nano_common::prelude::*;
//! use nano_common::{has_members, operation, probe};
//!
//! pub trait Size { fn size(&self) -> usize; }
//! pub trait Data { fn data(&self) -> &[u8]; }
//! operation!(pub Size);
//! operation!(pub Data);
//!
//! struct Buffer(Vec<u8>);
//! impl Size for Buffer { fn size(&self) -> usize { self.0.len() } }
//! impl Data for Buffer { fn data(&self) -> &[u8] { &self.0 } }
//!
//! struct Token;
//!
//! // Concrete types: plain const bool
//! const BUFFER_OK: bool = has_members!(Buffer: Size, Data);
//! assert!(BUFFER_OK);
//! assert!(!has_members!(Token: Size));
//!
//! // Generic contexts: record the table once, then gate on it
//! probe!(Buffer => Size, Data);
//! probe!(Token => Size, Data);
//!
//! fn contiguous<T: EnableIf<(HasSize, HasData)>>(_: &T) {}
//! contiguous(&Buffer(vec![1, 2]));
//! assert!(!<Token as HasMembers<(HasSize, HasData)>>::VALUE);
//! ```

pub mod detect;
pub mod enable;
pub mod members;
pub mod operation;

pub use enable::{select_call, select_method, EnableIf, SelectMembers};
pub use members::HasMembers;
pub use operation::{supports, Operation, Probe};
