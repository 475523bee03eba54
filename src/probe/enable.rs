//! Gating and candidate selection on a capability result.
//!
//! - [`EnableIf`] is a bound: an item bounded on `T: EnableIf<Ops>` does not
//!   exist for types whose probe fails.
//! - [`SelectMembers`] keeps two candidates and picks one by the probe, so
//!   the other stays selectable.
//!
//! ## Example
//!
//! ```
//! use nano_common::prelude::*;
//! use nano_common::{operation, probe};
//!
//! pub trait Size { fn size(&self) -> usize; }
//! operation!(pub Size);
//!
//! struct Sized3;
//! impl Size for Sized3 { fn size(&self) -> usize { 3 } }
//! struct Unknown;
//!
//! probe!(Sized3 => Size);
//! probe!(Unknown => Size);
//!
//! struct Exact;
//! struct Guess;
//! impl StaticMethodImpl<&'static str> for Exact { fn call() -> &'static str { "exact" } }
//! impl StaticMethodImpl<&'static str> for Guess { fn call() -> &'static str { "guess" } }
//!
//! fn strategy<T: HasMembers<(HasSize,)>>() -> &'static str {
//!     select_call::<T, (HasSize,), Exact, Guess, _>()
//! }
//!
//! assert_eq!(strategy::<Sized3>(), "exact");
//! assert_eq!(strategy::<Unknown>(), "guess");
//! ```
//!
//! A gated item is unavailable for a failing type:
//!
//! ```compile_fail
//! use nano_common::prelude::*;
//! use nano_common::{operation, probe};
//!
//! pub trait Size { fn size(&self) -> usize; }
//! operation!(pub Size);
//! struct Unknown;
//! probe!(Unknown => Size);
//!
//! fn measure<T: EnableIf<(HasSize,)>>(_: &T) {}
//! measure(&Unknown);
//! ```

use super::members::HasMembers;
use crate::primitives::{Bool, MethodImpl, Present, StaticMethodImpl};

/// Satisfied exactly when every operation in `Ops` is supported.
pub trait EnableIf<Ops> {}

impl<T: ?Sized, Ops> EnableIf<Ops> for T where T: HasMembers<Ops, Out = Present> {}

/// `Then` if `T` supports every operation in `Ops`, `Else` otherwise.
pub type SelectMembers<T, Ops, Then, Else> =
    <<T as HasMembers<Ops>>::Out as Bool>::If<Then, Else>;

/// Call the associated function of the selected candidate.
#[inline(always)]
pub fn select_call<T, Ops, Then, Else, Output>() -> Output
where
    T: ?Sized + HasMembers<Ops>,
    Then: StaticMethodImpl<Output>,
    Else: StaticMethodImpl<Output>,
{
    <<T as HasMembers<Ops>>::Out as Bool>::static_dispatch::<Then, Else, Output>()
}

/// Call the selected candidate with `value`.
#[inline(always)]
pub fn select_method<T, Ops, Then, Else, Output>(value: &T) -> Output
where
    T: ?Sized + HasMembers<Ops>,
    Then: MethodImpl<T, Output>,
    Else: MethodImpl<T, Output>,
{
    <<T as HasMembers<Ops>>::Out as Bool>::method_dispatch::<T, Then, Else, Output>(value)
}
