//! Candidate implementations selectable through a type-level `Bool`.
//!
//! A candidate is a zero-sized type implementing one of these traits.
//! `Bool::If<Then, Else>` picks the type, `Bool::static_dispatch` /
//! `Bool::method_dispatch` call it. No `if` at runtime.

/// Implementation that takes a value.
pub trait MethodImpl<T: ?Sized, Output = ()> {
    fn call(value: &T) -> Output;
}

/// Implementation of an associated function (no value).
pub trait StaticMethodImpl<Output = ()> {
    fn call() -> Output;
}

/// Candidate used when nothing else applies. Produces `Output::default()`.
pub struct NoImpl;

impl<T: ?Sized, Output: Default> MethodImpl<T, Output> for NoImpl {
    #[inline(always)]
    fn call(_value: &T) -> Output {
        Output::default()
    }
}

impl<Output: Default> StaticMethodImpl<Output> for NoImpl {
    #[inline(always)]
    fn call() -> Output {
        Output::default()
    }
}
