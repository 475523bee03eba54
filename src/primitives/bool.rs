//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

use super::dispatch::{MethodImpl, StaticMethodImpl};

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;

    /// Call a static function based on this boolean value.
    /// If true (Present), calls Then::call().
    /// If false (Absent), calls Else::call().
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>;

    /// Same as `static_dispatch`, for implementations taking a value.
    fn method_dispatch<T: ?Sized, Then, Else, Output>(value: &T) -> Output
    where
        Then: MethodImpl<T, Output>,
        Else: MethodImpl<T, Output>;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Then::call()
    }

    #[inline(always)]
    fn method_dispatch<T: ?Sized, Then, Else, Output>(value: &T) -> Output
    where
        Then: MethodImpl<T, Output>,
        Else: MethodImpl<T, Output>,
    {
        Then::call(value)
    }
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Else::call()
    }

    #[inline(always)]
    fn method_dispatch<T: ?Sized, Then, Else, Output>(value: &T) -> Output
    where
        Then: MethodImpl<T, Output>,
        Else: MethodImpl<T, Output>,
    {
        Else::call(value)
    }
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Type-level Bool for a const bool.
pub type BoolOf<const B: bool> = <() as SelectBool<B>>::Out;

/// Conditional Type Alias
pub type If<const C: bool, T, E> = <BoolOf<C> as Bool>::If<T, E>;
