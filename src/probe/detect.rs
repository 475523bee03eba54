//! Inherent-const fallback probes.
//!
//! For a probe type `__Probe<X>`:
//! 1. A fallback trait provides `const VAL: bool = false` for every `X`.
//! 2. An inherent impl bounded on `X: Trait` provides `const VAL: bool = true`.
//!
//! Resolving `__Probe::<Concrete>::VAL` picks the inherent const when the
//! bound holds and the trait const otherwise. A mismatch therefore degrades
//! to `false` instead of failing the build.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the expansion site. For
//! code generic over `T`, record the answer with `probe!` and read it through
//! [`Probe`](super::Probe) / [`HasMembers`](super::HasMembers).

// =============================================================================
// has_impl! - single operation
// =============================================================================

/// Check if a concrete type implements a trait at compile time.
///
/// Usable in `const` context.
///
/// ```
/// use nano_common::has_impl;
///
/// trait Reset { fn reset(&mut self); }
/// impl Reset for Vec<u8> { fn reset(&mut self) { self.clear() } }
///
/// const VEC_RESETS: bool = has_impl!(Vec<u8>, Reset);
/// assert!(VEC_RESETS);
/// assert!(!has_impl!(String, Reset));
/// ```
#[macro_export]
macro_rules! has_impl {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T: ?Sized>(core::marker::PhantomData<T>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}

// =============================================================================
// has_members! - conjunction
// =============================================================================

/// `true` iff the concrete type implements every listed trait.
///
/// An empty list is vacuously `true`.
///
/// ```
/// use nano_common::has_members;
///
/// assert!(has_members!(String: Clone, Default, core::fmt::Debug));
/// assert!(!has_members!(String: Clone, Copy));
/// assert!(has_members!(String));
/// ```
///
/// Only substitution mismatches are absorbed. A trait that does not resolve
/// at all is still a build error:
///
/// ```compile_fail
/// use nano_common::has_members;
///
/// const X: bool = has_members!(i32: NoSuchTrait);
/// ```
#[macro_export]
macro_rules! has_members {
    ($T:ty : $($Trait:path),+ $(,)?) => {
        true $(&& $crate::has_impl!($T, $Trait))+
    };
    ($T:ty $(:)?) => {
        true
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_has_impl_std_traits() {
        assert!(has_impl!(String, Clone));
        assert!(has_impl!(i32, Copy));
        assert!(!has_impl!(String, Copy));
        assert!(has_impl!(str, core::fmt::Display));
    }

    #[test]
    fn test_has_impl_custom_trait() {
        #[allow(dead_code)]
        trait Flush {}
        impl Flush for i32 {}

        assert!(has_impl!(i32, Flush));
        assert!(!has_impl!(u32, Flush));
    }

    #[test]
    fn test_has_members_conjunction() {
        const ALL: bool = has_members!(u8: Copy, Default, Ord);
        const ONE_MISSING: bool = has_members!(Vec<u8>: Clone, Copy);
        const NONE: bool = has_members!(Vec<u8>);

        assert!(ALL);
        assert!(!ONE_MISSING);
        assert!(NONE);
    }
}
