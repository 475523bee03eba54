//! Conjunction of capability table entries.
//!
//! `T: HasMembers<(Op1, .., OpN)>` holds whenever `T` has a table entry for
//! every listed operation; `Out` is `Present` only if every entry is
//! `Present`. The empty tuple is `Present` for every type.

use super::operation::{Operation, Probe};
use crate::primitives::{Bool, Present};

/// Conjunction of `Probe` entries for a tuple of operations.
pub trait HasMembers<Ops> {
    type Out: Bool;

    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<T: ?Sized> HasMembers<()> for T {
    type Out = Present;
}

/// `<<T as Probe<A>>::Out as Bool>::And<...>` folded over the operations.
macro_rules! all_present {
    ($T:ident;) => { Present };
    ($T:ident; $Op:ident $(, $Rest:ident)*) => {
        <<$T as Probe<$Op>>::Out as Bool>::And<all_present!($T; $($Rest),*)>
    };
}

macro_rules! impl_has_members {
    ($($Op:ident),+) => {
        impl<T: ?Sized, $($Op: Operation),+> HasMembers<($($Op,)+)> for T
        where
            $(T: Probe<$Op>,)+
        {
            type Out = all_present!(T; $($Op),+);
        }
    };
}

impl_has_members!(A);
impl_has_members!(A, B);
impl_has_members!(A, B, C);
impl_has_members!(A, B, C, D);
impl_has_members!(A, B, C, D, E);
impl_has_members!(A, B, C, D, E, F);
impl_has_members!(A, B, C, D, E, F, G);
impl_has_members!(A, B, C, D, E, F, G, H);
