//! Operation markers and the per-type capability table.
//!
//! An operation is described by a trait. `operation!(Trait)` creates the
//! zero-sized marker `HasTrait` that names the operation in type position.
//! `probe!(Type => Trait, ..)` fills the table for one type: it implements
//! `Probe<HasTrait>` with `Out = Present` or `Out = Absent`, decided by
//! [`has_impl!`](crate::has_impl) where the type is concrete.

use crate::primitives::Bool;

/// Marker for an operation template.
pub trait Operation: 'static {
    /// Name of the trait the operation stands for.
    const NAME: &'static str;
}

/// Capability table entry: does `Self` support `Op`?
pub trait Probe<Op: Operation> {
    type Out: Bool;

    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

/// Reads the table entry for `T` and `Op` as a `bool`.
#[inline(always)]
pub const fn supports<T: ?Sized + Probe<Op>, Op: Operation>() -> bool {
    <T as Probe<Op>>::VALUE
}

// =============================================================================
// operation! - declare a marker
// =============================================================================

/// Declare the operation marker `Has<Trait>` for a trait.
///
/// ```
/// use nano_common::operation;
/// use nano_common::probe::Operation;
///
/// pub trait Flush { fn flush(&mut self); }
/// operation!(pub Flush);
///
/// assert_eq!(HasFlush::NAME, "Flush");
/// ```
#[macro_export]
macro_rules! operation {
    ($(#[$meta:meta])* $vis:vis $Trait:ident) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            $vis struct [<Has $Trait>];

            impl $crate::probe::Operation for [<Has $Trait>] {
                const NAME: &'static str = stringify!($Trait);
            }
        }
    };
}

// =============================================================================
// probe! - record a type's capability table
// =============================================================================

/// Record, for a concrete type, whether it supports each listed operation.
///
/// Every listed trait needs a marker declared with [`operation!`] in scope.
/// Listing an operation the type lacks is fine: its entry is `Absent`.
///
/// ```
/// use nano_common::{operation, probe};
/// use nano_common::probe::supports;
///
/// pub trait Flush { fn flush(&mut self); }
/// operation!(pub Flush);
///
/// struct Log(Vec<String>);
/// impl Flush for Log { fn flush(&mut self) { self.0.clear() } }
///
/// probe!(Log => Flush);
/// probe!(u32 => Flush);
///
/// assert!(supports::<Log, HasFlush>());
/// assert!(!supports::<u32, HasFlush>());
/// ```
#[macro_export]
macro_rules! probe {
    ($T:ty => $($Trait:ident),* $(,)?) => {
        $(
            $crate::paste::paste! {
                impl $crate::probe::Probe<[<Has $Trait>]> for $T {
                    type Out = $crate::primitives::BoolOf<{ $crate::has_impl!($T, $Trait) }>;
                }
            }
        )*
    };
}
