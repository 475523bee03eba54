//! Capability probing on witness types.
//!
//! `Buffer` has both operations, `Counter` only `Size`, `Token` neither.

use nano_common::prelude::*;
use nano_common::{has_impl, has_members, operation, probe};

pub trait Size {
    fn size(&self) -> usize;
}

pub trait Data {
    fn data(&self) -> &[u8];
}

operation!(pub Size);
operation!(pub Data);

struct Buffer(Vec<u8>);

impl Size for Buffer {
    fn size(&self) -> usize {
        self.0.len()
    }
}

impl Data for Buffer {
    fn data(&self) -> &[u8] {
        &self.0
    }
}

struct Counter(usize);

impl Size for Counter {
    fn size(&self) -> usize {
        self.0
    }
}

struct Token;

probe!(Buffer => Size, Data);
probe!(Counter => Size, Data);
probe!(Token => Size, Data);

// =============================================================================
// Concrete Probes
// =============================================================================

#[test]
fn test_single_operation() {
    assert!(has_impl!(Buffer, Size));
    assert!(has_impl!(Counter, Size));
    assert!(!has_impl!(Token, Size));
    assert!(!has_impl!(Counter, Data));
}

#[test]
fn test_conjunction_const() {
    const BUFFER: bool = has_members!(Buffer: Size, Data);
    const COUNTER: bool = has_members!(Counter: Size, Data);
    const TOKEN_NOTHING: bool = has_members!(Token);

    assert!(BUFFER);
    assert!(!COUNTER);
    assert!(TOKEN_NOTHING);
}

// =============================================================================
// Generic Contexts
// =============================================================================

fn contiguous<T: HasMembers<(HasSize, HasData)>>() -> bool {
    T::VALUE
}

#[test]
fn test_table_conjunction() {
    assert!(contiguous::<Buffer>());
    assert!(!contiguous::<Counter>());
    assert!(!contiguous::<Token>());

    assert!(<Counter as HasMembers<(HasSize,)>>::VALUE);
    assert!(<Token as HasMembers<()>>::VALUE);
    assert!(supports::<Counter, HasSize>());
    assert!(!supports::<Counter, HasData>());
}

fn checksum<T: EnableIf<(HasSize, HasData)> + Data>(value: &T) -> u32 {
    value.data().iter().map(|&byte| u32::from(byte)).sum()
}

#[test]
fn test_gate() {
    assert_eq!(checksum(&Buffer(vec![1, 2, 3])), 6);
}

// =============================================================================
// Candidate Selection
// =============================================================================

struct Measured;
struct Unmeasured;

impl StaticMethodImpl<&'static str> for Measured {
    fn call() -> &'static str {
        "measured"
    }
}

impl StaticMethodImpl<&'static str> for Unmeasured {
    fn call() -> &'static str {
        "unmeasured"
    }
}

fn describe<T: HasMembers<(HasSize,)>>() -> &'static str {
    select_call::<T, (HasSize,), Measured, Unmeasured, _>()
}

#[test]
fn test_both_candidates_stay_selectable() {
    assert_eq!(describe::<Buffer>(), "measured");
    assert_eq!(describe::<Counter>(), "measured");
    assert_eq!(describe::<Token>(), "unmeasured");
}

#[test]
fn test_selected_type() {
    type Storage<T> = SelectMembers<T, (HasSize, HasData), Vec<u8>, ()>;

    let kept: Storage<Buffer> = vec![1];
    let (): Storage<Counter> = ();
    assert_eq!(kept.len(), 1);
    assert_eq!(Counter(5).size(), 5);
}
