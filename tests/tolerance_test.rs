//! Tolerance comparison.

use nano_common::fcompare;
use proptest::prelude::*;

#[test]
fn test_reflexive_literals() {
    assert!(fcompare(1.0, 1.0));
    assert!(fcompare(0.0, -0.0));
    assert!(fcompare(f64::MAX, f64::MAX));
    assert!(fcompare(f32::MIN_POSITIVE, f32::MIN_POSITIVE));
}

#[test]
fn test_default_epsilon_boundaries() {
    assert!(!fcompare(1.0, 1.1));
    assert!(fcompare(1.0, 1.0 + f64::EPSILON / 2.0));
    assert!(fcompare(1.0f32, 1.0f32 + f32::EPSILON / 2.0));
    assert!(!fcompare(1.0f32, 1.0f32 + 4.0 * f32::EPSILON));
}

#[test]
fn test_accumulated_rounding() {
    let sum: f64 = (0..10).map(|_| 0.1).sum();
    assert_ne!(sum, 1.0);
    assert!(fcompare(sum, 1.0));
}

#[test]
fn test_mixed_operands() {
    assert!(fcompare(10, 10.0));
    assert!(fcompare(10.0f32, 10u64));
    assert!(!fcompare(10usize, 10.5f64));
}

proptest! {
    #[test]
    fn reflexive_for_finite(a in any::<f64>().prop_filter("finite", |a| a.is_finite())) {
        prop_assert!(fcompare(a, a));
    }

    #[test]
    fn symmetric(a in any::<f64>(), b in any::<f64>()) {
        prop_assert_eq!(fcompare(a, b), fcompare(b, a));
    }

    #[test]
    fn symmetric_f32(a in any::<f32>(), b in any::<f32>()) {
        prop_assert_eq!(fcompare(a, b), fcompare(b, a));
        prop_assert_eq!(fcompare(a, f64::from(b)), fcompare(f64::from(b), a));
    }
}
