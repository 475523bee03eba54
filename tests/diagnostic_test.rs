//! Assertion facility, observed from the outside.
//!
//! The failing cases trap, so they run in a child copy of this test binary
//! selected through `NANO_TRAP_CHILD`; the parent checks the child's stderr
//! and exit status.

use std::cell::Cell;
use std::env;
use std::process::{Command, Output};

use nano_common::{nano_assert, nano_error};

const CHILD_ENV: &str = "NANO_TRAP_CHILD";

/// Run one test of this binary in a child process with `CHILD_ENV` set.
fn run_child(test: &str) -> Output {
    let exe = env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("spawn child test")
}

fn in_child() -> bool {
    env::var_os(CHILD_ENV).is_some()
}

// =============================================================================
// Child Bodies
// =============================================================================

const ASSERT_LINE: u32 = line!() + 7;

#[test]
fn child_failed_assertion() {
    if !in_child() {
        return;
    }
    nano_assert!(1 == 2, "values differ");
    eprintln!("resumed");
}

const ERROR_LINE: u32 = line!() + 7;

#[test]
fn child_unconditional_error() {
    if !in_child() {
        return;
    }
    nano_error!("unsupported layout {}", 7);
    eprintln!("resumed");
}

// =============================================================================
// Parent Checks
// =============================================================================

#[test]
#[cfg(debug_assertions)]
fn test_failed_assertion_reports_and_traps() {
    if in_child() {
        return;
    }
    let output = run_child("child_failed_assertion");
    let stderr = String::from_utf8_lossy(&output.stderr);

    let expected = format!(
        "Assert failed:\tvalues differ\nExpected:\t1 == 2\nSource:\t\t{}, line {}\n",
        file!(),
        ASSERT_LINE
    );
    assert!(stderr.contains(&expected), "stderr was: {stderr}");
    assert_eq!(stderr.matches("Assert failed:").count(), 1);
    assert!(!stderr.contains("resumed"));
    assert!(!output.status.success());
}

#[test]
#[cfg(debug_assertions)]
fn test_error_reports_without_expression() {
    if in_child() {
        return;
    }
    let output = run_child("child_unconditional_error");
    let stderr = String::from_utf8_lossy(&output.stderr);

    let expected = format!(
        "Assert failed:\tunsupported layout 7\nSource:\t\t{}, line {}\n",
        file!(),
        ERROR_LINE
    );
    assert!(stderr.contains(&expected), "stderr was: {stderr}");
    assert!(!stderr.contains("Expected:"));
    assert!(!output.status.success());
}

#[test]
#[cfg(not(debug_assertions))]
fn test_inert_build_is_silent() {
    if in_child() {
        return;
    }
    for test in ["child_failed_assertion", "child_unconditional_error"] {
        let output = run_child(test);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert!(!stderr.contains("Assert failed:"), "stderr was: {stderr}");
        assert!(stderr.contains("resumed"));
        assert!(output.status.success());
    }
}

// =============================================================================
// In-process
// =============================================================================

#[test]
fn test_side_effects_follow_build() {
    let evaluated = Cell::new(false);
    nano_assert!(
        {
            evaluated.set(true);
            true
        },
        "side effect"
    );
    assert_eq!(evaluated.get(), cfg!(debug_assertions));
}
