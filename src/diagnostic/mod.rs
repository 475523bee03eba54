//! # Debug Assertions
//!
//! `nano_assert!` and `nano_error!` report a failure on standard error and
//! then trap (see [`trap`]).
//!
//! Both macros are controlled by `debug_assertions` **of the crate that
//! invokes them**:
//!
//! - enabled: the condition is evaluated once; on failure a [`Diagnostic`]
//!   is written and [`trap::debug_trap`] is called.
//! - disabled: the macro expands to `{}`. Arguments are not evaluated, so
//!   side effects inside them must not be relied on.
//!
//! ```text
//! Assert failed:\tvalues differ
//! Expected:\t1 == 2
//! Source:\t\tsrc/main.rs, line 42
//! ```
//!
//! The three lines are separate writes to an unlocked `stderr` handle.
//! Failures on several threads at once may interleave.

pub mod event;
pub mod trap;

use core::fmt;
use std::io;

pub use event::{Diagnostic, Location};

// =============================================================================
// Failure Path
// =============================================================================

/// Write `event` to the diagnostic sink, then trap.
#[cold]
#[inline(never)]
pub fn fail(event: &Diagnostic<'_>) {
    report(event);
    trap::debug_trap();
}

/// Write `event` to standard error without trapping.
///
/// With the `tracing` feature the event is also emitted at `ERROR` level.
pub fn report(event: &Diagnostic<'_>) {
    // Nowhere left to report a failing sink.
    let _ = event.write_to(&mut io::stderr());

    #[cfg(feature = "tracing")]
    tracing::error!(
        target: "nano_common::assert",
        expression = event.expression,
        file = event.location.file,
        line = event.location.line,
        "{}",
        event.message
    );
}

#[doc(hidden)]
#[inline]
pub fn custom_assert(
    expression: &str,
    condition: bool,
    file: &str,
    line: u32,
    message: fmt::Arguments<'_>,
) {
    if let Some(event) = Diagnostic::check(expression, condition, message, Location { file, line }) {
        fail(&event);
    }
}

#[doc(hidden)]
#[inline]
pub fn custom_error(file: &str, line: u32, message: fmt::Arguments<'_>) {
    fail(&Diagnostic::error(message, Location { file, line }));
}

// =============================================================================
// Macros
// =============================================================================

/// Debug-only assertion with a message.
///
/// The message takes `format_args!` syntax.
///
/// ```
/// use nano_common::nano_assert;
///
/// let frames = 48_000 / 512;
/// nano_assert!(frames > 0, "buffer of {} frames", frames);
/// ```
#[macro_export]
macro_rules! nano_assert {
    ($cond:expr, $($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        $crate::diagnostic::custom_assert(
            ::core::stringify!($cond),
            $cond,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        );
    }};
}

/// Debug-only unconditional failure.
///
/// ```no_run
/// use nano_common::nano_error;
///
/// fn channel_name(index: usize) -> &'static str {
///     match index {
///         0 => "left",
///         1 => "right",
///         _ => {
///             nano_error!("no channel {}", index);
///             "unknown"
///         }
///     }
/// }
/// # channel_name(3);
/// ```
#[macro_export]
macro_rules! nano_error {
    ($($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        $crate::diagnostic::custom_error(
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($($arg)+),
        );
    }};
}
