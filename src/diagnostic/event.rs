//! The diagnostic event reported by a failed assertion.

use core::fmt;
use std::io;

/// Call-site source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, line {}", self.file, self.line)
    }
}

/// One failed assertion (or unconditional error), rendered as:
///
/// ```text
/// Assert failed:\t<message>
/// Expected:\t<expression>      (assertions only)
/// Source:\t\t<file>, line <line>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    pub message: fmt::Arguments<'a>,
    /// Source text of the failed condition; `None` for `nano_error!`.
    pub expression: Option<&'a str>,
    pub location: Location<'a>,
}

impl<'a> Diagnostic<'a> {
    pub fn assertion(
        expression: &'a str,
        message: fmt::Arguments<'a>,
        location: Location<'a>,
    ) -> Self {
        Self {
            message,
            expression: Some(expression),
            location,
        }
    }

    pub fn error(message: fmt::Arguments<'a>, location: Location<'a>) -> Self {
        Self {
            message,
            expression: None,
            location,
        }
    }

    /// The event a condition reports: `None` when it holds.
    #[inline]
    pub fn check(
        expression: &'a str,
        condition: bool,
        message: fmt::Arguments<'a>,
        location: Location<'a>,
    ) -> Option<Self> {
        if condition {
            None
        } else {
            Some(Self::assertion(expression, message, location))
        }
    }

    /// Write the report line by line. Each line is a separate write, so
    /// concurrent reports to a shared sink may interleave.
    pub fn write_to<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_fmt(format_args!("Assert failed:\t{}\n", self.message))?;
        if let Some(expression) = self.expression {
            sink.write_fmt(format_args!("Expected:\t{expression}\n"))?;
        }
        sink.write_fmt(format_args!("Source:\t\t{}\n", self.location))
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Assert failed:\t{}", self.message)?;
        if let Some(expression) = self.expression {
            writeln!(f, "Expected:\t{expression}")?;
        }
        writeln!(f, "Source:\t\t{}", self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERE: Location<'static> = Location {
        file: "f.cc",
        line: 42,
    };

    /// Display output and `write_to` output of one event.
    fn render(event: Diagnostic<'_>) -> (String, String) {
        let mut sink = Vec::new();
        event.write_to(&mut sink).unwrap();
        (event.to_string(), String::from_utf8(sink).unwrap())
    }

    #[test]
    fn test_assertion_layout() {
        let (shown, written) =
            render(Diagnostic::assertion("1 == 2", format_args!("values differ"), HERE));
        assert_eq!(
            shown,
            "Assert failed:\tvalues differ\nExpected:\t1 == 2\nSource:\t\tf.cc, line 42\n"
        );
        assert_eq!(written, shown);
    }

    #[test]
    fn test_error_layout_has_no_expected_line() {
        let (shown, written) =
            render(Diagnostic::error(format_args!("unreachable state {}", 7), HERE));
        assert_eq!(shown, "Assert failed:\tunreachable state 7\nSource:\t\tf.cc, line 42\n");
        assert_eq!(written, shown);
    }

    #[test]
    fn test_check_passes() {
        assert!(Diagnostic::check("true", true, format_args!("never"), HERE).is_none());
    }

    #[test]
    fn test_check_fails() {
        let shown = Diagnostic::check("x > 0", false, format_args!("x positive"), HERE)
            .map(|event| event.to_string());
        assert_eq!(
            shown.as_deref(),
            Some("Assert failed:\tx positive\nExpected:\tx > 0\nSource:\t\tf.cc, line 42\n")
        );
    }
}
