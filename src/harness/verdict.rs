//! Pass/fail verdicts from captured harness output.
//!
//! A grading service that only sees the harness's stdout decides the result by finding the first `Actual:` line
//! and comparing its value, as text, with the expected value. [`Verdict::from_output`] applies that rule.

/// Prefix of the line carrying the returned value.
pub const ACTUAL_PREFIX: &str = "Actual:";

/// Return the trimmed value of the first line that starts with [`ACTUAL_PREFIX`].
///
/// ## Examples
/// ```rust
/// use countpos::harness::verdict::parse_actual;
///
/// assert_eq!(parse_actual("Actual: 6\nExpected: 6\n"), Some("6"));
/// assert_eq!(parse_actual("Exception in thread \"main\""), None);
/// ```
pub fn parse_actual(output: &str) -> Option<&str> {
    output
        .lines()
        .find_map(|line| line.strip_prefix(ACTUAL_PREFIX))
        .map(str::trim)
}

/// Outcome of grading captured output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub expected: String,
    /// Parsed actual value, or the whole output when no `Actual:` line exists or its value is empty
    pub actual: String,
    pub passed: bool,
}

impl Verdict {
    pub fn from_output(output: &str, expected: i64) -> Self {
        let expected = expected.to_string();
        match parse_actual(output).filter(|actual| !actual.is_empty()) {
            Some(actual) => Verdict {
                passed: actual == expected,
                actual: actual.to_string(),
                expected,
            },
            None => Verdict {
                actual: output.trim_end().to_string(),
                passed: false,
                expected,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_output() {
        let verdict = Verdict::from_output("Actual: 6\nExpected: 6\n", 6);
        assert!(verdict.passed);
        assert_eq!(verdict.actual, "6");
        assert_eq!(verdict.expected, "6");
    }

    #[test]
    fn test_wrong_value() {
        let verdict = Verdict::from_output("Actual: 7\nExpected: 6\n", 6);
        assert!(!verdict.passed);
        assert_eq!(verdict.actual, "7");
    }

    #[test]
    fn test_first_actual_line_wins() {
        assert_eq!(parse_actual("noise\nActual:  3 \nActual: 6\n"), Some("3"));
    }

    #[test]
    fn test_prefix_must_start_the_line() {
        assert_eq!(parse_actual("  Actual: 6"), None);
    }

    #[test]
    fn test_missing_actual_keeps_raw_output() {
        let verdict = Verdict::from_output("Error: target `Main` is not registered\n", 6);
        assert!(!verdict.passed);
        assert_eq!(verdict.actual, "Error: target `Main` is not registered");
    }

    #[test]
    fn test_empty_actual_value() {
        let verdict = Verdict::from_output("Actual:\nExpected: 6\n", 6);
        assert!(!verdict.passed);
        assert_eq!(verdict.actual, "Actual:\nExpected: 6");
        assert_eq!(parse_actual("Actual:   \n"), Some(""));
    }

    #[test]
    fn test_comparison_is_textual() {
        assert!(!Verdict::from_output("Actual: 06", 6).passed);
    }
}
