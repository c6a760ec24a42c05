/// Argument scanning: convert the raw invocation tokens to an [`Outcome`].
///
/// The scanner is deliberately not a declarative parser. The contract calls
/// for a positional two-token walk: even positions are flag candidates, the
/// token after a candidate is its value, and anything that is not `--t` is
/// skipped without comment. A candidate in the final position has no
/// companion and is never examined.
use crate::temp::{Conversion, ScanError, convert};

/// The only flag the scanner recognizes.
const TEMP_FLAG: &str = "--t";

/// Terminal state of one scan over the argument list.
///
/// `scan` is a pure function from tokens to `Outcome`; the caller owns the
/// single print and the process exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `--t` was found with an integer companion; carries the result line.
    Converted(Conversion),
    /// The window exhausted the list without matching `--t`. Silent success.
    FlagMissing,
    /// A reportable condition (usage error or non-numeric value).
    Failed(ScanError),
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Converted(_) | Self::FlagMissing => 0,
            Self::Failed(err) => err.exit_code(),
        }
    }

    /// The line to print, if any. `FlagMissing` produces nothing.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Converted(conversion) => Some(conversion.to_string()),
            Self::FlagMissing => None,
            Self::Failed(err) => Some(err.to_string()),
        }
    }
}

/// Scan the invocation tokens (program name excluded) for `--t <value>`.
///
/// The first `--t` wins; the scan never advances past it. `--t` sitting in
/// a companion (odd) position is invisible to the window and falls through
/// as [`Outcome::FlagMissing`].
#[must_use]
pub fn scan(args: &[String]) -> Outcome {
    if args.is_empty() {
        return Outcome::Failed(ScanError::Usage);
    }

    let mut i = 0;
    while i + 1 < args.len() {
        if args[i] == TEMP_FLAG {
            return match args[i + 1].parse::<i64>() {
                Ok(fahrenheit) => Outcome::Converted(convert(fahrenheit)),
                Err(_) => Outcome::Failed(ScanError::NotNumeric {
                    raw: args[i + 1].clone(),
                }),
            };
        }
        i += 2;
    }

    Outcome::FlagMissing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn test_no_arguments_is_usage_error() {
        let outcome = scan(&[]);
        assert_eq!(outcome.message().as_deref(), Some("Usage: celsium --t temp"));
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_freezing_point() {
        let outcome = scan(&argv(&["--t", "32"]));
        assert_eq!(outcome.message().as_deref(), Some("32°F = 0°C"));
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_boiling_point() {
        let outcome = scan(&argv(&["--t", "212"]));
        assert_eq!(outcome.message().as_deref(), Some("212°F = 100°C"));
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_non_numeric_value_is_reported_but_exits_zero() {
        let outcome = scan(&argv(&["--t", "abc"]));
        assert_eq!(
            outcome.message().as_deref(),
            Some("'abc'  not a numeric value")
        );
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_float_literal_is_not_numeric() {
        let outcome = scan(&argv(&["--t", "98.6"]));
        assert_eq!(
            outcome.message().as_deref(),
            Some("'98.6'  not a numeric value")
        );
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_unknown_flag_is_silently_ignored() {
        let outcome = scan(&argv(&["--x", "5"]));
        assert_eq!(outcome, Outcome::FlagMissing);
        assert_eq!(outcome.message(), None);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_flag_without_companion_falls_through() {
        let outcome = scan(&argv(&["--t"]));
        assert_eq!(outcome, Outcome::FlagMissing);
    }

    #[test]
    fn test_flag_in_companion_position_is_invisible() {
        // "--t" lands in an odd slot, so the window never sees it as a flag.
        let outcome = scan(&argv(&["extra", "--t", "32"]));
        assert_eq!(outcome, Outcome::FlagMissing);
    }

    #[test]
    fn test_first_flag_wins() {
        let outcome = scan(&argv(&["--t", "32", "--t", "212"]));
        assert_eq!(outcome.message().as_deref(), Some("32°F = 0°C"));
    }

    #[test]
    fn test_flag_found_past_skipped_pair() {
        let outcome = scan(&argv(&["--x", "5", "--t", "212"]));
        assert_eq!(outcome.message().as_deref(), Some("212°F = 100°C"));
    }

    #[test]
    fn test_negative_fahrenheit_rounds_toward_zero() {
        // -40°F is exactly -40°C; +0.5 then truncation yields -39.
        let outcome = scan(&argv(&["--t", "-40"]));
        assert_eq!(outcome.message().as_deref(), Some("-40°F = -39°C"));
        assert_eq!(outcome.exit_code(), 0);
    }
}
