/// Conversion arithmetic: Fahrenheit to Celsius, with the historical
/// rounding rule.
use std::fmt;

/// A completed conversion, ready to render as `<F>°F = <C>°C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Input temperature, degrees Fahrenheit.
    pub fahrenheit: i64,
    /// Rounded output temperature, degrees Celsius.
    pub celsius: i64,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°F = {}°C", self.fahrenheit, self.celsius)
    }
}

/// Convert a parsed Fahrenheit value into a [`Conversion`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn convert(fahrenheit: i64) -> Conversion {
    let celsius = fahrenheit_to_celsius(fahrenheit as f64);
    Conversion {
        fahrenheit,
        celsius: round_half_up(celsius),
    }
}

/// `(f - 32) * 5 / 9`, in floating point.
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Round by adding 0.5 and truncating toward zero.
///
/// Round-half-up for non-negative inputs only: negative inputs end up
/// rounded toward zero (-39.5 becomes -39, not -40). Kept as-is to match
/// the long-standing output of this tool.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(celsius: f64) -> i64 {
    (celsius + 0.5) as i64
}
