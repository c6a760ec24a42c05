/// Diagnostics from the argument scan.
use thiserror::Error;

/// Reportable scan conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The argument list was empty.
    #[error("Usage: celsium --t temp")]
    Usage,

    /// The companion of `--t` did not parse as an integer.
    ///
    /// The double space is part of the published output format.
    #[error("'{raw}'  not a numeric value")]
    NotNumeric {
        /// The rejected token, verbatim.
        raw: String,
    },
}

/// Exit code mapping for `ScanError` variants.
impl ScanError {
    /// Return the CLI exit code for this condition.
    ///
    /// A non-numeric value is reported but still exits 0; only the usage
    /// error is fatal for the invocation.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage => 1,
            Self::NotNumeric { .. } => 0,
        }
    }
}
