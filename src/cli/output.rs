/// Output: the single print site for a scan outcome.
use super::args::Outcome;

/// Write the outcome's line (if any) to stdout.
///
/// Everything, including the usage line and the not-numeric diagnostic,
/// goes to standard output; the program performs no other I/O.
pub fn write_outcome(outcome: &Outcome) {
    if let Some(message) = outcome.message() {
        println!("{message}");
    }
}
