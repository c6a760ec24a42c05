/// CLI layer: argument scanning and output.
pub mod args;
pub mod output;

pub use args::{Outcome, scan};
pub use output::write_outcome;
