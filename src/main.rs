#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! celsium — convert a Fahrenheit temperature to Celsius.

mod cli;
mod temp;

use cli::{scan, write_outcome};

fn main() {
    // Invocation tokens, program name excluded.
    let args: Vec<String> = std::env::args().skip(1).collect();

    let outcome = scan(&args);
    write_outcome(&outcome);
    std::process::exit(outcome.exit_code());
}
