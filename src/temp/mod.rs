/// Temperature domain layer: conversion arithmetic and diagnostics.
pub mod convert;
pub mod errors;

pub use convert::{Conversion, convert, fahrenheit_to_celsius, round_half_up};
pub use errors::ScanError;
