//! # forecast-cli
//!
//! Console output for the best-city report.

pub mod output;
pub mod presenter;

pub use presenter::ConsoleReporter;
