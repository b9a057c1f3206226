//! Terminal output formatting
//!
//! Narration for the terminal console and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{print_deal, print_event, print_simulation_result};
