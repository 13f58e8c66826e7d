//! Calculator module for keypad-style arithmetic.
//!
//! This module provides functionality to:
//! - Accumulate keystrokes into entries and resolve binary operations
//! - Format entries and results for display
//! - Copy results to the clipboard

mod clipboard;
mod engine;
mod formatting;
mod operation;

pub use clipboard::copy_to_clipboard;
pub use engine::{Action, CalculatorEngine, DIVISION_BY_ZERO_MESSAGE, EngineState, EntryMode};
pub use formatting::{
    ERROR, INFINITY, MAX_FRACTION_DIGITS, MAX_INTEGER_DIGITS, format_grouped, format_result,
    parse_entry,
};
pub use operation::Operation;
