//! Keypad calculator engine with a terminal front-end.
//!
//! [`calculator::CalculatorEngine`] is the core: one method per keypad
//! action and a `render` that yields the two display lines. The remaining
//! modules map keys to actions, load configuration and drive a line-based
//! terminal session.

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod session;

pub use calculator::{Action, CalculatorEngine, Operation};
pub use config::Config;
pub use display::Display;
pub use error::{CalcpadError, Result};
