//! Keypad state machine.
//!
//! The engine accumulates keystrokes into a numeric entry, holds the first
//! operand and operation while the second one is typed, and resolves the
//! pair on equals or when another operation is chosen.

use super::formatting::{
    ERROR, MAX_FRACTION_DIGITS, MAX_INTEGER_DIGITS, format_grouped, format_plain,
    format_result, parse_entry,
};
use super::operation::Operation;
use crate::display::Display;

/// Expression line shown after dividing by zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Cannot divide by 0";

/// Whether the next digit extends the entry or starts a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryMode {
    /// Digits are appended to the current entry.
    #[default]
    Accumulating,
    /// A computation just finished; the next digit discards its result.
    Fresh,
}

/// One user action, as delivered by an input dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A decimal digit key, `'0'..='9'`.
    Digit(char),
    /// The decimal point key.
    Point,
    /// One of the four operation keys.
    Operation(Operation),
    /// Resolve the pending operation.
    Equals,
    /// Turn the entry into a percentage.
    Percent,
    /// Flip the sign of the entry.
    ToggleSign,
    /// Delete the last character of the entry.
    Backspace,
    /// Reset everything.
    Clear,
}

/// Everything the calculator remembers between actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineState {
    /// Entry being typed, or the last result. Never empty.
    pub current: String,
    /// First operand; empty unless an operation is pending.
    pub previous: String,
    /// Operation awaiting its second operand; `None` iff `previous` is empty.
    pub operation: Option<Operation>,
    /// Secondary display line.
    pub expression: String,
    /// Whether the next digit extends `current` or replaces it.
    pub mode: EntryMode,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operation: None,
            expression: String::new(),
            mode: EntryMode::Accumulating,
        }
    }
}

/// Build the in-progress expression line, e.g. `1,200 × 3.5`.
fn pending_expression(previous: &str, operation: Operation, current: &str) -> String {
    format!(
        "{} {} {}",
        format_grouped(previous),
        operation,
        format_grouped(current)
    )
}

/// Calculator engine owning a single [`EngineState`].
#[derive(Debug, Default)]
pub struct CalculatorEngine {
    state: EngineState,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, for inspection.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Dispatch one action to its handler.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Digit(digit) => self.append_digit(digit),
            Action::Point => self.append_digit('.'),
            Action::Operation(operation) => self.choose_operation(operation),
            Action::Equals => self.equals(),
            Action::Percent => self.apply_percent(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Backspace => self.backspace(),
            Action::Clear => self.reset(),
        }
    }

    /// Restore the cleared state.
    pub fn reset(&mut self) {
        self.state = EngineState::default();
    }

    /// Append a digit or the decimal point to the current entry.
    ///
    /// Input beyond the digit limits, a second point, or any other
    /// character is ignored.
    pub fn append_digit(&mut self, token: char) {
        if token != '.' && !token.is_ascii_digit() {
            tracing::trace!(?token, "ignoring non-digit token");
            return;
        }

        if self.state.mode == EntryMode::Fresh && self.state.operation.is_none() {
            self.reset();
        }

        let current = &self.state.current;
        let mut parts = current.split('.');
        let integer_digits = parts
            .next()
            .unwrap_or_default()
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        let fraction = parts.next();
        let fraction_digits = fraction.map_or(0, str::len);

        if token == '.' {
            if fraction.is_some() {
                return;
            }
            if current == "0" {
                self.state.current = "0.".to_string();
            } else {
                self.state.current.push('.');
            }
        } else {
            if fraction.is_none() && integer_digits >= MAX_INTEGER_DIGITS {
                tracing::trace!("integer digit limit reached");
                return;
            }
            if fraction.is_some() && fraction_digits >= MAX_FRACTION_DIGITS {
                tracing::trace!("fraction digit limit reached");
                return;
            }
            if current == "0" {
                self.state.current = token.to_string();
            } else {
                self.state.current.push(token);
            }
        }

        self.state.mode = EntryMode::Accumulating;
        self.refresh_expression();
    }

    /// Flip the sign of the current entry.
    pub fn toggle_sign(&mut self) {
        if self.state.current == "0" {
            return;
        }

        self.state.current = match self.state.current.strip_prefix('-') {
            Some(unsigned) => unsigned.to_string(),
            None => format!("-{}", self.state.current),
        };
        self.refresh_expression();
    }

    /// Turn the current entry into a percentage.
    ///
    /// With an add or subtract pending the entry becomes that percentage of
    /// the first operand (`NaN` when the first operand is unreadable);
    /// otherwise it is simply divided by 100.
    pub fn apply_percent(&mut self) {
        if self.state.current == "0" {
            return;
        }
        let Some(value) = parse_entry(&self.state.current) else {
            return;
        };

        match self.state.operation {
            Some(operation) => {
                let base = parse_entry(&self.state.previous).unwrap_or(f64::NAN);
                let adjusted = if operation.is_additive() {
                    base * value / 100.0
                } else {
                    value / 100.0
                };
                self.state.current = format_plain(adjusted);

                let shown = format_grouped(&self.state.current);
                self.state.expression = format!(
                    "{} ({}%)",
                    pending_expression(&self.state.previous, operation, &self.state.current),
                    shown
                );
            }
            None => {
                self.state.current = format_plain(value / 100.0);
                self.state.expression = format!("{}%", format_grouped(&self.state.current));
            }
        }
    }

    /// Choose the operation for the next operand, resolving any pending one
    /// first so that operations chain left to right.
    pub fn choose_operation(&mut self, operation: Operation) {
        if self.state.current == "0" && self.state.previous.is_empty() {
            return;
        }

        let first = if self.state.previous.is_empty() {
            &self.state.current
        } else {
            &self.state.previous
        };
        self.state.expression = format!("{} {}", format_grouped(first), operation);

        if !self.state.previous.is_empty() {
            self.equals();
        }

        self.state.operation = Some(operation);
        self.state.previous = std::mem::replace(&mut self.state.current, "0".to_string());
        self.state.mode = EntryMode::Accumulating;
    }

    /// Resolve the pending operation.
    ///
    /// Does nothing when no operation is pending or either operand is not a
    /// number. Dividing by zero leaves the `Error` marker as the entry.
    pub fn equals(&mut self) {
        let Some(operation) = self.state.operation else {
            return;
        };
        let (Some(lhs), Some(rhs)) = (
            parse_entry(&self.state.previous),
            parse_entry(&self.state.current),
        ) else {
            tracing::trace!("operands are not numeric, ignoring equals");
            return;
        };

        if operation == Operation::Divide && rhs == 0.0 {
            tracing::debug!(lhs, "division by zero");
            self.state.current = ERROR.to_string();
            self.state.expression = DIVISION_BY_ZERO_MESSAGE.to_string();
            self.finish();
            return;
        }

        self.state.expression = format!(
            "{} =",
            pending_expression(&self.state.previous, operation, &self.state.current)
        );

        let result = operation.apply(lhs, rhs);
        self.state.current = format_result(result);
        tracing::debug!(
            operation = operation.name(),
            lhs,
            rhs,
            result = %self.state.current,
            "computed"
        );
        self.finish();
    }

    /// Delete the last character of the current entry.
    pub fn backspace(&mut self) {
        let current = &mut self.state.current;
        if current.len() == 1 || (current.len() == 2 && current.starts_with('-')) {
            *current = "0".to_string();
        } else {
            current.pop();
        }

        self.state.mode = EntryMode::Accumulating;
        self.refresh_expression();
    }

    /// Render the expression line and the grouped current entry.
    pub fn render(&self) -> Display {
        let grouped = format_grouped(&self.state.current);
        let current = if grouped.is_empty() {
            "0".to_string()
        } else {
            grouped
        };

        Display {
            expression: self.state.expression.clone(),
            current,
        }
    }

    fn finish(&mut self) {
        self.state.operation = None;
        self.state.previous.clear();
        self.state.mode = EntryMode::Fresh;
    }

    fn refresh_expression(&mut self) {
        if let Some(operation) = self.state.operation {
            self.state.expression =
                pending_expression(&self.state.previous, operation, &self.state.current);
        }
    }
}
