//! Binary operations offered by the keypad.

use std::fmt;

/// A binary operation awaiting its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `+`
    Add,
    /// `−`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
}

impl Operation {
    /// All operations, in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Glyph used in the expression line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Map a typed character to an operation.
    ///
    /// Accepts both the display glyphs and their ASCII keyboard stand-ins.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Whether percent applies to the first operand (add/subtract) rather
    /// than standing alone (multiply/divide).
    pub fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }

    /// Apply the operation. Division by zero is the caller's concern.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    /// Lowercase name, used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_char(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!(Operation::from_char('-'), Some(Operation::Subtract));
        assert_eq!(Operation::from_char('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_char('/'), Some(Operation::Divide));
        assert_eq!(Operation::from_char('='), None);
        assert_eq!(Operation::from_char('5'), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operation::Divide.apply(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_percent_context() {
        assert!(Operation::Add.is_additive());
        assert!(Operation::Subtract.is_additive());
        assert!(!Operation::Multiply.is_additive());
        assert!(!Operation::Divide.is_additive());
    }
}
