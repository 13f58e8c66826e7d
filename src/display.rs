//! The two display lines produced after every action.

use serde::Serialize;
use std::fmt;

/// Rendered calculator output.
///
/// `expression` is the secondary line (operation in progress or the one
/// just completed, possibly empty); `current` is the main value line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Display {
    pub expression: String,
    pub current: String,
}

impl Display {
    /// Serialize as a single JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Text to put on the clipboard: the value without separators.
    pub fn text_for_clipboard(&self) -> String {
        self.current.replace(',', "")
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.expression)?;
        write!(f, "{}", self.current)
    }
}
