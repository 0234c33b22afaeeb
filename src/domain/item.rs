use serde::{Deserialize, Serialize};
use std::fmt;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Display text
    pub text: String,
    /// Completion flag
    pub done: bool,
    /// Free-form notes, may span multiple lines. Data files written
    /// before the notes feature existed omit the field entirely.
    #[serde(default)]
    pub notes: String,
}

impl Todo {
    pub fn new(text: String) -> Self {
        Self {
            text,
            done: false,
            notes: String::new(),
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Checkbox glyph for the list view
    pub fn glyph(&self) -> &'static str {
        if self.done {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// Status tag for the notes header
    pub fn status_tag(&self) -> &'static str {
        if self.done {
            "(DONE)"
        } else {
            "(PENDING)"
        }
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.text)
    }
}
