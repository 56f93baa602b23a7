//! In-place editing of a task description.

/// Result of asking the user for a new description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The user confirmed a non-blank description.
    Confirmed(String),
    /// The user backed out, or entered nothing usable.
    Cancelled,
}

impl EditOutcome {
    /// Interpret raw user input for an edit.
    ///
    /// `None` means the user dismissed the edit. Blank input cannot be
    /// confirmed, so it also cancels.
    #[must_use]
    pub fn from_input(input: Option<&str>) -> Self {
        match input {
            Some(text) if !text.trim().is_empty() => Self::Confirmed(text.to_string()),
            _ => Self::Cancelled,
        }
    }

    /// The confirmed description, if any.
    #[must_use]
    pub fn confirmed(&self) -> Option<&str> {
        match self {
            Self::Confirmed(text) => Some(text),
            Self::Cancelled => None,
        }
    }
}
