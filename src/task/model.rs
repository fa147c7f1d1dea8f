use std::fmt;

/// Task priority. `None` is the explicit absent marker, written to disk as
/// the literal token `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    Medium,
    High,
    #[default]
    None,
}

impl Priority {
    /// Parse a user-supplied priority token.
    ///
    /// Case-insensitive over `low`/`l`, `medium`/`m`, `high`/`h`. Anything
    /// else is rejected rather than defaulted, so callers decide whether an
    /// unrecognized token is an error (add) or reads as `None` (decode).
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "medium" | "m" => Some(Self::Medium),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }

    /// Canonical form written to disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::None => "None",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// The task description (without the checkbox prefix). Never contains
    /// `|` or newlines; both are unrepresentable in the line format.
    pub description: String,
    /// Completion flag (`[X]` vs `[]` on disk).
    pub done: bool,
    /// Canonical priority, or `Priority::None`.
    pub priority: Priority,
    /// Due date in `YYYY-MM-DD` form, or absent (written as `None`).
    pub due_date: Option<String>,
}

impl Task {
    /// Create a new open task with no priority or due date.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            priority: Priority::None,
            due_date: None,
        }
    }

    /// Format this task as a single file line.
    ///
    /// The spacing around `|` is cosmetic but round-trips through
    /// [`Task::parse`].
    pub fn to_line(&self) -> String {
        let checkbox = if self.done { "[X]" } else { "[]" };
        let due = self.due_date.as_deref().unwrap_or("None");
        format!("{} {} |  {} |  {}", checkbox, self.description, self.priority, due)
    }
}
