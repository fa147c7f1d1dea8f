use std::fmt;

use super::{Priority, Task};

/// A line that cannot be decoded as a task record.
///
/// Callers diagnose and skip the line; a malformed record never aborts a
/// whole load or listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// The offending line, verbatim.
    pub line: String,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed task record: {:?}", self.line)
    }
}

impl std::error::Error for MalformedRecord {}

impl Task {
    /// Decode a single file line.
    ///
    /// Lenient where the stored data allows it: a legacy `Priority:`/`Due:`
    /// label is stripped, an empty or unrecognized priority reads as `None`,
    /// and an empty due date reads as absent. Only a structurally broken
    /// line (fewer than three `|`-separated fields) is an error; strictness
    /// lives at write time in the store.
    pub fn parse(line: &str) -> Result<Self, MalformedRecord> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() < 3 {
            return Err(MalformedRecord {
                line: line.to_string(),
            });
        }

        let (done, description) = parse_checkbox(parts[0]);

        let priority_token = strip_label(parts[1], "Priority:");
        let priority = Priority::parse(priority_token).unwrap_or(Priority::None);

        let due = strip_label(parts[2], "Due:");
        let due_date = match due {
            "" | "None" => None,
            other => Some(other.to_string()),
        };

        Ok(Self {
            description,
            done,
            priority,
            due_date,
        })
    }
}

/// Split the checkbox prefix off the first field. A field with no
/// recognizable checkbox reads as an open task with the full text as its
/// description.
fn parse_checkbox(field: &str) -> (bool, String) {
    let trimmed = field.trim();
    if let Some(rest) = trimmed.strip_prefix("[X]") {
        (true, rest.trim().to_string())
    } else if let Some(rest) = trimmed.strip_prefix("[]") {
        (false, rest.trim().to_string())
    } else {
        (false, trimmed.to_string())
    }
}

/// Trim a field and strip a legacy label prefix if present.
fn strip_label<'a>(field: &'a str, label: &str) -> &'a str {
    let trimmed = field.trim();
    match trimmed.strip_prefix(label) {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}
