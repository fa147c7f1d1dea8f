//! Opens the backing file in the user's `$EDITOR`, blocking until it exits.

use std::env;
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Errors from launching the external editor.
#[derive(Debug)]
pub enum EditorError {
    /// `$EDITOR` is unset or empty.
    Unavailable,
    /// The editor failed to start or exited with a failure status.
    Launch(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "can't open editor: $EDITOR is unset"),
            Self::Launch(message) => write!(f, "failed to open editor: {}", message),
        }
    }
}

impl std::error::Error for EditorError {}

/// Open `path` in `$EDITOR` and wait for the editor to exit. The editor
/// inherits stdin/stdout/stderr; its behavior is opaque to this program.
pub fn open(path: &Path) -> Result<(), EditorError> {
    let editor = env::var("EDITOR")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(EditorError::Unavailable)?;

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| EditorError::Launch(e.to_string()))?;
    if !status.success() {
        return Err(EditorError::Launch(format!(
            "{} exited with {}",
            editor, status
        )));
    }
    Ok(())
}
