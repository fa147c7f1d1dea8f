//! Backing-file path resolution.
//!
//! Precedence (highest to lowest): `--file` CLI flag > `TODO_FILE` env var >
//! `$HOME/.config/todo/todo.txt`.

use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::cli::CliArgs;

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the backing task file.
    pub tasks_file: PathBuf,
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// No `--file`, no `TODO_FILE`, and `$HOME` is unset.
    NoHome,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHome => write!(
                f,
                "can't locate the task file: $HOME is unset (set TODO_FILE or pass --file)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Resolve configuration from CLI args and the environment.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        if let Some(ref path) = cli.file {
            return Ok(Self {
                tasks_file: PathBuf::from(path),
            });
        }
        if let Some(path) = env::var_os("TODO_FILE") {
            return Ok(Self {
                tasks_file: PathBuf::from(path),
            });
        }
        let home = env::var_os("HOME").ok_or(ConfigError::NoHome)?;
        Ok(Self {
            tasks_file: PathBuf::from(home)
                .join(".config")
                .join("todo")
                .join("todo.txt"),
        })
    }
}
