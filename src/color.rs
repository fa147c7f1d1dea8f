//! Terminal color utilities using ANSI escape codes.
//!
//! Output is colorized only when stdout is a terminal, `NO_COLOR` is unset,
//! and `TERM` is not `dumb`; otherwise every helper passes text through
//! unchanged.

use std::env;
use std::io::stdout;

use crossterm::tty::IsTty;
use once_cell::sync::Lazy;

use crate::task::Priority;

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

use codes::*;

static ENABLED: Lazy<bool> = Lazy::new(|| {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("TERM").map(|term| term == "dumb").unwrap_or(false) {
        return false;
    }
    stdout().is_tty()
});

/// Whether color output is enabled for this process.
pub fn enabled() -> bool {
    *ENABLED
}

fn paint(code: &str, text: &str) -> String {
    if enabled() {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Color error messages (red).
pub fn error(text: &str) -> String {
    paint(RED, text)
}

/// Color success markers (green).
pub fn success(text: &str) -> String {
    paint(GREEN, text)
}

/// Dim secondary text such as positions and the unfilled bar segment.
pub fn dim(text: &str) -> String {
    paint(DIM, text)
}

/// Bold cyan listing header.
pub fn header(text: &str) -> String {
    if enabled() {
        format!("{}{}{}{}", BOLD, CYAN, text, RESET)
    } else {
        text.to_string()
    }
}

/// Right-pad a priority to its display column and colorize it with the fixed
/// mapping: High red, Medium yellow, Low green, None default.
///
/// Padding happens before the escape codes are attached; a column format
/// applied afterward would count the invisible codes as width.
pub fn priority(priority: Priority) -> String {
    let padded = format!("{:<10}", priority.as_str());
    match priority {
        Priority::High => paint(RED, &padded),
        Priority::Medium => paint(YELLOW, &padded),
        Priority::Low => paint(GREEN, &padded),
        Priority::None => padded,
    }
}

/// Status glyph for a completed task.
pub fn done_glyph() -> String {
    success("✓")
}

/// Status glyph for an open task.
pub fn undone_glyph() -> String {
    "⨀".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strip ANSI escape codes from a string.
    fn strip_ansi(s: &str) -> String {
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    #[test]
    fn test_priority_column_width() {
        for p in [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::None,
        ] {
            let plain = strip_ansi(&priority(p));
            assert_eq!(plain.chars().count(), 10, "priority {:?}", p);
            assert!(plain.starts_with(p.as_str()));
        }
    }

    #[test]
    fn test_none_priority_is_uncolored() {
        assert_eq!(priority(Priority::None), "None      ");
    }

    #[test]
    fn test_glyphs_survive_stripping() {
        assert_eq!(strip_ansi(&done_glyph()), "✓");
        assert_eq!(strip_ansi(&undone_glyph()), "⨀");
    }
}
