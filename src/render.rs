//! Listing output: numbered rows, colorized priority, progress bar.
//!
//! Rendering works over the loaded collection, so displayed positions always
//! agree with the positions `remove` and `toggle` accept. Done/undone totals
//! are returned to the caller rather than accumulated on shared state.

use std::fmt::Write as _;

use crate::color;
use crate::task::Task;

/// Which rows to emit and whether to append the progress bar.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub show_done: bool,
    pub show_undone: bool,
    pub show_progress: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            show_done: true,
            show_undone: true,
            show_progress: true,
        }
    }
}

/// Done/undone totals for the rows that were emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub done: usize,
    pub undone: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.done + self.undone
    }
}

const DESCRIPTION_WIDTH: usize = 50;
const PROGRESS_WIDTH: usize = 50;
const RULE_WIDTH: usize = 80;

/// Render the task listing.
///
/// Positions stay 1-based over the full collection even when a filter hides
/// some rows, so a listed position is always valid for `remove`/`toggle`.
pub fn list(tasks: &[Task], options: &ListOptions) -> (String, Summary) {
    let mut out = String::new();
    let mut summary = Summary::default();

    out.push_str(&color::header("      ToDo List      "));
    out.push_str("\n\n");
    let _ = writeln!(
        out,
        "{:<3} {:<width$} {:<10} {:<15}",
        "ID",
        "Description",
        "Priority",
        "Due Date",
        width = DESCRIPTION_WIDTH,
    );
    out.push_str(&"─".repeat(RULE_WIDTH));
    out.push('\n');

    for (index, task) in tasks.iter().enumerate() {
        if task.done {
            if !options.show_done {
                continue;
            }
            summary.done += 1;
        } else {
            if !options.show_undone {
                continue;
            }
            summary.undone += 1;
        }

        let glyph = if task.done {
            color::done_glyph()
        } else {
            color::undone_glyph()
        };
        let _ = writeln!(
            out,
            "{}  {}  {:<width$} {} {:<15}",
            color::dim(&format!("{:>2}", index + 1)),
            glyph,
            truncate(&task.description, DESCRIPTION_WIDTH),
            color::priority(task.priority),
            task.due_date.as_deref().unwrap_or("None"),
            width = DESCRIPTION_WIDTH,
        );
    }

    if options.show_progress && options.show_done && options.show_undone {
        if let Some(bar) = progress_bar(summary) {
            out.push('\n');
            out.push_str(&bar);
            out.push('\n');
        }
    }

    (out, summary)
}

/// Build the completion bar, or `None` when no rows were counted.
fn progress_bar(summary: Summary) -> Option<String> {
    let total = summary.total();
    if total == 0 {
        return None;
    }

    let filled = PROGRESS_WIDTH * summary.done / total;
    let percent = summary.done * 100 / total;

    let mut bar = String::new();
    if filled > 0 {
        bar.push_str(&color::success(&"━".repeat(filled)));
    }
    let mut remainder = PROGRESS_WIDTH - filled;
    if filled > 0 && remainder > 0 {
        bar.push_str(&color::dim("╺"));
        remainder -= 1;
    }
    if remainder > 0 {
        bar.push_str(&color::dim(&"━".repeat(remainder)));
    }
    let _ = write!(bar, " {}% Done", percent);
    Some(bar)
}

/// Left-justify a description into its column, truncating with an ellipsis
/// when it is too long.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width - 1).collect();
    clipped.push('…');
    clipped
}
