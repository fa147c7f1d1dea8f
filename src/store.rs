//! Task store: loads the backing file, applies one mutation, writes back.
//!
//! The file is the single source of truth; the in-memory collection is
//! rebuilt on every open and discarded after one operation. Positions are
//! 1-based over the decoded collection and shared by `remove`, `toggle`, and
//! the rendered listing. Malformed lines are diagnosed and skipped at load;
//! they stay on disk until the next successful mutation rewrites the file.

use std::fmt;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::task::{Priority, Task};

/// Errors surfaced by store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Cannot create, read, or write the backing file.
    FileAccess { path: PathBuf, message: String },
    /// User-supplied priority failed normalization.
    InvalidPriority(String),
    /// Due date is not a real `YYYY-MM-DD` date.
    InvalidDueDate(String),
    /// Description contains a character the line format cannot represent.
    InvalidDescription(String),
    /// 1-based position outside the current collection.
    InvalidTaskId { position: usize, count: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileAccess { path, message } => {
                write!(f, "can't access {}: {}", path.display(), message)
            }
            Self::InvalidPriority(token) => {
                write!(
                    f,
                    "invalid priority {:?} (allowed values: low, medium, high)",
                    token
                )
            }
            Self::InvalidDueDate(token) => {
                write!(f, "invalid due date {:?} (expected YYYY-MM-DD)", token)
            }
            Self::InvalidDescription(reason) => {
                write!(f, "invalid description: {}", reason)
            }
            Self::InvalidTaskId { position, count } => {
                write!(f, "invalid task ID {} (the list has {} tasks)", position, count)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// The ordered task collection backed by one file.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store, creating the parent directory and an empty file on
    /// first use, then load every decodable line.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| file_access(&path, &e))?;
            }
            fs::write(&path, "").map_err(|e| file_access(&path, &e))?;
        }
        let mut store = Self {
            path,
            tasks: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Read the backing file line by line. Malformed lines are diagnosed to
    /// stderr and excluded from the collection, but the file itself is left
    /// untouched.
    fn load(&mut self) -> Result<(), StoreError> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| file_access(&self.path, &e))?;
        self.tasks.clear();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Task::parse(line) {
                Ok(task) => self.tasks.push(task),
                Err(err) => {
                    eprintln!("warning: {}:{}: {}", self.path.display(), index + 1, err)
                }
            }
        }
        Ok(())
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded collection, in file order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Validate and append a new task.
    ///
    /// Validation happens before any write; this is the one strict
    /// normalization point, so loads never need to re-validate stored
    /// records. The encoded line is appended rather than rewriting the whole
    /// file, preceded by a newline separator unless the file is empty.
    pub fn add(
        &mut self,
        description: &str,
        priority_token: &str,
        due_date: &str,
    ) -> Result<(), StoreError> {
        let priority = Priority::parse(priority_token)
            .ok_or_else(|| StoreError::InvalidPriority(priority_token.to_string()))?;
        let due_date = parse_due_date(due_date)?;
        let description = description.trim();
        if description.contains('|') {
            return Err(StoreError::InvalidDescription(
                "the `|` character is reserved as the field separator".to_string(),
            ));
        }
        if description.contains('\n') || description.contains('\r') {
            return Err(StoreError::InvalidDescription(
                "newlines are not representable in a task line".to_string(),
            ));
        }

        let task = Task {
            description: description.to_string(),
            done: false,
            priority,
            due_date,
        };

        let size = fs::metadata(&self.path)
            .map_err(|e| file_access(&self.path, &e))?
            .len();
        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| file_access(&self.path, &e))?;
        let line = if size == 0 {
            task.to_line()
        } else {
            format!("\n{}", task.to_line())
        };
        file.write_all(line.as_bytes())
            .map_err(|e| file_access(&self.path, &e))?;

        self.tasks.push(task);
        Ok(())
    }

    /// Remove the task at a 1-based position and rewrite the file.
    pub fn remove(&mut self, position: usize) -> Result<(), StoreError> {
        self.check_position(position)?;
        self.tasks.remove(position - 1);
        self.save()
    }

    /// Flip the completion state of the task at a 1-based position and
    /// rewrite the file. Out-of-range positions fail like `remove` does;
    /// there is no silent no-op.
    pub fn toggle(&mut self, position: usize) -> Result<(), StoreError> {
        self.check_position(position)?;
        let task = &mut self.tasks[position - 1];
        task.done = !task.done;
        self.save()
    }

    fn check_position(&self, position: usize) -> Result<(), StoreError> {
        if position == 0 || position > self.tasks.len() {
            return Err(StoreError::InvalidTaskId {
                position,
                count: self.tasks.len(),
            });
        }
        Ok(())
    }

    /// Rewrite the whole file from the in-memory collection.
    fn save(&self) -> Result<(), StoreError> {
        let lines: Vec<String> = self.tasks.iter().map(Task::to_line).collect();
        fs::write(&self.path, lines.join("\n")).map_err(|e| file_access(&self.path, &e))
    }
}

fn parse_due_date(raw: &str) -> Result<Option<String>, StoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "None" {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| StoreError::InvalidDueDate(trimmed.to_string()))?;
    Ok(Some(trimmed.to_string()))
}

fn file_access(path: &Path, err: &std::io::Error) -> StoreError {
    StoreError::FileAccess {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{StoreError, TaskStore};
    use crate::task::Priority;

    fn store_path(temp: &TempDir) -> std::path::PathBuf {
        temp.path().join("todo.txt")
    }

    #[test]
    fn test_open_creates_missing_directory_and_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(".config").join("todo").join("todo.txt");
        let store = TaskStore::open(&path).expect("open");
        assert!(path.exists());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_add_appends_without_leading_newline_on_empty_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        let mut store = TaskStore::open(&path).expect("open");
        store.add("First", "low", "").expect("add");
        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "[] First |  Low |  None");
    }

    #[test]
    fn test_add_separates_lines_on_nonempty_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        let mut store = TaskStore::open(&path).expect("open");
        store.add("First", "low", "").expect("add");
        store.add("Second", "high", "2026-09-01").expect("add");
        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(
            content,
            "[] First |  Low |  None\n[] Second |  High |  2026-09-01"
        );
    }

    #[test]
    fn test_add_normalizes_priority_shorthand() {
        let temp = TempDir::new().expect("temp dir");
        let mut store = TaskStore::open(store_path(&temp)).expect("open");
        store.add("Task", "H", "").expect("add");
        assert_eq!(store.tasks()[0].priority, Priority::High);
    }

    #[test]
    fn test_add_invalid_priority_writes_nothing() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        let mut store = TaskStore::open(&path).expect("open");
        let err = store.add("", "invalid-priority", "").unwrap_err();
        assert!(matches!(err, StoreError::InvalidPriority(_)));
        assert_eq!(fs::read_to_string(&path).expect("read"), "");
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_add_invalid_due_date_writes_nothing() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        let mut store = TaskStore::open(&path).expect("open");
        let err = store.add("Task", "low", "not-a-date").unwrap_err();
        assert!(matches!(err, StoreError::InvalidDueDate(_)));
        let err = store.add("Task", "low", "2026-02-30").unwrap_err();
        assert!(matches!(err, StoreError::InvalidDueDate(_)));
        assert_eq!(fs::read_to_string(&path).expect("read"), "");
    }

    #[test]
    fn test_add_rejects_separator_in_description() {
        let temp = TempDir::new().expect("temp dir");
        let mut store = TaskStore::open(store_path(&temp)).expect("open");
        let err = store.add("one | two", "low", "").unwrap_err();
        assert!(matches!(err, StoreError::InvalidDescription(_)));
    }

    #[test]
    fn test_add_then_remove_restores_contents() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        let mut store = TaskStore::open(&path).expect("open");
        store.add("Keep me", "low", "").expect("add");
        let before = fs::read_to_string(&path).expect("read");

        store.add("Drop me", "high", "").expect("add");
        store.remove(2).expect("remove");
        let after = fs::read_to_string(&path).expect("read");
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_out_of_range_leaves_file_unchanged() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        let mut store = TaskStore::open(&path).expect("open");
        store.add("Only task", "low", "").expect("add");
        let before = fs::read(&path).expect("read");

        for position in [0, 2] {
            let err = store.remove(position).unwrap_err();
            assert!(matches!(
                err,
                StoreError::InvalidTaskId { count: 1, .. }
            ));
        }
        assert_eq!(fs::read(&path).expect("read"), before);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        let mut store = TaskStore::open(&path).expect("open");
        store.add("Flip me", "low", "").expect("add");
        let before = fs::read_to_string(&path).expect("read");

        store.toggle(1).expect("toggle");
        assert!(store.tasks()[0].done);
        assert!(fs::read_to_string(&path).expect("read").starts_with("[X]"));

        store.toggle(1).expect("toggle");
        assert!(!store.tasks()[0].done);
        assert_eq!(fs::read_to_string(&path).expect("read"), before);
    }

    #[test]
    fn test_toggle_out_of_range_fails() {
        let temp = TempDir::new().expect("temp dir");
        let mut store = TaskStore::open(store_path(&temp)).expect("open");
        let err = store.toggle(1).unwrap_err();
        assert!(matches!(err, StoreError::InvalidTaskId { count: 0, .. }));
    }

    #[test]
    fn test_load_skips_malformed_lines_but_keeps_them_on_disk() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        fs::write(
            &path,
            "[] Good one |  Low |  None\nthis line is broken\n[X] Good two |  High |  None",
        )
        .expect("write");

        let store = TaskStore::open(&path).expect("open");
        assert_eq!(store.tasks().len(), 2);
        assert_eq!(store.tasks()[0].description, "Good one");
        assert_eq!(store.tasks()[1].description, "Good two");

        // Load alone never rewrites the file.
        let content = fs::read_to_string(&path).expect("read");
        assert!(content.contains("this line is broken"));
    }

    #[test]
    fn test_mutation_rewrite_drops_malformed_lines() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        fs::write(&path, "broken\n[] Good |  Low |  None").expect("write");

        let mut store = TaskStore::open(&path).expect("open");
        store.toggle(1).expect("toggle");
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "[X] Good |  Low |  None"
        );
    }

    #[test]
    fn test_load_ignores_blank_lines() {
        let temp = TempDir::new().expect("temp dir");
        let path = store_path(&temp);
        fs::write(&path, "[] One |  Low |  None\n\n[] Two |  Low |  None\n").expect("write");
        let store = TaskStore::open(&path).expect("open");
        assert_eq!(store.tasks().len(), 2);
    }
}
