//! mowtodo: a flat-file command-line task tracker.
//!
//! Tasks live in a plain UTF-8 text file, one per line:
//!
//! ```text
//! [] Buy milk |  Low |  2026-09-01
//! [X] Ship release |  High |  None
//! ```
//!
//! The file is the single source of truth. Each invocation loads it, applies
//! at most one mutation (add/remove/toggle), writes it back, and renders the
//! listing. The default location is `~/.config/todo/todo.txt`, created on
//! first use.

pub mod cli;
pub mod color;
pub mod config;
pub mod editor;
pub mod render;
pub mod store;
pub mod task;
