//! Task record model and line codec.
//!
//! Supports the single-line format:
//! - `[] Task description |  Low |  2026-09-01` (open)
//! - `[X] Task description |  High |  None` (done)
//!
//! Older files may carry `Priority:` / `Due:` labels inside the fields; the
//! parser strips them.

mod model;
mod parse;


pub use model::{Priority, Task};
pub use parse::MalformedRecord;
