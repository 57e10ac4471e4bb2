//! Line-level diff summaries for file content pairs
//!
//! Given the old and new version of a file's text, this crate computes a
//! unified diff and folds it into a [`LineMap`]: an ordered list of hunks
//! with start lines, lengths and per-hunk added/deleted/context counts,
//! plus totals across the whole file.
//!
//! The entry point is pure and never fails; any two strings are valid
//! input, including empty or identical content.
//!
//! # Example
//!
//! ```
//! use diff_line_map::build_line_map;
//!
//! let map = build_line_map("x\ny\nz", "x\nq\nz");
//! assert_eq!(map.hunk_count, 1);
//! assert_eq!(map.total_added, 1);
//! assert_eq!(map.total_deleted, 1);
//! assert_eq!(map.total_context, 2);
//! ```

mod builder;
mod types;

pub use builder::build_line_map;
pub use types::{Hunk, LineMap};
