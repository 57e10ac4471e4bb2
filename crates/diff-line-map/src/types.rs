//! Data model for line-level diff summaries

use serde::{Deserialize, Serialize};

/// A contiguous region of change between two versions of a file,
/// anchored at start-line positions in both versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hunk {
    /// 1-based position of this hunk in discovery order
    pub index: usize,

    /// Starting line number in the old version
    pub old_start: u32,

    /// Number of old-version lines covered by this hunk
    pub old_lines: u32,

    /// Starting line number in the new version
    pub new_start: u32,

    /// Number of new-version lines covered by this hunk
    pub new_lines: u32,

    /// Lines present only in the new version
    pub added_lines: u32,

    /// Lines present only in the old version
    pub deleted_lines: u32,

    /// Unchanged lines included for context
    pub context_lines: u32,
}

/// The full diff summary for one old/new content pair.
///
/// Hunks are ordered by appearance in the diff, i.e. ascending
/// old/new start lines, and `index` follows that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMap {
    /// Number of hunks in the diff
    pub hunk_count: usize,

    /// Sum of `added_lines` across all hunks
    pub total_added: u32,

    /// Sum of `deleted_lines` across all hunks
    pub total_deleted: u32,

    /// Sum of `context_lines` across all hunks
    pub total_context: u32,

    /// The hunks, in discovery order
    pub hunks: Vec<Hunk>,
}

impl LineMap {
    /// Zero-filled summary, used for folder entries and identical content.
    pub fn empty() -> Self {
        Self {
            hunk_count: 0,
            total_added: 0,
            total_deleted: 0,
            total_context: 0,
            hunks: Vec::new(),
        }
    }
}

impl Default for LineMap {
    fn default() -> Self {
        Self::empty()
    }
}
