//! Folds a unified diff into a hunk map

use crate::types::{Hunk, LineMap};
use regex::{Captures, Regex};
use similar::TextDiff;
use std::sync::OnceLock;

/// Matches a unified diff hunk header such as `@@ -12,3 +12,4 @@`.
/// Either count may be omitted, in which case it defaults to 1.
fn hunk_header_regex() -> &'static Regex {
    static HUNK_HEADER: OnceLock<Regex> = OnceLock::new();

    HUNK_HEADER
        .get_or_init(|| Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").unwrap())
}

/// Build the line-level diff summary for one old/new content pair.
///
/// Runs a line-oriented unified diff over the two blobs and walks the
/// rendered diff lines in order, opening a hunk record on every header
/// line and counting added, deleted and context lines until the next
/// header closes it. The synthetic `---`/`+++` file markers and
/// `\ No newline at end of file` hints are not counted.
///
/// Identical inputs yield a zero-filled map. No input is rejected;
/// binary-ish content is diffed as text, worst case as one large hunk.
pub fn build_line_map(old_content: &str, new_content: &str) -> LineMap {
    let diff = TextDiff::from_lines(old_content, new_content);
    let rendered = diff
        .unified_diff()
        .context_radius(3)
        .header("a", "b")
        .to_string();

    let mut hunks: Vec<Hunk> = Vec::new();
    let mut current: Option<Hunk> = None;

    for line in rendered.lines() {
        if let Some(caps) = hunk_header_regex().captures(line) {
            if let Some(done) = current.take() {
                hunks.push(done);
            }

            current = Some(Hunk {
                index: hunks.len() + 1,
                old_start: capture_number(&caps, 1, 0),
                old_lines: capture_number(&caps, 2, 1),
                new_start: capture_number(&caps, 3, 0),
                new_lines: capture_number(&caps, 4, 1),
                added_lines: 0,
                deleted_lines: 0,
                context_lines: 0,
            });
            continue;
        }

        // Lines preceding the first header (the ---/+++ identity pair)
        // carry no hunk membership.
        let Some(hunk) = current.as_mut() else {
            continue;
        };

        if line.starts_with('+') && !line.starts_with("+++") {
            hunk.added_lines += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            hunk.deleted_lines += 1;
        } else if line.starts_with(' ') {
            hunk.context_lines += 1;
        }
    }

    if let Some(done) = current.take() {
        hunks.push(done);
    }

    LineMap {
        hunk_count: hunks.len(),
        total_added: hunks.iter().map(|h| h.added_lines).sum(),
        total_deleted: hunks.iter().map(|h| h.deleted_lines).sum(),
        total_context: hunks.iter().map(|h| h.context_lines).sum(),
        hunks,
    }
}

fn capture_number(caps: &Captures<'_>, group: usize, default: u32) -> u32 {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(default)
}
