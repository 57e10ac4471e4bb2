//! Output document model
//!
//! The JSON shapes emitted on stdout. Field names are camelCase to stay
//! byte-compatible with the consumers already parsing this report.

use diff_line_map::LineMap;
use serde::Serialize;

/// One changed file with its diff summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Repository path of the changed item
    pub path: String,

    /// Change kind reported by the API (`add`, `edit`, `delete`, ...)
    pub change_type: Option<String>,

    pub change_tracking_id: Option<u64>,

    pub is_folder: bool,

    /// Whether the file exists at the target (base) branch
    pub base_exists: bool,

    /// Whether the file exists at the source (PR) branch
    pub pr_exists: bool,

    pub line_map: LineMap,
}

impl FileEntry {
    /// Folder entries never hit the content endpoint and carry a
    /// zero-filled line map.
    pub fn folder(
        path: String,
        change_type: Option<String>,
        change_tracking_id: Option<u64>,
    ) -> Self {
        Self {
            path,
            change_type,
            change_tracking_id,
            is_folder: true,
            base_exists: false,
            pr_exists: false,
            line_map: LineMap::empty(),
        }
    }
}

/// The whole-run report, one per invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub pull_request_id: String,
    pub iteration_id: String,
    pub source_branch: String,
    pub target_branch: String,

    /// Number of entries in `files`
    pub count: usize,

    /// Changed files in API order
    pub files: Vec<FileEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn folder_entry_serializes_with_zeroed_line_map() {
        let entry = FileEntry::folder("/src".to_string(), Some("add".to_string()), Some(5));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "path": "/src",
                "changeType": "add",
                "changeTrackingId": 5,
                "isFolder": true,
                "baseExists": false,
                "prExists": false,
                "lineMap": {
                    "hunkCount": 0,
                    "totalAdded": 0,
                    "totalDeleted": 0,
                    "totalContext": 0,
                    "hunks": [],
                },
            })
        );
    }

    #[test]
    fn missing_metadata_serializes_as_null() {
        let entry = FileEntry::folder("/src".to_string(), None, None);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["changeType"], serde_json::Value::Null);
        assert_eq!(json["changeTrackingId"], serde_json::Value::Null);
    }
}
