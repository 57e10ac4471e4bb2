//! Orchestrates the per-iteration diff mapping run
//!
//! Strictly sequential: one network call at a time, files processed in
//! the order the change-list API reports them. Any fetch failure other
//! than a content 404 aborts the whole run; no partial report is
//! emitted.

use crate::report::{FileEntry, Report};
use ado_client::{AdoClient, RepoCoordinates};
use anyhow::{Context, Result};
use diff_line_map::build_line_map;
use log::{debug, info};

/// Build the full report for one pull request iteration.
pub async fn map_pr_diff_lines(
    client: &dyn AdoClient,
    coords: &RepoCoordinates,
    pull_request_id: &str,
    iteration_id: &str,
) -> Result<Report> {
    let details = client
        .fetch_pull_request(coords, pull_request_id)
        .await
        .context("failed to fetch pull request details")?;
    let source_branch = details.source_branch();
    let target_branch = details.target_branch();

    let changes = client
        .fetch_iteration_changes(coords, pull_request_id, iteration_id)
        .await
        .context("failed to fetch iteration changes")?;

    info!(
        "mapping {} change entries for PR {pull_request_id} iteration {iteration_id}",
        changes.change_entries.len()
    );

    let mut files = Vec::new();

    for entry in &changes.change_entries {
        let Some(path) = entry.resolved_path() else {
            debug!("skipping change entry without a path");
            continue;
        };

        if entry.is_folder() {
            files.push(FileEntry::folder(
                path.to_string(),
                entry.change_type.clone(),
                entry.change_tracking_id,
            ));
            continue;
        }

        let base = client
            .fetch_item_content(coords, path, &target_branch)
            .await
            .with_context(|| format!("failed to fetch base content of {path}"))?;
        let pr = client
            .fetch_item_content(coords, path, &source_branch)
            .await
            .with_context(|| format!("failed to fetch PR content of {path}"))?;

        files.push(FileEntry {
            path: path.to_string(),
            change_type: entry.change_type.clone(),
            change_tracking_id: entry.change_tracking_id,
            is_folder: false,
            base_exists: base.exists,
            pr_exists: pr.exists,
            line_map: build_line_map(&base.content, &pr.content),
        });
    }

    Ok(Report {
        pull_request_id: pull_request_id.to_string(),
        iteration_id: iteration_id.to_string(),
        source_branch,
        target_branch,
        count: files.len(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ado_client::{ItemContent, IterationChanges, PullRequestDetails};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory stand-in for the REST client. Records every content
    /// fetch so tests can assert which paths were (not) requested.
    struct FakeClient {
        details: PullRequestDetails,
        changes: IterationChanges,
        /// (path, branch) -> content; anything absent is a 404
        contents: HashMap<(String, String), String>,
        content_fetches: Mutex<Vec<(String, String)>>,
    }

    impl FakeClient {
        fn new(details: serde_json::Value, changes: serde_json::Value) -> Self {
            Self {
                details: serde_json::from_value(details).unwrap(),
                changes: serde_json::from_value(changes).unwrap(),
                contents: HashMap::new(),
                content_fetches: Mutex::new(Vec::new()),
            }
        }

        fn with_content(mut self, path: &str, branch: &str, content: &str) -> Self {
            self.contents
                .insert((path.to_string(), branch.to_string()), content.to_string());
            self
        }

        fn fetched(&self) -> Vec<(String, String)> {
            self.content_fetches.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AdoClient for FakeClient {
        async fn fetch_pull_request(
            &self,
            _coords: &RepoCoordinates,
            _pull_request_id: &str,
        ) -> anyhow::Result<PullRequestDetails> {
            Ok(self.details.clone())
        }

        async fn fetch_iteration_changes(
            &self,
            _coords: &RepoCoordinates,
            _pull_request_id: &str,
            _iteration_id: &str,
        ) -> anyhow::Result<IterationChanges> {
            Ok(self.changes.clone())
        }

        async fn fetch_item_content(
            &self,
            _coords: &RepoCoordinates,
            path: &str,
            branch: &str,
        ) -> anyhow::Result<ItemContent> {
            self.content_fetches
                .lock()
                .unwrap()
                .push((path.to_string(), branch.to_string()));

            Ok(match self.contents.get(&(path.to_string(), branch.to_string())) {
                Some(content) => ItemContent::found(content.clone()),
                None => ItemContent::absent(),
            })
        }
    }

    fn coords() -> RepoCoordinates {
        RepoCoordinates::new("org", "project", "repo")
    }

    fn details() -> serde_json::Value {
        serde_json::json!({
            "sourceRefName": "refs/heads/feature/foo",
            "targetRefName": "refs/heads/main",
        })
    }

    #[tokio::test]
    async fn edited_file_gets_a_line_map_from_both_branches() {
        let client = FakeClient::new(
            details(),
            serde_json::json!({
                "changeEntries": [{
                    "changeTrackingId": 1,
                    "changeType": "edit",
                    "item": { "path": "/src/lib.rs", "isFolder": false },
                }],
            }),
        )
        .with_content("/src/lib.rs", "main", "x\ny\nz")
        .with_content("/src/lib.rs", "feature/foo", "x\nq\nz");

        let report = map_pr_diff_lines(&client, &coords(), "42", "3")
            .await
            .unwrap();

        assert_eq!(report.pull_request_id, "42");
        assert_eq!(report.iteration_id, "3");
        assert_eq!(report.source_branch, "feature/foo");
        assert_eq!(report.target_branch, "main");
        assert_eq!(report.count, 1);

        let entry = &report.files[0];
        assert!(entry.base_exists);
        assert!(entry.pr_exists);
        assert_eq!(entry.line_map.hunk_count, 1);
        assert_eq!(entry.line_map.total_added, 1);
        assert_eq!(entry.line_map.total_deleted, 1);
        assert_eq!(entry.line_map.total_context, 2);

        // Base fetched at the target branch first, then PR content.
        assert_eq!(
            client.fetched(),
            vec![
                ("/src/lib.rs".to_string(), "main".to_string()),
                ("/src/lib.rs".to_string(), "feature/foo".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn folder_entries_bypass_the_content_fetcher() {
        let client = FakeClient::new(
            details(),
            serde_json::json!({
                "changeEntries": [{
                    "changeTrackingId": 2,
                    "changeType": "add",
                    "item": { "path": "/src/new-dir", "isFolder": true },
                }],
            }),
        );

        let report = map_pr_diff_lines(&client, &coords(), "42", "3")
            .await
            .unwrap();

        assert_eq!(report.count, 1);
        let entry = &report.files[0];
        assert!(entry.is_folder);
        assert!(!entry.base_exists);
        assert!(!entry.pr_exists);
        assert_eq!(entry.line_map.hunk_count, 0);
        assert!(entry.line_map.hunks.is_empty());

        assert!(client.fetched().is_empty());
    }

    #[tokio::test]
    async fn missing_file_at_base_maps_against_empty_content() {
        let client = FakeClient::new(
            details(),
            serde_json::json!({
                "changeEntries": [{
                    "changeTrackingId": 3,
                    "changeType": "add",
                    "item": { "path": "/src/new.rs", "isFolder": false },
                }],
            }),
        )
        .with_content("/src/new.rs", "feature/foo", "x\ny");

        let report = map_pr_diff_lines(&client, &coords(), "42", "3")
            .await
            .unwrap();

        let entry = &report.files[0];
        assert!(!entry.base_exists);
        assert!(entry.pr_exists);
        assert_eq!(entry.line_map.hunk_count, 1);
        assert_eq!(entry.line_map.total_added, 2);
        assert_eq!(entry.line_map.total_deleted, 0);
    }

    #[tokio::test]
    async fn entries_without_a_path_are_skipped() {
        let client = FakeClient::new(
            details(),
            serde_json::json!({
                "changeEntries": [
                    { "changeType": "edit" },
                    {
                        "changeTrackingId": 4,
                        "changeType": "edit",
                        "item": { "path": "/kept.rs", "isFolder": false },
                    },
                ],
            }),
        )
        .with_content("/kept.rs", "main", "a")
        .with_content("/kept.rs", "feature/foo", "a");

        let report = map_pr_diff_lines(&client, &coords(), "42", "3")
            .await
            .unwrap();

        assert_eq!(report.count, 1);
        assert_eq!(report.files[0].path, "/kept.rs");
    }

    #[tokio::test]
    async fn missing_ref_names_yield_empty_branch_strings() {
        let client = FakeClient::new(serde_json::json!({}), serde_json::json!({}));

        let report = map_pr_diff_lines(&client, &coords(), "42", "3")
            .await
            .unwrap();

        assert_eq!(report.source_branch, "");
        assert_eq!(report.target_branch, "");
        assert_eq!(report.count, 0);
        assert!(report.files.is_empty());
    }

    #[tokio::test]
    async fn renamed_entry_falls_back_to_original_path() {
        let client = FakeClient::new(
            details(),
            serde_json::json!({
                "changeEntries": [{
                    "changeTrackingId": 5,
                    "changeType": "delete",
                    "originalPath": "/old.rs",
                }],
            }),
        )
        .with_content("/old.rs", "main", "gone\n");

        let report = map_pr_diff_lines(&client, &coords(), "42", "3")
            .await
            .unwrap();

        let entry = &report.files[0];
        assert_eq!(entry.path, "/old.rs");
        assert!(entry.base_exists);
        assert!(!entry.pr_exists);
        assert_eq!(entry.line_map.total_deleted, 1);
    }
}
