//! Azure DevOps client trait
//!
//! Defines the interface the diff mapper orchestrates against.
//! Implementations can be direct (hitting the REST API) or in-memory
//! fakes for tests.

use crate::types::{ItemContent, IterationChanges, PullRequestDetails, RepoCoordinates};
use async_trait::async_trait;

/// The subset of the Azure DevOps git API used by the diff mapper.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks.
#[async_trait]
pub trait AdoClient: Send + Sync {
    /// Fetch pull request details (branch refs).
    async fn fetch_pull_request(
        &self,
        coords: &RepoCoordinates,
        pull_request_id: &str,
    ) -> anyhow::Result<PullRequestDetails>;

    /// Fetch the change list for one iteration of a pull request.
    async fn fetch_iteration_changes(
        &self,
        coords: &RepoCoordinates,
        pull_request_id: &str,
        iteration_id: &str,
    ) -> anyhow::Result<IterationChanges>;

    /// Fetch the full content of a file at a branch.
    ///
    /// A 404 means the file does not exist at that branch and is
    /// reported as [`ItemContent::absent`], not as an error. Every
    /// other failure propagates.
    async fn fetch_item_content(
        &self,
        coords: &RepoCoordinates,
        path: &str,
        branch: &str,
    ) -> anyhow::Result<ItemContent>;
}
