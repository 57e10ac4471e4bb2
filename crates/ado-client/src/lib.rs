//! Azure DevOps git REST client
//!
//! This crate provides a trait-based client for the handful of Azure
//! DevOps git endpoints the diff mapper needs: pull request details,
//! per-iteration change lists, and versioned file content.
//!
//! The design keeps the API surface behind the [`AdoClient`] trait so
//! orchestration code can be tested against an in-memory fake, with
//! [`RestAdoClient`] as the direct HTTP implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use ado_client::{AdoClient, BasicCredential, RepoCoordinates, RestAdoClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let credential = BasicCredential::from_env()?;
//! let client = RestAdoClient::new(credential)?;
//! let coords = RepoCoordinates::new("my-org", "my-project", "my-repo");
//!
//! let details = client.fetch_pull_request(&coords, "42").await?;
//! println!("source branch: {}", details.source_branch());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod rest_client;
pub mod types;

/// Azure DevOps REST API base URL
pub const API_BASE: &str = "https://dev.azure.com";

/// API version pinned for all requests
pub const API_VERSION: &str = "7.2-preview";

/// Per-request timeout in seconds; requests are never retried
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub use auth::BasicCredential;
pub use client::AdoClient;
pub use error::ClientError;
pub use rest_client::RestAdoClient;
pub use types::{
    parse_branch, ChangeEntry, ChangeItem, ItemContent, ItemPayload, IterationChanges,
    PullRequestDetails, RepoCoordinates,
};
