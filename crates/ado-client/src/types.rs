//! Azure DevOps API data transfer objects
//!
//! Typed projections of the three payloads the diff mapper consumes.
//! Every field the API may omit is an explicit `Option` with a serde
//! default, so a missing field degrades to the documented fallback
//! instead of failing deserialization.

use serde::Deserialize;

/// Addressing for one repository, as pre-URL-encoded path segments.
///
/// The caller is responsible for percent-encoding the organization,
/// project and repository names; they are spliced into request paths
/// verbatim.
#[derive(Debug, Clone)]
pub struct RepoCoordinates {
    /// URL-encoded organization name
    pub organization: String,
    /// URL-encoded project name
    pub project: String,
    /// URL-encoded repository name or id
    pub repository: String,
}

impl RepoCoordinates {
    pub fn new(
        organization: impl Into<String>,
        project: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            project: project.into(),
            repository: repository.into(),
        }
    }
}

/// Pull request detail payload, reduced to the branch refs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestDetails {
    /// Full source ref, e.g. `refs/heads/feature/foo`
    #[serde(default)]
    pub source_ref_name: Option<String>,

    /// Full target ref, e.g. `refs/heads/main`
    #[serde(default)]
    pub target_ref_name: Option<String>,
}

impl PullRequestDetails {
    /// Source branch name with any `refs/heads/` prefix stripped.
    /// A missing ref yields an empty string.
    pub fn source_branch(&self) -> String {
        parse_branch(self.source_ref_name.as_deref().unwrap_or(""))
    }

    /// Target branch name, same fallback as [`Self::source_branch`].
    pub fn target_branch(&self) -> String {
        parse_branch(self.target_ref_name.as_deref().unwrap_or(""))
    }
}

/// Strip the `refs/heads/` prefix from a git ref name, if present.
pub fn parse_branch(ref_name: &str) -> String {
    ref_name
        .strip_prefix("refs/heads/")
        .unwrap_or(ref_name)
        .to_string()
}

/// Change list for one pull request iteration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationChanges {
    #[serde(default)]
    pub change_entries: Vec<ChangeEntry>,
}

/// One changed item within an iteration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEntry {
    #[serde(default)]
    pub item: Option<ChangeItem>,

    /// Pre-rename path, present for renames and deletes
    #[serde(default)]
    pub original_path: Option<String>,

    /// Change kind as reported by the API, e.g. `add`, `edit`, `delete`
    #[serde(default)]
    pub change_type: Option<String>,

    #[serde(default)]
    pub change_tracking_id: Option<u64>,
}

impl ChangeEntry {
    /// Path of the changed item, falling back to the pre-rename path.
    /// An empty `item.path` counts as missing and falls through to
    /// `originalPath`. `None` when the API reported neither; such
    /// entries are skipped.
    pub fn resolved_path(&self) -> Option<&str> {
        self.item
            .as_ref()
            .and_then(|item| item.path.as_deref())
            .filter(|path| !path.is_empty())
            .or(self.original_path.as_deref())
            .filter(|path| !path.is_empty())
    }

    /// Whether this entry is a folder rather than a file.
    pub fn is_folder(&self) -> bool {
        self.item
            .as_ref()
            .and_then(|item| item.is_folder)
            .unwrap_or(false)
    }
}

/// The `item` object nested in a change entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeItem {
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub is_folder: Option<bool>,
}

/// Versioned item payload from the items endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    #[serde(default)]
    pub content: Option<String>,
}

/// Resolved file content at one branch, with an existence flag so a 404
/// is distinguishable from an empty file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemContent {
    pub content: String,
    pub exists: bool,
}

impl ItemContent {
    /// Content of an existing file.
    pub fn found(content: String) -> Self {
        Self {
            content,
            exists: true,
        }
    }

    /// The file does not exist at the requested branch.
    pub fn absent() -> Self {
        Self {
            content: String::new(),
            exists: false,
        }
    }
}
