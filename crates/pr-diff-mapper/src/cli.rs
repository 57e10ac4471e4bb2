//! Command-line argument definitions

use anyhow::{bail, Result};
use clap::Parser;

/// Map PR file diffs to line-level hunks for a PR iteration.
///
/// Emits one JSON document on stdout describing every file changed in
/// the iteration, with per-file hunk boundaries and added/deleted/
/// context line counts.
#[derive(Debug, Parser)]
#[command(name = "pr-diff-mapper", version, about)]
pub struct Args {
    /// URL-encoded Azure DevOps organization name
    #[arg(long = "org-enc")]
    pub org_enc: String,

    /// URL-encoded project name
    #[arg(long = "project-enc")]
    pub project_enc: String,

    /// URL-encoded repository name or id
    #[arg(long = "repo-enc")]
    pub repo_enc: String,

    /// Pull request id
    #[arg(long)]
    pub pull_request_id: String,

    /// Iteration id within the pull request
    #[arg(long)]
    pub iteration_id: String,

    /// Pre-encoded HTTP basic credential; when omitted, one is derived
    /// from the ADO_PAT environment variable
    #[arg(long)]
    pub auth_basic: Option<String>,
}

impl Args {
    /// Reject blank identifiers up front, before any network call.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("org-enc", &self.org_enc),
            ("project-enc", &self.project_enc),
            ("repo-enc", &self.repo_enc),
            ("pull-request-id", &self.pull_request_id),
            ("iteration-id", &self.iteration_id),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                bail!("--{name} must not be blank");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args::parse_from([
            "pr-diff-mapper",
            "--org-enc",
            "my-org",
            "--project-enc",
            "my-project",
            "--repo-enc",
            "my-repo",
            "--pull-request-id",
            "42",
            "--iteration-id",
            "3",
            "--auth-basic",
            "token",
        ])
    }

    #[test]
    fn full_argument_set_parses_and_validates() {
        let args = args();
        assert_eq!(args.pull_request_id, "42");
        assert_eq!(args.iteration_id, "3");
        assert_eq!(args.auth_basic.as_deref(), Some("token"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn auth_basic_is_optional_at_parse_time() {
        let args = Args::parse_from([
            "pr-diff-mapper",
            "--org-enc",
            "o",
            "--project-enc",
            "p",
            "--repo-enc",
            "r",
            "--pull-request-id",
            "1",
            "--iteration-id",
            "1",
        ]);
        assert!(args.auth_basic.is_none());
    }

    #[test]
    fn blank_identifier_is_rejected() {
        let mut args = args();
        args.iteration_id = "   ".to_string();

        let err = args.validate().unwrap_err();
        assert!(err.to_string().contains("iteration-id"));
    }

    #[test]
    fn missing_required_argument_fails_to_parse() {
        let result = Args::try_parse_from(["pr-diff-mapper", "--org-enc", "o"]);
        assert!(result.is_err());
    }
}
