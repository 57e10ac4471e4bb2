//! Basic-auth credential construction
//!
//! Azure DevOps accepts a personal access token as the password half of
//! an HTTP basic credential with an empty user name. Callers can either
//! hand over a pre-encoded token or let the credential be derived from
//! the `ADO_PAT` environment variable.

use anyhow::{bail, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Environment variable holding a raw personal access token
pub const PAT_ENV_VAR: &str = "ADO_PAT";

/// An encoded HTTP basic credential for Azure DevOps.
#[derive(Debug, Clone)]
pub struct BasicCredential {
    token: String,
}

impl BasicCredential {
    /// Wrap an already base64-encoded `user:password` token.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Derive a credential from the `ADO_PAT` environment variable,
    /// encoding it as `base64(":" + pat)`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(PAT_ENV_VAR) {
            Ok(pat) if !pat.trim().is_empty() => Ok(Self::from_pat(pat.trim())),
            _ => bail!("environment variable {PAT_ENV_VAR} is not set"),
        }
    }

    /// Encode a raw personal access token as a basic credential.
    pub fn from_pat(pat: &str) -> Self {
        Self {
            token: STANDARD.encode(format!(":{pat}")),
        }
    }

    /// The value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.token)
    }
}
