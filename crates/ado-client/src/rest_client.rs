//! Direct REST implementation of the `AdoClient` trait
//!
//! Makes real API calls with a fixed per-request timeout and no
//! retries. Query values (file path, branch name) are percent-encoded
//! here; organization, project and repository segments arrive already
//! encoded from the caller.

use crate::auth::BasicCredential;
use crate::client::AdoClient;
use crate::error::ClientError;
use crate::types::{ItemContent, IterationChanges, PullRequestDetails, RepoCoordinates};
use crate::{API_BASE, API_VERSION, REQUEST_TIMEOUT_SECS};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reqwest::{header, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Direct Azure DevOps REST client.
#[derive(Debug, Clone)]
pub struct RestAdoClient {
    http: reqwest::Client,
    auth_header: String,
}

impl RestAdoClient {
    /// Build a client with the given credential and the fixed
    /// 30-second request timeout.
    pub fn new(credential: BasicCredential) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            auth_header: credential.header_value(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, &self.auth_header)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::http(status, &body));
        }

        Ok(response.json::<T>().await?)
    }

    fn pull_request_url(
        &self,
        coords: &RepoCoordinates,
        pull_request_id: &str,
    ) -> Result<Url, ClientError> {
        parse_url(format!(
            "{API_BASE}/{}/{}/_apis/git/repositories/{}/pullRequests/{pull_request_id}?api-version={API_VERSION}",
            coords.organization, coords.project, coords.repository,
        ))
    }

    fn iteration_changes_url(
        &self,
        coords: &RepoCoordinates,
        pull_request_id: &str,
        iteration_id: &str,
    ) -> Result<Url, ClientError> {
        parse_url(format!(
            "{API_BASE}/{}/{}/_apis/git/repositories/{}/pullRequests/{pull_request_id}/iterations/{iteration_id}/changes?api-version={API_VERSION}",
            coords.organization, coords.project, coords.repository,
        ))
    }

    fn item_url(
        &self,
        coords: &RepoCoordinates,
        path: &str,
        branch: &str,
    ) -> Result<Url, ClientError> {
        let mut url = parse_url(format!(
            "{API_BASE}/{}/{}/_apis/git/repositories/{}/items",
            coords.organization, coords.project, coords.repository,
        ))?;

        url.query_pairs_mut()
            .append_pair("path", path)
            .append_pair("includeContent", "true")
            .append_pair("api-version", API_VERSION)
            .append_pair("versionDescriptor.version", branch)
            .append_pair("versionDescriptor.versionType", "branch");

        Ok(url)
    }
}

fn parse_url(raw: String) -> Result<Url, ClientError> {
    Url::parse(&raw).map_err(|err| ClientError::InvalidUrl(format!("{raw}: {err}")))
}

#[async_trait]
impl AdoClient for RestAdoClient {
    async fn fetch_pull_request(
        &self,
        coords: &RepoCoordinates,
        pull_request_id: &str,
    ) -> anyhow::Result<PullRequestDetails> {
        debug!("fetching pull request {pull_request_id}");
        let url = self.pull_request_url(coords, pull_request_id)?;
        Ok(self.get_json(url).await?)
    }

    async fn fetch_iteration_changes(
        &self,
        coords: &RepoCoordinates,
        pull_request_id: &str,
        iteration_id: &str,
    ) -> anyhow::Result<IterationChanges> {
        debug!("fetching changes for pull request {pull_request_id} iteration {iteration_id}");
        let url = self.iteration_changes_url(coords, pull_request_id, iteration_id)?;
        Ok(self.get_json(url).await?)
    }

    async fn fetch_item_content(
        &self,
        coords: &RepoCoordinates,
        path: &str,
        branch: &str,
    ) -> anyhow::Result<ItemContent> {
        debug!("fetching {path} at branch {branch}");
        let url = self.item_url(coords, path, branch)?;

        match self.get_json::<crate::types::ItemPayload>(url).await {
            Ok(payload) => Ok(ItemContent::found(payload.content.unwrap_or_default())),
            Err(err) if err.status() == Some(StatusCode::NOT_FOUND) => {
                debug!("{path} does not exist at branch {branch}");
                Ok(ItemContent::absent())
            }
            Err(err) => Err(err.into()),
        }
    }
}
