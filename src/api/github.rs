//! Client for the GitHub releases API.
//!
//! Two requests are made per update: the releases listing and, when an update
//! is needed, the download of a single asset. Both fail on a non-2xx status.

use crate::libs::app_metadata::user_agent;
use crate::libs::error::{UpdateError, UpdateResult};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A release as returned by the listing endpoint. Unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Release {
    pub tag_name: String,
    pub created_at: DateTime<Utc>,
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

#[derive(Debug, Clone)]
pub struct ReleasesClient {
    client: Client,
}

impl ReleasesClient {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> UpdateResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        if let Ok(agent) = HeaderValue::from_str(&user_agent()) {
            headers.insert(USER_AGENT, agent);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| UpdateError::network("<client>", e))?;

        Ok(Self { client })
    }

    /// Fetches and parses the releases listing at `url`.
    pub async fn fetch_releases(&self, url: &str) -> UpdateResult<Vec<Release>> {
        let body = self.get(url).await?.text().await.map_err(|e| UpdateError::network(url, e))?;
        tracing::debug!(url, bytes = body.len(), "received release listing");
        Ok(serde_json::from_str(&body)?)
    }

    /// Downloads the asset at `url` into memory.
    pub async fn download(&self, url: &str) -> UpdateResult<Vec<u8>> {
        let bytes = self.get(url).await?.bytes().await.map_err(|e| UpdateError::network(url, e))?;
        tracing::debug!(url, bytes = bytes.len(), "downloaded asset");
        Ok(bytes.to_vec())
    }

    async fn get(&self, url: &str) -> UpdateResult<Response> {
        let response = self.client.get(url).send().await.map_err(|e| UpdateError::network(url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpdateError::Status { url: url.to_string(), status });
        }
        Ok(response)
    }
}
