// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the content store query API.

use super::records::{decode_records, ALBUMS_QUERY};
use crate::application::port::{AlbumRecord, AlbumRecordSource};
use crate::config::ContentConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;

/// Runs the album query against the content store.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ContentConfig,
}

impl ContentClient {
    #[must_use]
    pub fn new(http: reqwest::Client, config: ContentConfig) -> Self {
        Self { http, config }
    }

    /// Query endpoint for the configured project and dataset.
    pub fn query_url(&self) -> Result<String> {
        let project = self.config.project_id.trim();
        if project.is_empty() {
            return Err(Error::Config("content store project id is not configured".to_string()));
        }
        let host = if self.config.use_cdn { "apicdn" } else { "api" };
        let version = self.config.api_version.trim_start_matches('v');
        Ok(format!(
            "https://{project}.{host}.sanity.io/v{version}/data/query/{}",
            self.config.dataset
        ))
    }
}

#[async_trait]
impl AlbumRecordSource for ContentClient {
    async fn fetch_album_records(&self) -> Result<Vec<AlbumRecord>> {
        let url = self.query_url()?;
        let response = self
            .http
            .get(&url)
            .query(&[("query", ALBUMS_QUERY)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ContentStore(format!("album query returned HTTP status: {status}")));
        }

        let body = response.bytes().await?;
        let records = decode_records(&body)?;
        tracing::debug!(count = records.len(), "album records fetched");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: ContentConfig) -> ContentClient {
        ContentClient::new(reqwest::Client::new(), config)
    }

    #[test]
    fn query_url_uses_cdn_host_by_default() {
        let config = ContentConfig {
            project_id: "abc123".to_string(),
            ..ContentConfig::default()
        };
        assert_eq!(
            client(config).query_url().unwrap(),
            "https://abc123.apicdn.sanity.io/v2024-02-10/data/query/production"
        );
    }

    #[test]
    fn query_url_without_cdn() {
        let config = ContentConfig {
            project_id: "abc123".to_string(),
            dataset: "staging".to_string(),
            api_version: "v2021-10-21".to_string(),
            use_cdn: false,
        };
        assert_eq!(
            client(config).query_url().unwrap(),
            "https://abc123.api.sanity.io/v2021-10-21/data/query/staging"
        );
    }

    #[tokio::test]
    async fn missing_project_is_a_config_error() {
        let result = client(ContentConfig::default()).fetch_album_records().await;
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
