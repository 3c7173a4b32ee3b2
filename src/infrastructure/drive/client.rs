// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the files listing endpoint.

use super::listing::decode_page;
use crate::application::port::{DrivePage, FolderListing, ListRequest};
use crate::error::{Error, Result};
use async_trait::async_trait;

/// Lists folder pages over HTTP with a public API key.
#[derive(Debug, Clone)]
pub struct DriveClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl DriveClient {
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

#[async_trait]
impl FolderListing for DriveClient {
    async fn list_page(&self, request: &ListRequest) -> Result<DrivePage> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("storage API key is not configured".to_string()))?;

        let mut query = request.query_pairs();
        query.push(("key", api_key.to_string()));

        let response = self.http.get(&self.endpoint).query(&query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(format!(
                "listing folder {} returned HTTP status: {status}",
                request.folder_id()
            )));
        }

        let body = response.bytes().await?;
        decode_page(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::FolderId;

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let client = DriveClient::new(reqwest::Client::new(), "http://127.0.0.1:9/files", None);
        let request = ListRequest::first_page(FolderId::new("abc"), 10);

        let result = client.list_page(&request).await;

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
