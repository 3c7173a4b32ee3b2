// SPDX-License-Identifier: MPL-2.0
//! Storage service ports.
//!
//! Two seams live here:
//! - [`FolderListing`] fetches one raw page of a folder listing. The HTTP
//!   adapter implements it; tests script pages through it.
//! - [`FolderResolver`] turns a folder id into normalized images. The
//!   aggregator depends only on this trait.

use crate::domain::gallery::{DriveImage, FolderId};
use crate::error::Result;
use async_trait::async_trait;

/// Fields requested for every listed file.
pub const LIST_FIELDS: &str =
    "nextPageToken, files(id, name, mimeType, thumbnailLink, imageMediaMetadata)";

/// Newest uploads first.
pub const LIST_ORDER: &str = "createdTime desc";

// =============================================================================
// ListRequest
// =============================================================================

/// One page request against the files listing endpoint.
///
/// The folder filter is sent only with the first request; continuation
/// requests carry the page token instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    folder_id: FolderId,
    page_size: u32,
    page_token: Option<String>,
}

impl ListRequest {
    #[must_use]
    pub fn first_page(folder_id: FolderId, page_size: u32) -> Self {
        Self {
            folder_id,
            page_size,
            page_token: None,
        }
    }

    /// Continuation request for the page identified by `token`.
    #[must_use]
    pub fn next_page(&self, token: impl Into<String>) -> Self {
        Self {
            folder_id: self.folder_id.clone(),
            page_size: self.page_size,
            page_token: Some(token.into()),
        }
    }

    #[must_use]
    pub fn folder_id(&self) -> &FolderId {
        &self.folder_id
    }

    #[must_use]
    pub fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    /// Filter expression selecting non-trashed images directly inside the folder.
    #[must_use]
    pub fn folder_query(&self) -> String {
        format!(
            "'{}' in parents and mimeType contains 'image/' and trashed = false",
            self.folder_id.as_str().replace('\'', "\\'")
        )
    }

    /// Query-string pairs, excluding the API key.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        match &self.page_token {
            Some(token) => pairs.push(("pageToken", token.clone())),
            None => pairs.push(("q", self.folder_query())),
        }
        pairs.push(("fields", LIST_FIELDS.to_string()));
        pairs.push(("pageSize", self.page_size.to_string()));
        pairs.push(("orderBy", LIST_ORDER.to_string()));
        pairs
    }
}

// =============================================================================
// Listing Results
// =============================================================================

/// A file entry as reported by the listing endpoint.
///
/// Dimensions are `None` when absent, non-numeric or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListedFile {
    pub id: String,
    pub name: Option<String>,
    pub thumbnail_link: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// One page of a folder listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrivePage {
    pub files: Vec<ListedFile>,
    pub next_page_token: Option<String>,
}

// =============================================================================
// Traits
// =============================================================================

/// Port for fetching one page of a folder listing.
#[async_trait]
pub trait FolderListing: Send + Sync {
    async fn list_page(&self, request: &ListRequest) -> Result<DrivePage>;
}

/// Port for resolving every image in a folder.
///
/// Implementations never fail: any error yields an empty list, so an empty
/// result means either "no photos" or "could not resolve".
#[async_trait]
pub trait FolderResolver: Send + Sync {
    async fn resolve(&self, folder_id: &FolderId) -> Vec<DriveImage>;
}
