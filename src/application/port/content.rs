// SPDX-License-Identifier: MPL-2.0
//! Content store port.

use crate::domain::gallery::{AlbumId, FolderId, ImageRef, LocalizedText};
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Album metadata as stored in the content store, before photo resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumRecord {
    pub id: AlbumId,
    pub title: String,
    pub description: LocalizedText,
    pub capture_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub cover_image: Option<ImageRef>,
    /// Empty when no folder is attached.
    pub folder_id: FolderId,
}

/// Port for reading album records.
///
/// Records come back ordered newest first. The ordering is advisory; the
/// gallery sorts again on display.
#[async_trait]
pub trait AlbumRecordSource: Send + Sync {
    async fn fetch_album_records(&self) -> Result<Vec<AlbumRecord>>;
}
