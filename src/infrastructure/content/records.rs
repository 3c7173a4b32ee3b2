// SPDX-License-Identifier: MPL-2.0
//! Wire format of album query results.

use crate::application::port::AlbumRecord;
use crate::domain::gallery::{AlbumId, FolderId, ImageRef, LocalizedText};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Album projection, newest first.
pub const ALBUMS_QUERY: &str = r#"*[_type == "album"] | order(date desc) {
  _id,
  title,
  description,
  date,
  tags,
  coverImage,
  googleDriveId
}"#;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Vec<AlbumDocument>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlbumDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<DescriptionField>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    cover_image: Option<ImageField>,
    #[serde(default)]
    google_drive_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DescriptionField {
    #[serde(default)]
    en: Option<String>,
    #[serde(default)]
    vi: Option<String>,
    #[serde(default)]
    ja: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageField {
    #[serde(default)]
    asset: Option<AssetField>,
}

#[derive(Debug, Deserialize)]
struct AssetField {
    #[serde(rename = "_ref")]
    reference: String,
}

impl From<AlbumDocument> for AlbumRecord {
    fn from(doc: AlbumDocument) -> Self {
        let description = doc.description.unwrap_or_default();
        Self {
            id: AlbumId::new(doc.id),
            title: doc.title.unwrap_or_default(),
            description: LocalizedText {
                en: description.en,
                vi: description.vi,
                ja: description.ja,
            },
            capture_date: doc.date.as_deref().and_then(parse_date),
            tags: doc.tags.unwrap_or_default(),
            cover_image: doc
                .cover_image
                .and_then(|image| image.asset)
                .map(|asset| ImageRef::new(asset.reference)),
            folder_id: doc
                .google_drive_id
                .map(|raw| FolderId::from_input(&raw))
                .unwrap_or_default(),
        }
    }
}

/// Parses `YYYY-MM-DD`, tolerating a trailing time part.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Decodes a query response body into album records.
pub fn decode_records(body: &[u8]) -> Result<Vec<AlbumRecord>> {
    let response: QueryResponse = serde_json::from_slice(body)?;
    if let Some(error) = response.error {
        return Err(Error::ContentStore(error.to_string()));
    }
    let documents = response
        .result
        .ok_or_else(|| Error::ContentStore("query response has no result".to_string()))?;
    Ok(documents.into_iter().map(AlbumRecord::from).collect())
}
