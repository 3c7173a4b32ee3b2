// SPDX-License-Identifier: MPL-2.0
//! Wire format of the files listing endpoint.

use crate::application::port::{DrivePage, ListedFile};
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileListResponse {
    #[serde(default)]
    files: Vec<FileEntry>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    thumbnail_link: Option<String>,
    #[serde(default)]
    image_media_metadata: Option<MediaMetadata>,
}

/// Dimensions arrive as numbers or numeric strings depending on the file.
#[derive(Debug, Default, Deserialize)]
struct MediaMetadata {
    #[serde(default)]
    width: Option<Value>,
    #[serde(default)]
    height: Option<Value>,
}

/// Reads a positive integer dimension from a JSON number or numeric string.
fn dimension(value: Option<&Value>) -> Option<u32> {
    let number = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !number.is_finite() || number < 1.0 || number > f64::from(u32::MAX) {
        return None;
    }
    Some(number.round() as u32)
}

impl From<FileEntry> for ListedFile {
    fn from(entry: FileEntry) -> Self {
        let metadata = entry.image_media_metadata.unwrap_or_default();
        Self {
            id: entry.id,
            name: entry.name,
            thumbnail_link: entry.thumbnail_link.filter(|link| !link.is_empty()),
            width: dimension(metadata.width.as_ref()),
            height: dimension(metadata.height.as_ref()),
        }
    }
}

/// Decodes one listing response body.
pub fn decode_page(body: &[u8]) -> Result<DrivePage> {
    let response: FileListResponse = serde_json::from_slice(body)?;
    Ok(DrivePage {
        files: response.files.into_iter().map(ListedFile::from).collect(),
        next_page_token: response.next_page_token.filter(|token| !token.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn decodes_files_and_token() {
        let body = br#"{
            "nextPageToken": "tok",
            "files": [
                {"id": "1", "name": "a.jpg", "mimeType": "image/jpeg",
                 "thumbnailLink": "https://lh3.test/a=s220",
                 "imageMediaMetadata": {"width": 4000, "height": 3000}}
            ]
        }"#;
        let page = decode_page(body).unwrap();

        assert_eq!(page.next_page_token.as_deref(), Some("tok"));
        assert_eq!(page.files.len(), 1);
        assert_eq!(page.files[0].width, Some(4000));
        assert_eq!(page.files[0].height, Some(3000));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let body = br#"{"files": [{"id": "1", "imageMediaMetadata": {"width": "1920", "height": " 1080 "}}]}"#;
        let file = &decode_page(body).unwrap().files[0];
        assert_eq!((file.width, file.height), (Some(1920), Some(1080)));
    }

    #[test]
    fn unusable_dimensions_become_none() {
        let body = br#"{"files": [
            {"id": "1", "imageMediaMetadata": {"width": 0, "height": 600}},
            {"id": "2", "imageMediaMetadata": {"width": "wide", "height": true}},
            {"id": "3"}
        ]}"#;
        let files = decode_page(body).unwrap().files;
        assert_eq!(files[0].width, None);
        assert_eq!(files[0].height, Some(600));
        assert_eq!((files[1].width, files[1].height), (None, None));
        assert_eq!((files[2].width, files[2].height), (None, None));
    }

    #[test]
    fn missing_files_and_empty_token_mean_last_page() {
        let page = decode_page(br#"{"nextPageToken": ""}"#).unwrap();
        assert!(page.files.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(decode_page(b"<html>"), Err(Error::Decode(_))));
    }
}
