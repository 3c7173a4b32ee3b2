// SPDX-License-Identifier: MPL-2.0
//! Gallery identifiers.
//!
//! Identifiers are opaque strings issued by external systems. The newtypes
//! keep album ids and storage folder ids from being mixed up.

use std::fmt;

// =============================================================================
// AlbumId
// =============================================================================

/// Content-store document id of an album.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlbumId(String);

impl AlbumId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlbumId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// FolderId
// =============================================================================

/// Identifier of a shared folder in the storage service.
///
/// Stored on the album record, never guessed or derived. An empty id means
/// the album has no folder attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FolderId(String);

impl FolderId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accepts either a bare folder id or a pasted share link.
    ///
    /// Recognized link shapes:
    /// - `https://drive.google.com/drive/folders/<id>`
    /// - `https://drive.google.com/drive/u/0/folders/<id>`
    /// - `https://drive.google.com/open?id=<id>`
    ///
    /// Anything else is kept verbatim (trimmed).
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        for marker in ["folders/", "id="] {
            if let Some(start) = input.find(marker) {
                let id: String = input[start + marker.len()..]
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                    .collect();
                if !id.is_empty() {
                    return Self(id);
                }
            }
        }
        Self(input.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ImageRef
// =============================================================================

/// Reference to an image asset hosted by the content store.
///
/// Asset references have the shape `image-<hash>-<width>x<height>-<format>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    asset_ref: String,
}

impl ImageRef {
    #[must_use]
    pub fn new(asset_ref: impl Into<String>) -> Self {
        Self {
            asset_ref: asset_ref.into(),
        }
    }

    #[must_use]
    pub fn asset_ref(&self) -> &str {
        &self.asset_ref
    }

    /// Splits the reference into `(hash, "<w>x<h>", format)`.
    fn parts(&self) -> Option<(&str, &str, &str)> {
        let rest = self.asset_ref.strip_prefix("image-")?;
        let (rest, format) = rest.rsplit_once('-')?;
        let (hash, dimensions) = rest.rsplit_once('-')?;
        let (w, h) = dimensions.split_once('x')?;
        if hash.is_empty()
            || format.is_empty()
            || w.parse::<u32>().is_err()
            || h.parse::<u32>().is_err()
        {
            return None;
        }
        Some((hash, dimensions, format))
    }

    /// Builds a CDN URL for the asset scaled to `width`×`height`.
    ///
    /// Returns `None` when the reference is malformed.
    #[must_use]
    pub fn cdn_url(&self, project_id: &str, dataset: &str, width: u32, height: u32) -> Option<String> {
        let (hash, dimensions, format) = self.parts()?;
        Some(format!(
            "https://cdn.sanity.io/images/{project_id}/{dataset}/{hash}-{dimensions}.{format}?w={width}&h={height}&fit=crop"
        ))
    }
}
