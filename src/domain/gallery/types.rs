// SPDX-License-Identifier: MPL-2.0
//! Albums and photos.

use super::{AlbumId, FolderId, ImageRef, LocalizedText};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Width substituted when the storage service reports no usable dimensions.
pub const FALLBACK_WIDTH: u32 = 800;

/// Height substituted when the storage service reports no usable dimensions.
pub const FALLBACK_HEIGHT: u32 = 600;

/// Alt text used when a file has no name.
pub const UNTITLED_ALT: &str = "Untitled";

/// An image resolved from a storage folder, before it is attached to an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveImage {
    pub id: String,
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub alt_text: String,
}

/// A photo as shown by the gallery.
///
/// `width`/`height` are a display aspect-ratio hint and may be wrong; the
/// image cell re-measures after decoding. Both are always non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: String,
    src: String,
    width: u32,
    height: u32,
    alt_text: String,
    album_id: AlbumId,
    album_title: String,
}

impl Photo {
    /// Stamps album context onto a resolved image.
    #[must_use]
    pub fn from_drive_image(image: DriveImage, album_id: AlbumId, album_title: impl Into<String>) -> Self {
        let (width, height) = if image.width == 0 || image.height == 0 {
            (FALLBACK_WIDTH, FALLBACK_HEIGHT)
        } else {
            (image.width, image.height)
        };
        Self {
            id: image.id,
            src: image.src,
            width,
            height,
            alt_text: image.alt_text,
            album_id,
            album_title: album_title.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    #[must_use]
    pub fn album_id(&self) -> &AlbumId {
        &self.album_id
    }

    #[must_use]
    pub fn album_title(&self) -> &str {
        &self.album_title
    }

    /// Declared width / height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// An album record merged with the photos resolved from its folder.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub description: LocalizedText,
    /// `None` when the record has no date or an unparseable one.
    pub capture_date: Option<NaiveDate>,
    pub tags: BTreeSet<String>,
    pub cover_image: Option<ImageRef>,
    pub folder_id: FolderId,
    pub photos: Vec<Photo>,
}

impl Album {
    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Photo used as the card cover when the record has no cover image.
    #[must_use]
    pub fn first_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }
}
