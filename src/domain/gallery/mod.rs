// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: albums, photos, localized text and identifiers.

pub mod localized;
pub mod newtypes;
pub mod types;

pub use localized::{Language, LocalizedText};
pub use newtypes::{AlbumId, FolderId, ImageRef};
pub use types::{Album, DriveImage, Photo, FALLBACK_HEIGHT, FALLBACK_WIDTH, UNTITLED_ALT};
