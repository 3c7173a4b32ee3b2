// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: explore stream, album grid and single-album view.

pub mod image_cell;
pub mod layout;
pub mod state;
mod view;

pub use state::{Effect, Message, Pagination, ScrollMetrics, SortOrder, State, ViewMode};
pub use view::{view, ViewContext, SCROLLABLE_ID};

use crate::config::{ContentConfig, COVER_HEIGHT, COVER_WIDTH, FETCH_WINDOW, GRID_IMAGE_SIZE};
use crate::domain::gallery::{Album, AlbumId, Photo};
use crate::infrastructure::drive::resolver::high_res_link;
use std::ops::Range;

/// Column-sized link shown in grid cells. The lightbox uses [`Photo::src`].
#[must_use]
pub fn grid_url(photo: &Photo) -> String {
    high_res_link(photo.src(), GRID_IMAGE_SIZE)
}

/// Image shown on an album card: the cover asset when it resolves to a CDN
/// URL, otherwise the album's first photo.
#[must_use]
pub fn cover_url(album: &Album, content: &ContentConfig) -> Option<String> {
    album
        .cover_image
        .as_ref()
        .filter(|_| !content.project_id.is_empty())
        .and_then(|cover| {
            cover.cdn_url(&content.project_id, &content.dataset, COVER_WIDTH, COVER_HEIGHT)
        })
        .or_else(|| album.first_photo().map(grid_url))
}

/// Everything [`wanted_urls`] depends on. Downloads are only requested when
/// it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demand {
    mode: ViewMode,
    album: Option<AlbumId>,
    window: Range<usize>,
    lightbox: Option<usize>,
}

#[must_use]
pub fn demand(state: &State) -> Demand {
    Demand {
        mode: state.mode(),
        album: state.selected_album_id().cloned(),
        window: state.photo_window(FETCH_WINDOW),
        lightbox: state.lightbox_index(),
    }
}

/// URLs the current view needs: album covers, or the grid links of the
/// visible photos around the scroll position, plus the full-size lightbox
/// photo.
#[must_use]
pub fn wanted_urls(state: &State, content: &ContentConfig) -> Vec<String> {
    let mut urls: Vec<String> = match state.mode() {
        ViewMode::Albums => state
            .sorted_albums()
            .into_iter()
            .filter_map(|album| cover_url(album, content))
            .collect(),
        ViewMode::Explore | ViewMode::Single => {
            let window = state.photo_window(FETCH_WINDOW);
            state.visible_photos()[window].iter().map(grid_url).collect()
        }
    };
    if let Some(photo) = state.lightbox_photo() {
        urls.push(photo.src().to_string());
    }
    urls
}
