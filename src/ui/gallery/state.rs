// SPDX-License-Identifier: MPL-2.0
//! Gallery view state machine.
//!
//! Owns the resolved albums, the session's explore order and the view state
//! (mode, selected album, sort order, visible count, lightbox index). Every
//! user interaction goes through [`State::handle`], the only mutator.
//!
//! # Transitions
//!
//! | From | Message | To | Effect |
//! |---|---|---|---|
//! | Explore / Single | `ShowAlbums` | Albums | reset pagination |
//! | Albums / Single | `ShowExplore` | Explore | reset pagination |
//! | any | `OpenAlbum(id)` | Single | reset pagination, scroll to top |
//! | Single | `Back` | Albums | reset pagination, scroll to top |
//! | Explore / Single | `LoadMore`, or `Scrolled` near the bottom of a new layout | same | grow window |
//! | any | `OpenLightbox(i)` / `CloseLightbox` | same | none |
//! | Explore / Single + lightbox | `NavigateToAlbum(id)` | same | close lightbox, open album after a delay |

use crate::application::query::explore_order;
use crate::config::{
    ALBUM_JUMP_DELAY_MS, DEFAULT_INITIAL_VISIBLE, DEFAULT_PAGE_STEP, FETCH_WINDOW_STRIDE,
    LOAD_MORE_MARGIN,
};
use crate::domain::gallery::{Album, AlbumId, Photo};
use std::cmp::Ordering;
use std::ops::Range;
use std::time::Duration;

// =============================================================================
// View Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Every photo in the session's random order.
    #[default]
    Explore,
    /// Album cards sorted by capture date.
    Albums,
    /// Photos of the selected album.
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

/// Infinite-scroll window sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub initial: usize,
    pub step: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL_VISIBLE,
            step: DEFAULT_PAGE_STEP,
        }
    }
}

/// Scroll position reported by the gallery scrollable, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn distance_to_bottom(&self) -> f32 {
        (self.content_height - self.offset - self.viewport_height).max(0.0)
    }

    /// Position of the viewport center within the content, from 0 to 1.
    #[must_use]
    pub fn center_fraction(&self) -> f32 {
        if self.content_height <= 0.0 {
            return 0.0;
        }
        ((self.offset + self.viewport_height / 2.0) / self.content_height).clamp(0.0, 1.0)
    }
}

// =============================================================================
// Messages and Effects
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ShowExplore,
    ShowAlbums,
    OpenAlbum(AlbumId),
    Back,
    SetSortOrder(SortOrder),
    LoadMore,
    /// The gallery scrolled; loads more once the bottom is near.
    Scrolled(ScrollMetrics),
    OpenLightbox(usize),
    CloseLightbox,
    NextPhoto,
    PreviousPhoto,
    /// Jump from the lightbox caption to the photo's album.
    NavigateToAlbum(AlbumId),
}

/// Side effects the application performs after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Reset the gallery scroll position.
    ScrollToTop,
    /// Send `Message::OpenAlbum(album_id)` once `delay` has elapsed.
    OpenAlbumAfter { album_id: AlbumId, delay: Duration },
}

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Clone)]
pub struct State {
    albums: Vec<Album>,
    explore: Vec<Photo>,
    mode: ViewMode,
    selected_album: Option<AlbumId>,
    sort_order: SortOrder,
    visible_count: usize,
    lightbox_index: Option<usize>,
    pagination: Pagination,
    scroll_fraction: f32,
    /// Content height when scrolling last grew the window. Growth waits
    /// until a taller layout has been reported.
    grown_at_height: Option<f32>,
}

impl State {
    /// Creates the state once aggregation completes, shuffling the explore
    /// stream with `rng`.
    #[must_use]
    pub fn new(albums: Vec<Album>, rng: &mut fastrand::Rng, pagination: Pagination) -> Self {
        let explore = explore_order(&albums, rng);
        Self {
            albums,
            explore,
            mode: ViewMode::default(),
            selected_album: None,
            sort_order: SortOrder::default(),
            visible_count: pagination.initial,
            lightbox_index: None,
            pagination,
            scroll_fraction: 0.0,
            grown_at_height: None,
        }
    }

    /// Handles a gallery message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ShowExplore => {
                if self.mode != ViewMode::Explore {
                    self.enter(ViewMode::Explore, None);
                }
                Effect::None
            }
            Message::ShowAlbums => {
                if self.mode != ViewMode::Albums {
                    self.enter(ViewMode::Albums, None);
                }
                Effect::None
            }
            Message::OpenAlbum(id) => {
                if self.album(&id).is_none() {
                    return Effect::None;
                }
                if self.mode == ViewMode::Single && self.selected_album.as_ref() == Some(&id) {
                    self.lightbox_index = None;
                    return Effect::None;
                }
                self.enter(ViewMode::Single, Some(id));
                Effect::ScrollToTop
            }
            Message::Back => {
                if self.mode != ViewMode::Single {
                    return Effect::None;
                }
                self.enter(ViewMode::Albums, None);
                Effect::ScrollToTop
            }
            Message::SetSortOrder(order) => {
                self.sort_order = order;
                Effect::None
            }
            Message::LoadMore => {
                self.visible_count = self.visible_count.saturating_add(self.pagination.step);
                Effect::None
            }
            Message::Scrolled(metrics) => {
                self.scroll_fraction = metrics.center_fraction();
                let laid_out = self.grown_at_height != Some(metrics.content_height);
                if laid_out && metrics.distance_to_bottom() < LOAD_MORE_MARGIN && self.has_more() {
                    self.visible_count = self.visible_count.saturating_add(self.pagination.step);
                    self.grown_at_height = Some(metrics.content_height);
                }
                Effect::None
            }
            Message::OpenLightbox(index) => {
                if index < self.current_photos().len() {
                    self.lightbox_index = Some(index);
                }
                Effect::None
            }
            Message::CloseLightbox => {
                self.lightbox_index = None;
                Effect::None
            }
            Message::NextPhoto => {
                self.step_lightbox(true);
                Effect::None
            }
            Message::PreviousPhoto => {
                self.step_lightbox(false);
                Effect::None
            }
            Message::NavigateToAlbum(id) => {
                if self.mode == ViewMode::Albums || self.album(&id).is_none() {
                    return Effect::None;
                }
                self.lightbox_index = None;
                Effect::OpenAlbumAfter {
                    album_id: id,
                    delay: Duration::from_millis(ALBUM_JUMP_DELAY_MS),
                }
            }
        }
    }

    fn enter(&mut self, mode: ViewMode, selected: Option<AlbumId>) {
        self.mode = mode;
        self.selected_album = selected;
        self.visible_count = self.pagination.initial;
        self.lightbox_index = None;
        self.scroll_fraction = 0.0;
        self.grown_at_height = None;
    }

    fn step_lightbox(&mut self, forward: bool) {
        let len = self.current_photos().len();
        if let Some(index) = self.lightbox_index {
            if len == 0 {
                self.lightbox_index = None;
            } else if forward {
                self.lightbox_index = Some((index + 1) % len);
            } else {
                self.lightbox_index = Some((index + len - 1) % len);
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn selected_album_id(&self) -> Option<&AlbumId> {
        self.selected_album.as_ref()
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox_index
    }

    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    #[must_use]
    pub fn album(&self, id: &AlbumId) -> Option<&Album> {
        self.albums.iter().find(|album| &album.id == id)
    }

    #[must_use]
    pub fn selected_album(&self) -> Option<&Album> {
        self.selected_album.as_ref().and_then(|id| self.album(id))
    }

    /// Number of photos across all albums.
    #[must_use]
    pub fn total_photos(&self) -> usize {
        self.explore.len()
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// Photos of the current view, before pagination.
    #[must_use]
    pub fn current_photos(&self) -> &[Photo] {
        match self.mode {
            ViewMode::Explore => &self.explore,
            ViewMode::Single => self
                .selected_album()
                .map(|album| album.photos.as_slice())
                .unwrap_or_default(),
            ViewMode::Albums => &[],
        }
    }

    /// Leading `visible_count` photos of the current view.
    #[must_use]
    pub fn visible_photos(&self) -> &[Photo] {
        let photos = self.current_photos();
        &photos[..self.visible_count.min(photos.len())]
    }

    /// Whether scrolling further would reveal more photos.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.visible_count < self.current_photos().len()
    }

    /// Range of [`visible_photos`](Self::visible_photos) around the scroll
    /// position holding at most `size` photos. The start moves in steps of
    /// `FETCH_WINDOW_STRIDE` and the range always fits the visible photos.
    #[must_use]
    pub fn photo_window(&self, size: usize) -> Range<usize> {
        let len = self.visible_photos().len();
        if len <= size {
            return 0..len;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let anchor = (self.scroll_fraction * len as f32) as usize;
        let stride = FETCH_WINDOW_STRIDE.max(1);
        let start = (anchor.saturating_sub(size / 2) / stride * stride).min(len - size);
        start..start + size
    }

    #[must_use]
    pub fn lightbox_photo(&self) -> Option<&Photo> {
        self.lightbox_index
            .and_then(|index| self.current_photos().get(index))
    }

    /// Albums in display order. Undated albums always come last.
    #[must_use]
    pub fn sorted_albums(&self) -> Vec<&Album> {
        let mut albums: Vec<&Album> = self.albums.iter().collect();
        let order = self.sort_order;
        albums.sort_by(|a, b| match (a.capture_date, b.capture_date) {
            (Some(a), Some(b)) => match order {
                SortOrder::Newest => b.cmp(&a),
                SortOrder::Oldest => a.cmp(&b),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        albums
    }
}
