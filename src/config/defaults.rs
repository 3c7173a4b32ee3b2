// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Drive**: folder listing endpoint, page size and page cap
//! - **Content**: content store dataset and API version
//! - **Gallery**: pagination and lightbox zoom bounds
//! - **Animation**: image cell transition timing

// ==========================================================================
// Drive Listing Defaults
// ==========================================================================

/// Files listing endpoint of the storage service.
pub const DEFAULT_DRIVE_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";

/// Files requested per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Largest page size the listing endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Listing pages fetched per folder before resolution is abandoned.
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Minimum allowed page cap.
pub const MIN_MAX_PAGES: u32 = 1;

/// Maximum allowed page cap.
pub const MAX_MAX_PAGES: u32 = 500;

/// Long-edge size requested from thumbnail links (`=s<size>`).
pub const DEFAULT_HIGH_RES_SIZE: u32 = 3000;

/// Smallest long-edge size worth requesting.
pub const MIN_HIGH_RES_SIZE: u32 = 200;

/// Largest long-edge size the thumbnail service serves.
pub const MAX_HIGH_RES_SIZE: u32 = 6000;

// ==========================================================================
// Content Store Defaults
// ==========================================================================

/// Dataset holding published album records.
pub const DEFAULT_DATASET: &str = "production";

/// Query API version date.
pub const DEFAULT_API_VERSION: &str = "2024-02-10";

/// Album cover size requested from the image CDN.
pub const COVER_WIDTH: u32 = 600;
pub const COVER_HEIGHT: u32 = 450;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Photos shown when a view is entered.
pub const DEFAULT_INITIAL_VISIBLE: usize = 50;

/// Photos added per load-more trigger.
pub const DEFAULT_PAGE_STEP: usize = 40;

/// Lower bound for both pagination values.
pub const MIN_PAGINATION: usize = 1;

/// Upper bound for both pagination values.
pub const MAX_PAGINATION: usize = 1000;

/// Distance from the bottom of the scroll area (in logical pixels) at which
/// more photos are revealed.
pub const LOAD_MORE_MARGIN: f32 = 400.0;

/// Container width below which the masonry grid uses two columns.
pub const MASONRY_BREAKPOINT: f32 = 1024.0;

/// Long-edge size requested for grid cells and album-cover fallbacks.
///
/// Covers a masonry column at twice its logical width; the lightbox keeps
/// the full `high_res_size` link.
pub const GRID_IMAGE_SIZE: u32 = 800;

/// Photos around the scroll position whose downloads are kept wanted.
pub const FETCH_WINDOW: usize = 120;

/// The fetch window moves in steps of this many photos.
pub const FETCH_WINDOW_STRIDE: usize = 20;

/// Downloaded photos kept in memory; least recently wanted are evicted first.
pub const PHOTO_CACHE_CAPACITY: usize = 300;

// ==========================================================================
// Lightbox Zoom Defaults
// ==========================================================================

/// Zoom level when a slide is shown.
pub const DEFAULT_ZOOM_PERCENT: f32 = 100.0;

/// Minimum lightbox zoom.
pub const MIN_ZOOM_PERCENT: f32 = 100.0;

/// Default maximum lightbox zoom.
pub const DEFAULT_MAX_ZOOM_PERCENT: f32 = 300.0;

/// Hard ceiling for the configurable maximum zoom.
pub const MAX_ZOOM_PERCENT_CEILING: f32 = 800.0;

/// Zoom change per key press, button press or wheel notch.
pub const ZOOM_STEP_PERCENT: f32 = 25.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the image fade-in and aspect-ratio correction.
pub const TRANSITION_MS: u64 = 500;

/// Relative ratio difference above which a cell is resized.
pub const RATIO_TOLERANCE: f32 = 0.05;

/// Frame interval while a cell animation is running.
pub const ANIMATION_TICK_MS: u64 = 16;

/// Delay between closing the lightbox and opening the photo's album.
pub const ALBUM_JUMP_DELAY_MS: u64 = 100;
