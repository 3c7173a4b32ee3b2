// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gallery::Album;
use crate::error::Error;
use crate::media::LoadedPhoto;
use crate::ui::{gallery, lightbox, navbar};
use iced::{keyboard, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-time album aggregation finished.
    AlbumsLoaded(Result<Vec<Album>, Error>),
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    Navbar(navbar::Message),
    /// A photo download finished.
    PhotoLoaded {
        url: String,
        result: Result<LoadedPhoto, Error>,
    },
    /// Animation tick for fades and the loading spinner.
    Tick(Instant),
    /// A key press no widget consumed.
    KeyPressed(keyboard::Key),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override (`en`, `vi`, `ja`, region tags accepted).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
