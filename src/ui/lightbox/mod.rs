// SPDX-License-Identifier: MPL-2.0
//! Full-window photo viewer over the gallery.
//!
//! The lightbox owns only its zoom level. Which photo is shown, and whether
//! the lightbox is open at all, lives in the gallery state; navigation
//! requests are returned as [`Effect::Gallery`] for the app to forward.

mod view;

pub use view::{view, ViewContext};

use crate::config::DEFAULT_MAX_ZOOM_PERCENT;
use crate::domain::gallery::AlbumId;
use crate::ui::gallery;
use crate::ui::state::ZoomState;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Close,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    /// Mouse wheel over the photo, in notches.
    WheelZoom(f32),
    /// The caption's album line was clicked.
    GoToAlbum(AlbumId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Gallery(gallery::Message),
}

#[derive(Debug, Clone)]
pub struct State {
    zoom: ZoomState,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ZOOM_PERCENT)
    }
}

impl State {
    #[must_use]
    pub fn new(max_zoom_percent: f32) -> Self {
        Self {
            zoom: ZoomState::new(max_zoom_percent),
        }
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    /// Returns to 100%. Called whenever a different photo is shown.
    pub fn reset(&mut self) {
        self.zoom.reset();
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Close => {
                self.reset();
                Effect::Gallery(gallery::Message::CloseLightbox)
            }
            Message::Next => {
                self.reset();
                Effect::Gallery(gallery::Message::NextPhoto)
            }
            Message::Previous => {
                self.reset();
                Effect::Gallery(gallery::Message::PreviousPhoto)
            }
            Message::ZoomIn => {
                self.zoom.zoom_in();
                Effect::None
            }
            Message::ZoomOut => {
                self.zoom.zoom_out();
                Effect::None
            }
            Message::WheelZoom(notches) => {
                self.zoom.zoom_by_wheel(notches);
                Effect::None
            }
            Message::GoToAlbum(album_id) => {
                self.reset();
                Effect::Gallery(gallery::Message::NavigateToAlbum(album_id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zoom_is_bounded_between_100_and_300() {
        let mut state = State::default();
        for _ in 0..20 {
            state.handle(Message::ZoomIn);
        }
        assert_abs_diff_eq!(state.zoom().percent(), 300.0);
        for _ in 0..20 {
            state.handle(Message::ZoomOut);
        }
        assert_abs_diff_eq!(state.zoom().percent(), 100.0);
    }

    #[test]
    fn wheel_zooms_in_steps() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::WheelZoom(2.0)), Effect::None);
        assert_abs_diff_eq!(state.zoom().percent(), 150.0);
        state.handle(Message::WheelZoom(-10.0));
        assert_abs_diff_eq!(state.zoom().percent(), 100.0);
    }

    #[test]
    fn slide_change_resets_zoom() {
        let mut state = State::default();
        state.handle(Message::ZoomIn);
        assert_eq!(
            state.handle(Message::Next),
            Effect::Gallery(gallery::Message::NextPhoto)
        );
        assert_abs_diff_eq!(state.zoom().percent(), 100.0);

        state.handle(Message::ZoomIn);
        assert_eq!(
            state.handle(Message::Previous),
            Effect::Gallery(gallery::Message::PreviousPhoto)
        );
        assert!(state.zoom().is_min());
    }

    #[test]
    fn close_is_forwarded_every_time() {
        let mut state = State::default();
        let close = Effect::Gallery(gallery::Message::CloseLightbox);
        assert_eq!(state.handle(Message::Close), close);
        assert_eq!(state.handle(Message::Close), close);
    }

    #[test]
    fn album_link_navigates() {
        let mut state = State::new(400.0);
        state.handle(Message::ZoomIn);
        let effect = state.handle(Message::GoToAlbum(AlbumId::new("b")));
        assert_eq!(
            effect,
            Effect::Gallery(gallery::Message::NavigateToAlbum(AlbumId::new("b")))
        );
        assert!(state.zoom().is_min());
    }
}
