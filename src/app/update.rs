// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application it may touch and returns the follow-up task.

use super::{Message, Screen};
use crate::config::Config;
use crate::domain::gallery::Album;
use crate::error::Error;
use crate::media::{self, LoadedPhoto, PhotoStore};
use crate::ui::gallery::{self, Effect as GalleryEffect, Pagination};
use crate::ui::lightbox::{self, Effect as LightboxEffect};
use crate::ui::widgets::animated_spinner;
use iced::keyboard::{self, key::Named};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub screen: &'a mut Screen,
    pub gallery: &'a mut Option<gallery::State>,
    pub lightbox: &'a mut lightbox::State,
    pub photos: &'a mut PhotoStore,
    pub http: Option<&'a reqwest::Client>,
    pub load_error: &'a mut Option<Error>,
    pub spinner_rotation: &'a mut f32,
    pub now: &'a mut Instant,
}

/// Leaves the loading screen once albums arrive; a failure keeps it up.
pub fn handle_albums_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<Album>, Error>,
) -> Task<Message> {
    match result {
        Ok(albums) => {
            let pagination = Pagination {
                initial: ctx.config.gallery.initial_visible(),
                step: ctx.config.gallery.page_step(),
            };
            let mut rng = fastrand::Rng::new();
            *ctx.gallery = Some(gallery::State::new(albums, &mut rng, pagination));
            *ctx.screen = Screen::Gallery;
            request_photos(ctx)
        }
        Err(error) => {
            tracing::error!(%error, "could not load albums");
            *ctx.load_error = Some(error);
            Task::none()
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let Some(state) = ctx.gallery.as_mut() else {
        return Task::none();
    };

    if matches!(message, gallery::Message::OpenLightbox(_)) {
        ctx.lightbox.reset();
    }

    let before = gallery::demand(state);
    let effect = state.handle(message);
    let changed = gallery::demand(state) != before;

    let effect_task = match effect {
        GalleryEffect::None => Task::none(),
        GalleryEffect::ScrollToTop => operation::snap_to(
            Id::new(gallery::SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        ),
        GalleryEffect::OpenAlbumAfter { album_id, delay } => Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::Gallery(gallery::Message::OpenAlbum(album_id.clone())),
        ),
    };

    if !changed {
        return effect_task;
    }
    Task::batch([effect_task, request_photos(ctx)])
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    match ctx.lightbox.handle(message) {
        LightboxEffect::None => Task::none(),
        LightboxEffect::Gallery(message) => handle_gallery_message(ctx, message),
    }
}

pub fn handle_photo_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<LoadedPhoto, Error>,
) -> Task<Message> {
    let now = Instant::now();
    ctx.photos.complete(url, result, now);
    *ctx.now = now;
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
    Task::none()
}

pub fn handle_key(ctx: &mut UpdateContext<'_>, key: &keyboard::Key) -> Task<Message> {
    let lightbox_open = ctx
        .gallery
        .as_ref()
        .is_some_and(|state| state.lightbox_index().is_some());
    if !lightbox_open {
        return Task::none();
    }
    match lightbox_shortcut(key) {
        Some(message) => handle_lightbox_message(ctx, message),
        None => Task::none(),
    }
}

/// Lightbox keyboard shortcuts.
pub fn lightbox_shortcut(key: &keyboard::Key) -> Option<lightbox::Message> {
    match key.as_ref() {
        keyboard::Key::Named(Named::Escape) => Some(lightbox::Message::Close),
        keyboard::Key::Named(Named::ArrowLeft) => Some(lightbox::Message::Previous),
        keyboard::Key::Named(Named::ArrowRight) => Some(lightbox::Message::Next),
        keyboard::Key::Character("+" | "=") => Some(lightbox::Message::ZoomIn),
        keyboard::Key::Character("-") => Some(lightbox::Message::ZoomOut),
        _ => None,
    }
}

/// Starts downloads for wanted photos that are not cached.
pub fn request_photos(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let (Some(state), Some(http)) = (ctx.gallery.as_ref(), ctx.http) else {
        return Task::none();
    };

    let tasks: Vec<Task<Message>> = gallery::wanted_urls(state, &ctx.config.content)
        .into_iter()
        .filter(|url| ctx.photos.claim(url))
        .map(|url| {
            let key = url.clone();
            Task::perform(media::fetch_photo(http.clone(), url), move |result| {
                Message::PhotoLoaded {
                    url: key.clone(),
                    result,
                }
            })
        })
        .collect();

    if !tasks.is_empty() {
        tracing::debug!(count = tasks.len(), "requesting photos");
    }
    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{AlbumId, DriveImage, FolderId, LocalizedText, Photo};
    use crate::media::Entry;
    use crate::ui::gallery::ViewMode;

    struct Harness {
        config: Config,
        screen: Screen,
        gallery: Option<gallery::State>,
        lightbox: lightbox::State,
        photos: PhotoStore,
        http: Option<reqwest::Client>,
        load_error: Option<Error>,
        spinner_rotation: f32,
        now: Instant,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                config: Config::default(),
                screen: Screen::Loading,
                gallery: None,
                lightbox: lightbox::State::default(),
                photos: PhotoStore::new(),
                http: None,
                load_error: None,
                spinner_rotation: 0.0,
                now: Instant::now(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                config: &self.config,
                screen: &mut self.screen,
                gallery: &mut self.gallery,
                lightbox: &mut self.lightbox,
                photos: &mut self.photos,
                http: self.http.as_ref(),
                load_error: &mut self.load_error,
                spinner_rotation: &mut self.spinner_rotation,
                now: &mut self.now,
            }
        }
    }

    fn album(id: &str, photos: usize) -> Album {
        let album_id = AlbumId::new(id);
        Album {
            id: album_id.clone(),
            title: id.to_string(),
            description: LocalizedText::default(),
            capture_date: None,
            tags: Default::default(),
            cover_image: None,
            folder_id: FolderId::new(id),
            photos: (0..photos)
                .map(|i| {
                    Photo::from_drive_image(
                        DriveImage {
                            id: format!("{id}{i}"),
                            src: format!("https://lh3.test/{id}{i}=s3000"),
                            width: 4,
                            height: 3,
                            alt_text: String::new(),
                        },
                        album_id.clone(),
                        id,
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn loaded_albums_open_the_gallery() {
        let mut harness = Harness::new();
        let _ = handle_albums_loaded(&mut harness.ctx(), Ok(vec![album("a", 3)]));
        assert_eq!(harness.screen, Screen::Gallery);
        assert_eq!(
            harness.gallery.as_ref().map(gallery::State::total_photos),
            Some(3)
        );
    }

    #[test]
    fn load_failure_stays_on_loading_screen() {
        let mut harness = Harness::new();
        let error = Error::ContentStore("down".into());
        let _ = handle_albums_loaded(&mut harness.ctx(), Err(error.clone()));
        assert_eq!(harness.screen, Screen::Loading);
        assert!(harness.gallery.is_none());
        assert_eq!(harness.load_error, Some(error));
    }

    #[test]
    fn opening_lightbox_resets_zoom() {
        let mut harness = Harness::new();
        let _ = handle_albums_loaded(&mut harness.ctx(), Ok(vec![album("a", 3)]));
        harness.lightbox.handle(lightbox::Message::ZoomIn);
        let _ = handle_gallery_message(&mut harness.ctx(), gallery::Message::OpenLightbox(1));
        assert!(harness.lightbox.zoom().is_min());
    }

    #[test]
    fn escape_closes_open_lightbox() {
        let mut harness = Harness::new();
        let _ = handle_albums_loaded(&mut harness.ctx(), Ok(vec![album("a", 3)]));
        let _ = handle_gallery_message(&mut harness.ctx(), gallery::Message::OpenLightbox(0));

        let _ = handle_key(
            &mut harness.ctx(),
            &keyboard::Key::Named(Named::ArrowRight),
        );
        assert_eq!(
            harness.gallery.as_ref().and_then(gallery::State::lightbox_index),
            Some(1)
        );

        let _ = handle_key(&mut harness.ctx(), &keyboard::Key::Named(Named::Escape));
        assert_eq!(
            harness.gallery.as_ref().and_then(gallery::State::lightbox_index),
            None
        );
    }

    #[test]
    fn album_link_closes_lightbox() {
        let mut harness = Harness::new();
        let _ = handle_albums_loaded(
            &mut harness.ctx(),
            Ok(vec![album("a", 3), album("b", 2)]),
        );
        let _ = handle_gallery_message(&mut harness.ctx(), gallery::Message::OpenLightbox(2));
        let _ = handle_lightbox_message(
            &mut harness.ctx(),
            lightbox::Message::GoToAlbum(AlbumId::new("b")),
        );
        let state = harness.gallery.as_ref().expect("gallery");
        assert_eq!(state.lightbox_index(), None);
        assert_eq!(state.mode(), ViewMode::Explore);
    }

    #[test]
    fn shortcuts_map_to_lightbox_messages() {
        assert_eq!(
            lightbox_shortcut(&keyboard::Key::Character("+".into())),
            Some(lightbox::Message::ZoomIn)
        );
        assert_eq!(
            lightbox_shortcut(&keyboard::Key::Character("-".into())),
            Some(lightbox::Message::ZoomOut)
        );
        assert_eq!(
            lightbox_shortcut(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(lightbox::Message::Previous)
        );
        assert_eq!(lightbox_shortcut(&keyboard::Key::Character("x".into())), None);
    }

    #[test]
    fn keys_are_ignored_without_lightbox() {
        let mut harness = Harness::new();
        let _ = handle_albums_loaded(&mut harness.ctx(), Ok(vec![album("a", 3)]));
        let _ = handle_key(&mut harness.ctx(), &keyboard::Key::Named(Named::ArrowRight));
        assert_eq!(
            harness.gallery.as_ref().and_then(gallery::State::lightbox_index),
            None
        );
    }

    fn scrolled(offset: f32) -> gallery::Message {
        gallery::Message::Scrolled(gallery::ScrollMetrics {
            offset,
            viewport_height: 800.0,
            content_height: 4000.0,
        })
    }

    #[test]
    fn scroll_bursts_request_each_new_photo_once() {
        let mut harness = Harness::new();
        harness.http = Some(reqwest::Client::new());
        let _ = handle_albums_loaded(&mut harness.ctx(), Ok(vec![album("a", 200)]));
        assert_eq!(harness.photos.pending_count(), 50);

        for _ in 0..4 {
            let _ = handle_gallery_message(&mut harness.ctx(), scrolled(3000.0));
        }
        assert_eq!(
            harness.gallery.as_ref().map(gallery::State::visible_count),
            Some(90)
        );
        assert_eq!(harness.photos.pending_count(), 90);
        assert!(harness.photos.get("https://lh3.test/a0=s800").is_some());
        assert!(harness.photos.get("https://lh3.test/a0=s3000").is_none());
    }

    #[test]
    fn lightbox_requests_the_full_size_photo() {
        let mut harness = Harness::new();
        harness.http = Some(reqwest::Client::new());
        let _ = handle_albums_loaded(&mut harness.ctx(), Ok(vec![album("a", 3)]));
        let _ = handle_gallery_message(&mut harness.ctx(), gallery::Message::OpenLightbox(1));

        let src = harness
            .gallery
            .as_ref()
            .and_then(gallery::State::lightbox_photo)
            .map(|photo| photo.src().to_string())
            .expect("lightbox photo");
        assert!(src.ends_with("=s3000"));
        assert!(matches!(harness.photos.get(&src), Some(Entry::Pending)));
        assert_eq!(harness.photos.pending_count(), 4);
    }

    #[test]
    fn tick_advances_clock_and_spinner() {
        let mut harness = Harness::new();
        let later = harness.now + std::time::Duration::from_millis(16);
        let _ = handle_tick(&mut harness.ctx(), later);
        assert_eq!(harness.now, later);
        assert!(harness.spinner_rotation > 0.0);
    }
}
