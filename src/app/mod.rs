// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the
//! lightbox and the preference bar.
//!
//! The `App` struct owns the loaded albums, the photo cache and the user's
//! preferences, and translates messages into side effects like photo
//! downloads or config persistence.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::aggregate_albums;
use crate::config::{self, Config};
use crate::domain::gallery::Language;
use crate::error::Error;
use crate::i18n::I18n;
use crate::infrastructure;
use crate::media::{Entry, PhotoStore};
use crate::ui::gallery::{self, ViewMode};
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    gallery: Option<gallery::State>,
    lightbox: lightbox::State,
    photos: PhotoStore,
    /// Shared client for photo downloads; `None` when it could not be built.
    http: Option<reqwest::Client>,
    theme_mode: ThemeMode,
    /// Resolved once per mode change so `System` does not query the OS every frame.
    theme: Theme,
    window_size: Size,
    spinner_rotation: f32,
    now: Instant,
    load_error: Option<Error>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("albums", &self.gallery.as_ref().map(|g| g.albums().len()))
            .field("pending_photos", &self.photos.pending_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let theme_mode = config.general.theme_mode;
        Self {
            i18n: I18n::default(),
            lightbox: lightbox::State::new(config.gallery.max_zoom_percent()),
            config,
            screen: Screen::default(),
            gallery: None,
            photos: PhotoStore::new(),
            http: None,
            theme_mode,
            theme: theme_mode.theme(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            spinner_rotation: 0.0,
            now: Instant::now(),
            load_error: None,
        }
    }
}

impl App {
    /// Loads preferences and starts the one-time album aggregation.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let http = match infrastructure::http_client() {
            Ok(client) => Some(client),
            Err(error) => {
                tracing::error!(%error, "could not build HTTP client");
                None
            }
        };

        let task = match infrastructure::adapters(&config) {
            Ok((content, resolver)) => Task::perform(
                async move { aggregate_albums(&content, &resolver).await },
                Message::AlbumsLoaded,
            ),
            Err(error) => Task::done(Message::AlbumsLoaded(Err(error))),
        };

        let theme_mode = config.general.theme_mode;
        let app = App {
            i18n,
            lightbox: lightbox::State::new(config.gallery.max_zoom_percent()),
            config,
            http,
            theme_mode,
            theme: theme_mode.theme(),
            ..Self::default()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let album_title = self
            .gallery
            .as_ref()
            .filter(|state| state.mode() == ViewMode::Single)
            .and_then(gallery::State::selected_album)
            .map(|album| album.title.as_str());

        match album_title {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.needs_tick());
        Subscription::batch([event_sub, tick_sub])
    }

    /// Whether any animation is in flight: the loading spinner, a cell fade,
    /// or the spinner of a lightbox photo that is still downloading.
    fn needs_tick(&self) -> bool {
        let loading = self.screen == Screen::Loading && self.load_error.is_none();
        let lightbox_pending = self
            .gallery
            .as_ref()
            .and_then(gallery::State::lightbox_photo)
            .is_some_and(|photo| matches!(self.photos.get(photo.src()), Some(Entry::Pending)));

        loading || lightbox_pending || self.photos.is_animating(self.now)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let message = match message {
            Message::Navbar(navbar_message) => return self.handle_navbar(navbar_message),
            Message::WindowResized(size) => {
                self.window_size = size;
                return Task::none();
            }
            other => other,
        };

        let mut ctx = update::UpdateContext {
            config: &self.config,
            screen: &mut self.screen,
            gallery: &mut self.gallery,
            lightbox: &mut self.lightbox,
            photos: &mut self.photos,
            http: self.http.as_ref(),
            load_error: &mut self.load_error,
            spinner_rotation: &mut self.spinner_rotation,
            now: &mut self.now,
        };

        match message {
            Message::AlbumsLoaded(result) => update::handle_albums_loaded(&mut ctx, result),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::PhotoLoaded { url, result } => {
                update::handle_photo_loaded(&mut ctx, url, result)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::KeyPressed(key) => update::handle_key(&mut ctx, &key),
            Message::Navbar(_) | Message::WindowResized(_) => Task::none(),
        }
    }

    fn handle_navbar(&mut self, message: navbar::Message) -> Task<Message> {
        match navbar::update(message, self.i18n.language(), self.theme_mode) {
            navbar::Event::None => Task::none(),
            navbar::Event::LanguageSelected(language) => self.set_language(language),
            navbar::Event::ThemeSelected(mode) => self.set_theme_mode(mode),
        }
    }

    fn set_language(&mut self, language: Language) -> Task<Message> {
        persistence::apply_language_change(&mut self.i18n, &mut self.config, language)
    }

    fn set_theme_mode(&mut self, mode: ThemeMode) -> Task<Message> {
        let task = persistence::apply_theme_change(&mut self.theme_mode, &mut self.config, mode);
        self.theme = self.theme_mode.theme();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: self.gallery.as_ref(),
            lightbox: &self.lightbox,
            photos: &self.photos,
            content: &self.config.content,
            theme_mode: self.theme_mode,
            window_size: self.window_size,
            now: self.now,
            spinner_rotation: self.spinner_rotation,
            load_error: self.load_error.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Album, AlbumId, DriveImage, FolderId, LocalizedText, Photo};

    fn album(id: &str, title: &str, photos: usize) -> Album {
        let album_id = AlbumId::new(id);
        Album {
            id: album_id.clone(),
            title: title.to_string(),
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
                            width: 3,
                            height: 2,
                            alt_text: format!("{title} {i}"),
                        },
                        album_id.clone(),
                        title,
                    )
                })
                .collect(),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::default();
        let _ = app.update(Message::AlbumsLoaded(Ok(vec![
            album("sea", "Sea", 3),
            album("city", "City", 2),
        ])));
        app
    }

    #[test]
    fn default_app_starts_loading_with_spinner_tick() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Loading);
        assert!(app.needs_tick());
    }

    #[test]
    fn failed_load_stops_the_tick() {
        let mut app = App::default();
        let _ = app.update(Message::AlbumsLoaded(Err(Error::ContentStore("down".into()))));
        assert_eq!(app.screen, Screen::Loading);
        assert!(!app.needs_tick());
    }

    #[test]
    fn title_names_the_open_album() {
        let mut app = loaded_app();
        let app_name = app.i18n.tr("window-title");
        assert_eq!(app.title(), app_name);

        let _ = app.update(Message::Gallery(gallery::Message::OpenAlbum(AlbumId::new(
            "city",
        ))));
        assert_eq!(app.title(), format!("City - {app_name}"));
    }

    #[test]
    fn window_resize_is_recorded() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(Size::new(900.0, 700.0)));
        assert_eq!(app.window_size, Size::new(900.0, 700.0));
    }

    #[test]
    fn theme_selection_updates_cached_theme() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::SelectTheme(ThemeMode::Light)));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::Navbar(navbar::Message::SelectTheme(ThemeMode::Dark)));
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn language_selection_switches_bundle() {
        let mut app = App::default();
        app.i18n.set_language(Language::En);
        let _ = app.update(Message::Navbar(navbar::Message::SelectLanguage(Language::Ja)));
        assert_eq!(app.i18n.language(), Language::Ja);
        assert_eq!(app.config.general.language.as_deref(), Some("ja"));
    }

    #[test]
    fn lightbox_waiting_for_photo_keeps_ticking() {
        let mut app = loaded_app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenLightbox(0)));
        let src = app
            .gallery
            .as_ref()
            .and_then(gallery::State::lightbox_photo)
            .map(|photo| photo.src().to_string())
            .expect("lightbox photo");

        assert!(app.photos.claim(&src));
        assert!(app.needs_tick());

        let _ = app.update(Message::PhotoLoaded {
            url: src,
            result: Err(Error::Http("404".into())),
        });
        assert!(!app.needs_tick());
    }
}
