// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::config::ContentConfig;
use crate::domain::gallery::Photo;
use crate::error::Error;
use crate::i18n::I18n;
use crate::media::{LoadedPhoto, PhotoStore};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length, Size};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: Option<&'a gallery::State>,
    pub lightbox: &'a lightbox::State,
    pub photos: &'a PhotoStore,
    pub content: &'a ContentConfig,
    pub theme_mode: ThemeMode,
    pub window_size: Size,
    pub now: Instant,
    pub spinner_rotation: f32,
    pub load_error: Option<&'a Error>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match (ctx.screen, ctx.gallery) {
        (Screen::Gallery, Some(state)) => view_gallery(&ctx, state),
        _ => view_loading(&ctx),
    }
}

fn view_loading<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center);

    column = match ctx.load_error {
        None => column
            .push(AnimatedSpinner::new(palette::PINK_500, ctx.spinner_rotation).into_element())
            .push(Text::new(ctx.i18n.tr("loading-albums")).size(typography::BODY_LG)),
        Some(_) => column.push(
            Text::new(ctx.i18n.tr("loading-failed"))
                .size(typography::BODY_LG)
                .color(palette::ERROR_500),
        ),
    };

    Container::new(column).center(Length::Fill).into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>, state: &'a gallery::State) -> Element<'a, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let content = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        state,
        photos: ctx.photos,
        content: ctx.content,
        now: ctx.now,
        width: ctx.window_size.width,
    })
    .map(Message::Gallery);

    let page: Element<'a, Message> = Column::new()
        .push(navbar)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let (Some(photo), Some(position)) = (state.lightbox_photo(), state.lightbox_index()) else {
        return page;
    };

    let overlay = lightbox::view(lightbox::ViewContext {
        i18n: ctx.i18n,
        photo,
        position,
        total: state.current_photos().len(),
        loaded: lightbox_image(ctx.photos, photo),
        zoom: ctx.lightbox.zoom(),
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Lightbox);

    Stack::new()
        .push(page)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The full-size photo, or its grid image until the full size arrives.
fn lightbox_image<'a>(photos: &'a PhotoStore, photo: &Photo) -> Option<&'a LoadedPhoto> {
    photos
        .ready(photo.src())
        .or_else(|| photos.ready(&gallery::grid_url(photo)))
        .map(|(loaded, _)| loaded)
}
