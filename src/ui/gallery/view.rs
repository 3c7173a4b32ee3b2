// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering.

use super::image_cell::{self, CellState};
use super::layout::{self, GUTTER};
use super::state::{Message, ScrollMetrics, SortOrder, State, ViewMode};
use crate::config::ContentConfig;
use crate::domain::gallery::{Album, Photo};
use crate::i18n::{format_capture_date, I18n};
use crate::media::PhotoStore;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{
    button, container, image, Column, Container, Id, Image, Row, Scrollable, Space, Stack, Text,
};
use iced::{ContentFit, Element, Length};
use std::time::Instant;

/// Id of the gallery scrollable, used to reset the scroll position.
pub const SCROLLABLE_ID: &str = "gallery-scroll";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub photos: &'a PhotoStore,
    pub content: &'a ContentConfig,
    pub now: Instant,
    /// Window width in logical pixels.
    pub width: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let width = (ctx.width.min(sizing::CONTENT_MAX_WIDTH) - 2.0 * spacing::LG).max(1.0);

    let mut page = Column::new()
        .push(header(&ctx))
        .spacing(spacing::XL)
        .width(Length::Fixed(width));

    page = match ctx.state.mode() {
        ViewMode::Explore => page.push(photo_grid(&ctx, width)),
        ViewMode::Albums => page.push(album_grid(&ctx, width)),
        ViewMode::Single => page
            .push(album_header(&ctx))
            .push(photo_grid(&ctx, width)),
    };

    if ctx.state.has_more() {
        page = page.push(
            Container::new(
                button(Text::new(ctx.i18n.tr("gallery-load-more")).size(typography::BODY))
                    .padding([spacing::XS, spacing::LG])
                    .on_press(Message::LoadMore)
                    .style(styles::button::back),
            )
            .center_x(Length::Fill),
        );
    }

    Scrollable::new(
        Container::new(page)
            .center_x(Length::Fill)
            .padding(spacing::LG),
    )
    .id(Id::new(SCROLLABLE_ID))
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(|viewport: Viewport| Message::Scrolled(scroll_metrics(&viewport)))
    .into()
}

fn scroll_metrics(viewport: &Viewport) -> ScrollMetrics {
    ScrollMetrics {
        offset: viewport.absolute_offset().y,
        viewport_height: viewport.bounds().height,
        content_height: viewport.content_bounds().height,
    }
}

// =============================================================================
// Header
// =============================================================================

fn segment_group<'a>(items: Vec<(String, bool, Message)>) -> Element<'a, Message> {
    let row = items
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, (label, active, message)| {
            row.push(
                button(Text::new(label).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(message)
                    .style(styles::button::segment(active)),
            )
        });
    container(row)
        .padding(spacing::XXS)
        .style(styles::container::segment_track)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let mode = ctx.state.mode();
    let subtitle_key = match mode {
        ViewMode::Explore => "gallery-subtitle-explore",
        ViewMode::Albums | ViewMode::Single => "gallery-subtitle-albums",
    };

    let tabs = segment_group(vec![
        (
            i18n.tr("nav-explore"),
            mode == ViewMode::Explore,
            Message::ShowExplore,
        ),
        (
            i18n.tr("nav-albums"),
            mode != ViewMode::Explore,
            Message::ShowAlbums,
        ),
    ]);

    let mut controls = Row::new()
        .push(tabs)
        .spacing(spacing::MD)
        .align_y(Vertical::Center);

    if mode == ViewMode::Albums {
        let order = ctx.state.sort_order();
        controls = controls
            .push(Space::new().width(Length::Fill))
            .push(segment_group(vec![
                (
                    i18n.tr("sort-newest"),
                    order == SortOrder::Newest,
                    Message::SetSortOrder(SortOrder::Newest),
                ),
                (
                    i18n.tr("sort-oldest"),
                    order == SortOrder::Oldest,
                    Message::SetSortOrder(SortOrder::Oldest),
                ),
            ]));
    }

    Column::new()
        .push(
            Text::new(i18n.tr("gallery-title"))
                .size(typography::TITLE_LG)
                .color(palette::PINK_500),
        )
        .push(Text::new(i18n.tr(subtitle_key)).size(typography::BODY_LG))
        .push(controls)
        .spacing(spacing::SM)
        .into()
}

fn photo_count(i18n: &I18n, count: usize) -> String {
    i18n.tr_with_args("album-photo-count", &[("count", &count.to_string())])
}

fn album_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let back = button(Text::new(format!("\u{2190}  {}", i18n.tr("gallery-back"))).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::Back)
        .style(styles::button::back);

    let Some(album) = ctx.state.selected_album() else {
        return back.into();
    };
    let language = i18n.language();

    let mut meta = Row::new()
        .push(Text::new(photo_count(i18n, album.photo_count())).size(typography::BODY))
        .spacing(spacing::SM);
    if let Some(date) = album.capture_date {
        meta = meta
            .push(Text::new("\u{00b7}").size(typography::BODY))
            .push(Text::new(format_capture_date(date, language)).size(typography::BODY));
    }

    let mut column = Column::new()
        .push(back)
        .push(Text::new(album.title.as_str()).size(typography::TITLE_MD))
        .push(meta)
        .spacing(spacing::SM);

    let description = album.description.get(language);
    if !description.is_empty() {
        column = column.push(Text::new(description).size(typography::BODY_LG));
    }

    if !album.tags.is_empty() {
        let tags = album.tags.iter().fold(Row::new().spacing(spacing::XS), |row, tag| {
            row.push(
                container(Text::new(format!("#{tag}")).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::tag),
            )
        });
        column = column.push(tags);
    }

    column.into()
}

// =============================================================================
// Photo Grid
// =============================================================================

fn cell<'s>(photo: &Photo, store: &'s PhotoStore) -> (CellState, Option<&'s image::Handle>) {
    let mut cell = CellState::for_photo(photo);
    let handle = store.ready(&super::grid_url(photo)).map(|(loaded, loaded_at)| {
        cell.mark_loaded(loaded.width, loaded.height, loaded_at);
        &loaded.handle
    });
    (cell, handle)
}

fn photo_grid<'a>(ctx: &ViewContext<'a>, width: f32) -> Element<'a, Message> {
    let photos = ctx.state.visible_photos();
    if photos.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-no-photos")).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .padding(spacing::XXL)
            .into();
    }

    let columns = layout::column_count(width);
    let column_width = layout::column_width(width, columns);
    let cells: Vec<_> = photos.iter().map(|photo| cell(photo, ctx.photos)).collect();
    // Declared ratios keep column assignment stable while photos arrive
    let ratios: Vec<f32> = cells.iter().map(|(state, _)| state.declared_ratio()).collect();

    layout::masonry_columns(&ratios, columns)
        .into_iter()
        .fold(Row::new().spacing(GUTTER), |row, indices| {
            let column = indices.into_iter().fold(
                Column::new()
                    .spacing(GUTTER)
                    .width(Length::Fixed(column_width)),
                |column, index| {
                    let (state, handle) = &cells[index];
                    column.push(image_cell::view(
                        state,
                        *handle,
                        column_width,
                        ctx.now,
                        Message::OpenLightbox(index),
                    ))
                },
            );
            row.push(column)
        })
        .into()
}

// =============================================================================
// Album Grid
// =============================================================================

fn album_grid<'a>(ctx: &ViewContext<'a>, width: f32) -> Element<'a, Message> {
    let albums = ctx.state.sorted_albums();
    if albums.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-no-albums")).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .padding(spacing::XXL)
            .into();
    }

    let columns = layout::column_count(width);
    let card_width = layout::column_width(width, columns);

    albums
        .chunks(columns)
        .fold(Column::new().spacing(spacing::XL), |grid, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(GUTTER), |row, album| {
                row.push(album_card(ctx, *album, card_width))
            });
            grid.push(row)
        })
        .into()
}

fn album_card<'a>(ctx: &ViewContext<'a>, album: &'a Album, width: f32) -> Element<'a, Message> {
    let height = width / sizing::COVER_RATIO;

    let cover: Element<'a, Message> = match super::cover_url(album, ctx.content) {
        Some(url) => match ctx.photos.ready(&url) {
            Some((loaded, loaded_at)) => Image::new(loaded.handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover)
                .opacity(image_cell::fade_progress(loaded_at, ctx.now))
                .into(),
            None => Space::new().into(),
        },
        None => Text::new(ctx.i18n.tr("album-empty"))
            .size(typography::BODY)
            .into(),
    };

    let frame = container(cover)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::cover)
        .clip(true);

    let badge = container(
        container(Text::new(photo_count(ctx.i18n, album.photo_count())).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge),
    )
    .width(Length::Fixed(width))
    .align_x(Horizontal::Right)
    .padding(spacing::SM);

    let mut details = Column::new()
        .push(Stack::new().push(frame).push(badge))
        .push(Text::new(album.title.as_str()).size(typography::TITLE_SM))
        .spacing(spacing::XS)
        .width(Length::Fixed(width));

    if let Some(date) = album.capture_date {
        details = details.push(
            Text::new(format_capture_date(date, ctx.i18n.language()))
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );
    }

    button(details)
        .padding(spacing::NONE)
        .on_press(Message::OpenAlbum(album.id.clone()))
        .style(styles::button::card)
        .into()
}
