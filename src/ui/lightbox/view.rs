// SPDX-License-Identifier: MPL-2.0
//! Lightbox rendering.

use super::Message;
use crate::domain::gallery::Photo;
use crate::i18n::I18n;
use crate::media::LoadedPhoto;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::state::ZoomState;
use crate::ui::styles;
use crate::ui::widgets::{wheel_zoom, AnimatedSpinner};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, container, image, opaque, responsive, Column, Container, Image, Row, Scrollable,
    Space, Text,
};
use iced::{ContentFit, Element, Length, Padding, Size};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photo: &'a Photo,
    /// Zero-based position in the current list.
    pub position: usize,
    pub total: usize,
    pub loaded: Option<&'a LoadedPhoto>,
    pub zoom: &'a ZoomState,
    pub spinner_rotation: f32,
}

/// Largest box with aspect `ratio` that fits in `available`.
fn fit_size(ratio: f32, available: Size) -> Size {
    if !(ratio.is_finite() && ratio > 0.0) || available.width <= 0.0 || available.height <= 0.0 {
        return Size::new(available.width.max(0.0), available.height.max(0.0));
    }
    let width = available.width.min(available.height * ratio);
    Size::new(width, width / ratio)
}

fn centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);
    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn control<'a>(label: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    button(
        Text::new(label)
            .size(typography::TITLE_SM)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(sizing::LIGHTBOX_BUTTON))
    .height(Length::Fixed(sizing::LIGHTBOX_BUTTON))
    .padding(spacing::NONE)
    .on_press_maybe(on_press)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::SUBTLE,
        opacity::CAPTION,
    ))
    .into()
}

fn photo_area<'a>(
    handle: Option<image::Handle>,
    ratio: f32,
    factor: f32,
    spinner_rotation: f32,
    available: Size,
) -> Element<'a, Message> {
    let Some(handle) = handle else {
        return Container::new(
            AnimatedSpinner::new(palette::WHITE, spinner_rotation).into_element(),
        )
        .center(Length::Fill)
        .into();
    };

    let fitted = fit_size(ratio, available);
    let scaled = Size::new(fitted.width * factor, fitted.height * factor);

    let photo = Image::new(handle)
        .width(Length::Fixed(scaled.width))
        .height(Length::Fixed(scaled.height))
        .content_fit(ContentFit::Contain);

    let scrollable = Scrollable::new(
        Container::new(photo).padding(centering_padding(scaled, available)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .direction(Direction::Both {
        vertical: Scrollbar::default(),
        horizontal: Scrollbar::default(),
    });

    wheel_zoom(scrollable, Message::WheelZoom).into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let zoom = ctx.zoom;
    let can_step = ctx.total > 1;

    let top_bar = Row::new()
        .push(
            Text::new(format!("{} / {}", ctx.position + 1, ctx.total))
                .size(typography::BODY),
        )
        .push(Space::new().width(Length::Fill))
        .push(control(
            "\u{2212}",
            (!zoom.is_min()).then_some(Message::ZoomOut),
        ))
        .push(
            Text::new(format!("{:.0}%", zoom.percent()))
                .size(typography::BODY)
                .width(Length::Fixed(sizing::LIGHTBOX_BUTTON + spacing::LG))
                .align_x(Horizontal::Center),
        )
        .push(control("+", (!zoom.is_max()).then_some(Message::ZoomIn)))
        .push(Space::new().width(Length::Fixed(spacing::LG)))
        .push(control("\u{00d7}", Some(Message::Close)))
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    let handle = ctx.loaded.map(|loaded| loaded.handle.clone());
    let ratio = match ctx.loaded {
        Some(loaded) if loaded.height > 0 => loaded.width as f32 / loaded.height as f32,
        _ => ctx.photo.aspect_ratio(),
    };
    let factor = zoom.factor();
    let rotation = ctx.spinner_rotation;
    let stage = responsive(move |available: Size| {
        photo_area(handle.clone(), ratio, factor, rotation, available)
    });

    let middle = Row::new()
        .push(control(
            "\u{2039}",
            can_step.then_some(Message::Previous),
        ))
        .push(stage)
        .push(control("\u{203a}", can_step.then_some(Message::Next)))
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill);

    let album_link = button(
        Text::new(ctx.i18n.tr_with_args(
            "lightbox-album-link",
            &[("title", ctx.photo.album_title())],
        ))
        .size(typography::BODY),
    )
    .padding(spacing::XXS)
    .on_press(Message::GoToAlbum(ctx.photo.album_id().clone()))
    .style(styles::button::link);

    let caption = Column::new()
        .push(Text::new(ctx.photo.alt_text()).size(typography::BODY_LG))
        .push(album_link)
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    let content = Column::new()
        .push(top_bar)
        .push(middle)
        .push(caption)
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

    opaque(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn landscape_fits_width() {
        let size = fit_size(2.0, Size::new(800.0, 800.0));
        assert_abs_diff_eq!(size.width, 800.0);
        assert_abs_diff_eq!(size.height, 400.0);
    }

    #[test]
    fn portrait_fits_height() {
        let size = fit_size(0.5, Size::new(800.0, 600.0));
        assert_abs_diff_eq!(size.width, 300.0);
        assert_abs_diff_eq!(size.height, 600.0);
    }

    #[test]
    fn invalid_ratio_fills_available_space() {
        let size = fit_size(f32::NAN, Size::new(640.0, 480.0));
        assert_abs_diff_eq!(size.width, 640.0);
        assert_abs_diff_eq!(size.height, 480.0);
    }

    #[test]
    fn zoomed_content_is_not_padded() {
        let padding = centering_padding(Size::new(1200.0, 900.0), Size::new(800.0, 600.0));
        assert_abs_diff_eq!(padding.left, 0.0);
        assert_abs_diff_eq!(padding.top, 0.0);
    }

    #[test]
    fn fitted_content_is_centered() {
        let padding = centering_padding(Size::new(300.0, 600.0), Size::new(800.0, 600.0));
        assert_abs_diff_eq!(padding.left, 250.0);
        assert_abs_diff_eq!(padding.right, 250.0);
        assert_abs_diff_eq!(padding.top, 0.0);
    }
}
