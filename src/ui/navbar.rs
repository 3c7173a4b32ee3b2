// SPDX-License-Identifier: MPL-2.0
//! Top bar with the language and theme selectors.

use crate::domain::gallery::Language;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::{button, container, Row, Space, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectLanguage(Language),
    SelectTheme(ThemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    LanguageSelected(Language),
    ThemeSelected(ThemeMode),
}

/// Maps a selection to an event, dropping no-op re-selections.
pub fn update(message: Message, language: Language, theme_mode: ThemeMode) -> Event {
    match message {
        Message::SelectLanguage(selected) if selected != language => {
            Event::LanguageSelected(selected)
        }
        Message::SelectTheme(selected) if selected != theme_mode => Event::ThemeSelected(selected),
        _ => Event::None,
    }
}

fn selector<'a, T: Copy + PartialEq>(
    label: String,
    options: impl IntoIterator<Item = (T, String)>,
    current: T,
    on_select: fn(T) -> Message,
) -> Element<'a, Message> {
    let buttons = options.into_iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, (value, text)| {
            row.push(
                button(Text::new(text).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(on_select(value))
                    .style(styles::button::segment(value == current)),
            )
        },
    );

    Row::new()
        .push(Text::new(label).size(typography::CAPTION))
        .push(
            container(buttons)
                .padding(spacing::XXS)
                .style(styles::container::segment_track),
        )
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let languages = selector(
        i18n.tr("navbar-language"),
        Language::ALL
            .into_iter()
            .map(|language| (language, language.native_name().to_string())),
        i18n.language(),
        Message::SelectLanguage,
    );

    let themes = selector(
        i18n.tr("navbar-theme"),
        ThemeMode::ALL
            .into_iter()
            .map(|mode| (mode, i18n.tr(mode.label_key()))),
        ctx.theme_mode,
        Message::SelectTheme,
    );

    Row::new()
        .push(Space::new().width(Length::Fill))
        .push(languages)
        .push(themes)
        .spacing(spacing::LG)
        .padding([spacing::XS, spacing::LG])
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
}
