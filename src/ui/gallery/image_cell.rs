// SPDX-License-Identifier: MPL-2.0
//! Adaptive image cell.
//!
//! A cell reserves a box at the photo's declared aspect ratio so the grid does
//! not jump while images arrive. Once the real dimensions are known the image
//! fades in, and if the real ratio differs from the declared one by more than
//! 5% the box eases to the real ratio. Both transitions last 500 ms.
//!
//! [`CellState`] is pure: every accessor takes the current instant, so the
//! animation can be sampled at any time in tests.

use crate::config::{RATIO_TOLERANCE, TRANSITION_MS};
use crate::domain::gallery::Photo;
use crate::ui::design_tokens::{radius, spacing};
use crate::ui::styles;
use iced::widget::{container, image, mouse_area, Container, Image, Stack};
use iced::{ContentFit, Element, Length};
use std::time::{Duration, Instant};

const TRANSITION: Duration = Duration::from_millis(TRANSITION_MS);

/// Whether a measured ratio is far enough from the declared one to resize.
#[must_use]
pub fn needs_correction(declared: f32, measured: f32) -> bool {
    if !(declared.is_finite() && measured.is_finite()) || declared <= 0.0 || measured <= 0.0 {
        return false;
    }
    (measured - declared).abs() / declared > RATIO_TOLERANCE
}

/// Cubic ease-in-out on `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear progress in `[0, 1]` of a transition that started at `since`.
#[must_use]
pub fn fade_progress(since: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).min(1.0)
}

/// Display state of one photo cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellState {
    declared_ratio: f32,
    loaded: Option<Loaded>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Loaded {
    at: Instant,
    measured_ratio: f32,
    corrects: bool,
}

impl CellState {
    /// Cell for a photo declared as `width`×`height` (both non-zero).
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            declared_ratio: width.max(1) as f32 / height.max(1) as f32,
            loaded: None,
        }
    }

    #[must_use]
    pub fn for_photo(photo: &Photo) -> Self {
        Self::new(photo.width(), photo.height())
    }

    /// Records the decoded dimensions and starts the transitions at `now`.
    ///
    /// Only the first call counts.
    pub fn mark_loaded(&mut self, width: u32, height: u32, now: Instant) {
        if self.loaded.is_some() || width == 0 || height == 0 {
            return;
        }
        let measured_ratio = width as f32 / height as f32;
        self.loaded = Some(Loaded {
            at: now,
            measured_ratio,
            corrects: needs_correction(self.declared_ratio, measured_ratio),
        });
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    #[must_use]
    pub fn declared_ratio(&self) -> f32 {
        self.declared_ratio
    }

    fn progress(loaded: &Loaded, now: Instant) -> f32 {
        fade_progress(loaded.at, now)
    }

    /// Image opacity: 0 until loaded, then linear to 1.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.loaded
            .as_ref()
            .map_or(0.0, |loaded| Self::progress(loaded, now))
    }

    /// Width / height of the box at `now`.
    #[must_use]
    pub fn ratio(&self, now: Instant) -> f32 {
        match &self.loaded {
            Some(loaded) if loaded.corrects => {
                let t = ease_in_out(Self::progress(loaded, now));
                self.declared_ratio + (loaded.measured_ratio - self.declared_ratio) * t
            }
            _ => self.declared_ratio,
        }
    }

    /// Ratio the box settles at.
    #[must_use]
    pub fn target_ratio(&self) -> f32 {
        match &self.loaded {
            Some(loaded) if loaded.corrects => loaded.measured_ratio,
            _ => self.declared_ratio,
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|loaded| Self::progress(loaded, now) < 1.0)
    }
}

/// Renders a cell `width` pixels wide.
pub fn view<'a, Message: Clone + 'a>(
    state: &CellState,
    handle: Option<&image::Handle>,
    width: f32,
    now: Instant,
    on_press: Message,
) -> Element<'a, Message> {
    let height = (width / state.ratio(now)).max(1.0);

    let placeholder = Container::new(iced::widget::Space::new())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(styles::container::placeholder);

    let mut stack = Stack::new().push(placeholder);
    if let Some(handle) = handle {
        let opacity = state.opacity(now);
        if opacity > 0.0 {
            stack = stack.push(
                Image::new(handle.clone())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .content_fit(ContentFit::Cover)
                    .opacity(opacity),
            );
        }
    }

    let framed = container(stack)
        .width(Length::Fixed(width))
        .padding(spacing::NONE)
        .style(move |theme| styles::container::rounded(theme, radius::MD))
        .clip(true);

    mouse_area(framed)
        .on_press(on_press)
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ms(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn tolerance_is_relative_five_percent() {
        assert!(!needs_correction(1.5, 1.5));
        assert!(!needs_correction(1.0, 1.04));
        assert!(needs_correction(1.0, 1.06));
        assert!(needs_correction(4.0 / 3.0, 2.0 / 3.0));
        assert!(!needs_correction(0.0, 1.0));
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_abs_diff_eq!(ease_in_out(0.0), 0.0);
        assert_abs_diff_eq!(ease_in_out(0.5), 0.5);
        assert_abs_diff_eq!(ease_in_out(1.0), 1.0);
        assert_abs_diff_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn unloaded_cell_is_transparent_at_declared_ratio() {
        let cell = CellState::new(800, 600);
        let now = Instant::now();
        assert_abs_diff_eq!(cell.opacity(now), 0.0);
        assert_abs_diff_eq!(cell.ratio(now), 800.0 / 600.0);
        assert!(!cell.is_animating(now));
    }

    #[test]
    fn fade_in_runs_for_500ms() {
        let start = Instant::now();
        let mut cell = CellState::new(800, 600);
        cell.mark_loaded(800, 600, start);

        assert_abs_diff_eq!(cell.opacity(start), 0.0);
        assert_abs_diff_eq!(cell.opacity(ms(start, 250)), 0.5, epsilon = 1e-3);
        assert!(cell.is_animating(ms(start, 250)));
        assert_abs_diff_eq!(cell.opacity(ms(start, 600)), 1.0);
        assert!(!cell.is_animating(ms(start, 500)));
    }

    #[test]
    fn close_ratio_is_not_corrected() {
        let start = Instant::now();
        let mut cell = CellState::new(1000, 1000);
        cell.mark_loaded(1030, 1000, start);
        assert_abs_diff_eq!(cell.ratio(ms(start, 500)), 1.0);
        assert_abs_diff_eq!(cell.target_ratio(), 1.0);
    }

    #[test]
    fn portrait_photo_declared_landscape_is_corrected() {
        let start = Instant::now();
        let mut cell = CellState::new(800, 600);
        cell.mark_loaded(2000, 3000, start);

        let declared = 800.0 / 600.0;
        let real = 2000.0 / 3000.0;
        assert_abs_diff_eq!(cell.ratio(start), declared);
        let midway = cell.ratio(ms(start, 250));
        assert!(midway < declared && midway > real);
        assert_abs_diff_eq!(cell.ratio(ms(start, 500)), real);
        assert_abs_diff_eq!(cell.target_ratio(), real);
    }

    #[test]
    fn only_first_load_counts() {
        let start = Instant::now();
        let mut cell = CellState::new(800, 600);
        cell.mark_loaded(800, 600, start);
        cell.mark_loaded(100, 1000, ms(start, 1000));
        assert_abs_diff_eq!(cell.target_ratio(), 800.0 / 600.0);
        assert!(!cell.is_animating(ms(start, 1000)));
    }
}
