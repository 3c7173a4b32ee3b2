// SPDX-License-Identifier: MPL-2.0
//! Lightbox zoom state.
//!
//! The lightbox starts every slide at 100% (fit to the overlay) and lets the
//! user zoom up to a configurable maximum, 300% by default.

pub use crate::config::{
    DEFAULT_MAX_ZOOM_PERCENT, DEFAULT_ZOOM_PERCENT, MAX_ZOOM_PERCENT_CEILING, MIN_ZOOM_PERCENT,
    ZOOM_STEP_PERCENT,
};

/// Zoom percentage, guaranteed to be within `MIN_ZOOM_PERCENT..=max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPercent(f32);

impl ZoomPercent {
    /// Creates a new zoom percentage, clamping the value to `MIN_ZOOM_PERCENT..=max`.
    #[must_use]
    pub fn new(percent: f32, max: f32) -> Self {
        let max = max.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT_CEILING);
        Self(percent.clamp(MIN_ZOOM_PERCENT, max))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a multiplier (e.g., 100% → 1.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_PERCENT)
    }
}

/// Zoom of the currently shown slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    zoom: ZoomPercent,
    max_percent: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ZOOM_PERCENT)
    }
}

impl ZoomState {
    #[must_use]
    pub fn new(max_percent: f32) -> Self {
        Self {
            zoom: ZoomPercent::default(),
            max_percent: max_percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT_CEILING),
        }
    }

    #[must_use]
    pub fn percent(&self) -> f32 {
        self.zoom.value()
    }

    #[must_use]
    pub fn factor(&self) -> f32 {
        self.zoom.as_factor()
    }

    #[must_use]
    pub fn max_percent(&self) -> f32 {
        self.max_percent
    }

    #[must_use]
    pub fn is_min(&self) -> bool {
        self.zoom.value() <= MIN_ZOOM_PERCENT
    }

    #[must_use]
    pub fn is_max(&self) -> bool {
        self.zoom.value() >= self.max_percent
    }

    pub fn zoom_in(&mut self) {
        self.set(self.zoom.value() + ZOOM_STEP_PERCENT);
    }

    pub fn zoom_out(&mut self) {
        self.set(self.zoom.value() - ZOOM_STEP_PERCENT);
    }

    /// Applies a mouse-wheel delta in notches (positive zooms in).
    pub fn zoom_by_wheel(&mut self, notches: f32) {
        if notches.is_finite() && notches != 0.0 {
            self.set(self.zoom.value() + notches * ZOOM_STEP_PERCENT);
        }
    }

    pub fn reset(&mut self) {
        self.zoom = ZoomPercent::default();
    }

    fn set(&mut self, percent: f32) {
        self.zoom = ZoomPercent::new(percent, self.max_percent);
    }
}
