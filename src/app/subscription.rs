// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are turned into top-level messages;
//! a fast tick drives animations only while something is moving.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use iced::{event, keyboard, time, window, Event, Subscription};
use std::time::Duration;

/// Routes window resizes and unhandled key presses.
///
/// Keys captured by a focused widget are not forwarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if matches!(status, event::Status::Ignored) =>
        {
            Some(Message::KeyPressed(key))
        }
        _ => None,
    })
}

/// Creates the animation tick while `animating` is true.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
