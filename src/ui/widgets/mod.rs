// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod wheel_zoom;

pub use animated_spinner::AnimatedSpinner;
pub use wheel_zoom::wheel_zoom;
