// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! # Available Services
//!
//! - [`explore`]: session-wide random ordering of all photos

pub mod explore;

pub use explore::{explore_order, fisher_yates, flatten_photos};
