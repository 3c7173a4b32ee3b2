// SPDX-License-Identifier: MPL-2.0
//! Photo downloads for the gallery.
//!
//! [`fetch`] downloads one photo and reads its real dimensions;
//! [`store`] caches the results for the session.

pub mod fetch;
pub mod store;

pub use fetch::{fetch_photo, probe_dimensions, LoadedPhoto};
pub use store::{Entry, PhotoStore};
