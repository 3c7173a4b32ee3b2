// SPDX-License-Identifier: MPL-2.0
//! Content store adapter implementing [`AlbumRecordSource`].
//!
//! [`AlbumRecordSource`]: crate::application::port::AlbumRecordSource

pub mod client;
pub mod records;

pub use client::ContentClient;
