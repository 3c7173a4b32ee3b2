// SPDX-License-Identifier: MPL-2.0
//! Storage service adapters.
//!
//! - [`client`]: reqwest implementation of [`FolderListing`]
//! - [`listing`]: response decoding
//! - [`resolver`]: paging and normalization, implements [`FolderResolver`]
//!
//! [`FolderListing`]: crate::application::port::FolderListing
//! [`FolderResolver`]: crate::application::port::FolderResolver

pub mod client;
pub mod listing;
pub mod resolver;

pub use client::DriveClient;
pub use resolver::PhotoResolver;
