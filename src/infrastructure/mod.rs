// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping the HTTP services the gallery reads from.
//!
//! # Available Adapters
//!
//! - [`drive`]: folder listing and photo resolution (implements [`FolderResolver`])
//! - [`content`]: album records (implements [`AlbumRecordSource`])
//!
//! [`FolderResolver`]: crate::application::port::FolderResolver
//! [`AlbumRecordSource`]: crate::application::port::AlbumRecordSource

pub mod content;
pub mod drive;

pub use content::ContentClient;
pub use drive::{DriveClient, PhotoResolver};

use crate::config::Config;
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for all adapters.
pub fn http_client() -> crate::error::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()?;
    Ok(client)
}

/// Builds the production adapters from configuration.
pub fn adapters(config: &Config) -> crate::error::Result<(ContentClient, PhotoResolver<DriveClient>)> {
    let http = http_client()?;
    let content = ContentClient::new(http.clone(), config.content.clone());
    let listing = DriveClient::new(
        http,
        config.drive.endpoint.clone(),
        config.drive.resolved_api_key(),
    );
    let resolver = PhotoResolver::new(
        listing,
        config.drive.page_size(),
        config.drive.max_pages(),
        config.drive.high_res_size(),
    );
    Ok((content, resolver))
}
