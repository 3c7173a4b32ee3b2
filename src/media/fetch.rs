// SPDX-License-Identifier: MPL-2.0
//! Photo download and dimension probing.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::ImageReader;
use std::io::Cursor;

/// A downloaded photo ready for display.
#[derive(Debug, Clone)]
pub struct LoadedPhoto {
    pub handle: image::Handle,
    /// Real pixel width read from the encoded header.
    pub width: u32,
    /// Real pixel height read from the encoded header.
    pub height: u32,
}

/// Reads the pixel dimensions from an encoded image without decoding it.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let (width, height) = reader.into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(Error::Image(format!("invalid dimensions: {width}x{height}")));
    }
    Ok((width, height))
}

/// Downloads `url` and probes its dimensions.
pub async fn fetch_photo(http: reqwest::Client, url: String) -> Result<LoadedPhoto> {
    let response = http.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http(format!("HTTP status: {status}")));
    }

    let bytes = response.bytes().await?;
    let (width, height) = probe_dimensions(&bytes)?;
    Ok(LoadedPhoto {
        handle: image::Handle::from_bytes(bytes),
        width,
        height,
    })
}
