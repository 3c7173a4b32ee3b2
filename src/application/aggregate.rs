// SPDX-License-Identifier: MPL-2.0
//! Album aggregation.
//!
//! Fetches every album record, resolves all attached folders concurrently and
//! merges the results into [`Album`]s in record order.

use crate::application::port::{AlbumRecord, AlbumRecordSource, FolderResolver};
use crate::domain::gallery::{Album, DriveImage, Photo};
use crate::error::Result;
use futures_util::future::join_all;

/// Loads all albums with their photos.
///
/// Albums without a folder get no photos and do not touch the resolver.
/// A content store failure is returned as `Err`; a folder that cannot be
/// resolved only leaves its own album empty.
pub async fn aggregate_albums<S, R>(source: &S, resolver: &R) -> Result<Vec<Album>>
where
    S: AlbumRecordSource + ?Sized,
    R: FolderResolver + ?Sized,
{
    let records = source.fetch_album_records().await.inspect_err(|err| {
        tracing::error!(error = %err, "failed to fetch album records");
    })?;

    let resolutions = records.iter().map(|record| async move {
        if record.folder_id.is_empty() {
            Vec::new()
        } else {
            resolver.resolve(&record.folder_id).await
        }
    });
    let image_sets = join_all(resolutions).await;

    let albums: Vec<Album> = records
        .into_iter()
        .zip(image_sets)
        .map(|(record, images)| merge(record, images))
        .collect();

    tracing::info!(
        albums = albums.len(),
        photos = albums.iter().map(Album::photo_count).sum::<usize>(),
        "albums aggregated"
    );
    Ok(albums)
}

fn merge(record: AlbumRecord, images: Vec<DriveImage>) -> Album {
    let photos = images
        .into_iter()
        .map(|image| Photo::from_drive_image(image, record.id.clone(), record.title.clone()))
        .collect();

    Album {
        id: record.id,
        title: record.title,
        description: record.description,
        capture_date: record.capture_date,
        tags: record.tags.into_iter().collect(),
        cover_image: record.cover_image,
        folder_id: record.folder_id,
        photos,
    }
}
