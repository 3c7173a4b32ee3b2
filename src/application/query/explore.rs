// SPDX-License-Identifier: MPL-2.0
//! Explore stream ordering.
//!
//! The explore view shows every photo from every album in one random order.
//! The order is computed once per session as a permutation of indices into
//! the flattened photo list, so growing the visible window never reshuffles.

use crate::domain::gallery::{Album, Photo};

/// Fisher–Yates shuffle: for `i` from the last index down to 1, swap
/// element `i` with a uniformly chosen `j` in `0..=i`.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut fastrand::Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.usize(0..=i);
        items.swap(i, j);
    }
}

/// Flattens album photos in album order, then resolver order.
#[must_use]
pub fn flatten_photos(albums: &[Album]) -> Vec<Photo> {
    albums
        .iter()
        .flat_map(|album| album.photos.iter().cloned())
        .collect()
}

/// Builds the session's explore stream.
#[must_use]
pub fn explore_order(albums: &[Album], rng: &mut fastrand::Rng) -> Vec<Photo> {
    let mut photos = flatten_photos(albums);
    fisher_yates(&mut photos, rng);
    photos
}
