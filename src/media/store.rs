// SPDX-License-Identifier: MPL-2.0
//! Bounded cache of downloaded photos.
//!
//! Entries are keyed by source URL. A URL is claimed once and stays claimed
//! while it is cached, so a photo scrolling in and out of view is not
//! downloaded again. Claiming an already cached URL marks it recently used;
//! once the cache is full the least recently wanted entry is evicted.
//! Failed downloads stay failed until evicted.

use crate::config::{PHOTO_CACHE_CAPACITY, TRANSITION_MS};
use crate::error::Result;
use crate::media::fetch::LoadedPhoto;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Entry {
    Pending,
    Ready {
        photo: LoadedPhoto,
        /// When the download completed; the fade-in starts here.
        loaded_at: Instant,
    },
    Failed,
}

#[derive(Debug)]
pub struct PhotoStore {
    entries: LruCache<String, Entry>,
    last_loaded_at: Option<Instant>,
}

impl Default for PhotoStore {
    fn default() -> Self {
        Self::with_capacity(PHOTO_CACHE_CAPACITY)
    }
}

impl PhotoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding at most `capacity` entries (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            last_loaded_at: None,
        }
    }

    /// Marks `url` as pending. Returns `false` if it is already cached, in
    /// which case it becomes the most recently used entry.
    pub fn claim(&mut self, url: &str) -> bool {
        if url.is_empty() || self.entries.get(url).is_some() {
            return false;
        }
        if let Some((evicted, _)) = self.entries.push(url.to_string(), Entry::Pending) {
            tracing::trace!(url = %evicted, "evicted photo");
        }
        true
    }

    /// Stores the outcome of a download started by [`claim`](Self::claim).
    pub fn complete(&mut self, url: String, result: Result<LoadedPhoto>, now: Instant) {
        let entry = match result {
            Ok(photo) => {
                self.last_loaded_at = Some(now);
                Entry::Ready {
                    photo,
                    loaded_at: now,
                }
            }
            Err(error) => {
                tracing::warn!(%url, %error, "photo download failed");
                Entry::Failed
            }
        };
        self.entries.put(url, entry);
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Entry> {
        self.entries.peek(url)
    }

    /// The downloaded photo and its completion instant, if ready.
    #[must_use]
    pub fn ready(&self, url: &str) -> Option<(&LoadedPhoto, Instant)> {
        match self.entries.peek(url) {
            Some(Entry::Ready { photo, loaded_at }) => Some((photo, *loaded_at)),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, entry)| matches!(entry, Entry::Pending))
            .count()
    }

    /// Whether a photo finished loading recently enough to still be fading in.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.last_loaded_at.is_some_and(|at| {
            now.saturating_duration_since(at) < Duration::from_millis(TRANSITION_MS)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use iced::widget::image;

    fn photo(width: u32, height: u32) -> LoadedPhoto {
        LoadedPhoto {
            handle: image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width,
            height,
        }
    }

    #[test]
    fn url_is_claimed_once() {
        let mut store = PhotoStore::new();
        assert!(store.claim("https://a/1"));
        assert!(!store.claim("https://a/1"));
        assert_eq!(store.pending_count(), 1);
    }

    #[test]
    fn empty_url_is_never_claimed() {
        let mut store = PhotoStore::new();
        assert!(!store.claim(""));
    }

    #[test]
    fn completed_photo_is_ready_and_animating() {
        let now = Instant::now();
        let mut store = PhotoStore::new();
        store.claim("u");
        store.complete("u".into(), Ok(photo(30, 20)), now);

        let (loaded, at) = store.ready("u").expect("ready");
        assert_eq!((loaded.width, loaded.height), (30, 20));
        assert_eq!(at, now);
        assert_eq!(store.pending_count(), 0);
        assert!(store.is_animating(now + Duration::from_millis(100)));
        assert!(!store.is_animating(now + Duration::from_millis(TRANSITION_MS)));
    }

    #[test]
    fn failed_download_is_not_retried() {
        let mut store = PhotoStore::new();
        store.claim("u");
        store.complete("u".into(), Err(Error::Http("404".into())), Instant::now());
        assert!(matches!(store.get("u"), Some(Entry::Failed)));
        assert!(store.ready("u").is_none());
        assert!(!store.claim("u"));
        assert!(!store.is_animating(Instant::now()));
    }

    #[test]
    fn store_is_bounded_by_capacity() {
        let mut store = PhotoStore::with_capacity(3);
        for url in ["a", "b", "c", "d"] {
            assert!(store.claim(url));
        }
        assert_eq!(store.len(), 3);
        assert!(store.get("a").is_none());
        assert!(store.claim("a"), "evicted url can be claimed again");
    }

    #[test]
    fn reclaiming_keeps_a_photo_cached() {
        let now = Instant::now();
        let mut store = PhotoStore::with_capacity(2);
        store.claim("a");
        store.complete("a".into(), Ok(photo(4, 3)), now);
        store.claim("b");

        assert!(!store.claim("a"));
        store.claim("c");

        assert!(store.ready("a").is_some());
        assert!(store.get("b").is_none());
    }

    #[test]
    fn zero_capacity_still_holds_one_entry() {
        let mut store = PhotoStore::with_capacity(0);
        assert!(store.claim("a"));
        assert_eq!(store.len(), 1);
    }
}
