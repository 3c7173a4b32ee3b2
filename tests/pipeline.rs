// SPDX-License-Identifier: MPL-2.0
//! Aggregation pipeline from stub services to the gallery state.

use async_trait::async_trait;
use iced_gallery::application::aggregate_albums;
use iced_gallery::application::port::{
    AlbumRecord, AlbumRecordSource, DrivePage, FolderListing, ListRequest, ListedFile,
};
use iced_gallery::domain::gallery::{AlbumId, FolderId, LocalizedText};
use iced_gallery::error::{Error, Result};
use iced_gallery::infrastructure::PhotoResolver;
use iced_gallery::ui::gallery::{self, Effect, Pagination, ViewMode};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct StubRecords(Result<Vec<AlbumRecord>>);

#[async_trait]
impl AlbumRecordSource for StubRecords {
    async fn fetch_album_records(&self) -> Result<Vec<AlbumRecord>> {
        self.0.clone()
    }
}

/// Serves `pages[folder][n]` for the n-th page; unknown folders fail.
struct StubListing {
    pages: HashMap<String, Vec<DrivePage>>,
    requests: Arc<AtomicUsize>,
}

#[async_trait]
impl FolderListing for StubListing {
    async fn list_page(&self, request: &ListRequest) -> Result<DrivePage> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let pages = self
            .pages
            .get(request.folder_id().as_str())
            .ok_or_else(|| Error::Http("403 Forbidden".into()))?;
        let index = match request.page_token() {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .map_err(|err| Error::Decode(err.to_string()))?,
        };
        pages
            .get(index)
            .cloned()
            .ok_or_else(|| Error::Http("bad token".into()))
    }
}

fn record(id: &str, folder: &str, date: Option<&str>) -> AlbumRecord {
    AlbumRecord {
        id: AlbumId::new(id),
        title: id.to_uppercase(),
        description: LocalizedText::english(format!("{id} description")),
        capture_date: date.and_then(|d| d.parse().ok()),
        tags: vec!["travel".into()],
        cover_image: None,
        folder_id: FolderId::new(folder),
    }
}

fn file(id: &str, dims: Option<(u32, u32)>) -> ListedFile {
    ListedFile {
        id: id.to_string(),
        name: Some(format!("{id}.jpg")),
        thumbnail_link: Some(format!("https://lh3.googleusercontent.com/{id}=s220")),
        width: dims.map(|(w, _)| w),
        height: dims.map(|(_, h)| h),
    }
}

fn page(files: Vec<ListedFile>, next: Option<&str>) -> DrivePage {
    DrivePage {
        files,
        next_page_token: next.map(str::to_string),
    }
}

fn listing() -> StubListing {
    let mut pages = HashMap::new();
    pages.insert(
        "f-sea".to_string(),
        vec![
            page(vec![file("s1", Some((1200, 800))), file("s2", None)], Some("1")),
            page(vec![file("s3", Some((800, 1200)))], Some("2")),
            page(vec![file("s4", Some((1000, 1000)))], None),
        ],
    );
    pages.insert(
        "f-city".to_string(),
        vec![page(vec![file("c1", Some((1600, 900)))], None)],
    );
    StubListing {
        pages,
        requests: Arc::new(AtomicUsize::new(0)),
    }
}

fn records() -> Vec<AlbumRecord> {
    vec![
        record("sea", "f-sea", Some("2024-06-01")),
        record("city", "f-city", Some("2022-01-15")),
        record("draft", "", Some("2025-01-01")),
        record("locked", "f-private", None),
    ]
}

#[tokio::test]
async fn aggregation_resolves_every_folder_page() {
    let listing = listing();
    let requests = Arc::clone(&listing.requests);
    let resolver = PhotoResolver::new(listing, 1000, 50, 3000);
    let albums = aggregate_albums(&StubRecords(Ok(records())), &resolver)
        .await
        .expect("aggregation succeeds");

    let ids: Vec<_> = albums.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["sea", "city", "draft", "locked"]);

    let sea = &albums[0];
    assert_eq!(sea.photo_count(), 4);
    assert!(sea.photos.iter().all(|p| p.src().ends_with("=s3000")));
    assert!(sea.photos.iter().all(|p| p.album_title() == "SEA"));
    let s2 = &sea.photos[1];
    assert_eq!((s2.width(), s2.height()), (800, 600));
    assert_eq!(s2.alt_text(), "s2");

    assert_eq!(albums[1].photo_count(), 1);
    assert!(albums[2].photos.is_empty());
    assert!(albums[3].photos.is_empty(), "failed folder leaves album empty");
    // three sea pages, one city page, one failed request for the locked folder
    assert_eq!(requests.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn albums_without_folder_never_reach_the_listing() {
    let listing = listing();
    let requests = Arc::clone(&listing.requests);
    let resolver = PhotoResolver::new(listing, 1000, 50, 3000);
    let only_draft = vec![record("draft", "", None)];
    let albums = aggregate_albums(&StubRecords(Ok(only_draft)), &resolver)
        .await
        .expect("aggregation succeeds");

    assert!(albums[0].photos.is_empty());
    assert_eq!(requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn page_cap_abandons_the_folder() {
    let resolver = PhotoResolver::new(listing(), 1000, 2, 3000);
    let albums = aggregate_albums(&StubRecords(Ok(records())), &resolver)
        .await
        .expect("aggregation succeeds");

    assert!(albums[0].photos.is_empty());
    assert_eq!(albums[1].photo_count(), 1);
}

#[tokio::test]
async fn content_store_failure_is_returned() {
    let resolver = PhotoResolver::new(listing(), 1000, 50, 3000);
    let source = StubRecords(Err(Error::ContentStore("503".into())));

    let result = aggregate_albums(&source, &resolver).await;

    assert_eq!(result, Err(Error::ContentStore("503".into())));
}

#[tokio::test]
async fn aggregated_albums_drive_the_gallery() {
    let resolver = PhotoResolver::new(listing(), 1000, 50, 3000);
    let albums = aggregate_albums(&StubRecords(Ok(records())), &resolver)
        .await
        .expect("aggregation succeeds");

    let mut rng = fastrand::Rng::with_seed(11);
    let mut state = gallery::State::new(albums, &mut rng, Pagination { initial: 2, step: 2 });

    // Explore: a permutation of all five photos, revealed two at a time.
    assert_eq!(state.mode(), ViewMode::Explore);
    let all: HashSet<_> = state.current_photos().iter().map(|p| p.id().to_string()).collect();
    assert_eq!(all.len(), 5);
    assert_eq!(state.visible_photos().len(), 2);
    let first_two: Vec<_> = state.visible_photos().iter().map(|p| p.id().to_string()).collect();
    state.handle(gallery::Message::LoadMore);
    assert_eq!(state.visible_photos().len(), 4);
    let grown: Vec<_> = state.visible_photos()[..2]
        .iter()
        .map(|p| p.id().to_string())
        .collect();
    assert_eq!(grown, first_two);

    // Albums sorted newest first, undated last.
    state.handle(gallery::Message::ShowAlbums);
    let sorted: Vec<_> = state.sorted_albums().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(sorted, ["draft", "sea", "city", "locked"]);

    // Lightbox caption jump.
    state.handle(gallery::Message::ShowExplore);
    state.handle(gallery::Message::OpenLightbox(0));
    let target = state
        .lightbox_photo()
        .map(|p| p.album_id().clone())
        .expect("lightbox photo");
    let effect = state.handle(gallery::Message::NavigateToAlbum(target.clone()));
    assert_eq!(state.lightbox_index(), None);
    let Effect::OpenAlbumAfter { album_id, .. } = effect else {
        panic!("expected delayed album jump, got {effect:?}");
    };
    assert_eq!(album_id, target);

    state.handle(gallery::Message::OpenAlbum(album_id));
    assert_eq!(state.mode(), ViewMode::Single);
    assert_eq!(state.selected_album_id(), Some(&target));
    assert_eq!(state.visible_count(), 2);
}
