// SPDX-License-Identifier: MPL-2.0
//! Photo resolution for one storage folder.
//!
//! Pages through the folder listing, drops files without a thumbnail link and
//! normalizes the rest into [`DriveImage`]s: high-resolution link, display
//! dimensions with an 800×600 fallback, alt text from the file name.

use crate::application::port::{FolderListing, FolderResolver, ListRequest, ListedFile};
use crate::domain::gallery::{DriveImage, FolderId, FALLBACK_HEIGHT, FALLBACK_WIDTH, UNTITLED_ALT};
use crate::error::{Error, Result};
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

/// Size parameter of a thumbnail link, e.g. `=s220`.
static SIZE_PARAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"=s\d+").expect("valid regex"));

/// Resolves folders through any [`FolderListing`].
#[derive(Debug, Clone)]
pub struct PhotoResolver<L> {
    listing: L,
    page_size: u32,
    max_pages: u32,
    high_res_size: u32,
}

impl<L: FolderListing> PhotoResolver<L> {
    #[must_use]
    pub fn new(listing: L, page_size: u32, max_pages: u32, high_res_size: u32) -> Self {
        Self {
            listing,
            page_size,
            max_pages,
            high_res_size,
        }
    }

    /// Lists every page of `folder_id`, failing on the first error or when
    /// the page cap is reached with a continuation token still pending.
    pub async fn try_resolve(&self, folder_id: &FolderId) -> Result<Vec<DriveImage>> {
        let mut request = ListRequest::first_page(folder_id.clone(), self.page_size);
        let mut images = Vec::new();

        for page_number in 1..=self.max_pages {
            let page = self.listing.list_page(&request).await?;
            tracing::debug!(
                folder = %folder_id,
                page = page_number,
                files = page.files.len(),
                "listing page fetched"
            );
            images.extend(
                page.files
                    .into_iter()
                    .filter_map(|file| normalize(file, self.high_res_size)),
            );

            match page.next_page_token {
                Some(token) => request = request.next_page(token),
                None => return Ok(images),
            }
        }

        Err(Error::PageLimit {
            folder_id: folder_id.to_string(),
            limit: self.max_pages,
        })
    }
}

#[async_trait]
impl<L: FolderListing> FolderResolver for PhotoResolver<L> {
    async fn resolve(&self, folder_id: &FolderId) -> Vec<DriveImage> {
        match self.try_resolve(folder_id).await {
            Ok(images) => images,
            Err(err) => {
                tracing::warn!(folder = %folder_id, error = %err, "could not resolve folder");
                Vec::new()
            }
        }
    }
}

/// Rewrites the first `=s<digits>` size parameter to `=s<size>`.
///
/// Links without a size parameter are returned unchanged.
#[must_use]
pub fn high_res_link(link: &str, size: u32) -> String {
    SIZE_PARAM.replace(link, format!("=s{size}")).into_owned()
}

/// File name without its last extension, or `"Untitled"` when nothing remains.
#[must_use]
pub fn alt_text(name: Option<&str>) -> String {
    let name = name.unwrap_or_default();
    let stem = match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && !ext.contains('/') => stem,
        _ => name,
    };
    if stem.is_empty() {
        UNTITLED_ALT.to_string()
    } else {
        stem.to_string()
    }
}

/// Converts a listed file, or drops it when it has no thumbnail link.
#[must_use]
pub fn normalize(file: ListedFile, high_res_size: u32) -> Option<DriveImage> {
    let link = file.thumbnail_link?;
    let (width, height) = match (file.width, file.height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => (width, height),
        _ => (FALLBACK_WIDTH, FALLBACK_HEIGHT),
    };
    Some(DriveImage {
        alt_text: alt_text(file.name.as_deref()),
        id: file.id,
        src: high_res_link(&link, high_res_size),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::DrivePage;
    use std::sync::Mutex;

    /// Serves scripted pages in order and records every request.
    struct ScriptedListing {
        pages: Mutex<Vec<Result<DrivePage>>>,
        requests: Mutex<Vec<ListRequest>>,
    }

    impl ScriptedListing {
        fn new(pages: Vec<Result<DrivePage>>) -> Self {
            Self {
                pages: Mutex::new(pages.into_iter().rev().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl FolderListing for ScriptedListing {
        async fn list_page(&self, request: &ListRequest) -> Result<DrivePage> {
            self.requests.lock().unwrap().push(request.clone());
            self.pages
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(DrivePage::default()))
        }
    }

    fn file(id: &str, width: Option<u32>, height: Option<u32>) -> ListedFile {
        ListedFile {
            id: id.to_string(),
            name: Some(format!("{id}.jpg")),
            thumbnail_link: Some(format!("https://lh3.test/{id}=s220")),
            width,
            height,
        }
    }

    fn page(ids: &[&str], next: Option<&str>) -> Result<DrivePage> {
        Ok(DrivePage {
            files: ids.iter().map(|id| file(id, Some(400), Some(300))).collect(),
            next_page_token: next.map(str::to_string),
        })
    }

    #[test]
    fn high_res_link_rewrites_size() {
        assert_eq!(
            high_res_link("https://lh3.test/abc=s220", 3000),
            "https://lh3.test/abc=s3000"
        );
        assert_eq!(
            high_res_link("https://lh3.test/abc=s220-c?x=s10", 3000),
            "https://lh3.test/abc=s3000-c?x=s10"
        );
        assert_eq!(high_res_link("https://lh3.test/abc", 3000), "https://lh3.test/abc");
    }

    #[test]
    fn alt_text_strips_last_extension() {
        assert_eq!(alt_text(Some("sunset.jpg")), "sunset");
        assert_eq!(alt_text(Some("archive.tar.gz")), "archive.tar");
        assert_eq!(alt_text(Some("no_extension")), "no_extension");
        assert_eq!(alt_text(Some("")), UNTITLED_ALT);
        assert_eq!(alt_text(Some(".jpg")), UNTITLED_ALT);
        assert_eq!(alt_text(None), UNTITLED_ALT);
    }

    #[test]
    fn missing_dimensions_fall_back_to_800_by_600() {
        let image = normalize(file("a", None, Some(900)), 3000).unwrap();
        assert_eq!((image.width, image.height), (800, 600));

        let image = normalize(file("b", Some(0), Some(0)), 3000).unwrap();
        assert_eq!((image.width, image.height), (800, 600));
    }

    #[test]
    fn files_without_thumbnail_are_dropped() {
        let mut listed = file("a", Some(1), Some(1));
        listed.thumbnail_link = None;
        assert!(normalize(listed, 3000).is_none());
    }

    #[tokio::test]
    async fn pagination_unions_all_pages() {
        let listing = ScriptedListing::new(vec![
            page(&["a", "b"], Some("t2")),
            page(&["c"], Some("t3")),
            page(&["d"], None),
        ]);
        let resolver = PhotoResolver::new(listing, 1000, 50, 3000);

        let images = resolver.resolve(&FolderId::new("folder")).await;

        let ids: Vec<_> = images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert!(images.iter().all(|i| i.src.contains("=s3000")));

        let requests = resolver.listing.requests.lock().unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].page_token(), None);
        assert!(requests[0].query_pairs().iter().any(|(k, _)| *k == "q"));
        for (request, token) in requests[1..].iter().zip(["t2", "t3"]) {
            assert_eq!(request.page_token(), Some(token));
            assert!(request.query_pairs().iter().all(|(k, _)| *k != "q"));
        }
    }

    #[tokio::test]
    async fn failure_on_any_page_yields_empty() {
        let listing = ScriptedListing::new(vec![
            page(&["a"], Some("t2")),
            Err(Error::Http("HTTP status: 500".into())),
        ]);
        let resolver = PhotoResolver::new(listing, 1000, 50, 3000);

        assert!(resolver.resolve(&FolderId::new("folder")).await.is_empty());
    }

    #[tokio::test]
    async fn page_cap_is_a_failure() {
        let pages = (0..5).map(|i| page(&["x"], Some(&format!("t{i}")))).collect();
        let resolver = PhotoResolver::new(ScriptedListing::new(pages), 1000, 3, 3000);
        let folder = FolderId::new("endless");

        let result = resolver.try_resolve(&folder).await;

        assert!(matches!(result, Err(Error::PageLimit { limit: 3, .. })));
        assert_eq!(resolver.listing.requests.lock().unwrap().len(), 3);
    }
}
