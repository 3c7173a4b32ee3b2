// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the aggregator and tests
//! only see the traits.
//!
//! # Available Ports
//!
//! - [`content`]: album records from the content store
//! - [`storage`]: folder listing and folder resolution
//!
//! # Design Notes
//!
//! - Traits are `async` through `async-trait` and `Send + Sync`, so they can
//!   be shared behind `Arc` and awaited inside `Task::perform`
//! - Methods return the crate [`Result`](crate::error::Result), except
//!   [`FolderResolver::resolve`] which absorbs failures

pub mod content;
pub mod storage;

pub use content::{AlbumRecord, AlbumRecordSource};
pub use storage::{DrivePage, FolderListing, FolderResolver, ListRequest, ListedFile};
