// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`aggregate`]: album aggregation use case
//! - [`query`]: Query services (read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::aggregate::aggregate_albums;
//!
//! let albums = aggregate_albums(&content_client, &photo_resolver).await?;
//! ```

pub mod aggregate;
pub mod port;
pub mod query;

pub use aggregate::aggregate_albums;
