// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a portfolio photo gallery built with the Iced GUI framework.
//!
//! Album records come from a headless content store and each album's photos
//! from a shared Drive folder. The gallery shows them as a shuffled explore
//! stream, a sortable album grid and single-album views, with a zoomable
//! lightbox on top.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
