// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the application moves through. Loading is left exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Waiting for the album aggregation (or showing its failure).
    #[default]
    Loading,
    Gallery,
}
