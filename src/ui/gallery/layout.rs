// SPDX-License-Identifier: MPL-2.0
//! Masonry column layout.
//!
//! Photos are dealt to columns in order, each one going to the column that
//! is currently shortest. Heights are measured in "width units" (the inverse
//! of the aspect ratio) so the result does not depend on the window width.

use crate::config::MASONRY_BREAKPOINT;

/// Gap between columns and between stacked cells.
pub const GUTTER: f32 = 16.0;

/// Number of columns for a content area `width` pixels wide.
#[must_use]
pub fn column_count(width: f32) -> usize {
    if width < MASONRY_BREAKPOINT {
        2
    } else {
        3
    }
}

/// Width of one column when `columns` columns share `width` pixels.
#[must_use]
pub fn column_width(width: f32, columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    ((width - GUTTER * (columns - 1.0)) / columns).max(1.0)
}

/// Distributes items with the given aspect ratios into `columns` columns.
///
/// Returns item indices per column, each column in input order.
#[must_use]
pub fn masonry_columns(ratios: &[f32], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut assigned = vec![Vec::new(); columns];
    let mut heights = vec![0.0_f32; columns];

    for (index, &ratio) in ratios.iter().enumerate() {
        let ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
        let shortest = heights
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map_or(0, |(column, _)| column);
        heights[shortest] += 1.0 / ratio;
        assigned[shortest].push(index);
    }

    assigned
}
