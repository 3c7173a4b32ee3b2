// SPDX-License-Identifier: MPL-2.0
//! Long-form capture dates in each supported language.

use crate::domain::gallery::Language;
use chrono::NaiveDate;

/// Formats `date` the way each language writes a calendar date.
///
/// - en: `January 5, 2024`
/// - vi: `5 tháng 1, 2024`
/// - ja: `2024年1月5日`
#[must_use]
pub fn format_capture_date(date: NaiveDate, language: Language) -> String {
    let pattern = match language {
        Language::En => "%B %-d, %Y",
        Language::Vi => "%-d tháng %-m, %Y",
        Language::Ja => "%Y年%-m月%-d日",
    };
    date.format(pattern).to_string()
}
