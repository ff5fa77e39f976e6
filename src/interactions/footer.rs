// SPDX-License-Identifier: MPL-2.0
//! Keeps the footer copyright year current.

use crate::dom::{Document, Selector};
use chrono::Datelike;

const COPYRIGHT: char = '©';

/// The current year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Replaces the first run of four digits in a copyright line with `year`.
///
/// Returns `None` when `text` is not a copyright line or has no four-digit
/// run.
#[must_use]
pub fn stamp_year(text: &str, year: i32) -> Option<String> {
    if !text.contains(COPYRIGHT) {
        return None;
    }
    let bytes = text.as_bytes();
    let start = bytes
        .windows(4)
        .position(|window| window.iter().all(u8::is_ascii_digit))?;
    Some(format!("{}{year}{}", &text[..start], &text[start + 4..]))
}

/// Stamps every `.footer p` copyright line. Returns how many were updated.
pub fn update_footer_year<D: Document + ?Sized>(document: &mut D, year: i32) -> usize {
    let paragraphs = document.query_all(&Selector::tag("p").within(Selector::class("footer")));
    let mut updated = 0;
    for node in paragraphs {
        let Some(element) = document.element_mut(node) else {
            continue;
        };
        if let Some(text) = stamp_year(element.text(), year) {
            element.set_text(text);
            updated += 1;
        }
    }
    log::debug!("footer year set to {year} in {updated} paragraph(s)");
    updated
}
