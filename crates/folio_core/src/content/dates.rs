//! Content date parsing and display formatting.

use time::format_description::well_known::Rfc3339;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const ISO_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Long form used on cards, e.g. `January 15, 2024`.
pub const DISPLAY_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

const SHORT_MONTH_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Parses an authored date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (date part kept) and the long
/// card form (`July 12, 2025`, or `Jul 12, 2025`). Returns `None` for blank
/// or malformed input.
pub fn parse_content_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = Date::parse(trimmed, ISO_DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(timestamp) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(timestamp.date());
    }

    [DISPLAY_DATE_FORMAT, SHORT_MONTH_DATE_FORMAT]
        .into_iter()
        .find_map(|format| Date::parse(trimmed, format).ok())
}

/// Renders a date with [`DISPLAY_DATE_FORMAT`].
pub fn format_display_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
