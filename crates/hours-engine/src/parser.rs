//! The pipeline driver and the crate's public entry points.

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::locale::Locale;
use crate::model::{DayCode, HoursEntry, ParseResult};
use crate::{builder, expander, normalize, segment, sort, tabular, validate};

/// Parse free-text opening hours into typed weekly entries.
///
/// The reference `now` only anchors "today"/"tomorrow" resolution; the same
/// input with the same locale and anchor always produces the same result.
/// Fatal problems come back as `parse_error = true` with no entries; the
/// advisory flags arrive alongside usable entries.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hours_engine::{parse_hours, DayCode, Locale};
///
/// let now = NaiveDate::from_ymd_opt(2026, 2, 18)
///     .and_then(|d| d.and_hms_opt(12, 0, 0))
///     .expect("valid timestamp");
/// let result = parse_hours("Mon-Fri 9am-5pm", &Locale::english(), now);
///
/// assert!(!result.parse_error);
/// assert_eq!(result.entries.len(), 1);
/// assert_eq!(result.entries[0].days[0], DayCode::Monday);
/// assert_eq!(result.entries[0].from_hour(), "09:00");
/// assert_eq!(result.entries[0].to_hour(), "17:00");
/// ```
pub fn parse_hours(input: &str, locale: &Locale, now: NaiveDateTime) -> ParseResult {
    run_pipeline(input, locale, now).unwrap_or_else(|_| ParseResult::error())
}

/// Like [`parse_hours`], but each entry is built by a caller-supplied
/// factory receiving the ascending day list and the `HH:MM` open and close
/// strings. This is the integration seam for callers with their own entry
/// type.
pub fn parse_hours_with<T>(
    input: &str,
    locale: &Locale,
    now: NaiveDateTime,
    mut build: impl FnMut(&[DayCode], &str, &str) -> T,
) -> ParseResult<T> {
    let parsed = parse_hours(input, locale, now);
    ParseResult {
        entries: parsed
            .entries
            .iter()
            .map(|entry| build(&entry.days, &entry.from_hour(), &entry.to_hour()))
            .collect(),
        parse_error: parsed.parse_error,
        overlapping_hours: parsed.overlapping_hours,
        same_open_and_close_times: parsed.same_open_and_close_times,
    }
}

fn run_pipeline(input: &str, locale: &Locale, now: NaiveDateTime) -> Result<ParseResult> {
    let trimmed = input.trim().to_lowercase();
    if trimmed.is_empty() || trimmed == "," {
        return Ok(ParseResult::empty());
    }

    let normalized = normalize::normalize(&trimmed, locale, now)?;
    let reordered = tabular::reorder(&normalized);
    let coalesced = segment::coalesce(&reordered);
    let expanded = expander::expand_ranges(&coalesced);
    let segments = segment::tokenize(&expanded)?;
    let mut entries = builder::build_entries(&segments)?;

    validate::check_bounds(&entries)?;
    let overlapping_hours = validate::has_overlapping_hours(&entries);
    let same_open_and_close_times = validate::has_same_open_and_close(&entries);
    sort::sort_entries(&mut entries);

    Ok(ParseResult {
        entries,
        parse_error: false,
        overlapping_hours,
        same_open_and_close_times,
    })
}
