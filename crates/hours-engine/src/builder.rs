//! Building typed entries out of classified tokens.
//!
//! Day runs sharing an identical time range merge into one entry and closed
//! sentinels drop out. Times arrive fully resolved; a leftover dash in a day
//! run marks a range the expander could not enumerate and is fatal here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, Result};
use crate::model::{DayCode, HoursEntry, TimeInterval, TimeOfDay, CLOSED_TOKEN};
use crate::segment::Segments;

static RE_INTERVAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2}):([0-9]{2})-([0-9]{2}):([0-9]{2})").unwrap());

/// Pair each day run with its time range and build merged, typed entries.
///
/// # Errors
///
/// Day and time token counts must match exactly; a day run containing no
/// recognizable day code, or a time token without an `HH:MM-HH:MM` core, is
/// also fatal.
pub fn build_entries(segments: &Segments) -> Result<Vec<HoursEntry>> {
    if segments.day_tokens.len() != segments.time_tokens.len() {
        return Err(ParseError::CountMismatch {
            days: segments.day_tokens.len(),
            times: segments.time_tokens.len(),
        });
    }

    // Merge day runs that share the exact same time token, preserving first
    // appearance order. Explicit closures occupy a slot but produce nothing.
    let mut merged: Vec<(&str, String)> = Vec::new();
    for (day_run, time_token) in segments.day_tokens.iter().zip(&segments.time_tokens) {
        if time_token == CLOSED_TOKEN {
            continue;
        }
        match merged.iter_mut().find(|(t, _)| *t == time_token.as_str()) {
            Some((_, runs)) => runs.push_str(day_run),
            None => merged.push((time_token.as_str(), day_run.clone())),
        }
    }

    let mut entries = Vec::with_capacity(merged.len());
    for (time_token, day_run) in merged {
        let interval = parse_interval(time_token)?;
        let days = collect_days(&day_run)?;
        entries.push(HoursEntry { days, interval });
    }
    Ok(entries)
}

/// Parse the `HH:MM-HH:MM` core of a time token.
fn parse_interval(token: &str) -> Result<TimeInterval> {
    let caps = RE_INTERVAL
        .captures(token)
        .ok_or_else(|| ParseError::MalformedInterval(token.to_string()))?;
    let mut fields = [0u8; 4];
    for (slot, ix) in fields.iter_mut().zip(1..) {
        *slot = caps[ix]
            .parse()
            .map_err(|_| ParseError::MalformedInterval(token.to_string()))?;
    }
    let from = TimeOfDay::new(fields[0], fields[1]);
    let to = TimeOfDay::new(fields[2], fields[3]);
    Ok(TimeInterval::new(from, to))
}

/// Collect the day codes present in a run, ascending Sunday-first.
fn collect_days(run: &str) -> Result<Vec<DayCode>> {
    // A dash is an unexpanded day range ("MM-MM", "XX-FF").
    if run.contains('-') {
        return Err(ParseError::UnexpectedToken(run.to_string()));
    }
    let mut days: Vec<DayCode> = DayCode::SCAN_ORDER
        .iter()
        .copied()
        .filter(|day| run.contains(day.code()))
        .collect();
    if days.is_empty() {
        return Err(ParseError::UnexpectedToken(run.to_string()));
    }
    days.sort();
    Ok(days)
}
