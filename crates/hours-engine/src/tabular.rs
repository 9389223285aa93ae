//! Detection and reordering of column-major "tabular pastes".
//!
//! Hours copied out of a spreadsheet or a rendered table arrive column-major:
//! a row of day codes, then a row of opening times, then (optionally) a row of
//! closing times. This stage detects that shape on the normalized string and
//! rewrites it row-major, so each day code is immediately followed by its
//! times and the regular segmentation passes apply.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_NON_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Z0-9:\-]").unwrap());
static RE_MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Five consecutive day codes is the signature of a pasted header row; a
/// regular schedule never lists five day groups without times in between.
static RE_HEADER_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z]{2}:?-? [A-Z]{2}:?-? [A-Z]{2}:?-? [A-Z]{2}:?-? [A-Z]{2}:?-?").unwrap()
});

static RE_JOIN_TIME_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(:[0-9]{2}) ([0-9]{2}:)").unwrap());

/// Reorder a tabular paste row-major, or return the input unchanged when the
/// string does not look tabular.
///
/// The permutation is derived from the grid shape: the token count fixes the
/// row count (three rows for separate open/close rows, two when the times
/// come pre-joined), the column count is then tokens per row, and output
/// position `d` interleaves token `d` with its counterparts one and two rows
/// down. Any other token count passes through unchanged.
pub fn reorder(s: &str) -> String {
    let grid = RE_NON_TOKEN.replace_all(s, " ");
    let grid = RE_MULTI_SPACE.replace_all(&grid, " ");
    let grid = grid.trim();
    if !RE_HEADER_ROW.is_match(grid) {
        return s.to_string();
    }

    let tokens: Vec<&str> = grid.split(' ').collect();
    // 21/18/15 tokens: day, open and close rows for 7/6/5 days.
    // 14/12/10 tokens: day and joined-interval rows for 7/6/5 days.
    let rows = match tokens.len() {
        21 | 18 | 15 => 3,
        14 | 12 | 10 => 2,
        _ => return s.to_string(),
    };
    let columns = tokens.len() / rows;

    let mut reordered = Vec::with_capacity(tokens.len());
    for day in 0..columns {
        for row in 0..rows {
            reordered.push(tokens[day + row * columns]);
        }
    }

    let joined = reordered.join(" ");
    RE_JOIN_TIME_PAIR.replace_all(&joined, "${1}-${2}").into_owned()
}
