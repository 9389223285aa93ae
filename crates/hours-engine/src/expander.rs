//! Expansion of day-code ranges into enumerated day runs.
//!
//! `MM-FF` becomes `MMTTWWRRFF`; `SS-TT` wraps over the weekend into
//! `SSUUMMTT`. Expansion walks forward through [`DAY_CODE_VECTOR`] from the
//! range's start code, so week wrap-around needs no modulo arithmetic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::DAY_CODE_VECTOR;

static RE_DAY_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]{2})-([A-Z]{2})").unwrap());

/// Replace every well-formed day-code range with its enumerated run.
///
/// A range whose end code is unreachable within six forward steps (an unknown
/// code, or a degenerate range like `MM-MM`) is left in place and skipped;
/// the leftover dash makes the builder reject it downstream.
pub fn expand_ranges(s: &str) -> String {
    let mut out = s.to_string();
    let mut search_from = 0;
    while let Some((start, end, run)) = next_range(&out, search_from) {
        match run {
            Some(run) => {
                out.replace_range(start..end, &run);
                // An expansion can expose a new range on its left flank, so
                // restart from the beginning.
                search_from = 0;
            }
            None => search_from = end,
        }
    }
    out
}

/// Find the next range match at or after `from`: its absolute span, plus the
/// enumerated run when the range is well-formed.
fn next_range(s: &str, from: usize) -> Option<(usize, usize, Option<String>)> {
    let caps = RE_DAY_RANGE.captures(&s[from..])?;
    let whole = caps.get(0)?;
    let run = match (caps.get(1), caps.get(2)) {
        (Some(start), Some(end)) => walk(start.as_str(), end.as_str()),
        _ => None,
    };
    Some((from + whole.start(), from + whole.end(), run))
}

/// Walk the unrolled day vector from `start` until `end`, collecting codes.
/// Returns `None` when either code is unknown or `end` is not strictly ahead
/// of `start` within a week.
fn walk(start: &str, end: &str) -> Option<String> {
    let start_ix = DAY_CODE_VECTOR.iter().position(|d| d.code() == start)?;
    let mut run = String::from(start);
    for step in 1..=6 {
        let day = DAY_CODE_VECTOR[start_ix + step];
        run.push_str(day.code());
        if day.code() == end {
            return Some(run);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_forward_range() {
        assert_eq!(expand_ranges("MM-FF09:00-17:00"), "MMTTWWRRFF09:00-17:00");
    }

    #[test]
    fn test_full_week() {
        assert_eq!(expand_ranges("MM-UU00:00-00:00"), "MMTTWWRRFFSSUU00:00-00:00");
    }

    #[test]
    fn test_wrapping_range() {
        // Saturday through Tuesday crosses the week boundary.
        assert_eq!(expand_ranges("SS-TT10:00-14:00"), "SSUUMMTT10:00-14:00");
    }

    #[test]
    fn test_adjacent_pair() {
        assert_eq!(expand_ranges("UU-MM22:00-02:00"), "UUMM22:00-02:00");
    }

    #[test]
    fn test_multiple_ranges() {
        assert_eq!(
            expand_ranges("MM-WW09:00-17:00FF-SS10:00-14:00"),
            "MMTTWW09:00-17:00FFSS10:00-14:00"
        );
    }

    #[test]
    fn test_degenerate_range_left_alone() {
        assert_eq!(expand_ranges("MM-MM09:00-17:00"), "MM-MM09:00-17:00");
    }

    #[test]
    fn test_unknown_code_left_alone() {
        assert_eq!(expand_ranges("XX-FF09:00-17:00"), "XX-FF09:00-17:00");
    }

    #[test]
    fn test_no_range_is_untouched() {
        assert_eq!(expand_ranges("MMTT09:00-17:00"), "MMTT09:00-17:00");
    }
}
