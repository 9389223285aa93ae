//! Segmentation: gluing the normalized string into day/time segments and
//! splitting it into classified tokens.
//!
//! [`coalesce`] runs before range expansion and removes every remaining
//! space, leaving a dense string of day runs and intervals. [`tokenize`] runs
//! after expansion and cuts that string at every day/time boundary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseError, Result};

// ── Coalescing ──────────────────────────────────────────────────────────────

static RE_DAY_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^0-9]+):").unwrap());
static RE_SPLIT_SHIFT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([A-Z \-]{2,}) *([0-9]{2}:[0-9]{2} *- *[0-9]{2}:[0-9]{2}) *([0-9]{2}:[0-9]{2} *- *[0-9]{2}:[0-9]{2})",
    )
    .unwrap()
});
static RE_ADJACENT_TIMES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2}:[0-9]{2}) *([0-9]{2}:[0-9]{2})").unwrap());

/// Dash-separated day enumerations ("MM-WW-FF") collapse into plain runs,
/// longest first so a seven-day enumeration is handled in one replacement.
static RE_DAY_DASH_RUNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (
            r"([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})",
            "${1}${2}${3}${4}${5}${6}${7}",
        ),
        (
            r"([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})",
            "${1}${2}${3}${4}${5}${6}",
        ),
        (
            r"([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})",
            "${1}${2}${3}${4}${5}",
        ),
        (
            r"([A-Z]{2})-([A-Z]{2})-([A-Z]{2})-([A-Z]{2})",
            "${1}${2}${3}${4}",
        ),
        (r"([A-Z]{2})-([A-Z]{2})-([A-Z]{2})", "${1}${2}${3}"),
    ]
    .into_iter()
    .map(|(pattern, rewrite)| (Regex::new(pattern).unwrap(), rewrite))
    .collect()
});

/// Glue day groups to their intervals and drop every remaining space.
///
/// A day group followed by two intervals is a split shift; the group is
/// duplicated in front of the second interval so each interval keeps its own
/// day run. Exactly three-or-more dashed day codes are an enumeration, not a
/// range, and collapse into a plain run before range expansion can see them.
pub fn coalesce(s: &str) -> String {
    let s = RE_DAY_COLON.replace_all(s, "${1} ");
    let s = RE_SPLIT_SHIFT.replace_all(&s, "${1}${2}${1}${3}");
    let s = RE_ADJACENT_TIMES.replace_all(&s, "${1}-${2}");
    let mut s = s.replace(' ', "");
    for (re, rewrite) in RE_DAY_DASH_RUNS.iter() {
        s = re.replace_all(&s, *rewrite).into_owned();
    }
    s
}

// ── Tokenizing ──────────────────────────────────────────────────────────────

static RE_DAY_THEN_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])-?:?([0-9])").unwrap());
static RE_TIME_THEN_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9])-?:?([A-Z])").unwrap());
static RE_SECONDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2}:[0-9]{2}):00").unwrap());

/// The dense string cut into parallel day-run and time-range token lists,
/// in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    pub day_tokens: Vec<String>,
    pub time_tokens: Vec<String>,
}

/// Split the coalesced, expanded string at every day/time boundary and
/// classify each token by its first character.
///
/// # Errors
///
/// A token starting with anything but a day letter or a digit is reported as
/// [`ParseError::UnexpectedToken`].
pub fn tokenize(s: &str) -> Result<Segments> {
    let s = RE_DAY_THEN_TIME.replace_all(s, "${1}|${2}");
    let s = RE_TIME_THEN_DAY.replace_all(&s, "${1}|${2}");
    let s = RE_SECONDS.replace_all(&s, "${1}");

    let mut day_tokens = Vec::new();
    let mut time_tokens = Vec::new();
    for token in s.split('|').filter(|t| !t.is_empty()) {
        match token.chars().next() {
            Some(c) if c.is_ascii_uppercase() => day_tokens.push(token.to_string()),
            Some(c) if c.is_ascii_digit() => time_tokens.push(token.to_string()),
            _ => return Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }
    Ok(Segments {
        day_tokens,
        time_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── coalesce ────────────────────────────────────────────────────────

    #[test]
    fn test_spaces_removed() {
        assert_eq!(coalesce("MM-FF 09:00-17:00"), "MM-FF09:00-17:00");
    }

    #[test]
    fn test_day_colon_becomes_space() {
        assert_eq!(coalesce("MM-FF: 09:00-17:00"), "MM-FF09:00-17:00");
    }

    #[test]
    fn test_split_shift_duplicates_day_group() {
        assert_eq!(
            coalesce("MM-FF 09:00-12:00 13:00-17:00"),
            "MM-FF09:00-12:00MM-FF13:00-17:00"
        );
    }

    #[test]
    fn test_adjacent_times_joined() {
        assert_eq!(coalesce("MM 09:00 17:00"), "MM09:00-17:00");
    }

    #[test]
    fn test_dashed_enumeration_collapses() {
        assert_eq!(coalesce("MM-WW-FF 09:00-17:00"), "MMWWFF09:00-17:00");
        assert_eq!(
            coalesce("MM-TT-WW-RR-FF 09:00-17:00"),
            "MMTTWWRRFF09:00-17:00"
        );
    }

    #[test]
    fn test_plain_range_survives() {
        // Two dashed codes stay a range for the expander.
        assert_eq!(coalesce("MM-FF09:00-17:00"), "MM-FF09:00-17:00");
    }

    // ── tokenize ────────────────────────────────────────────────────────

    #[test]
    fn test_day_and_time_tokens_split() {
        let segments = tokenize("MMTTWWRRFF09:00-17:00SS10:00-14:00").unwrap();
        assert_eq!(segments.day_tokens, vec!["MMTTWWRRFF", "SS"]);
        assert_eq!(segments.time_tokens, vec!["09:00-17:00", "10:00-14:00"]);
    }

    #[test]
    fn test_seconds_stripped() {
        let segments = tokenize("MM09:00:00-17:00:00").unwrap();
        assert_eq!(segments.time_tokens, vec!["09:00-17:00"]);
    }

    #[test]
    fn test_empty_string_yields_no_tokens() {
        let segments = tokenize("").unwrap();
        assert!(segments.day_tokens.is_empty());
        assert!(segments.time_tokens.is_empty());
    }

    #[test]
    fn test_time_before_day_order_is_preserved() {
        let segments = tokenize("99:99-99:99UU").unwrap();
        assert_eq!(segments.day_tokens, vec!["UU"]);
        assert_eq!(segments.time_tokens, vec!["99:99-99:99"]);
    }
}
