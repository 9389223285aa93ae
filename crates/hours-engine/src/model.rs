//! The typed data model shared by every pipeline stage.
//!
//! Day codes and the closed/all-day sentinels are small closed enumerations
//! rather than ad hoc string markers, so the validator and sorter get
//! exhaustiveness checking from the compiler.

use serde::Serialize;
use std::fmt;

// ── Day codes ───────────────────────────────────────────────────────────────

/// A canonical weekday, numbered Sunday = 0 … Saturday = 6.
///
/// The numbering matches the locale table layout (Sunday-first) and the
/// integer day list handed to caller-supplied entry factories. The two-letter
/// wire codes (`MM`, `TT`, `WW`, `RR`, `FF`, `SS`, `UU`) are what the
/// normalizer emits and the later stages consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DayCode {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl DayCode {
    /// All days in wire-code scan order (Monday first, Sunday last).
    pub const SCAN_ORDER: [DayCode; 7] = [
        DayCode::Monday,
        DayCode::Tuesday,
        DayCode::Wednesday,
        DayCode::Thursday,
        DayCode::Friday,
        DayCode::Saturday,
        DayCode::Sunday,
    ];

    /// The two-letter wire code for this day.
    pub const fn code(self) -> &'static str {
        match self {
            DayCode::Sunday => "UU",
            DayCode::Monday => "MM",
            DayCode::Tuesday => "TT",
            DayCode::Wednesday => "WW",
            DayCode::Thursday => "RR",
            DayCode::Friday => "FF",
            DayCode::Saturday => "SS",
        }
    }

    /// Look a day up by its two-letter wire code.
    pub fn from_code(code: &str) -> Option<DayCode> {
        DayCode::SCAN_ORDER.iter().copied().find(|d| d.code() == code)
    }

    /// The Sunday = 0 … Saturday = 6 index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Look a day up by its Sunday = 0 … Saturday = 6 index, modulo 7.
    pub const fn from_index(ix: u8) -> DayCode {
        match ix % 7 {
            0 => DayCode::Sunday,
            1 => DayCode::Monday,
            2 => DayCode::Tuesday,
            3 => DayCode::Wednesday,
            4 => DayCode::Thursday,
            5 => DayCode::Friday,
            _ => DayCode::Saturday,
        }
    }

    /// The calendar day before this one.
    pub const fn previous(self) -> DayCode {
        DayCode::from_index((self.index() + 6) % 7)
    }
}

impl Serialize for DayCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

/// The day-code cycle unrolled from Monday for ~2.7 weeks.
///
/// Range expansion walks forward through this vector instead of doing modulo
/// arithmetic: any day's first occurrence sits in the first cycle, and any
/// other day is then reachable within 6 further steps.
pub const DAY_CODE_VECTOR: [DayCode; 19] = [
    DayCode::Monday,
    DayCode::Tuesday,
    DayCode::Wednesday,
    DayCode::Thursday,
    DayCode::Friday,
    DayCode::Saturday,
    DayCode::Sunday,
    DayCode::Monday,
    DayCode::Tuesday,
    DayCode::Wednesday,
    DayCode::Thursday,
    DayCode::Friday,
    DayCode::Saturday,
    DayCode::Sunday,
    DayCode::Monday,
    DayCode::Tuesday,
    DayCode::Wednesday,
    DayCode::Thursday,
    DayCode::Friday,
];

// ── Times and intervals ─────────────────────────────────────────────────────

/// A wall-clock time of day.
///
/// Hours above 23 and minutes above 59 are representable on purpose: the
/// closed sentinel (99:99) and malformed input both have to survive until
/// the validator's bounds check. `Ord` is lexicographic on (hour, minute),
/// which matches string comparison of the `HH:MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay { hour, minute }
    }

    pub const MIDNIGHT: TimeOfDay = TimeOfDay::new(0, 0);
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An open/close pair.
///
/// `to <= from` means the interval crosses midnight, except the all-day
/// sentinel 00:00–00:00. The closed sentinel 99:99–99:99 marks an explicit
/// closure; it occupies a day slot during building but never reaches output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeInterval {
    pub from: TimeOfDay,
    pub to: TimeOfDay,
}

/// String form of the closed sentinel as it appears mid-pipeline.
pub const CLOSED_TOKEN: &str = "99:99-99:99";

impl TimeInterval {
    pub const fn new(from: TimeOfDay, to: TimeOfDay) -> TimeInterval {
        TimeInterval { from, to }
    }

    /// Open the full day.
    pub const ALL_DAY: TimeInterval =
        TimeInterval::new(TimeOfDay::MIDNIGHT, TimeOfDay::MIDNIGHT);

    /// Explicitly closed.
    pub const CLOSED: TimeInterval =
        TimeInterval::new(TimeOfDay::new(99, 99), TimeOfDay::new(99, 99));

    pub fn is_all_day(&self) -> bool {
        *self == TimeInterval::ALL_DAY
    }

    pub fn is_closed(&self) -> bool {
        *self == TimeInterval::CLOSED
    }

    /// Whether the close time lands on or before the open time without being
    /// the all-day sentinel.
    pub fn crosses_midnight(&self) -> bool {
        !self.is_all_day() && self.to <= self.from
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

// ── Entries and results ─────────────────────────────────────────────────────

/// One weekly-hours line: a non-empty ascending day set and its interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursEntry {
    pub days: Vec<DayCode>,
    pub interval: TimeInterval,
}

impl HoursEntry {
    /// The open time as an `HH:MM` string.
    pub fn from_hour(&self) -> String {
        self.interval.from.to_string()
    }

    /// The close time as an `HH:MM` string.
    pub fn to_hour(&self) -> String {
        self.interval.to.to_string()
    }
}

/// The outcome of a parse: entries in weekly order plus three flags.
///
/// `parse_error` is fatal and implies `entries` is empty. The two advisory
/// flags (`overlapping_hours`, `same_open_and_close_times`) are returned
/// alongside usable entries so callers can display them for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult<T = HoursEntry> {
    pub entries: Vec<T>,
    pub parse_error: bool,
    pub overlapping_hours: bool,
    pub same_open_and_close_times: bool,
}

impl<T> ParseResult<T> {
    /// The empty, flag-free result ("" / "," / bare "closed" inputs).
    pub fn empty() -> ParseResult<T> {
        ParseResult {
            entries: Vec::new(),
            parse_error: false,
            overlapping_hours: false,
            same_open_and_close_times: false,
        }
    }

    /// The fatal outcome: no entries, `parse_error` set.
    pub fn error() -> ParseResult<T> {
        ParseResult {
            entries: Vec::new(),
            parse_error: true,
            overlapping_hours: false,
            same_open_and_close_times: false,
        }
    }
}

impl<T> Default for ParseResult<T> {
    fn default() -> Self {
        ParseResult::empty()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_code_round_trip() {
        for day in DayCode::SCAN_ORDER {
            assert_eq!(DayCode::from_code(day.code()), Some(day));
        }
        assert_eq!(DayCode::from_code("XX"), None);
    }

    #[test]
    fn test_day_code_indices_sunday_first() {
        assert_eq!(DayCode::Sunday.index(), 0);
        assert_eq!(DayCode::Monday.index(), 1);
        assert_eq!(DayCode::Saturday.index(), 6);
    }

    #[test]
    fn test_vector_reaches_any_day_within_six_steps() {
        for start in DayCode::SCAN_ORDER {
            let start_ix = DAY_CODE_VECTOR.iter().position(|&d| d == start).unwrap();
            assert!(start_ix < 7);
            for end in DayCode::SCAN_ORDER {
                if end == start {
                    continue;
                }
                let found = (start_ix + 1..=start_ix + 6).any(|i| DAY_CODE_VECTOR[i] == end);
                assert!(found, "{end:?} not reachable from {start:?}");
            }
        }
    }

    #[test]
    fn test_time_of_day_display_zero_pads() {
        assert_eq!(TimeOfDay::new(9, 5).to_string(), "09:05");
        assert_eq!(TimeOfDay::new(23, 59).to_string(), "23:59");
    }

    #[test]
    fn test_time_ordering_matches_string_form() {
        let a = TimeOfDay::new(9, 30);
        let b = TimeOfDay::new(17, 0);
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_interval_predicates() {
        assert!(TimeInterval::ALL_DAY.is_all_day());
        assert!(!TimeInterval::ALL_DAY.crosses_midnight());
        assert!(TimeInterval::CLOSED.is_closed());

        let late = TimeInterval::new(TimeOfDay::new(22, 0), TimeOfDay::new(2, 0));
        assert!(late.crosses_midnight());

        let plain = TimeInterval::new(TimeOfDay::new(9, 0), TimeOfDay::new(17, 0));
        assert!(!plain.crosses_midnight());
    }

    #[test]
    fn test_time_serializes_as_hh_mm_string() {
        let json = serde_json::to_string(&TimeOfDay::new(8, 0)).unwrap();
        assert_eq!(json, "\"08:00\"");
    }

    #[test]
    fn test_day_code_serializes_as_index() {
        let json = serde_json::to_string(&[DayCode::Sunday, DayCode::Saturday]).unwrap();
        assert_eq!(json, "[0,6]");
    }

    #[test]
    fn test_entry_serializes_flat() {
        let entry = HoursEntry {
            days: vec![DayCode::Monday, DayCode::Friday],
            interval: TimeInterval::new(TimeOfDay::new(9, 0), TimeOfDay::new(17, 0)),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"days":[1,5],"interval":{"from":"09:00","to":"17:00"}}"#
        );
    }
}
