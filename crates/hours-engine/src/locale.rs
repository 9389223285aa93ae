//! Caller-supplied day and month name tables.
//!
//! The engine never consults the system locale: the caller hands over the
//! names (and the reference "now" used for today/tomorrow resolution),
//! keeping the pipeline pure and reproducible.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::DayCode;

/// Localized weekday and month names, Sunday-first / January-first.
///
/// Index 0 of `day_names`/`abbr_day_names` is Sunday, matching the
/// [`DayCode`] numbering. Names may carry any casing; matching always
/// happens on the lowercased forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub day_names: [String; 7],
    pub abbr_day_names: [String; 7],
    pub month_names: [String; 12],
    pub abbr_month_names: [String; 12],
}

fn names<const N: usize>(src: [&str; N]) -> [String; N] {
    src.map(str::to_owned)
}

impl Locale {
    /// The built-in English table.
    pub fn english() -> Locale {
        Locale {
            day_names: names([
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            abbr_day_names: names(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            month_names: names([
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            abbr_month_names: names([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ]),
        }
    }

    /// The lowercased abbreviated weekday name for a date.
    pub fn abbr_day_for(&self, date: NaiveDate) -> String {
        let ix = date.weekday().num_days_from_sunday() as usize;
        self.abbr_day_names[ix].to_lowercase()
    }

    /// Per-day name forms in normalizer replacement order.
    ///
    /// For each day: plural, full name, abbreviation — longest first, so
    /// "mondays" is consumed before "monday" before "mon". Days are visited
    /// Sunday-first, mirroring the table layout.
    pub fn day_forms(&self) -> Vec<(DayCode, [String; 3])> {
        let order = [
            DayCode::Sunday,
            DayCode::Monday,
            DayCode::Tuesday,
            DayCode::Wednesday,
            DayCode::Thursday,
            DayCode::Friday,
            DayCode::Saturday,
        ];
        order
            .into_iter()
            .map(|day| {
                let ix = day.index() as usize;
                let full = self.day_names[ix].to_lowercase();
                let abbr = self.abbr_day_names[ix].to_lowercase();
                (day, [format!("{full}s"), full, abbr])
            })
            .collect()
    }

    /// Per-month name forms (full, abbreviation), lowercased, January-first.
    pub fn month_forms(&self) -> Vec<[String; 2]> {
        (0..12)
            .map(|ix| {
                [
                    self.month_names[ix].to_lowercase(),
                    self.abbr_month_names[ix].to_lowercase(),
                ]
            })
            .collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbr_day_for_known_dates() {
        let locale = Locale::english();
        // 2026-02-18 is a Wednesday
        let wed = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
        assert_eq!(locale.abbr_day_for(wed), "wed");
        let sun = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap();
        assert_eq!(locale.abbr_day_for(sun), "sun");
    }

    #[test]
    fn test_day_forms_longest_first() {
        let locale = Locale::english();
        let forms = locale.day_forms();
        assert_eq!(forms[0].0, DayCode::Sunday);
        assert_eq!(forms[0].1, ["sundays".to_string(), "sunday".into(), "sun".into()]);
        assert_eq!(forms[1].0, DayCode::Monday);
    }

    #[test]
    fn test_locale_round_trips_through_json() {
        let locale = Locale::english();
        let json = serde_json::to_string(&locale).unwrap();
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }
}
