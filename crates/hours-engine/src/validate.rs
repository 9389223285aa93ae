//! Entry validation: the fatal bounds check and the two advisory flags.
//!
//! Bounds checking runs first and rejects any clock field outside a real
//! day (a closed sentinel that leaked past the builder would land here).
//! The advisory checks never fail a parse; they flag schedules that are
//! structurally valid but probably not what the author meant.

use crate::error::{ParseError, Result};
use crate::model::{DayCode, HoursEntry, TimeOfDay};

/// Reject any entry whose open or close time is outside 00:00–23:59.
pub fn check_bounds(entries: &[HoursEntry]) -> Result<()> {
    for entry in entries {
        for time in [entry.interval.from, entry.interval.to] {
            if time.hour > 23 || time.minute > 59 {
                return Err(ParseError::TimeOutOfRange(time.to_string()));
            }
        }
    }
    Ok(())
}

/// Whether any two spans on the same calendar day strictly overlap.
///
/// Spans are compared per day on an HHMM number line. A span crossing
/// midnight contributes twice: to its own day extended past 2400, and to the
/// following day shifted below zero, so a late-night close collides with the
/// next morning's opening. The all-day sentinel stays as the plain point
/// pair (0, 0) and therefore never overlaps anything. Endpoints that merely
/// touch do not count.
pub fn has_overlapping_hours(entries: &[HoursEntry]) -> bool {
    for day in DayCode::SCAN_ORDER {
        let mut spans: Vec<(i32, i32)> = Vec::new();
        for entry in entries {
            let from = hhmm(entry.interval.from);
            let to = hhmm(entry.interval.to);
            let crosses = entry.interval.crosses_midnight();
            if entry.days.contains(&day) {
                spans.push((from, if crosses { to + 2400 } else { to }));
            }
            if crosses && entry.days.contains(&day.previous()) {
                spans.push((from - 2400, to));
            }
        }
        for (ix, a) in spans.iter().enumerate() {
            for b in &spans[ix + 1..] {
                if strictly_inside(b.0, *a)
                    || strictly_inside(b.1, *a)
                    || strictly_inside(a.0, *b)
                    || strictly_inside(a.1, *b)
                {
                    return true;
                }
            }
        }
    }
    false
}

/// Whether any entry opens and closes at the same non-midnight instant.
/// 00:00–00:00 is the deliberate all-day form; any other zero-length
/// interval is almost certainly a typo.
pub fn has_same_open_and_close(entries: &[HoursEntry]) -> bool {
    entries.iter().any(|entry| {
        entry.interval.from == entry.interval.to && entry.interval.from != TimeOfDay::MIDNIGHT
    })
}

fn hhmm(time: TimeOfDay) -> i32 {
    i32::from(time.hour) * 100 + i32::from(time.minute)
}

fn strictly_inside(point: i32, (lo, hi): (i32, i32)) -> bool {
    point > lo && point < hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TimeInterval, TimeOfDay};

    fn entry(days: &[DayCode], from: (u8, u8), to: (u8, u8)) -> HoursEntry {
        HoursEntry {
            days: days.to_vec(),
            interval: TimeInterval::new(
                TimeOfDay::new(from.0, from.1),
                TimeOfDay::new(to.0, to.1),
            ),
        }
    }

    // ── bounds ──────────────────────────────────────────────────────────

    #[test]
    fn test_bounds_accept_real_times() {
        let entries = vec![entry(&[DayCode::Monday], (0, 0), (23, 59))];
        assert!(check_bounds(&entries).is_ok());
    }

    #[test]
    fn test_bounds_reject_sentinel_leak() {
        let entries = vec![entry(&[DayCode::Monday], (99, 99), (99, 99))];
        assert!(matches!(
            check_bounds(&entries),
            Err(ParseError::TimeOutOfRange(_))
        ));
    }

    #[test]
    fn test_bounds_reject_hour_24() {
        let entries = vec![entry(&[DayCode::Monday], (9, 0), (24, 0))];
        assert!(check_bounds(&entries).is_err());
    }

    // ── overlap ─────────────────────────────────────────────────────────

    #[test]
    fn test_disjoint_days_do_not_overlap() {
        let entries = vec![
            entry(&[DayCode::Monday], (9, 0), (17, 0)),
            entry(&[DayCode::Tuesday], (9, 0), (17, 0)),
        ];
        assert!(!has_overlapping_hours(&entries));
    }

    #[test]
    fn test_same_day_overlap_detected() {
        let entries = vec![
            entry(&[DayCode::Monday], (9, 0), (17, 0)),
            entry(&[DayCode::Monday], (16, 0), (20, 0)),
        ];
        assert!(has_overlapping_hours(&entries));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let entries = vec![
            entry(&[DayCode::Monday], (9, 0), (12, 0)),
            entry(&[DayCode::Monday], (12, 0), (17, 0)),
        ];
        assert!(!has_overlapping_hours(&entries));
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let entries = vec![
            entry(&[DayCode::Monday], (9, 0), (17, 0)),
            entry(&[DayCode::Monday], (10, 0), (11, 0)),
        ];
        assert!(has_overlapping_hours(&entries));
    }

    #[test]
    fn test_midnight_carryover_collides_with_early_morning() {
        // Sunday-Monday 22:00-02:00 spills into Monday 00:00-02:00 and must
        // collide with a Monday 01:00-05:00 entry.
        let entries = vec![
            entry(&[DayCode::Sunday, DayCode::Monday], (22, 0), (2, 0)),
            entry(&[DayCode::Monday], (1, 0), (5, 0)),
        ];
        assert!(has_overlapping_hours(&entries));
    }

    #[test]
    fn test_midnight_span_alone_does_not_self_overlap() {
        let entries = vec![entry(&[DayCode::Sunday, DayCode::Monday], (22, 0), (2, 0))];
        assert!(!has_overlapping_hours(&entries));
    }

    #[test]
    fn test_all_day_never_overlaps() {
        let entries = vec![
            entry(&[DayCode::Monday], (0, 0), (0, 0)),
            entry(&[DayCode::Monday], (9, 0), (17, 0)),
        ];
        assert!(!has_overlapping_hours(&entries));
    }

    // ── same open and close ─────────────────────────────────────────────

    #[test]
    fn test_degenerate_interval_flagged() {
        let entries = vec![entry(&[DayCode::Monday], (9, 0), (9, 0))];
        assert!(has_same_open_and_close(&entries));
    }

    #[test]
    fn test_all_day_not_flagged_as_degenerate() {
        let entries = vec![entry(&[DayCode::Monday], (0, 0), (0, 0))];
        assert!(!has_same_open_and_close(&entries));
    }
}
