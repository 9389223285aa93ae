//! Weekly ordering of finished entries.
//!
//! Entries sort Monday-first by their earliest day, then by opening hour.
//! The one scheduling wrinkle is a Sunday+Monday pair (a late-night span
//! wrapping the week boundary): it sorts as a Monday entry, and is then
//! split so the Sunday half renders at the end of the week where readers
//! expect it.

use crate::model::{DayCode, HoursEntry};

/// Sort entries into display order and split week-wrapping pairs.
pub fn sort_entries(entries: &mut Vec<HoursEntry>) {
    entries.sort_by_key(weekly_position);
    split_sunday_monday(entries);
}

/// Monday-first position key: day rank 1 (Monday) through 7 (Sunday),
/// weighted above the opening hour. A Sunday+Monday pair takes Monday's
/// rank. The sort is stable, so equal keys keep their parse order.
fn weekly_position(entry: &HoursEntry) -> u32 {
    let Some(&first) = entry.days.first() else {
        return 0;
    };
    let rank = if entry.days.len() > 1
        && first == DayCode::Sunday
        && entry.days[1] == DayCode::Monday
    {
        1
    } else {
        (u32::from(first.index()) + 6) % 7 + 1
    };
    rank * 100 + u32::from(entry.interval.from.hour)
}

/// Split every exact {Sunday, Monday} pair: the entry keeps Monday in place
/// and a Sunday copy is appended after the rest of the week.
fn split_sunday_monday(entries: &mut Vec<HoursEntry>) {
    let original = entries.len();
    for ix in 0..original {
        if entries[ix].days == [DayCode::Sunday, DayCode::Monday] {
            let interval = entries[ix].interval;
            entries[ix].days = vec![DayCode::Monday];
            entries.push(HoursEntry {
                days: vec![DayCode::Sunday],
                interval,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TimeInterval, TimeOfDay};

    fn entry(days: &[DayCode], from_hour: u8) -> HoursEntry {
        HoursEntry {
            days: days.to_vec(),
            interval: TimeInterval::new(
                TimeOfDay::new(from_hour, 0),
                TimeOfDay::new(17, 0),
            ),
        }
    }

    #[test]
    fn test_monday_sorts_before_saturday() {
        let mut entries = vec![
            entry(&[DayCode::Sunday, DayCode::Saturday], 10),
            entry(&[DayCode::Monday, DayCode::Friday], 9),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries[0].days[0], DayCode::Monday);
        assert_eq!(entries[1].days[0], DayCode::Sunday);
    }

    #[test]
    fn test_same_day_sorts_by_opening_hour() {
        let mut entries = vec![
            entry(&[DayCode::Monday], 13),
            entry(&[DayCode::Monday], 9),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries[0].interval.from.hour, 9);
        assert_eq!(entries[1].interval.from.hour, 13);
    }

    #[test]
    fn test_sunday_monday_pair_splits() {
        let mut entries = vec![
            entry(&[DayCode::Sunday, DayCode::Monday], 22),
            entry(&[DayCode::Tuesday], 9),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].days, vec![DayCode::Monday]);
        assert_eq!(entries[1].days, vec![DayCode::Tuesday]);
        assert_eq!(entries[2].days, vec![DayCode::Sunday]);
        assert_eq!(entries[2].interval.from.hour, 22);
    }

    #[test]
    fn test_wider_sunday_set_is_not_split() {
        // Sunday+Monday+Tuesday is a plain enumeration, not a week wrap.
        let mut entries = vec![entry(
            &[DayCode::Sunday, DayCode::Monday, DayCode::Tuesday],
            9,
        )];
        sort_entries(&mut entries);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_sunday_saturday_pair_ranks_as_sunday() {
        // {Sunday, Saturday} is a weekend set; it sorts by Sunday's rank 7,
        // after every weekday entry.
        let mut entries = vec![
            entry(&[DayCode::Sunday, DayCode::Saturday], 8),
            entry(&[DayCode::Friday], 9),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries[0].days[0], DayCode::Friday);
    }
}
