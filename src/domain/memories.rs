//! Recall of past entries by calendar date

use crate::domain::calendar::{DayZone, LocalCalendar};
use crate::domain::entry::Entry;
use chrono::Datelike;

/// Entries written on today's month and day in a previous year, newest first.
///
/// Matching is exact on month and day, so Feb 29 entries only come back on
/// Feb 29.
pub fn on_this_day<'a, Z: DayZone>(
    entries: &'a [Entry],
    calendar: &LocalCalendar<Z>,
) -> Vec<&'a Entry> {
    let today = calendar.today();
    let mut matches: Vec<&Entry> = entries
        .iter()
        .filter(|entry| {
            let date = calendar.date_of(&entry.date);
            date.month() == today.month()
                && date.day() == today.day()
                && date.year() != today.year()
        })
        .collect();
    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches
}

/// Entries written exactly one calendar month before today.
///
/// The target day is clamped to the end of a shorter month, so on Mar 31 this
/// recalls Feb 28 (or 29) rather than rolling forward into March.
pub fn one_month_ago<'a, Z: DayZone>(
    entries: &'a [Entry],
    calendar: &LocalCalendar<Z>,
) -> Vec<&'a Entry> {
    let target = calendar.one_month_ago();
    entries
        .iter()
        .filter(|entry| calendar.date_of(&entry.date) == target)
        .collect()
}

/// Whole years between an entry and today, by calendar year.
pub fn years_ago<Z: DayZone>(entry: &Entry, calendar: &LocalCalendar<Z>) -> i32 {
    calendar.today().year() - calendar.date_of(&entry.date).year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn calendar(y: i32, m: u32, d: u32) -> LocalCalendar {
        let zone = FixedOffset::east_opt(0).unwrap();
        LocalCalendar::at(zone.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
    }

    fn entry(id: i64, y: i32, m: u32, d: u32) -> Entry {
        let created = Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap();
        Entry::new(id, format!("entry {}", id), None, None, created)
    }

    #[test]
    fn test_on_this_day_matches_previous_years() {
        let entries = vec![
            entry(1, 2025, 6, 15),
            entry(2, 2025, 6, 14),
            entry(3, 2023, 6, 15),
            entry(4, 2024, 6, 15),
        ];
        let cal = calendar(2025, 6, 15);
        let ids: Vec<i64> = on_this_day(&entries, &cal).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 3]);
    }

    #[test]
    fn test_leap_day_only_on_leap_day() {
        let entries = vec![entry(1, 2024, 2, 29)];
        assert!(on_this_day(&entries, &calendar(2025, 2, 28)).is_empty());
        assert!(on_this_day(&entries, &calendar(2025, 3, 1)).is_empty());
        assert_eq!(on_this_day(&entries, &calendar(2028, 2, 29)).len(), 1);
    }

    #[test]
    fn test_one_month_ago_clamps_to_month_end() {
        let entries = vec![entry(1, 2025, 2, 28), entry(2, 2025, 3, 3)];
        let ids: Vec<i64> = one_month_ago(&entries, &calendar(2025, 3, 31))
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_one_month_ago() {
        let entries = vec![
            entry(1, 2025, 5, 15),
            entry(2, 2025, 5, 16),
            entry(3, 2024, 5, 15),
        ];
        let ids: Vec<i64> = one_month_ago(&entries, &calendar(2025, 6, 15))
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_years_ago() {
        let e = entry(1, 2022, 6, 15);
        assert_eq!(years_ago(&e, &calendar(2025, 6, 15)), 3);
    }
}
