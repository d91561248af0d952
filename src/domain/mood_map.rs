//! Month calendar view of entries and moods

use crate::domain::calendar::{DayZone, LocalCalendar, YearMonth};
use crate::domain::entry::{Entry, EntryId, Mood};
use crate::domain::mood_stats::MoodStats;
use chrono::{Datelike, NaiveDate};

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub entry_count: usize,
    /// Most recent entry of the day
    pub latest: Option<EntryId>,
    pub mood: Option<Mood>,
    pub has_photo: bool,
    pub is_today: bool,
}

/// A month laid out as a Sunday-first grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendar {
    pub month: YearMonth,
    /// Empty cells before day 1
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
    pub stats: MoodStats,
}

impl MonthCalendar {
    /// Build the grid for `month` from the entries that fall in it.
    pub fn build<Z: DayZone>(
        month: YearMonth,
        month_entries: &[&Entry],
        calendar: &LocalCalendar<Z>,
    ) -> Self {
        let today = calendar.today();
        let mut days = Vec::with_capacity(month.days() as usize);

        for day in 1..=month.days() {
            let Some(date) = NaiveDate::from_ymd_opt(month.year, month.month0 + 1, day) else {
                continue;
            };
            let on_day: Vec<&Entry> = month_entries
                .iter()
                .copied()
                .filter(|e| calendar.date_of(&e.date).day() == day)
                .collect();
            let latest = on_day.iter().copied().max_by_key(|e| (e.date, e.id));

            days.push(CalendarDay {
                date,
                entry_count: on_day.len(),
                latest: latest.map(|e| e.id),
                mood: latest.and_then(|e| e.known_mood().cloned()),
                has_photo: latest.is_some_and(|e| e.photo.is_some()),
                is_today: date == today,
            });
        }

        MonthCalendar {
            month,
            leading_blanks: month.first_weekday(),
            days,
            stats: MoodStats::tally(month_entries.iter().copied()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn calendar() -> LocalCalendar {
        let zone = FixedOffset::east_opt(0).unwrap();
        LocalCalendar::at(zone.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap())
    }

    fn entry(id: i64, d: u32, h: u32, mood: Option<Mood>) -> Entry {
        let created = Utc.with_ymd_and_hms(2025, 6, d, h, 0, 0).unwrap();
        Entry::new(id, format!("entry {}", id), mood, None, created)
    }

    #[test]
    fn test_grid_shape() {
        let month = YearMonth::new(2025, 5).unwrap();
        let grid = MonthCalendar::build(month, &[], &calendar());
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.days.len(), 30);
        assert!(grid.days[9].is_today);
        assert_eq!(grid.stats.total(), 0);
    }

    #[test]
    fn test_latest_entry_wins_day() {
        let entries = [
            entry(3, 10, 20, Some(Mood::Tired)),
            entry(2, 10, 8, Some(Mood::Happy)),
            entry(1, 3, 8, None),
        ];
        let refs: Vec<&Entry> = entries.iter().collect();
        let month = YearMonth::new(2025, 5).unwrap();
        let grid = MonthCalendar::build(month, &refs, &calendar());

        let tenth = &grid.days[9];
        assert_eq!(tenth.entry_count, 2);
        assert_eq!(tenth.latest, Some(3));
        assert_eq!(tenth.mood, Some(Mood::Tired));

        let third = &grid.days[2];
        assert_eq!(third.latest, Some(1));
        assert_eq!(third.mood, None);
        assert_eq!(grid.stats.total(), 2);
    }
}
