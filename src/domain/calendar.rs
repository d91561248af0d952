//! Local-day normalization shared by every date-bucketing query

use chrono::{DateTime, Datelike, FixedOffset, Local, Months, NaiveDate, Utc};
use std::fmt;

/// A calendar month, with a zero-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month0: u32,
}

impl YearMonth {
    /// Returns `None` when `month0` is not in `0..12`.
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        (month0 < 12).then_some(YearMonth { year, month0 })
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    /// Number of days in this month.
    pub fn days(&self) -> u32 {
        let Some(first) = self.first_day() else {
            return 0;
        };
        first
            .checked_add_months(Months::new(1))
            .map(|next| (next - first).num_days() as u32)
            .unwrap_or(31)
    }

    /// Weekday of the first day, counted from Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn previous(&self) -> Self {
        if self.month0 == 0 {
            YearMonth {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            YearMonth {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month0 + 1)
    }
}

/// Offset rules that place an instant on a local calendar day.
///
/// The offset is looked up per instant, so zones with daylight saving put
/// each entry on the day it was written rather than the day it would be
/// under today's offset.
pub trait DayZone {
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset;
}

impl DayZone for FixedOffset {
    fn offset_at(&self, _instant: &DateTime<Utc>) -> FixedOffset {
        *self
    }
}

impl DayZone for Local {
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        *instant.with_timezone(&Local).offset()
    }
}

/// "Now" as seen from the user's time zone.
///
/// Every conversion from a stored UTC instant to a local day goes through
/// [`LocalCalendar::date_of`], so all queries agree on where a day starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalCalendar<Z = FixedOffset> {
    now: DateTime<Utc>,
    zone: Z,
}

impl LocalCalendar<FixedOffset> {
    /// Calendar pinned to the offset carried by `now`.
    pub fn at(now: DateTime<FixedOffset>) -> Self {
        LocalCalendar::new(now.with_timezone(&Utc), *now.offset())
    }
}

impl<Z: DayZone> LocalCalendar<Z> {
    pub fn new(now: DateTime<Utc>, zone: Z) -> Self {
        LocalCalendar { now, zone }
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.local_time_of(&self.now)
    }

    pub fn today(&self) -> NaiveDate {
        self.date_of(&self.now)
    }

    pub fn this_month(&self) -> YearMonth {
        YearMonth::of(self.today())
    }

    /// Local wall-clock time of a stored instant, using the offset in force at that instant.
    pub fn local_time_of(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.zone.offset_at(instant))
    }

    /// Local calendar day of a stored instant.
    pub fn date_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.local_time_of(instant).date_naive()
    }

    /// Today minus one calendar month, clamped to the end of shorter months.
    pub fn one_month_ago(&self) -> NaiveDate {
        let today = self.today();
        today.checked_sub_months(Months::new(1)).unwrap_or(today)
    }
}

/// Central European rules for 2025 only: CEST between Mar 30 and Oct 26, 01:00 UTC.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Berlin2025;

#[cfg(test)]
impl DayZone for Berlin2025 {
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        use chrono::TimeZone;
        let summer_start = Utc.with_ymd_and_hms(2025, 3, 30, 1, 0, 0).unwrap();
        let summer_end = Utc.with_ymd_and_hms(2025, 10, 26, 1, 0, 0).unwrap();
        let hours = if *instant >= summer_start && *instant < summer_end {
            2
        } else {
            1
        };
        FixedOffset::east_opt(hours * 3600).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn calendar(offset_hours: i32, y: i32, m: u32, d: u32, h: u32) -> LocalCalendar {
        let zone = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        LocalCalendar::at(zone.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    #[test]
    fn test_date_of_uses_local_offset() {
        // 23:30 UTC on Jan 16 is already Jan 17 at UTC+2
        let cal = calendar(2, 2025, 1, 17, 12);
        let instant = Utc.with_ymd_and_hms(2025, 1, 16, 23, 30, 0).unwrap();
        assert_eq!(
            cal.date_of(&instant),
            NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
        );
    }

    #[test]
    fn test_today_uses_local_offset() {
        // 02:00 UTC on Mar 1 is still Feb 28 at UTC-5
        let cal = LocalCalendar::new(
            Utc.with_ymd_and_hms(2025, 3, 1, 2, 0, 0).unwrap(),
            FixedOffset::west_opt(5 * 3600).unwrap(),
        );
        assert_eq!(cal.today(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        assert_eq!(cal.this_month(), YearMonth::new(2025, 1).unwrap());
    }

    #[test]
    fn test_date_of_uses_offset_at_each_instant() {
        // Written at 00:30 CEST on Oct 25, read back after clocks went back to CET
        let cal = LocalCalendar::new(
            Utc.with_ymd_and_hms(2025, 10, 26, 8, 0, 0).unwrap(),
            Berlin2025,
        );
        let before_switch = Utc.with_ymd_and_hms(2025, 10, 24, 22, 30, 0).unwrap();
        assert_eq!(
            cal.date_of(&before_switch),
            NaiveDate::from_ymd_opt(2025, 10, 25).unwrap()
        );
        assert_eq!(cal.local_time_of(&before_switch).offset().local_minus_utc(), 7200);
        assert_eq!(cal.now().offset().local_minus_utc(), 3600);
        assert_eq!(cal.today(), NaiveDate::from_ymd_opt(2025, 10, 26).unwrap());
    }

    #[test]
    fn test_one_month_ago_clamps() {
        let cal = calendar(0, 2025, 3, 31, 8);
        assert_eq!(
            cal.one_month_ago(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_year_month_days_and_weekday() {
        let feb_leap = YearMonth::new(2024, 1).unwrap();
        assert_eq!(feb_leap.days(), 29);
        let feb = YearMonth::new(2025, 1).unwrap();
        assert_eq!(feb.days(), 28);
        let dec = YearMonth::new(2025, 11).unwrap();
        assert_eq!(dec.days(), 31);
        // June 1, 2025 is a Sunday
        assert_eq!(YearMonth::new(2025, 5).unwrap().first_weekday(), 0);
        // January 1, 2025 is a Wednesday
        assert_eq!(YearMonth::new(2025, 0).unwrap().first_weekday(), 3);
    }

    #[test]
    fn test_year_month_rejects_bad_month() {
        assert!(YearMonth::new(2025, 12).is_none());
    }

    #[test]
    fn test_year_month_previous_and_display() {
        let jan = YearMonth::new(2025, 0).unwrap();
        assert_eq!(jan.previous(), YearMonth::new(2024, 11).unwrap());
        assert_eq!(jan.to_string(), "2025-01");
    }
}
