//! Consecutive-day streak computation

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Count consecutive days ending at the most recent entry day.
///
/// The chain only counts while it is alive: the most recent entry must fall
/// on `today` or the day before. A streak that ended yesterday still reports
/// its length until a full day passes without an entry.
pub fn compute_streak(entry_days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(&last_day) = entry_days.last() else {
        return 0;
    };

    let yesterday = today - Duration::days(1);
    if last_day != today && last_day != yesterday {
        return 0;
    }

    let mut streak = 0;
    let mut check = last_day;
    while entry_days.contains(&check) {
        streak += 1;
        check -= Duration::days(1);
    }
    streak
}

/// Whether a given day within the trailing week had an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub has_entry: bool,
    pub is_today: bool,
}

/// The seven days ending today, oldest first.
pub fn week_activity(entry_days: &BTreeSet<NaiveDate>, today: NaiveDate) -> Vec<DayActivity> {
    (0..7)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            DayActivity {
                date,
                has_entry: entry_days.contains(&date),
                is_today: back == 0,
            }
        })
        .collect()
}

/// Milestone band a streak falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakLevel {
    /// No active streak
    Start,
    /// 1-6 days
    Sprout,
    /// 7-29 days
    Fire,
    /// 30-99 days
    Star,
    /// 100 days or more
    Legend,
}

impl StreakLevel {
    pub fn for_streak(streak: u32) -> Self {
        match streak {
            0 => StreakLevel::Start,
            1..=6 => StreakLevel::Sprout,
            7..=29 => StreakLevel::Fire,
            30..=99 => StreakLevel::Star,
            _ => StreakLevel::Legend,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StreakLevel::Start => "🌱",
            StreakLevel::Sprout => "🌿",
            StreakLevel::Fire => "🔥",
            StreakLevel::Star => "⭐",
            StreakLevel::Legend => "🏆",
        }
    }
}

/// Encouragement shown next to a streak count.
pub fn streak_message(streak: u32) -> &'static str {
    match streak {
        0 => "Start your streak today!",
        1 => "Great start! Keep it going!",
        2..=6 => "Building momentum!",
        7..=29 => "You're on fire! 🔥",
        30..=99 => "Incredible dedication!",
        _ => "Legendary journaler! 🏆",
    }
}
