//! Locally generated observations about journaling habits

use crate::domain::calendar::{DayZone, LocalCalendar};
use crate::domain::entry::{Entry, Mood};
use crate::domain::mood_stats::MoodStats;
use chrono::{Datelike, Timelike};

/// Most insights shown at once
pub const MAX_INSIGHTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Tip,
    Mood,
    Consistency,
    Pattern,
    Words,
    Time,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub text: String,
}

impl Insight {
    fn new(kind: InsightKind, title: &str, text: impl Into<String>) -> Self {
        Insight {
            kind,
            title: title.to_string(),
            text: text.into(),
        }
    }
}

/// Part of the day an entry was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritingTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl WritingTime {
    const ALL: [WritingTime; 4] = [
        WritingTime::Morning,
        WritingTime::Afternoon,
        WritingTime::Evening,
        WritingTime::Night,
    ];

    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => WritingTime::Morning,
            12..=16 => WritingTime::Afternoon,
            17..=20 => WritingTime::Evening,
            _ => WritingTime::Night,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            WritingTime::Morning => {
                "You're a morning journaler! Starting the day with reflection is powerful."
            }
            WritingTime::Afternoon => {
                "Afternoon is your journaling time. A great way to pause and reflect."
            }
            WritingTime::Evening => "You prefer evening journaling. Perfect for processing the day.",
            WritingTime::Night => "Night owl writer! Late-night reflections can be the deepest.",
        }
    }
}

fn mood_message(mood: &Mood) -> &'static str {
    match mood {
        Mood::Happy => "You've been feeling mostly happy this month! Keep doing what you're doing.",
        Mood::Neutral => "Your mood has been steady and neutral this month. Consistency is key!",
        Mood::Sad => {
            "It seems like you've had some challenging days. Remember, writing about it helps."
        }
        Mood::Frustrated => {
            "You've expressed some frustration lately. Journaling is a great outlet!"
        }
        Mood::Tired => "Looks like you've been tired. Consider reviewing your sleep habits.",
        Mood::Other(_) => "Keep tracking your moods!",
    }
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Sundays",
    "Mondays",
    "Tuesdays",
    "Wednesdays",
    "Thursdays",
    "Fridays",
    "Saturdays",
];

/// Derive up to [`MAX_INSIGHTS`] insights from the whole collection.
pub fn generate<Z: DayZone>(entries: &[Entry], calendar: &LocalCalendar<Z>) -> Vec<Insight> {
    if entries.len() < 3 {
        return vec![Insight::new(
            InsightKind::Tip,
            "Keep Going!",
            "Write a few more entries to unlock personalized insights about your journaling patterns.",
        )];
    }

    let today = calendar.today();
    let this_month = calendar.this_month();
    let month_entries: Vec<&Entry> = entries
        .iter()
        .filter(|e| this_month.contains(calendar.date_of(&e.date)))
        .collect();

    let mut insights = Vec::new();

    let stats = MoodStats::tally(month_entries.iter().copied());
    if stats.total() >= 5 {
        if let Some(mood) = stats.dominant() {
            insights.push(Insight::new(
                InsightKind::Mood,
                "Mood Trend",
                mood_message(&mood),
            ));
        }
    }

    let per_week = month_entries.len() as f64 / today.day() as f64 * 7.0;
    if per_week >= 5.0 {
        insights.push(Insight::new(
            InsightKind::Consistency,
            "Writing Machine!",
            format!(
                "You're averaging {:.1} entries per week. Amazing consistency!",
                per_week
            ),
        ));
    } else if per_week >= 3.0 {
        insights.push(Insight::new(
            InsightKind::Consistency,
            "Solid Habit",
            format!(
                "You're writing about {:.1} times per week. Great job maintaining the habit!",
                per_week
            ),
        ));
    }

    if entries.len() >= 7 {
        let mut weekday_counts = [0usize; 7];
        for entry in entries {
            let weekday = calendar.date_of(&entry.date).weekday();
            weekday_counts[weekday.num_days_from_sunday() as usize] += 1;
        }
        let busiest = first_max_index(&weekday_counts);
        insights.push(Insight::new(
            InsightKind::Pattern,
            "Pattern Detected",
            format!(
                "You journal most often on {}. Consider setting reminders for other days!",
                WEEKDAY_NAMES[busiest]
            ),
        ));
    }

    let total_words: usize = entries.iter().map(|e| e.text.split(' ').count()).sum();
    if total_words > 100 {
        insights.push(Insight::new(
            InsightKind::Words,
            "Word Tracker",
            format!(
                "You've written approximately {} words in your journal. That's impressive!",
                group_thousands(total_words)
            ),
        ));
    }

    if entries.len() >= 5 {
        let mut time_counts = [0usize; 4];
        for entry in entries {
            let hour = calendar.local_time_of(&entry.date).hour();
            let slot = WritingTime::from_hour(hour);
            if let Some(i) = WritingTime::ALL.iter().position(|t| *t == slot) {
                time_counts[i] += 1;
            }
        }
        let preferred = WritingTime::ALL[first_max_index(&time_counts)];
        insights.push(Insight::new(
            InsightKind::Time,
            "Best Writing Time",
            preferred.message(),
        ));
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

fn first_max_index(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = i;
        }
    }
    best
}

/// `12345` -> `12,345`
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
