//! Output formatting utilities

use crate::domain::{
    streak, DayActivity, DayZone, Entry, Insight, LocalCalendar, Mood, MonthCalendar, MoodStats,
    YearMonth,
};

fn mood_suffix(entry: &Entry) -> String {
    match &entry.mood {
        Some(mood) => format!(" [{}]", mood),
        None => String::new(),
    }
}

/// Format entries for display, one per line
pub fn format_entry_list<Z: DayZone>(entries: &[&Entry], calendar: &LocalCalendar<Z>) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}{}  {}{}\n",
            entry.id,
            calendar.local_time_of(&entry.date).format("%d-%m-%Y %H:%M"),
            mood_suffix(entry),
            entry.text,
            if entry.photo.is_some() { "  📷" } else { "" }
        ));
    }
    output
}

/// Streak count, today's status and the trailing week as dots
pub fn format_streak(streak_days: u32, done_today: bool, week: &[DayActivity]) -> String {
    let level = streak::StreakLevel::for_streak(streak_days);
    let mut output = format!(
        "{} {} day streak - {}\n",
        level.symbol(),
        streak_days,
        streak::streak_message(streak_days)
    );
    output.push_str(if done_today {
        "✓ Done today!\n"
    } else {
        "○ Not yet today\n"
    });

    let labels: Vec<String> = week
        .iter()
        .map(|d| format!("{:<3}", d.date.format("%a").to_string()))
        .collect();
    let dots: Vec<String> = week
        .iter()
        .map(|d| format!("{:<3}", if d.has_entry { "●" } else { "○" }))
        .collect();
    output.push_str(labels.join(" ").trim_end());
    output.push('\n');
    output.push_str(dots.join(" ").trim_end());
    output.push('\n');
    output
}

/// Mood counts for a month, all five moods always listed
pub fn format_mood_stats(month: YearMonth, stats: &MoodStats) -> String {
    let mut output = format!("Moods for {}\n", month);
    for (mood, count) in stats.iter() {
        output.push_str(&format!("{:<11}{}\n", mood.as_str(), count));
    }
    output.push_str(&mood_summary(stats));
    output
}

fn mood_summary(stats: &MoodStats) -> String {
    let total = stats.total();
    if total == 0 {
        return String::new();
    }
    let mut summary = format!(
        "You tracked your mood {} time{} this month\n",
        total,
        if total == 1 { "" } else { "s" }
    );
    let happy = stats.get(&Mood::Happy);
    let top = stats.iter().map(|(_, c)| c).max().unwrap_or(0);
    if happy > 0 && happy >= top {
        summary.push_str("Most common mood: Happy!\n");
    }
    summary
}

fn mood_marker(mood: Option<&Mood>) -> char {
    match mood {
        Some(Mood::Happy) => 'H',
        Some(Mood::Neutral) => 'N',
        Some(Mood::Sad) => 'S',
        Some(Mood::Frustrated) => 'F',
        Some(Mood::Tired) => 'T',
        Some(Mood::Other(_)) | None => '•',
    }
}

/// Sunday-first month grid. Each day carries a mood letter, `•` for an entry
/// without a mood, and today is marked with `<`.
pub fn format_calendar(grid: &MonthCalendar) -> String {
    let title = grid
        .month
        .first_day()
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| grid.month.to_string());

    let mut output = format!("{}\n  Su   Mo   Tu   We   Th   Fr   Sa\n", title);
    let mut cells: Vec<String> = (0..grid.leading_blanks).map(|_| "     ".to_string()).collect();

    for day in &grid.days {
        let marker = if day.entry_count > 0 {
            mood_marker(day.mood.as_ref())
        } else {
            ' '
        };
        let today = if day.is_today { '<' } else { ' ' };
        cells.push(format!(
            "{:>3}{}{}",
            day.date.format("%-d").to_string(),
            marker,
            today
        ));
    }

    for week in cells.chunks(7) {
        output.push_str(week.join("").trim_end());
        output.push('\n');
    }

    output.push_str("H Happy  N Neutral  S Sad  F Frustrated  T Tired  • no mood\n");
    output.push_str(&mood_summary(&grid.stats));
    output
}

/// "On this day" memories followed by entries from one month ago
pub fn format_memories<Z: DayZone>(
    on_this_day: &[(&Entry, i32)],
    month_ago: &[&Entry],
    calendar: &LocalCalendar<Z>,
) -> String {
    if on_this_day.is_empty() && month_ago.is_empty() {
        return "No memories yet. Keep writing and check back on this day next year!".to_string();
    }

    let long_date = |entry: &Entry| calendar.date_of(&entry.date).format("%B %-d, %Y").to_string();

    let mut output = String::new();
    if !on_this_day.is_empty() {
        output.push_str("On this day\n");
        for (entry, years) in on_this_day {
            output.push_str(&format!(
                "  {} year{} ago ({}){}  {}\n",
                years,
                if *years > 1 { "s" } else { "" },
                long_date(entry),
                mood_suffix(entry),
                entry.text
            ));
        }
    }
    if !month_ago.is_empty() {
        output.push_str("One month ago\n");
        for entry in month_ago {
            output.push_str(&format!(
                "  ({}){}  {}\n",
                long_date(entry),
                mood_suffix(entry),
                entry.text
            ));
        }
    }
    output
}

/// Insight titles with their text
pub fn format_insights(insights: &[Insight]) -> String {
    let mut output = String::new();
    for insight in insights {
        output.push_str(&format!("{}\n  {}\n", insight.title, insight.text));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::streak::week_activity;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    use std::collections::BTreeSet;

    fn calendar() -> LocalCalendar {
        let zone = FixedOffset::east_opt(0).unwrap();
        LocalCalendar::at(zone.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap())
    }

    fn entry(id: i64, y: i32, m: u32, d: u32, text: &str, mood: Option<Mood>) -> Entry {
        let created = Utc.with_ymd_and_hms(y, m, d, 9, 15, 0).unwrap();
        Entry::new(id, text.to_string(), mood, None, created)
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[], &calendar()), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let e = entry(42, 2025, 6, 9, "walked", Some(Mood::Happy));
        let output = format_entry_list(&[&e], &calendar());
        assert_eq!(output, "42  09-06-2025 09:15 [Happy]  walked\n");
    }

    #[test]
    fn test_format_streak() {
        let days: BTreeSet<NaiveDate> = [NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()]
            .into_iter()
            .collect();
        let week = week_activity(&days, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        let output = format_streak(1, false, &week);
        assert!(output.starts_with("🌿 1 day streak - Great start! Keep it going!"));
        assert!(output.contains("Not yet today"));
        assert!(output.contains("Wed"));
        assert_eq!(output.matches('●').count(), 1);
    }

    #[test]
    fn test_format_mood_stats() {
        let entries = [
            entry(1, 2025, 6, 1, "a", Some(Mood::Happy)),
            entry(2, 2025, 6, 2, "b", Some(Mood::Sad)),
        ];
        let stats = MoodStats::tally(&entries);
        let output = format_mood_stats(YearMonth::new(2025, 5).unwrap(), &stats);
        assert!(output.starts_with("Moods for 2025-06\n"));
        assert!(output.contains("Happy      1"));
        assert!(output.contains("Tired      0"));
        assert!(output.contains("You tracked your mood 2 times this month"));
        assert!(output.contains("Most common mood: Happy!"));
    }

    #[test]
    fn test_format_calendar() {
        let e = entry(1, 2025, 6, 3, "a", Some(Mood::Tired));
        let refs = vec![&e];
        let grid = MonthCalendar::build(YearMonth::new(2025, 5).unwrap(), &refs, &calendar());
        let output = format_calendar(&grid);
        assert!(output.starts_with("June 2025\n"));
        assert!(output.contains("  3T"));
        assert!(output.contains(" 10 <"));
        assert!(output.contains("You tracked your mood 1 time this month"));
    }

    #[test]
    fn test_format_memories() {
        let old = entry(1, 2023, 6, 10, "old times", None);
        let recent = entry(2, 2025, 5, 10, "last month", Some(Mood::Sad));
        let output = format_memories(&[(&old, 2)], &[&recent], &calendar());
        assert!(output.contains("2 years ago (June 10, 2023)  old times"));
        assert!(output.contains("One month ago\n  (May 10, 2025) [Sad]  last month"));

        let empty = format_memories(&[], &[], &calendar());
        assert!(empty.starts_with("No memories yet"));
    }

    #[test]
    fn test_format_insights() {
        let insights = vec![Insight {
            kind: crate::domain::InsightKind::Tip,
            title: "Keep Going!".to_string(),
            text: "Write more.".to_string(),
        }];
        assert_eq!(format_insights(&insights), "Keep Going!\n  Write more.\n");
    }
}
