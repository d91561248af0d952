//! Domain layer - Journal entries and everything derived from them

pub mod calendar;
pub mod codec;
pub mod entry;
pub mod export;
pub mod insights;
pub mod memories;
pub mod month_ref;
pub mod mood_map;
pub mod mood_stats;
pub mod prompt;
pub mod streak;

pub use calendar::{DayZone, LocalCalendar, YearMonth};
pub use entry::{truncate_entry_text, Entry, EntryId, Mood, MAX_ENTRY_CHARS};
pub use insights::{Insight, InsightKind};
pub use month_ref::MonthReference;
pub use mood_map::{CalendarDay, MonthCalendar};
pub use mood_stats::MoodStats;
pub use prompt::TimeOfDay;
pub use streak::{DayActivity, StreakLevel};
