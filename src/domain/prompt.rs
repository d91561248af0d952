//! Daily writing prompt and time-of-day period

use chrono::{Datelike, NaiveDate};

pub const PROMPTS: [&str; 30] = [
    "What's one thing you're looking forward to tomorrow?",
    "What made you smile today?",
    "What's something you learned recently?",
    "What are you grateful for right now?",
    "What's one small win you had today?",
    "What's been on your mind lately?",
    "What would make today a great day?",
    "What's something you want to remember about today?",
    "How are you really feeling right now?",
    "What's one thing you're proud of?",
    "What's a challenge you're working through?",
    "What inspired you today?",
    "What's one thing you'd like to do differently tomorrow?",
    "What made today unique?",
    "What's something that brought you peace today?",
    "Who made a positive impact on your day?",
    "What's something you're excited about?",
    "What's a thought you want to capture?",
    "What's one word that describes your day?",
    "What would you tell your future self about today?",
    "What's something unexpected that happened?",
    "What's a moment you want to remember?",
    "What are you hopeful about?",
    "What's something that challenged you today?",
    "What's a simple pleasure you enjoyed today?",
    "What's on your mind as the day ends?",
    "What's something you accomplished today?",
    "What made you feel alive today?",
    "What's a question you're pondering?",
    "What's one thing you're letting go of?",
];

/// Prompt for a date; stable for the whole day.
pub fn daily_prompt(date: NaiveDate) -> &'static str {
    PROMPTS[date.ordinal() as usize % PROMPTS.len()]
}

/// Coarse period of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Night,
        }
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Good morning",
            TimeOfDay::Afternoon => "Good afternoon",
            TimeOfDay::Night => "Good evening",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_by_day_of_year() {
        let jan1 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(daily_prompt(jan1), PROMPTS[1]);
        let jan30 = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        assert_eq!(daily_prompt(jan30), PROMPTS[0]);
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Night);
    }
}
