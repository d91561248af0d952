//! Month reference parsing and resolution

use crate::domain::calendar::YearMonth;
use crate::error::{DaylineError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn year_month_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})-(\d{1,2})$").unwrap())
}

/// A month reference that can be resolved against today's date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthReference {
    /// Month containing today
    This,
    /// Month before the current one
    Last,
    /// Specific month
    Specific(YearMonth),
}

impl MonthReference {
    /// Parse a month reference string (`this`, `last`, `YYYY-MM`)
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "this" | "now" | "current" => Ok(MonthReference::This),
            "last" | "previous" => Ok(MonthReference::Last),
            _ => {
                let captures = year_month_regex()
                    .captures(&normalized)
                    .ok_or_else(|| DaylineError::InvalidMonth(input.to_string()))?;
                let year: i32 = captures[1]
                    .parse()
                    .map_err(|_| DaylineError::InvalidMonth(input.to_string()))?;
                let month: u32 = captures[2]
                    .parse()
                    .map_err(|_| DaylineError::InvalidMonth(input.to_string()))?;
                month
                    .checked_sub(1)
                    .and_then(|month0| YearMonth::new(year, month0))
                    .map(MonthReference::Specific)
                    .ok_or_else(|| DaylineError::InvalidMonth(input.to_string()))
            }
        }
    }

    /// Resolve this reference to a concrete month
    pub fn resolve(&self, today: NaiveDate) -> YearMonth {
        match self {
            MonthReference::This => YearMonth::of(today),
            MonthReference::Last => YearMonth::of(today).previous(),
            MonthReference::Specific(month) => *month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_refs() {
        assert_eq!(MonthReference::parse("this").unwrap(), MonthReference::This);
        assert_eq!(MonthReference::parse("NOW").unwrap(), MonthReference::This);
        assert_eq!(MonthReference::parse("last").unwrap(), MonthReference::Last);
    }

    #[test]
    fn test_parse_specific_month() {
        assert_eq!(
            MonthReference::parse("2025-01").unwrap(),
            MonthReference::Specific(YearMonth::new(2025, 0).unwrap())
        );
        assert_eq!(
            MonthReference::parse("2024-12").unwrap(),
            MonthReference::Specific(YearMonth::new(2024, 11).unwrap())
        );
        assert_eq!(
            MonthReference::parse("2024-3").unwrap(),
            MonthReference::Specific(YearMonth::new(2024, 2).unwrap())
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(MonthReference::parse("2025-13").is_err());
        assert!(MonthReference::parse("2025-00").is_err());
        assert!(MonthReference::parse("01-2025").is_err());
        assert!(MonthReference::parse("someday").is_err());
    }

    #[test]
    fn test_resolve_last_crosses_year() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        assert_eq!(
            MonthReference::Last.resolve(today),
            YearMonth::new(2024, 11).unwrap()
        );
        assert_eq!(
            MonthReference::This.resolve(today),
            YearMonth::new(2025, 0).unwrap()
        );
    }
}
