//! Journal entry and mood definitions

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of characters a new entry may hold.
pub const MAX_ENTRY_CHARS: usize = 280;

/// Entry identifier (creation time in epoch milliseconds, bumped on collision).
pub type EntryId = i64;

/// Mood tag attached to an entry.
///
/// The five known moods are the only ones counted in statistics. Any other
/// persisted value is kept as `Other` so that stored data round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Frustrated,
    Tired,
    Other(String),
}

impl Mood {
    /// The known moods, in display order.
    pub const KNOWN: [Mood; 5] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::Frustrated,
        Mood::Tired,
    ];

    /// Position in [`Mood::KNOWN`], or `None` for unrecognized values.
    pub fn index(&self) -> Option<usize> {
        match self {
            Mood::Happy => Some(0),
            Mood::Neutral => Some(1),
            Mood::Sad => Some(2),
            Mood::Frustrated => Some(3),
            Mood::Tired => Some(4),
            Mood::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Frustrated => "Frustrated",
            Mood::Tired => "Tired",
            Mood::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        self.index().is_some()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Mood {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Happy" => Mood::Happy,
            "Neutral" => Mood::Neutral,
            "Sad" => Mood::Sad,
            "Frustrated" => Mood::Frustrated,
            "Tired" => Mood::Tired,
            _ => Mood::Other(raw),
        }
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    /// Parse user input; only the known moods are accepted (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "neutral" => Ok(Mood::Neutral),
            "sad" => Ok(Mood::Sad),
            "frustrated" => Ok(Mood::Frustrated),
            "tired" => Ok(Mood::Tired),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: happy, neutral, sad, frustrated, tired",
                s
            )),
        }
    }
}

/// One journal record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub timestamp: i64,
}

impl Entry {
    /// Build an entry created at `created`. Sub-millisecond precision is dropped
    /// so that `date` and `timestamp` describe the same instant.
    pub fn new(
        id: EntryId,
        text: String,
        mood: Option<Mood>,
        photo: Option<String>,
        created: DateTime<Utc>,
    ) -> Self {
        let date = created.trunc_subsecs(3);
        Entry {
            id,
            text,
            mood,
            photo,
            date,
            timestamp: date.timestamp_millis(),
        }
    }

    /// Mood if it is one of the known five.
    pub fn known_mood(&self) -> Option<&Mood> {
        self.mood.as_ref().filter(|m| m.is_known())
    }
}

/// Truncate entry text to [`MAX_ENTRY_CHARS`] characters.
pub fn truncate_entry_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_ENTRY_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2025-01-17T09:30:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
