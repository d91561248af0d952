//! Per-month mood aggregation

use crate::domain::entry::{Entry, Mood};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Count of each known mood. Always carries all five moods, zero-filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodStats {
    counts: [u32; 5],
}

impl MoodStats {
    /// Tally the known moods of `entries`; absent and unrecognized moods are skipped.
    pub fn tally<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut stats = MoodStats::default();
        for index in entries
            .into_iter()
            .filter_map(|e| e.mood.as_ref().and_then(Mood::index))
        {
            stats.counts[index] += 1;
        }
        stats
    }

    /// Count for a mood (0 for unrecognized moods).
    pub fn get(&self, mood: &Mood) -> u32 {
        mood.index().map(|i| self.counts[i]).unwrap_or(0)
    }

    /// All five moods with their counts, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Mood, u32)> + '_ {
        Mood::KNOWN.into_iter().zip(self.counts.iter().copied())
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Most frequent mood with a non-zero count; earlier moods win ties.
    pub fn dominant(&self) -> Option<Mood> {
        let mut best: Option<(Mood, u32)> = None;
        for (mood, count) in self.iter() {
            if count > 0 && best.as_ref().is_none_or(|(_, top)| count > *top) {
                best = Some((mood, count));
            }
        }
        best.map(|(mood, _)| mood)
    }
}

impl Serialize for MoodStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (mood, count) in self.iter() {
            map.serialize_entry(mood.as_str(), &count)?;
        }
        map.end()
    }
}
