//! Journal store: the single owner of entries and everything derived from them

use crate::domain::codec::{decode_entries, encode_entries};
use crate::domain::export::{self, CSV_MIME, PRINT_TITLE};
use crate::domain::streak::{compute_streak, week_activity, DayActivity};
use crate::domain::{
    insights, memories, prompt, Entry, EntryId, Insight, LocalCalendar, Mood, MonthCalendar,
    MoodStats, TimeOfDay, YearMonth,
};
use crate::error::{DaylineError, Result};
use crate::infrastructure::{Clock, FileSaver, KeyValueStore, PrintRenderer};
use chrono::{NaiveDate, Timelike};
use std::collections::BTreeSet;

/// Store key holding the encoded entry collection
pub const ENTRIES_KEY: &str = "journalEntries";

/// Owns the entry collection (newest first) and keeps the persisted copy and
/// the streak in step with it.
pub struct JournalStore<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    entries: Vec<Entry>,
    streak: u32,
}

impl<S: KeyValueStore, C: Clock> JournalStore<S, C> {
    /// Load entries from `store`. Missing or unreadable data opens an empty journal.
    pub fn open(store: S, clock: C) -> Self {
        let entries = Self::load(&store);
        let mut journal = JournalStore {
            store,
            clock,
            entries,
            streak: 0,
        };
        journal.refresh_streak();
        journal
    }

    fn load(store: &S) -> Vec<Entry> {
        let stored = match store.get(ENTRIES_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read stored entries, starting empty: {}", e);
                return Vec::new();
            }
        };

        match decode_entries(&stored) {
            Ok(entries) => {
                tracing::debug!("Loaded {} entries", entries.len());
                entries
            }
            Err(e) => {
                tracing::warn!("Stored entries are unreadable, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Calendar anchored at the clock's current instant and zone
    pub fn calendar(&self) -> LocalCalendar<C::Zone> {
        LocalCalendar::new(self.clock.now(), self.clock.zone())
    }

    fn entry_days(&self, calendar: &LocalCalendar<C::Zone>) -> BTreeSet<NaiveDate> {
        self.entries
            .iter()
            .map(|e| calendar.date_of(&e.date))
            .collect()
    }

    /// Recompute the streak against the current clock.
    pub fn refresh_streak(&mut self) -> u32 {
        let calendar = self.calendar();
        self.streak = compute_streak(&self.entry_days(&calendar), calendar.today());
        tracing::debug!("Streak is {} day(s)", self.streak);
        self.streak
    }

    fn persist(&mut self) -> Result<()> {
        let encoded = encode_entries(&self.entries)?;
        self.store.set(ENTRIES_KEY, &encoded)
    }

    /// Add a new entry at the front of the journal and return its id.
    ///
    /// The caller limits text length (see [`crate::domain::truncate_entry_text`]);
    /// here text is only trimmed and rejected when nothing is left.
    pub fn add_entry(
        &mut self,
        text: &str,
        mood: Option<Mood>,
        photo: Option<String>,
    ) -> Result<EntryId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DaylineError::EmptyEntry);
        }

        let now = self.clock.now();
        let millis = now.timestamp_millis();
        let id = match self.entries.iter().map(|e| e.id).max() {
            Some(max) if max >= millis => max
                .checked_add(1)
                .ok_or(DaylineError::EntryIdsExhausted)?,
            _ => millis,
        };

        let entry = Entry::new(id, text.to_string(), mood, photo, now);
        self.entries.insert(0, entry);

        if let Err(e) = self.persist() {
            self.entries.remove(0);
            return Err(e);
        }

        tracing::info!("Added entry {}", id);
        self.refresh_streak();
        Ok(id)
    }

    /// Delete an entry. Returns `false` (and changes nothing) when no entry has `id`.
    pub fn delete_entry(&mut self, id: EntryId) -> Result<bool> {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            tracing::debug!("Delete of unknown entry {} ignored", id);
            return Ok(false);
        };

        let removed = self.entries.remove(index);
        if let Err(e) = self.persist() {
            self.entries.insert(index, removed);
            return Err(e);
        }

        tracing::info!("Deleted entry {}", id);
        self.refresh_streak();
        Ok(true)
    }

    /// Drop every entry and the persisted collection.
    pub fn reset(&mut self) -> Result<()> {
        self.store.remove(ENTRIES_KEY)?;
        self.entries.clear();
        self.refresh_streak();
        tracing::info!("Journal reset");
        Ok(())
    }

    /// Entries from today's month and day in earlier years, newest first
    pub fn on_this_day_entries(&self) -> Vec<&Entry> {
        memories::on_this_day(&self.entries, &self.calendar())
    }

    /// Entries from the same day one month back
    pub fn one_month_ago_entries(&self) -> Vec<&Entry> {
        memories::one_month_ago(&self.entries, &self.calendar())
    }

    pub fn years_ago(&self, entry: &Entry) -> i32 {
        memories::years_ago(entry, &self.calendar())
    }

    /// Entries in `year` and zero-based `month0`, in collection order
    pub fn entries_by_month(&self, year: i32, month0: u32) -> Vec<&Entry> {
        let Some(month) = YearMonth::new(year, month0) else {
            return Vec::new();
        };
        let calendar = self.calendar();
        self.entries
            .iter()
            .filter(|e| month.contains(calendar.date_of(&e.date)))
            .collect()
    }

    pub fn mood_stats(&self, year: i32, month0: u32) -> MoodStats {
        MoodStats::tally(self.entries_by_month(year, month0))
    }

    /// Month grid for the calendar view; `None` for an invalid month
    pub fn month_calendar(&self, year: i32, month0: u32) -> Option<MonthCalendar> {
        let month = YearMonth::new(year, month0)?;
        let month_entries = self.entries_by_month(year, month0);
        Some(MonthCalendar::build(month, &month_entries, &self.calendar()))
    }

    pub fn has_entry_today(&self) -> bool {
        let calendar = self.calendar();
        let today = calendar.today();
        self.entries
            .iter()
            .any(|e| calendar.date_of(&e.date) == today)
    }

    /// Activity for the seven days ending today, oldest first
    pub fn week_activity(&self) -> Vec<DayActivity> {
        let calendar = self.calendar();
        week_activity(&self.entry_days(&calendar), calendar.today())
    }

    pub fn insights(&self) -> Vec<Insight> {
        insights::generate(&self.entries, &self.calendar())
    }

    pub fn daily_prompt(&self) -> &'static str {
        prompt::daily_prompt(self.calendar().today())
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.calendar().now().hour())
    }

    pub fn today(&self) -> NaiveDate {
        self.calendar().today()
    }

    pub fn render_csv(&self) -> String {
        export::render_csv(&self.entries, &self.calendar())
    }

    /// Save the CSV export through `saver`; returns the file name used.
    pub fn export_csv(&self, saver: &impl FileSaver) -> Result<String> {
        let calendar = self.calendar();
        let csv = export::render_csv(&self.entries, &calendar);
        let filename = export::csv_filename(&calendar);
        saver.save(csv.as_bytes(), &filename, CSV_MIME)?;
        tracing::info!("Exported {} entries to {}", self.entries.len(), filename);
        Ok(filename)
    }

    pub fn render_print(&self) -> String {
        export::render_print(&self.entries, &self.calendar())
    }

    /// Hand the printable document to `renderer`.
    pub fn export_print(&self, renderer: &impl PrintRenderer) -> Result<()> {
        renderer.render_printable(&self.render_print(), PRINT_TITLE)?;
        tracing::info!("Sent {} entries to print", self.entries.len());
        Ok(())
    }
}
