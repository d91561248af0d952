//! dayline - micro-journal engine
//!
//! Short dated entries with an optional mood and photo, plus everything
//! derived from them: streaks, mood calendars, "on this day" memories,
//! insights and CSV/printable exports.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::JournalStore;
pub use error::DaylineError;
