//! Application layer - Use cases and orchestration

pub mod init;
pub mod journal_store;
pub mod manage_config;

pub use journal_store::{JournalStore, ENTRIES_KEY};
pub use manage_config::ConfigService;
