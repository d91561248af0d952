//! Infrastructure layer - Storage, clock, export sinks and configuration

pub mod clock;
pub mod config;
pub mod sinks;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock, SystemZone};
pub use config::Config;
pub use sinks::{DirectorySaver, FileSaver, HtmlFileRenderer, PrintRenderer};
pub use store::{FileStore, KeyValueStore, MemoryStore};
