//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod photo;

pub use commands::{Cli, Commands, ExportFormat};
pub use output::{
    format_calendar, format_entry_list, format_insights, format_memories, format_mood_stats,
    format_streak,
};
pub use photo::photo_data_url;
