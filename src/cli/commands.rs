//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dayline")]
#[command(about = "A micro-journal for one line a day", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Fixed offset from UTC in minutes used to decide where a day starts
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<i32>,
    },

    /// Write a new entry (longer text is cut to 280 characters)
    Add {
        /// Entry text
        text: String,

        /// Mood (happy, neutral, sad, frustrated, tired)
        #[arg(short, long)]
        mood: Option<String>,

        /// Image file to attach
        #[arg(short, long)]
        photo: Option<PathBuf>,
    },

    /// List entries, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only entries from this month (YYYY-MM, this, last)
        #[arg(long)]
        month: Option<String>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id as shown by `list`
        id: i64,
    },

    /// Show the current streak and the last seven days
    Streak,

    /// Entries from this day in earlier years and from one month ago
    Memories,

    /// Mood counts for a month
    Moods {
        /// Month (YYYY-MM, this, last)
        #[arg(default_value = "this")]
        month: String,
    },

    /// Month calendar with the mood of each day
    Calendar {
        /// Month (YYYY-MM, this, last)
        #[arg(default_value = "this")]
        month: String,
    },

    /// Observations about your journaling habits
    Insights,

    /// Today's writing prompt
    Prompt,

    /// Export all entries
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output directory (default: configured export_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Delete every entry
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Spreadsheet-friendly CSV
    Csv,
    /// Printable HTML document
    Print,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_mood() {
        let cli = Cli::parse_from(["dayline", "add", "hello there", "--mood", "happy"]);
        match cli.command {
            Some(Commands::Add { text, mood, photo }) => {
                assert_eq!(text, "hello there");
                assert_eq!(mood.as_deref(), Some("happy"));
                assert!(photo.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_offset() {
        let cli = Cli::parse_from(["dayline", "init", "j", "--utc-offset", "-300"]);
        match cli.command {
            Some(Commands::Init { utc_offset, .. }) => assert_eq!(utc_offset, Some(-300)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_export_format() {
        let cli = Cli::parse_from(["dayline", "export", "print"]);
        match cli.command {
            Some(Commands::Export { format, out }) => {
                assert_eq!(format, ExportFormat::Print);
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
