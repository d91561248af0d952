use clap::Parser;
use dayline::application::{init, ConfigService, JournalStore};
use dayline::cli::{self, photo_data_url, Cli, Commands, ExportFormat};
use dayline::domain::export::PRINT_TITLE;
use dayline::domain::{truncate_entry_text, Mood, MonthReference, YearMonth};
use dayline::error::{DaylineError, Result};
use dayline::infrastructure::{DirectorySaver, FileStore, HtmlFileRenderer, SystemClock};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dayline=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

type Journal = JournalStore<FileStore, SystemClock>;

fn open_journal() -> Result<Journal> {
    let store = FileStore::discover()?;
    let config = store.load_config()?;
    let clock = SystemClock::with_offset(config.utc_offset()?);
    Ok(JournalStore::open(store, clock))
}

fn resolve_month(journal: &Journal, input: &str) -> Result<YearMonth> {
    Ok(MonthReference::parse(input)?.resolve(journal.today()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path, utc_offset }) => {
            init::init(&path, utc_offset)?;
            println!("Initialized dayline journal in {}", path.display());
            Ok(())
        }
        Some(Commands::Add { text, mood, photo }) => {
            let mood = mood
                .map(|m| Mood::from_str(&m).map_err(DaylineError::Config))
                .transpose()?;
            let photo = photo.map(|p| photo_data_url(&p)).transpose()?;

            let mut journal = open_journal()?;
            let id = journal.add_entry(truncate_entry_text(&text), mood, photo)?;
            println!("Added entry {}", id);
            if journal.streak() > 1 {
                println!("{} day streak!", journal.streak());
            }
            Ok(())
        }
        Some(Commands::List { limit, month }) => {
            let journal = open_journal()?;
            let mut entries: Vec<_> = match month {
                Some(input) => {
                    let month = resolve_month(&journal, &input)?;
                    journal.entries_by_month(month.year, month.month0)
                }
                None => journal.entries().iter().collect(),
            };
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            println!("{}", cli::format_entry_list(&entries, &journal.calendar()));
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let mut journal = open_journal()?;
            if !journal.delete_entry(id)? {
                return Err(DaylineError::EntryNotFound(id));
            }
            println!("Deleted entry {}", id);
            Ok(())
        }
        Some(Commands::Streak) => {
            let journal = open_journal()?;
            print!(
                "{}",
                cli::format_streak(
                    journal.streak(),
                    journal.has_entry_today(),
                    &journal.week_activity()
                )
            );
            Ok(())
        }
        Some(Commands::Memories) => {
            let journal = open_journal()?;
            let on_this_day: Vec<_> = journal
                .on_this_day_entries()
                .into_iter()
                .map(|e| (e, journal.years_ago(e)))
                .collect();
            let month_ago = journal.one_month_ago_entries();
            println!(
                "{}",
                cli::format_memories(&on_this_day, &month_ago, &journal.calendar())
            );
            Ok(())
        }
        Some(Commands::Moods { month }) => {
            let journal = open_journal()?;
            let month = resolve_month(&journal, &month)?;
            let stats = journal.mood_stats(month.year, month.month0);
            print!("{}", cli::format_mood_stats(month, &stats));
            Ok(())
        }
        Some(Commands::Calendar { month }) => {
            let journal = open_journal()?;
            let month = resolve_month(&journal, &month)?;
            let grid = journal
                .month_calendar(month.year, month.month0)
                .ok_or_else(|| DaylineError::InvalidMonth(month.to_string()))?;
            print!("{}", cli::format_calendar(&grid));
            Ok(())
        }
        Some(Commands::Insights) => {
            let journal = open_journal()?;
            print!("{}", cli::format_insights(&journal.insights()));
            Ok(())
        }
        Some(Commands::Prompt) => {
            let journal = open_journal()?;
            println!("{}!", journal.time_of_day().greeting());
            println!("{}", journal.daily_prompt());
            Ok(())
        }
        Some(Commands::Export { format, out }) => {
            let journal = open_journal()?;
            let dir = match out {
                Some(dir) => dir,
                None => {
                    let root = journal.store().root();
                    journal.store().load_config()?.export_path(root)
                }
            };
            match format {
                ExportFormat::Csv => {
                    let saver = DirectorySaver::new(dir);
                    let filename = journal.export_csv(&saver)?;
                    println!("Exported to {}", saver.dir().join(filename).display());
                }
                ExportFormat::Print => {
                    let renderer = HtmlFileRenderer::new(dir);
                    journal.export_print(&renderer)?;
                    println!(
                        "Printable journal written to {}",
                        renderer.path_for(PRINT_TITLE).display()
                    );
                }
            }
            Ok(())
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                return Err(DaylineError::Config(
                    "Reset deletes every entry. Re-run with --yes to confirm".to_string(),
                ));
            }
            let mut journal = open_journal()?;
            journal.reset()?;
            println!("All entries deleted");
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let store = FileStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("export_dir = {}", config.export_dir);
                println!(
                    "utc_offset_minutes = {}",
                    config
                        .utc_offset_minutes
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "system".to_string())
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: dayline config [--list | <key> [<value>]]");
                println!("Valid keys: export_dir, utc_offset_minutes, created");
                Ok(())
            }
        }
        None => {
            println!("dayline - A micro-journal for one line a day");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
