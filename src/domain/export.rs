//! CSV and printable-document rendering of the entry collection

use crate::domain::calendar::{DayZone, LocalCalendar};
use crate::domain::entry::Entry;
use chrono::Utc;

pub const CSV_HEADER: &str = "Date,Entry,Mood";
pub const CSV_MIME: &str = "text/csv";
pub const PRINT_TITLE: &str = "My Journal";

/// Wrap in double quotes, doubling any inner quote. Commas and newlines are
/// left as they are; the wrapping quotes already contain them.
fn quote_csv(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// One header line plus one line per entry, in collection order.
pub fn render_csv<Z: DayZone>(entries: &[Entry], calendar: &LocalCalendar<Z>) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for entry in entries {
        let date = calendar.date_of(&entry.date);
        lines.push(format!(
            "{},{},{}",
            date.format("%-m/%-d/%Y"),
            quote_csv(&entry.text),
            entry.mood.as_ref().map(|m| m.as_str()).unwrap_or("")
        ));
    }
    lines.join("\n")
}

/// `journal-export-YYYY-MM-DD.csv`, dated by the current UTC day.
pub fn csv_filename<Z: DayZone>(calendar: &LocalCalendar<Z>) -> String {
    format!(
        "journal-export-{}.csv",
        calendar.now().with_timezone(&Utc).format("%Y-%m-%d")
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Standalone HTML document meant to be printed.
pub fn render_print<Z: DayZone>(entries: &[Entry], calendar: &LocalCalendar<Z>) -> String {
    let mut blocks = String::new();
    for entry in entries {
        let date = calendar.date_of(&entry.date);
        let mood = entry.mood.as_ref().map(|m| m.as_str()).unwrap_or("");
        blocks.push_str(&format!(
            r#"
      <div style="margin-bottom: 20px; padding: 15px; border-bottom: 1px solid #eee;">
        <div style="color: #666; font-size: 12px;">{} {}</div>
        <div style="margin-top: 8px; font-size: 14px;">{}</div>
      </div>
"#,
            date.format("%A, %B %-d, %Y"),
            escape_html(mood),
            escape_html(&entry.text)
        ));
    }

    format!(
        r#"<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
      body {{ font-family: Georgia, serif; max-width: 600px; margin: 40px auto; padding: 20px; }}
      h1 {{ text-align: center; color: #333; }}
    </style>
  </head>
  <body>
    <h1>📔 {title}</h1>
{blocks}  </body>
</html>
"#,
        title = PRINT_TITLE,
        blocks = blocks
    )
}
