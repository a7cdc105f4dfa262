//! Terminal list view.

use colored::Colorize;
use media_tracker_core::{ListRow, ListView};

/// Prints the full media list to stdout on every render.
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

/// One printed line for `row`.
pub fn format_row(row: &ListRow) -> String {
    format!(
        "  {}  {} ({}) - {}   [{}]",
        format!("#{}", row.id()).dimmed(),
        row.title.bold(),
        row.kind.cyan(),
        row.status.yellow(),
        row.delete.label().red()
    )
}

impl ListView for TerminalView {
    fn render(&mut self, rows: &[ListRow]) {
        println!();
        println!("{}", "🎬 Media".bold().cyan());
        if rows.is_empty() {
            println!("  {}", "No media items yet.".dimmed());
        }
        for row in rows {
            println!("{}", format_row(row));
        }
        println!();
    }
}
