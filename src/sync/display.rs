use colored::*;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use super::types::SyncReport;

fn header(text: &str) -> Cell {
    Cell::new(text).fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold)
}

/// Prints one row per processed model followed by the totals.
pub fn display_sync_report(report: &SyncReport) {
    if report.results.is_empty() {
        if report.skipped > 0 {
            println!("{}", format!("No models matched the filter ({} skipped)", report.skipped).yellow());
        } else {
            println!("{}", "No models found in Ollama".yellow());
        }
        return;
    }

    let mut table = Table::new();
    table
        .set_header(vec![
            header("#"),
            header("Ollama Tag"),
            header("Jan Model"),
            header("Status"),
            header("Details"),
        ])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (i, result) in report.results.iter().enumerate() {
        let (status, details) = match &result.outcome {
            Ok(dir) => (
                Cell::new("synced").fg(comfy_table::Color::Green),
                Cell::new(dir.display().to_string()).fg(comfy_table::Color::DarkGrey),
            ),
            Err(e) => (
                Cell::new("failed").fg(comfy_table::Color::Red),
                Cell::new(e.to_string()).fg(comfy_table::Color::Red),
            ),
        };

        table.add_row(vec![
            Cell::new((i + 1).to_string()).set_alignment(CellAlignment::Center),
            Cell::new(&result.tag_name).fg(comfy_table::Color::Yellow),
            Cell::new(&result.model_name).fg(comfy_table::Color::Blue),
            status.set_alignment(CellAlignment::Center),
            details,
        ]);
    }

    println!("\n{}", table);

    let summary = format!(
        "Synced: {}  Failed: {}  Skipped: {}",
        report.synced(),
        report.failed(),
        report.skipped
    );
    if report.failed() > 0 {
        println!("{}", summary.bright_red());
    } else {
        println!("{}", summary.bright_green());
    }
}
