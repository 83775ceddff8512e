/// Standard output utilities for consistent command formatting
use crate::core::resolver::BatchReport;
use crate::utils::format::format_count;
use colored::*;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color as TableColor, ContentArrangement, Table};

/// Display a section header
pub fn section_header(title: &str) {
    println!("\n{}", title.bold().cyan());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Display an info message
pub fn info(message: &str) {
    println!("{} {}", "●".blue(), message);
}

/// Display a warning message
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Display an empty/none indicator
pub fn empty(message: &str) {
    println!("{} {}", "◌".dimmed(), message);
}

/// Tree structure item
pub fn tree_item(is_last: bool, label: &str, value: Option<&str>) {
    let prefix = if is_last { "└─" } else { "├─" };
    if let Some(val) = value {
        println!("{} {}: {}", prefix.dimmed(), label, val);
    } else {
        println!("{} {}", prefix.dimmed(), label);
    }
}

/// Create a standard table with our preferred styling
pub fn create_standard_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Create a standard header cell
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(TableColor::Cyan)
}

/// Table of skipped rows grouped by reason, with the first offending line of each
pub fn skip_summary_table(report: &BatchReport) -> Table {
    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Reason"),
        header_cell("Rows"),
        header_cell("First line"),
    ]);

    for (kind, count) in report.skip_summary() {
        let first_line = report
            .skipped
            .iter()
            .find(|row| row.reason.kind() == kind)
            .map(|row| row.line.to_string())
            .unwrap_or_default();
        table.add_row(vec![kind.to_string(), format_count(count), first_line]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::{SkipReason, SkippedRow};

    fn skipped(line: usize, reason: SkipReason) -> SkippedRow {
        SkippedRow { line, reason }
    }

    #[test]
    fn test_skip_summary_table_rows() {
        let report = BatchReport {
            lines_read: 6,
            resolved: 2,
            skipped: vec![
                skipped(3, SkipReason::UnknownTaxId {
                    line: 3,
                    tax_id: "42".to_string(),
                }),
                skipped(4, SkipReason::EmptyLine { line: 4 }),
                skipped(6, SkipReason::UnknownTaxId {
                    line: 6,
                    tax_id: "77".to_string(),
                }),
            ],
        };

        let table = skip_summary_table(&report);
        assert_eq!(table.row_count(), 2);

        let rendered = table.to_string();
        let unknown = rendered
            .lines()
            .find(|line| line.contains("unknown tax ID"))
            .unwrap();
        assert!(unknown.contains(" 2 "), "{}", unknown);
        assert!(unknown.contains(" 3 "), "{}", unknown);
        assert!(rendered.contains("empty line"));
    }

    #[test]
    fn test_skip_summary_table_empty_report() {
        let table = skip_summary_table(&BatchReport::default());
        assert_eq!(table.row_count(), 0);
    }
}
