//! Report formatting for terminal output
//!
//! Renders the pipeline's formatted table with `tabled`, followed by the
//! statistics block and any transient notice or error.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::catalog::FormattedTable;
use crate::models::Statistic;
use crate::reports::{Clock, Phase, ReportPipeline};

/// Maximum characters shown per cell before truncation
pub const MAX_CELL_WIDTH: usize = 40;

/// Center a title over a line of `width` characters
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// A horizontal rule
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Render the formatted rows as a terminal table
pub fn format_report_table(table: &FormattedTable) -> String {
    if table.is_empty() {
        return "No records found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(table.headers().into_iter().map(str::to_string));
    for row in &table.rows {
        builder.push_record(row.iter().map(|cell| truncate(cell, MAX_CELL_WIDTH)));
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}

/// Render the statistics block, one `label: value` per line
pub fn format_statistics(statistics: &[Statistic]) -> String {
    let width = statistics
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);

    statistics
        .iter()
        .map(|s| format!("{:<width$}  {:>6}", format!("{}:", s.label), s.value, width = width + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render everything the pipeline currently has to show
pub fn format_pipeline<C: Clock>(pipeline: &ReportPipeline<C>) -> String {
    let state = pipeline.state();
    let title = state
        .category
        .as_ref()
        .map(|c| c.title())
        .unwrap_or_else(|| "Report".to_string());

    let table = pipeline.table();
    let width = title.chars().count().max(40);

    let mut output = String::new();
    output.push_str(&format_header(&title, width));
    output.push('\n');
    output.push_str(&separator(width));
    output.push('\n');

    match state.phase {
        Phase::Idle => output.push_str("No report generated yet.\n"),
        Phase::Loading => output.push_str("Loading...\n"),
        Phase::Failed => {
            output.push_str("Error: ");
            output.push_str(pipeline.error().unwrap_or("Report generation failed."));
            output.push('\n');
        }
        Phase::Ready => {
            output.push_str(&format_report_table(&table));
            output.push('\n');
            if !state.statistics.is_empty() {
                output.push('\n');
                output.push_str(&format_statistics(&state.statistics));
                output.push('\n');
            }
        }
    }

    if let Some(notice) = pipeline.notice() {
        output.push('\n');
        output.push_str("Note: ");
        output.push_str(&notice.message);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnCatalog, FormattedColumn};
    use crate::error::FetchError;
    use crate::models::FilterCriteria;
    use crate::reports::{ManualClock, QueryPlanner};
    use serde_json::json;

    fn pipeline() -> ReportPipeline<ManualClock> {
        ReportPipeline::with_clock(
            QueryPlanner::default(),
            ColumnCatalog::default(),
            ManualClock::new(),
        )
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer value", 8), "a lon...");
        assert_eq!(truncate("ñandú ñandú", 6), "ñan...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_format_header_centers() {
        assert_eq!(format_header("abc", 9), "   abc");
        assert_eq!(format_header("too long", 4), "too long");
    }

    #[test]
    fn test_format_report_table() {
        let table = FormattedTable {
            columns: vec![FormattedColumn::for_key("id"), FormattedColumn::for_key("nombre")],
            rows: vec![vec!["1".into(), "Ana".into()], vec!["2".into(), "Luis".into()]],
        };

        let rendered = format_report_table(&table);
        assert!(rendered.contains("ID"));
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Luis"));
        assert_eq!(rendered.lines().filter(|l| l.contains("Ana")).count(), 1);
    }

    #[test]
    fn test_format_report_table_empty() {
        assert_eq!(format_report_table(&FormattedTable::default()), "No records found.");
    }

    #[test]
    fn test_format_statistics_aligned() {
        let stats = vec![Statistic::new("Total", 12), Statistic::new("In Progress", 3)];
        let rendered = format_statistics(&stats);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Total:"));
        assert!(lines[0].ends_with("12"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_format_pipeline_ready_with_notice() {
        let mut pipeline = pipeline();
        let filters = FilterCriteria {
            status: Some("activo".into()),
            ..Default::default()
        };
        let pending = pipeline.begin("clients", filters).unwrap();
        let rows = vec![json!({"estado": "inactivo"}).as_object().cloned().unwrap()];
        pipeline.complete(pending.seq, Ok(rows));

        let rendered = format_pipeline(&pipeline);
        assert!(rendered.contains("Clients Report"));
        assert!(rendered.contains("No records found."));
        assert!(rendered.contains("Active:"));
        assert!(rendered.contains("Note: No records match the selected filters."));
    }

    #[test]
    fn test_format_pipeline_failed() {
        let mut pipeline = pipeline();
        let pending = pipeline.begin("vehicles", FilterCriteria::default()).unwrap();
        pipeline.complete(pending.seq, Err(FetchError::Unreachable("connection refused".into())));

        let rendered = format_pipeline(&pipeline);
        assert!(rendered.contains("Error: Cannot reach the report server"));
    }
}
