//! Export module
//!
//! Renders a formatted report in several formats:
//! - CSV: spreadsheet-compatible, with a UTF-8 BOM
//! - Print: self-contained HTML with a print button
//! - Snapshot: the whole report as JSON or YAML
//!
//! Every exporter consumes the [`FormattedTable`](crate::catalog::FormattedTable)
//! built by the column catalog and refuses an empty table.

pub mod csv;
pub mod print;
pub mod snapshot;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::ExportError;

pub use self::csv::{csv_file_name, to_csv};
pub use print::{print_file_name, to_print_document};
pub use snapshot::{ReportSnapshot, SnapshotFormat};

/// `{title}_{YYYY-MM-DD}.{ext}`, with path separators in the title replaced
pub(crate) fn file_name(title: &str, date: NaiveDate, extension: &str) -> String {
    let title: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    format!("{}_{}.{}", title, date.format("%Y-%m-%d"), extension)
}

/// Write an export artifact into `dir`, creating it if needed
///
/// Returns the path written.
pub fn write_artifact(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FormattedTable;
    use crate::models::FilterCriteria;
    use crate::reports::{Phase, QueryPlanner, ReportPipeline};
    use crate::catalog::ColumnCatalog;
    use tempfile::TempDir;

    #[test]
    fn test_file_name_sanitizes_title() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(file_name("A/B: C", date, "csv"), "A-B- C_2024-05-01.csv");
        assert_eq!(file_name("  Orders Report ", date, "csv"), "Orders Report_2024-05-01.csv");
    }

    #[test]
    fn test_write_artifact_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("exports").join("nested");

        let path = write_artifact(&dir, "report.csv", "\u{feff}ID\r\n1\r\n").unwrap();

        assert_eq!(path, dir.join("report.csv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "\u{feff}ID\r\n1\r\n");
    }

    #[test]
    fn test_empty_export_leaves_pipeline_untouched() {
        let mut pipeline = ReportPipeline::new(QueryPlanner::default(), ColumnCatalog::default());
        pipeline.select_category("clients");

        let table = pipeline.table();
        assert_eq!(to_csv(&table), Err(ExportError::EmptyResult));
        assert_eq!(
            to_print_document("Clients Report", &table, "now"),
            Err(ExportError::EmptyResult)
        );

        assert_eq!(pipeline.phase(), Phase::Idle);
        assert!(pipeline.error().is_none());
        assert_eq!(pipeline.state().filters, FilterCriteria::default());
        assert_eq!(table, FormattedTable::default());
    }
}
