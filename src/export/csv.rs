//! CSV export
//!
//! Writes the formatted table, so exported cells match what the live table
//! shows. Output starts with a UTF-8 byte-order mark for spreadsheet apps.

use chrono::NaiveDate;

use super::file_name;
use crate::catalog::FormattedTable;
use crate::error::ExportError;

/// UTF-8 byte-order mark
pub const BOM: &str = "\u{feff}";

/// Render a formatted table as CSV text
pub fn to_csv(table: &FormattedTable) -> Result<String, ExportError> {
    if table.is_empty() {
        return Err(ExportError::EmptyResult);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(BOM.as_bytes().to_vec());

    writer.write_record(table.headers())?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Csv(e.to_string()))
}

/// Download name for a CSV export: `{title}_{YYYY-MM-DD}.csv`
pub fn csv_file_name(title: &str, date: NaiveDate) -> String {
    file_name(title, date, "csv")
}
