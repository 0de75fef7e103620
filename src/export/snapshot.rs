//! Report snapshots
//!
//! A point-in-time copy of a generated report (request, statistics and
//! display rows) in a machine-readable (JSON) or human-readable (YAML) form.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::file_name;
use crate::catalog::{FormattedColumn, FormattedTable};
use crate::error::ExportError;
use crate::models::{FilterCriteria, ReportCategory, Statistic};

/// Snapshot serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SnapshotFormat {
    #[default]
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// File extension
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// A generated report, frozen for export
#[derive(Debug, Clone, Serialize)]
pub struct ReportSnapshot {
    pub title: String,
    pub category: String,
    pub generated_at: NaiveDateTime,
    pub filters: FilterCriteria,
    pub statistics: Vec<Statistic>,
    pub columns: Vec<FormattedColumn>,
    pub rows: Vec<Vec<String>>,
}

impl ReportSnapshot {
    /// Capture a report
    ///
    /// Fails with [`ExportError::EmptyResult`] when the table has no rows.
    pub fn capture(
        category: &ReportCategory,
        filters: &FilterCriteria,
        statistics: &[Statistic],
        table: &FormattedTable,
        generated_at: NaiveDateTime,
    ) -> Result<Self, ExportError> {
        if table.is_empty() {
            return Err(ExportError::EmptyResult);
        }

        Ok(Self {
            title: category.title(),
            category: category.tag().to_string(),
            generated_at,
            filters: filters.clone(),
            statistics: statistics.to_vec(),
            columns: table.columns.clone(),
            rows: table.rows.clone(),
        })
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialize(e.to_string()))
    }

    /// Serialize as YAML, with a short header comment
    pub fn to_yaml(&self) -> Result<String, ExportError> {
        let body = serde_yaml::to_string(self).map_err(|e| ExportError::Serialize(e.to_string()))?;
        Ok(format!(
            "# {}\n# Generated: {}\n\n{}",
            self.title, self.generated_at, body
        ))
    }

    /// Serialize in the given format
    pub fn render(&self, format: SnapshotFormat) -> Result<String, ExportError> {
        match format {
            SnapshotFormat::Json => self.to_json(),
            SnapshotFormat::Yaml => self.to_yaml(),
        }
    }

    /// File name for this snapshot: `{title}_{YYYY-MM-DD}.{ext}`
    pub fn file_name(&self, format: SnapshotFormat) -> String {
        let date: NaiveDate = self.generated_at.date();
        file_name(&self.title, date, format.extension())
    }
}
