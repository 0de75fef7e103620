//! Column catalog
//!
//! The single formatting layer shared by the terminal table and every
//! exporter: derives display columns from a result set and renders each
//! field through its column's rule.

pub mod format;
pub mod labels;

use serde::Serialize;
use serde_json::Value;

use crate::config::DisplaySettings;
use crate::models::RawRecord;

pub use format::FormatRule;
pub use labels::field_label;

/// A display-ready column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedColumn {
    /// Raw field key
    pub key: String,
    /// Column header
    pub label: String,
    /// Value rendering rule
    #[serde(skip)]
    pub rule: FormatRule,
}

impl FormattedColumn {
    /// Build the column for a field key
    pub fn for_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: field_label(key),
            rule: FormatRule::for_key(key),
        }
    }
}

/// Columns plus display rows, in result order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedTable {
    /// Columns, in the first record's field order
    pub columns: Vec<FormattedColumn>,
    /// One row of display values per record
    pub rows: Vec<Vec<String>>,
}

impl FormattedTable {
    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Column labels, in order
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }
}

/// Maps field keys to labels and renders values
#[derive(Debug, Clone, Default)]
pub struct ColumnCatalog {
    display: DisplaySettings,
}

impl ColumnCatalog {
    /// Create a catalog with the given display conventions
    pub fn new(display: DisplaySettings) -> Self {
        Self { display }
    }

    /// Display conventions in effect
    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    /// Columns for a result set, taken from the first record's keys
    pub fn columns_for(&self, records: &[RawRecord]) -> Vec<FormattedColumn> {
        records
            .first()
            .map(|first| {
                first
                    .keys()
                    .map(|key| FormattedColumn {
                        key: key.clone(),
                        label: self.label(key),
                        rule: FormatRule::for_key(key),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Column label for a key
    pub fn label(&self, key: &str) -> String {
        field_label(key)
    }

    /// Render one field of a record
    pub fn format_value(&self, record: &RawRecord, key: &str) -> String {
        self.render(record.get(key), FormatRule::for_key(key))
    }

    fn render(&self, value: Option<&Value>, rule: FormatRule) -> String {
        let value = match value {
            None | Some(Value::Null) => return self.display.placeholder.clone(),
            Some(value) => value,
        };

        match (rule, value) {
            (_, Value::Array(_) | Value::Object(_)) => value.to_string(),
            (FormatRule::Date, Value::String(s)) => format::format_timestamp(
                s,
                &self.display.datetime_format,
                &self.display.date_format,
            )
            .unwrap_or_else(|| s.clone()),
            (FormatRule::Status, Value::String(s)) => labels::status_label(s)
                .map(str::to_string)
                .unwrap_or_else(|| s.clone()),
            (FormatRule::Priority, Value::String(s)) => labels::priority_label(s)
                .map(str::to_string)
                .unwrap_or_else(|| s.clone()),
            (FormatRule::Currency, Value::Number(n)) => match n.as_f64() {
                Some(amount) => format::format_currency(amount, &self.display.currency),
                None => n.to_string(),
            },
            (FormatRule::Currency, Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(amount) if amount.is_finite() => {
                    format::format_currency(amount, &self.display.currency)
                }
                _ => s.clone(),
            },
            (_, Value::String(s)) => s.clone(),
            (_, other) => other.to_string(),
        }
    }

    /// Build the formatted view of a result set
    ///
    /// Fields missing from a later record render as the placeholder; fields
    /// that only later records carry are not shown.
    pub fn format_table(&self, records: &[RawRecord]) -> FormattedTable {
        let columns = self.columns_for(records);
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| self.render(record.get(&column.key), column.rule))
                    .collect()
            })
            .collect();

        FormattedTable { columns, rows }
    }
}
