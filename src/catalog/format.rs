//! Value formatting rules
//!
//! Every function here is total: malformed input falls back to the raw
//! text rather than failing the render.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::CurrencyFormat;

/// Substrings that mark a key as holding a date or timestamp
const DATE_TOKENS: &[&str] = &["fecha", "date", "_at", "time"];

/// How a column's values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatRule {
    /// Value as text
    Text,
    /// Timestamp rendered with the configured format
    Date,
    /// Status label table
    Status,
    /// Priority label table
    Priority,
    /// Localized currency for numeric values
    Currency,
}

impl FormatRule {
    /// Pick the rule for a field key
    pub fn for_key(key: &str) -> Self {
        let key = key.to_lowercase();
        match key.as_str() {
            "status" | "estado" => Self::Status,
            "priority" | "prioridad" => Self::Priority,
            "value" | "valor" => Self::Currency,
            k if DATE_TOKENS.iter().any(|token| k.contains(token)) => Self::Date,
            _ => Self::Text,
        }
    }
}

/// A parsed timestamp, keeping whether it had a time component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

/// Parse the timestamp shapes the backend emits
///
/// Offsets are dropped; the wall-clock time as sent is kept.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(Timestamp::DateTime(dt.naive_local()));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Timestamp::DateTime(dt));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(Timestamp::Date)
}

/// Render a timestamp string, or `None` if it does not parse
pub fn format_timestamp(raw: &str, datetime_format: &str, date_format: &str) -> Option<String> {
    match parse_timestamp(raw)? {
        Timestamp::DateTime(dt) => format_datetime(dt, datetime_format),
        Timestamp::Date(d) => {
            let mut out = String::new();
            write!(out, "{}", d.format(date_format)).ok()?;
            Some(out)
        }
    }
}

/// Render a date-time, or `None` if the format string is invalid
pub fn format_datetime(dt: NaiveDateTime, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(format)).ok()?;
    Some(out)
}

/// Render an amount as localized currency
pub fn format_currency(amount: f64, currency: &CurrencyFormat) -> String {
    let decimals = u32::from(currency.decimals.min(6));
    let factor = 10u128.pow(decimals);
    let scaled = (amount.abs() * factor as f64).round();
    if !scaled.is_finite() || scaled >= u128::MAX as f64 {
        return amount.to_string();
    }

    let scaled = scaled as u128;
    let units = group_thousands(&(scaled / factor).to_string(), &currency.thousands_separator);
    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };

    if decimals == 0 {
        format!("{}{}{}", sign, currency.symbol, units)
    } else {
        format!(
            "{}{}{}{}{:0width$}",
            sign,
            currency.symbol,
            units,
            currency.decimal_separator,
            scaled % factor,
            width = decimals as usize
        )
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}
