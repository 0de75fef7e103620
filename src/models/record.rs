//! Raw report records
//!
//! The backend's record shape depends on the report and is not known
//! statically, so a record is an ordered JSON object.

use serde_json::{Map, Value};

/// One row as returned by the backend, fields in the order they were sent
pub type RawRecord = Map<String, Value>;

/// Field names the backend uses for a record's status
pub const STATUS_FIELDS: &[&str] = &["status", "estado"];

/// Field names the backend uses for a vehicle's type
pub const VEHICLE_TYPE_FIELDS: &[&str] = &["vehicle_type", "tipo_vehiculo", "tipo"];

/// First string value found under any of `keys`
pub fn text_field<'a>(record: &'a RawRecord, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str))
}

/// The record's status text, if any
pub fn status_of(record: &RawRecord) -> Option<&str> {
    text_field(record, STATUS_FIELDS)
}

/// Decode a response body into records
///
/// Returns the records and the number of non-object elements skipped.
/// A body that is not an array yields `None`.
pub fn records_from_value(body: Value) -> Option<(Vec<RawRecord>, usize)> {
    let Value::Array(items) = body else {
        return None;
    };

    let total = items.len();
    let records: Vec<RawRecord> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect();
    let skipped = total - records.len();

    Some((records, skipped))
}
