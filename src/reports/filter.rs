//! Client-side result filtering
//!
//! Applies the filters the backend endpoints cannot express. Filtering is
//! total: a record with a missing or non-text field simply does not match.

use crate::models::record::{status_of, text_field, VEHICLE_TYPE_FIELDS};
use crate::models::{FilterCriteria, RawRecord, ReportCategory};

use super::synonyms::{same_text, OrderBucket};

/// A single record predicate derived from the filters
#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate<'a> {
    /// Status equals the value, ignoring case
    StatusIs(&'a str),
    /// Status belongs to an order bucket
    StatusIn(OrderBucket),
    /// Vehicle type equals the value, ignoring case
    VehicleTypeIs(&'a str),
}

impl Predicate<'_> {
    fn matches(&self, record: &RawRecord) -> bool {
        match self {
            Self::StatusIs(wanted) => status_of(record).is_some_and(|s| same_text(s, wanted)),
            Self::StatusIn(bucket) => status_of(record).is_some_and(|s| bucket.matches(s)),
            Self::VehicleTypeIs(wanted) => text_field(record, VEHICLE_TYPE_FIELDS)
                .is_some_and(|t| same_text(t, wanted)),
        }
    }
}

fn predicate_for<'a>(category: &ReportCategory, filters: &'a FilterCriteria) -> Option<Predicate<'a>> {
    match category {
        ReportCategory::Clients => filters.status().map(Predicate::StatusIs),
        ReportCategory::Vehicles => filters.vehicle_type().map(Predicate::VehicleTypeIs),
        c if c.is_order_shaped() => filters.secondary_status().map(|requested| {
            match OrderBucket::lookup(requested) {
                Some(bucket) => Predicate::StatusIn(bucket),
                None => Predicate::StatusIs(requested),
            }
        }),
        _ => None,
    }
}

/// Whether the category/filter combination filters anything client-side
pub fn filters_client_side(category: &ReportCategory, filters: &FilterCriteria) -> bool {
    predicate_for(category, filters).is_some()
}

/// Narrow raw results with the category's client-side predicate
///
/// Combinations without a predicate return the input unchanged.
pub fn apply(category: &ReportCategory, raw: Vec<RawRecord>, filters: &FilterCriteria) -> Vec<RawRecord> {
    match predicate_for(category, filters) {
        Some(predicate) => raw.into_iter().filter(|r| predicate.matches(r)).collect(),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records(values: Value) -> Vec<RawRecord> {
        values
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_clients_status_case_insensitive() {
        let raw = records(json!([
            {"id": 1, "estado": "Activo"},
            {"id": 2, "estado": "activo"},
            {"id": 3, "estado": "Inactivo"}
        ]));
        let filters: FilterCriteria = serde_json::from_str(r#"{"estado": "activo"}"#).unwrap();

        let filtered = apply(&ReportCategory::Clients, raw, &filters);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_orders_bucket_expansion() {
        let raw = records(json!([
            {"id": 1, "status": "EN_TRANSITO"},
            {"id": 2, "status": "asignado"},
            {"id": 3, "status": "entregado"},
            {"id": 4}
        ]));
        let filters = FilterCriteria {
            secondary_status: Some("in_progress".into()),
            ..Default::default()
        };

        let filtered = apply(&ReportCategory::Orders, raw, &filters);
        let ids: Vec<_> = filtered.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_orders_bucket_hyphenated_request() {
        for requested in ["in-progress", "In-Progress"] {
            let raw = records(json!([
                {"id": 1, "status": "en_transito"},
                {"id": 2, "status": "asignado"},
                {"id": 3, "status": "En Curso"},
                {"id": 4, "status": "pendiente"}
            ]));
            let filters = FilterCriteria {
                secondary_status: Some(requested.into()),
                ..Default::default()
            };

            let filtered = apply(&ReportCategory::Orders, raw, &filters);
            let ids: Vec<_> = filtered.iter().map(|r| r["id"].as_i64().unwrap()).collect();
            assert_eq!(ids, [1, 2, 3], "requested {}", requested);
        }
    }

    #[test]
    fn test_orders_unrecognized_status_exact_match() {
        let raw = records(json!([
            {"id": 1, "status": "On Hold"},
            {"id": 2, "status": "on hold "},
            {"id": 3, "status": "pendiente"}
        ]));
        let filters = FilterCriteria {
            secondary_status: Some("ON HOLD".into()),
            ..Default::default()
        };

        assert_eq!(apply(&ReportCategory::Orders, raw, &filters).len(), 2);
    }

    #[test]
    fn test_vehicles_type() {
        let raw = records(json!([
            {"placa": "ABC123", "tipo_vehiculo": "Camion"},
            {"placa": "XYZ789", "tipo_vehiculo": "moto"},
            {"placa": "JKL456", "vehicle_type": "CAMION"}
        ]));
        let filters = FilterCriteria {
            vehicle_type: Some("camion".into()),
            ..Default::default()
        };

        assert_eq!(apply(&ReportCategory::Vehicles, raw, &filters).len(), 2);
    }

    #[test]
    fn test_identity_without_special_case() {
        let raw = records(json!([{"status": "activo"}, {"status": "x"}]));
        let filters = FilterCriteria {
            status: Some("activo".into()),
            vehicle_type: Some("moto".into()),
            ..Default::default()
        };

        for category in [
            ReportCategory::Drivers,
            ReportCategory::AvailableDrivers,
            ReportCategory::AllDrivers,
            ReportCategory::Unknown("x".into()),
        ] {
            assert_eq!(apply(&category, raw.clone(), &filters), raw);
            assert!(!filters_client_side(&category, &filters));
        }

        // status alone is not an order filter
        assert_eq!(apply(&ReportCategory::Orders, raw.clone(), &filters), raw);
    }

    #[test]
    fn test_non_string_status_never_matches() {
        let raw = records(json!([{"estado": null}, {"estado": {"code": "activo"}}]));
        let filters = FilterCriteria {
            status: Some("activo".into()),
            ..Default::default()
        };
        assert!(apply(&ReportCategory::Clients, raw, &filters).is_empty());
    }
}
