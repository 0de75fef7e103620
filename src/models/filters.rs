//! Report filter criteria
//!
//! Every field is optional; an absent (or blank) field means no constraint.
//! The backend's Spanish field names are accepted when deserializing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Date format accepted for date range filters
pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Filter inputs for a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Start of the date range (YYYY-MM-DD)
    #[serde(alias = "fechaInicio", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// End of the date range (YYYY-MM-DD)
    #[serde(alias = "fechaFin", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Record status (clients)
    #[serde(alias = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Order status bucket or spelling (orders)
    #[serde(alias = "estadoPedido", skip_serializing_if = "Option::is_none")]
    pub secondary_status: Option<String>,

    /// Vehicle type (vehicles)
    #[serde(alias = "tipoVehiculo", skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,

    /// Client identifier
    #[serde(alias = "clienteId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Driver identifier
    #[serde(alias = "conductorId", skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl FilterCriteria {
    /// Start date, if set
    pub fn start_date(&self) -> Option<&str> {
        present(&self.start_date)
    }

    /// End date, if set
    pub fn end_date(&self) -> Option<&str> {
        present(&self.end_date)
    }

    /// Both ends of the date range, only when both are set
    pub fn date_range(&self) -> Option<(&str, &str)> {
        Some((self.start_date()?, self.end_date()?))
    }

    /// Status, if set
    pub fn status(&self) -> Option<&str> {
        present(&self.status)
    }

    /// Order status, if set
    pub fn secondary_status(&self) -> Option<&str> {
        present(&self.secondary_status)
    }

    /// Vehicle type, if set
    pub fn vehicle_type(&self) -> Option<&str> {
        present(&self.vehicle_type)
    }

    /// Client identifier, if set
    pub fn client_id(&self) -> Option<&str> {
        present(&self.client_id)
    }

    /// Driver identifier, if set
    pub fn driver_id(&self) -> Option<&str> {
        present(&self.driver_id)
    }

    /// True when no field constrains the report
    pub fn is_empty(&self) -> bool {
        self.start_date().is_none()
            && self.end_date().is_none()
            && self.status().is_none()
            && self.secondary_status().is_none()
            && self.vehicle_type().is_none()
            && self.client_id().is_none()
            && self.driver_id().is_none()
    }

    /// Check the date fields before a query is planned
    ///
    /// Each date must be `YYYY-MM-DD`, and the start may not be after the end.
    pub fn validate(&self) -> ReportResult<()> {
        let start = self
            .start_date()
            .map(|s| parse_filter_date(s, "start"))
            .transpose()?;
        let end = self
            .end_date()
            .map(|s| parse_filter_date(s, "end"))
            .transpose()?;

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ReportError::Validation(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }
        }

        Ok(())
    }
}

fn parse_filter_date(value: &str, which: &str) -> ReportResult<NaiveDate> {
    NaiveDate::parse_from_str(value, FILTER_DATE_FORMAT).map_err(|_| {
        ReportError::Validation(format!(
            "Invalid {} date format: {}. Use YYYY-MM-DD",
            which, value
        ))
    })
}
