//! Custom error types for dispatch-reports
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. Fetch failures and export failures have
//! their own enums because they are surfaced differently: fetch failures end
//! up as pipeline state, export failures are reported to the caller only.

use thiserror::Error;

/// The main error type for dispatch-reports operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid filter input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A report generation ended in the failed state
    #[error("{0}")]
    Generation(String),

    /// Fetching report data failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Export errors
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ReportError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for dispatch-reports operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Classified failure of a report fetch
///
/// The `Display` text is the message shown to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout
    #[error("Cannot reach the report server: {0}. Check that the backend is running.")]
    Unreachable(String),

    /// The endpoint does not exist on the server
    #[error("Report endpoint not found ({0}). Check the configured API address.")]
    NotFound(String),

    /// The backend reported an internal fault
    #[error("{}", server_fault_message(.detail))]
    ServerFault { detail: Option<String> },

    /// Anything else
    #[error("{}", other_message(.message))]
    Other { message: Option<String> },
}

fn server_fault_message(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!("The report server failed: {}", detail),
        None => "The report server failed while generating the report.".to_string(),
    }
}

fn other_message(message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => "Failed to generate the report.".to_string(),
    }
}

impl FetchError {
    /// Build a failure for a non-success HTTP status
    ///
    /// `detail` is the backend's error text, if the body carried one.
    pub fn from_status(status: u16, path: &str, detail: Option<String>) -> Self {
        match status {
            404 => Self::NotFound(path.to_string()),
            500..=599 => Self::ServerFault { detail },
            _ => Self::Other { message: detail },
        }
    }

    /// Check if the server could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}

/// Errors raised by the exporters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// Nothing to export; callers should check before exporting
    #[error("There is no data to export. Generate a report with results first.")]
    EmptyResult,

    /// The CSV writer failed
    #[error("CSV export failed: {0}")]
    Csv(String),

    /// Snapshot serialization failed
    #[error("Snapshot export failed: {0}")]
    Serialize(String),

    /// Writing the artifact failed
    #[error("Export error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_fetch_error_classification() {
        assert!(matches!(
            FetchError::from_status(404, "/orders", None),
            FetchError::NotFound(_)
        ));
        assert!(matches!(
            FetchError::from_status(503, "/orders", None),
            FetchError::ServerFault { detail: None }
        ));
        assert!(matches!(
            FetchError::from_status(400, "/orders", Some("bad".into())),
            FetchError::Other { .. }
        ));
    }

    #[test]
    fn test_server_fault_includes_detail() {
        let err = FetchError::ServerFault {
            detail: Some("Error al generar reporte por fechas".into()),
        };
        assert!(err.to_string().contains("Error al generar reporte por fechas"));
    }

    #[test]
    fn test_other_falls_back_to_generic_message() {
        let err = FetchError::Other { message: None };
        assert_eq!(err.to_string(), "Failed to generate the report.");

        let err = FetchError::Other {
            message: Some("Formato de fecha inválido".into()),
        };
        assert_eq!(err.to_string(), "Formato de fecha inválido");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReportError = io_err.into();
        assert!(matches!(err, ReportError::Io(_)));
    }

    #[test]
    fn test_export_error_wraps() {
        let err: ReportError = ExportError::EmptyResult.into();
        assert!(err.to_string().contains("no data to export"));
    }
}
