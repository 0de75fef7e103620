//! HTTP report source
//!
//! Issues `GET` requests against the dispatch backend and classifies
//! failures into [`FetchError`] variants. Requests carry the configured
//! timeout unless it is disabled.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::ReportSource;
use crate::config::Settings;
use crate::error::{FetchError, ReportError, ReportResult};
use crate::models::record::records_from_value;
use crate::models::{QueryDescriptor, RawRecord};

/// Report source backed by the dispatch REST API
#[derive(Debug, Clone)]
pub struct HttpReportSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReportSource {
    /// Create a source for `base_url`
    ///
    /// `timeout` bounds each whole request; `None` waits indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ReportResult<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| {
            ReportError::Config(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ReportError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Create a source from user settings
    pub fn from_settings(settings: &Settings) -> ReportResult<Self> {
        Self::new(settings.api_base_url.clone(), settings.request_timeout())
    }

    /// Base address requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch(&self, query: &QueryDescriptor) -> Result<Vec<RawRecord>, FetchError> {
        let url = query.url(&self.base_url).map_err(|e| FetchError::Other {
            message: Some(format!("Invalid report URL: {}", e)),
        })?;
        debug!(%url, "fetching report data");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), path = %query.path(), "report request failed");
            return Err(FetchError::from_status(
                status.as_u16(),
                &query.path(),
                error_detail(&body),
            ));
        }

        let body: Value = response.json().await.map_err(|e| FetchError::Other {
            message: Some(format!("Invalid report response: {}", e)),
        })?;

        let (records, skipped) = records_from_value(body).ok_or_else(|| FetchError::Other {
            message: Some("The report response is not a list of records.".to_string()),
        })?;
        if skipped > 0 {
            warn!(skipped, "ignored non-object elements in report response");
        }

        debug!(rows = records.len(), "report data received");
        Ok(records)
    }
}

fn classify_transport(err: reqwest::Error) -> FetchError {
    if err.is_connect() || err.is_timeout() {
        FetchError::Unreachable(err.to_string())
    } else {
        FetchError::Other {
            message: Some(err.to_string()),
        }
    }
}

/// Extract the backend's error text from a failure body
///
/// Understands `{"detail": "..."}`, validation lists
/// `{"detail": [{"msg": "..."}]}` and `{"message": "..."}`.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        _ => {}
    }

    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
