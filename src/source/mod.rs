//! Report data sources
//!
//! A source executes a query descriptor against wherever the records live.
//! The pipeline only depends on the [`ReportSource`] trait; the HTTP
//! implementation talks to the dispatch backend.

pub mod http;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{QueryDescriptor, RawRecord};

pub use http::HttpReportSource;

/// Executes report queries
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch the records for a query
    async fn fetch(&self, query: &QueryDescriptor) -> Result<Vec<RawRecord>, FetchError>;
}
