//! dispatch-reports - Report generation for a dispatch backend
//!
//! This library turns a report category plus filter criteria into a backend
//! request, narrows the fetched records with client-side filters, computes
//! summary statistics, and renders the result as a terminal table, CSV, a
//! print-ready document or a snapshot.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Categories, filters, query descriptors and records
//! - `source`: Report data sources (HTTP)
//! - `reports`: Planning, filtering, statistics and the report pipeline
//! - `catalog`: Column labels and value formatting
//! - `export`: CSV, print and snapshot exporters
//! - `display`: Terminal rendering
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use dispatch_reports::config::{ReportPaths, Settings};
//! use dispatch_reports::reports::ReportPipeline;
//! use dispatch_reports::source::HttpReportSource;
//!
//! let paths = ReportPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let source = HttpReportSource::from_settings(&settings)?;
//! let mut pipeline = ReportPipeline::from_settings(&settings);
//! pipeline.generate("clients", Default::default(), &source).await;
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod source;

pub use catalog::{ColumnCatalog, FormattedTable};
pub use error::{ExportError, FetchError, ReportError, ReportResult};
pub use models::{FilterCriteria, QueryDescriptor, RawRecord, ReportCategory};
pub use reports::{ReportPipeline, ReportState};
