//! Core data models for dispatch-reports
//!
//! Report categories, filter criteria, query descriptors, raw backend
//! records and summary statistics.

pub mod category;
pub mod filters;
pub mod query;
pub mod record;
pub mod statistic;

pub use category::ReportCategory;
pub use filters::FilterCriteria;
pub use query::{Endpoint, QueryDescriptor};
pub use record::RawRecord;
pub use statistic::Statistic;
