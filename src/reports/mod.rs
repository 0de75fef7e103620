//! Report generation
//!
//! Planning, client-side filtering, aggregation and the pipeline that ties
//! them together around a [`crate::source::ReportSource`].

pub mod clock;
pub mod filter;
pub mod pipeline;
pub mod planner;
pub mod statistics;
pub mod synonyms;

pub use clock::{Clock, ManualClock, Notice, SystemClock};
pub use pipeline::{PendingFetch, Phase, ReportPipeline, ReportState};
pub use planner::{PlannerConfig, QueryPlanner};
pub use synonyms::OrderBucket;
