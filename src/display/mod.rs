//! Display formatting for terminal output
//!
//! Turns pipeline state into text for the CLI: the report table, the
//! statistics block, notices and errors.

pub mod report;

pub use report::{format_pipeline, format_report_table, format_statistics};
