//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report pipeline.

pub mod category;
pub mod report;

pub use category::handle_categories_command;
pub use report::{handle_plan_command, handle_report_command, FilterArgs, PlanArgs, ReportArgs};
