//! CLI commands for reports
//!
//! `report` generates a report against the backend and optionally exports
//! it; `plan` shows which request a report would issue without sending it.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use tracing::debug;

use crate::catalog::format::format_datetime;
use crate::config::{ReportPaths, Settings};
use crate::display::format_pipeline;
use crate::error::{ReportError, ReportResult};
use crate::export::{self, ReportSnapshot, SnapshotFormat};
use crate::models::{FilterCriteria, ReportCategory};
use crate::reports::filter::filters_client_side;
use crate::reports::{Phase, PlannerConfig, QueryPlanner, ReportPipeline};
use crate::source::HttpReportSource;

/// Filter flags shared by `report` and `plan`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end: Option<String>,

    /// Record status (clients, order-status, orders-with-drivers)
    #[arg(long)]
    pub status: Option<String>,

    /// Order status bucket: pending, in_progress, completed, cancelled
    #[arg(long = "order-status")]
    pub order_status: Option<String>,

    /// Vehicle type (vehicles)
    #[arg(long = "vehicle-type")]
    pub vehicle_type: Option<String>,

    /// Client ID (orders)
    #[arg(long)]
    pub client: Option<String>,

    /// Driver ID (drivers, driver-orders)
    #[arg(long)]
    pub driver: Option<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        Self {
            start_date: args.start,
            end_date: args.end,
            status: args.status,
            secondary_status: args.order_status,
            vehicle_type: args.vehicle_type,
            client_id: args.client,
            driver_id: args.driver,
        }
    }
}

/// Arguments of the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report category (run `categories` for the list)
    pub category: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Export the result as CSV
    #[arg(long)]
    pub csv: bool,

    /// Export a print-ready HTML document
    #[arg(long)]
    pub print: bool,

    /// Export a snapshot of the whole report
    #[arg(long)]
    pub snapshot: bool,

    /// Snapshot format
    #[arg(long, value_enum, default_value_t = SnapshotFormat::Json)]
    pub format: SnapshotFormat,

    /// Directory for exported files (defaults to the configured one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ReportArgs {
    fn wants_export(&self) -> bool {
        self.csv || self.print || self.snapshot
    }
}

/// Arguments of the `plan` command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Report category (run `categories` for the list)
    pub category: String,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Generate a report, print it, and write the requested exports
pub async fn handle_report_command(
    settings: &Settings,
    paths: &ReportPaths,
    args: ReportArgs,
) -> ReportResult<()> {
    warn_if_unknown(&args.category);

    let source = HttpReportSource::from_settings(settings)?;
    let mut pipeline = ReportPipeline::from_settings(settings);
    pipeline
        .generate(&args.category, args.filters.clone().into(), &source)
        .await;

    if pipeline.phase() == Phase::Failed {
        let message = pipeline.error().unwrap_or("Report generation failed.");
        return Err(ReportError::Generation(message.to_string()));
    }

    println!("{}", format_pipeline(&pipeline));

    if args.wants_export() {
        let dir = args
            .output
            .clone()
            .unwrap_or_else(|| settings.export_dir(paths));
        export_report(&pipeline, settings, &args, dir)?;
    }

    Ok(())
}

fn export_report(
    pipeline: &ReportPipeline,
    settings: &Settings,
    args: &ReportArgs,
    dir: PathBuf,
) -> ReportResult<()> {
    let Some(category) = pipeline.state().category.as_ref() else {
        return Ok(());
    };
    let title = category.title();
    let table = pipeline.table();
    let now = Local::now().naive_local();
    debug!(dir = %dir.display(), rows = table.len(), "writing exports");

    if args.csv {
        let contents = export::to_csv(&table)?;
        let path = export::write_artifact(&dir, &export::csv_file_name(&title, now.date()), &contents)?;
        println!("CSV exported to: {}", path.display());
    }

    if args.print {
        let generated_at = format_datetime(now, &settings.display.datetime_format)
            .unwrap_or_else(|| now.format("%Y-%m-%d %H:%M").to_string());
        let contents = export::to_print_document(&title, &table, &generated_at)?;
        let path =
            export::write_artifact(&dir, &export::print_file_name(&title, now.date()), &contents)?;
        println!("Print document written to: {}", path.display());
    }

    if args.snapshot {
        let snapshot = ReportSnapshot::capture(
            category,
            &pipeline.state().filters,
            pipeline.statistics(),
            &table,
            now,
        )?;
        let contents = snapshot.render(args.format)?;
        let path = export::write_artifact(&dir, &snapshot.file_name(args.format), &contents)?;
        println!("Snapshot exported to: {}", path.display());
    }

    Ok(())
}

/// Print the request a report would issue
pub fn handle_plan_command(settings: &Settings, args: PlanArgs) -> ReportResult<()> {
    let Some(category) = ReportCategory::parse(&args.category) else {
        return Err(ReportError::Validation(
            "A report category is required".to_string(),
        ));
    };
    warn_if_unknown(&args.category);

    let filters: FilterCriteria = args.filters.into();
    filters.validate()?;

    let planner = QueryPlanner::new(PlannerConfig::from(settings));
    match planner.plan(&category, &filters) {
        Some(query) => {
            println!("{}", query);
            if let Ok(url) = query.url(&settings.api_base_url) {
                println!("URL: {}", url);
            }
            if filters_client_side(&category, &filters) {
                println!("Results are narrowed client-side by the given filters.");
            }
        }
        None => println!("No request: '{}' produces an empty report.", category),
    }

    Ok(())
}

fn warn_if_unknown(tag: &str) {
    if let Some(ReportCategory::Unknown(tag)) = ReportCategory::parse(tag) {
        eprintln!(
            "Unknown report category '{}'. Run 'dispatch-report categories' to list them.",
            tag
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_into_criteria() {
        let args = FilterArgs {
            start: Some("2024-01-01".into()),
            end: Some("2024-01-31".into()),
            order_status: Some("completed".into()),
            driver: Some("4".into()),
            ..Default::default()
        };

        let filters = FilterCriteria::from(args);
        assert_eq!(filters.date_range(), Some(("2024-01-01", "2024-01-31")));
        assert_eq!(filters.secondary_status(), Some("completed"));
        assert_eq!(filters.driver_id(), Some("4"));
        assert_eq!(filters.status(), None);
    }

    #[test]
    fn test_plan_rejects_blank_category() {
        let args = PlanArgs {
            category: "  ".into(),
            filters: FilterArgs::default(),
        };
        let err = handle_plan_command(&Settings::default(), args).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_plan_rejects_bad_dates() {
        let args = PlanArgs {
            category: "orders".into(),
            filters: FilterArgs {
                start: Some("31/01/2024".into()),
                ..Default::default()
            },
        };
        let err = handle_plan_command(&Settings::default(), args).unwrap_err();
        assert!(err.to_string().contains("Invalid start date format"));
    }

    #[test]
    fn test_wants_export() {
        let args = ReportArgs {
            category: "clients".into(),
            filters: FilterArgs::default(),
            csv: false,
            print: true,
            snapshot: false,
            format: SnapshotFormat::Json,
            output: None,
        };
        assert!(args.wants_export());
    }
}
