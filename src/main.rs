use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use dispatch_reports::cli::{
    handle_categories_command, handle_plan_command, handle_report_command, PlanArgs, ReportArgs,
};
use dispatch_reports::config::{ReportPaths, Settings};

#[derive(Parser)]
#[command(
    name = "dispatch-report",
    author = "Kaylee Beyene",
    version,
    about = "Generate and export reports from the dispatch backend",
    long_about = "dispatch-report queries the dispatch backend for orders, clients, \
                  vehicles and drivers, narrows the results with client-side filters, \
                  summarizes them, and exports them as CSV, printable HTML or snapshots."
)]
struct Cli {
    /// Backend base URL (overrides the configured one)
    #[arg(long, global = true, env = "DISPATCH_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report
    Report(ReportArgs),

    /// Show the request a report would issue, without sending it
    Plan(PlanArgs),

    /// List report categories
    Categories,

    /// Write the default configuration
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Initialize paths and settings
    let paths = ReportPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(api_url) = cli.api_url {
        settings.api_base_url = api_url;
    }

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&settings, &paths, args).await?;
        }
        Some(Commands::Plan(args)) => {
            handle_plan_command(&settings, args)?;
        }
        Some(Commands::Categories) => handle_categories_command(),
        Some(Commands::Init) => {
            println!("Initializing dispatch-reports at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!("Exports will be written to: {}", settings.export_dir(&paths).display());
        }
        Some(Commands::Config) => {
            println!("dispatch-reports Configuration");
            println!("==============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Export directory: {}", settings.export_dir(&paths).display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  API base URL:      {}", settings.api_base_url);
            match settings.request_timeout() {
                Some(timeout) => println!("  Request timeout:   {}s", timeout.as_secs()),
                None => println!("  Request timeout:   none"),
            }
            println!("  Default driver ID: {}", settings.default_driver_id);
            println!("  Notice duration:   {}s", settings.notice_duration_secs);
            println!("  Date/time format:  {}", settings.display.datetime_format);
            println!("  Date format:       {}", settings.display.date_format);
            println!("  Empty value:       {}", settings.display.placeholder);
        }
        None => {
            println!("dispatch-report - Reports from the dispatch backend");
            println!();
            println!("Run 'dispatch-report --help' for usage information.");
            println!("Run 'dispatch-report categories' to list the available reports.");
        }
    }

    Ok(())
}
