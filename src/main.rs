//! Dockside main entry point
//!
//! Command-line interface for the dealer-directory scraper. Three modes:
//! a fresh scrape (default, rebuilds the database), a dry run (scrape and
//! print without persisting), and a CSV export of the existing database.

use clap::Parser;
use dockside::config::load_config;
use dockside::export::export_csv;
use dockside::fetcher::WebDriverFetcher;
use dockside::scrape::Scraper;
use dockside::store::{DealerStore, SqliteStore};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Dockside: a paginated dealer-directory scraper
///
/// Scrapes dealer records (name, address, phone, website) from a paginated
/// listing rendered in a browser, validates contact fields, stores accepted
/// records in SQLite, and can export the store to CSV.
#[derive(Parser, Debug)]
#[command(name = "dockside")]
#[command(version = "0.2.0")]
#[command(about = "A paginated dealer-directory scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Scrape and print accepted records without touching the database
    #[arg(long, conflicts_with = "export")]
    dry_run: bool,

    /// Export the existing database to CSV and exit
    #[arg(long, conflicts_with = "dry_run")]
    export: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.export {
        handle_export(&config)?;
    } else {
        handle_scrape(&config, cli.dry_run).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("dockside=info,warn"),
            1 => EnvFilter::new("dockside=debug,info"),
            2 => EnvFilter::new("dockside=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --export mode: writes the existing database to CSV
fn handle_export(config: &dockside::config::Config) -> anyhow::Result<()> {
    println!("Database: {}", config.output.database_path);
    println!("Output: {}", config.output.csv_path);
    println!();

    // Read-only: export must never mutate the store
    let store = SqliteStore::open_read_only(Path::new(&config.output.database_path))?;

    tracing::info!("Exporting dealer information to CSV...");
    let count = export_csv(&store, Path::new(&config.output.csv_path))?;

    println!("✓ Exported {} dealers to: {}", count, config.output.csv_path);

    Ok(())
}

/// Handles the scrape modes: fresh run (default) or dry run
async fn handle_scrape(config: &dockside::config::Config, dry_run: bool) -> anyhow::Result<()> {
    if dry_run {
        println!("Dry run mode enabled. No data will be saved to the database.");
    }

    tracing::info!("Connecting to WebDriver at {}", config.fetcher.webdriver_url);
    let mut fetcher = WebDriverFetcher::connect(&config.fetcher).await?;

    let run_result = if dry_run {
        let mut scraper = Scraper::<_, SqliteStore>::new(config, &mut fetcher, None)?;
        scraper.run().await
    } else {
        let mut store = SqliteStore::open(Path::new(&config.output.database_path))?;

        // Fresh snapshot: destroy prior contents before the first write
        store.reset()?;

        let mut scraper = Scraper::new(config, &mut fetcher, Some(&mut store))?;
        scraper.run().await
    };

    // Release the browser session before propagating any run error
    if let Err(e) = fetcher.shutdown().await {
        tracing::warn!("Failed to shut down WebDriver session: {}", e);
    }

    let summary = run_result?;

    println!(
        "✓ Scrape complete: {} dealers accepted across {} pages",
        summary.records_accepted, summary.pages_attempted
    );
    if summary.records_rejected > 0 {
        println!("  {} records rejected by validation", summary.records_rejected);
    }
    if summary.pages_failed > 0 {
        println!("  {} pages skipped after fetch failures", summary.pages_failed);
    }

    Ok(())
}
