//! Web-Spider main entry point
//!
//! This is the command-line interface for the Web-Spider link text collector.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use web_spider::config::{load_config, validate, SpiderConfig};
use web_spider::crawler::{crawl_once, Coordinator};

/// Web-Spider: fetch all links on a page (one level deep) and write the text
/// of each linked page into a single file
#[derive(Parser, Debug)]
#[command(name = "web-spider")]
#[command(version = "1.0.0")]
#[command(
    about = "Fetch all links on a page (one level deep) and write the text of each linked page into a single file",
    long_about = None
)]
struct Cli {
    /// Starting URL to crawl
    #[arg(value_name = "URL")]
    url: String,

    /// Path to the output text file [default: web_spider_output.txt]
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// List the links on the starting page without fetching them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Run aborted: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("web_spider=info,warn"),
            1 => EnvFilter::new("web_spider=debug,info"),
            2 => EnvFilter::new("web_spider=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config, &cli.url).await
    } else {
        handle_crawl(&config, &cli.url).await
    }
}

/// Merges the config file (if any) with command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<SpiderConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => SpiderConfig::default(),
    };

    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.fetch.timeout_secs = timeout;
    }
    if let Some(user_agent) = &cli.user_agent {
        config.fetch.user_agent = user_agent.clone();
    }

    validate(&config)?;

    Ok(config)
}

/// Handles the --dry-run mode: prints the links that would be crawled
async fn handle_dry_run(config: &SpiderConfig, start_url: &str) -> anyhow::Result<()> {
    let coordinator = Coordinator::new(&config.fetch)?;
    let links = coordinator.discover_links(start_url).await?;

    for link in &links {
        println!("{}", link);
    }

    tracing::info!("Would crawl {} links", links.len());

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &SpiderConfig, start_url: &str) -> anyhow::Result<()> {
    tracing::info!("Starting crawl of {}", start_url);

    let report = crawl_once(config, start_url).await?;

    println!("Wrote link texts to {}", report.output_path.display());

    Ok(())
}
