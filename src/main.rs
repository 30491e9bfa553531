//! Origin-Crawler main entry point
//!
//! This is the command-line interface for the Origin-Crawler same-origin crawler.

use anyhow::Context;
use clap::Parser;
use origin_crawler::config::{load_config_with_hash, validate, Config};
use origin_crawler::crawler::{format_user_agent, run_session};
use origin_crawler::output::{print_results, print_statistics};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Origin-Crawler: crawl one site, then search what it says
///
/// Origin-Crawler follows every link that shares the seed's prefix, keeps the
/// text of each page in memory, and prints the pages containing each keyword.
#[derive(Parser, Debug)]
#[command(name = "origin-crawler")]
#[command(version)]
#[command(about = "A same-origin crawler with in-memory keyword search", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// URL to start crawling from (overrides the config file)
    #[arg(long)]
    seed: Option<String>,

    /// Scope prefix links must start with (defaults to the seed)
    #[arg(long)]
    base: Option<String>,

    /// Keyword to search for; repeat for several (overrides the config file)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Stop after fetching this many pages
    #[arg(long)]
    max_pages: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Print crawl statistics after the search results
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let outcome = run_session(&config)
        .await
        .context("Failed to start crawl session")?;

    for result in &outcome.results {
        if outcome.results.len() > 1 {
            println!("Keyword: {}", result.keyword);
        }
        print_results(&result.urls).context("Failed to write search results")?;
    }

    if cli.stats {
        println!();
        print_statistics(&outcome.report);
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
            0 => EnvFilter::new("origin_crawler=info,warn"),
            1 => EnvFilter::new("origin_crawler=debug,info"),
            2 => EnvFilter::new("origin_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(seed) = &cli.seed {
        config.crawler.seed = seed.clone();
    }
    if let Some(base) = &cli.base {
        config.crawler.base = Some(base.clone());
    }
    if cli.max_pages.is_some() {
        config.crawler.max_pages = cli.max_pages;
    }
    if !cli.keywords.is_empty() {
        config.search.keywords = cli.keywords.clone();
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Origin-Crawler Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed: {}", config.crawler.seed);
    println!("  Scope prefix: {}", config.effective_base());
    match config.crawler.max_pages {
        Some(limit) => println!("  Max pages: {}", limit),
        None => println!("  Max pages: unlimited"),
    }
    println!("  Request timeout: {}s", config.crawler.request_timeout);
    println!("  Connect timeout: {}s", config.crawler.connect_timeout);

    println!("\nUser Agent:");
    println!("  {}", format_user_agent(&config.user_agent));

    println!("\nKeywords ({}):", config.search.keywords.len());
    for keyword in &config.search.keywords {
        println!("  - {:?}", keyword);
    }

    println!("\n✓ Configuration is valid");
}
