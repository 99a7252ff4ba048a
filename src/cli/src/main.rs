//! CLI for the trending repository cache.
//!
//! Refreshes `cached-data/trending/<platform>.json` for every supported
//! platform. All flags are optional; a bare invocation uses the defaults.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use trending_fetcher::{FetchConfig, PlatformOutcome, RunSummary, Runner, DEFAULT_OUTPUT_DIR};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Trending Fetcher - Cache trending repositories that ship installers, per platform.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token. Unauthenticated when absent.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL (for GitHub Enterprise).
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Directory receiving one JSON document per platform.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Verified repositories to keep per platform.
    #[arg(long, default_value_t = 30)]
    desired_count: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    let config = FetchConfig::default()
        .with_token(args.token)
        .with_api_base_url(args.api_url)
        .with_output_dir(args.output_dir)
        .with_desired_count(args.desired_count);

    let runner = match Runner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            error!(error = %e, "Critical failure");
            return ExitCode::from(2);
        }
    };

    let summary = runner.run().await;
    print_summary(&summary);

    // Partial failures are reported, not signalled through the exit code.
    ExitCode::SUCCESS
}

/// Initializes tracing with compact output and `RUST_LOG` filtering (default "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Last updated: {}", summary.last_updated);
    println!("  Platforms processed: {}", summary.platforms_processed);
    println!("  Search pages fetched: {}", summary.pages_fetched);
    println!("  Candidates checked: {}", summary.candidates_checked);
    println!("  Repositories verified: {}", summary.repositories_verified);

    if summary.malformed_skipped > 0 {
        println!("  Malformed results skipped: {}", summary.malformed_skipped);
    }

    for outcome in &summary.outcomes {
        match outcome {
            PlatformOutcome::Written {
                platform,
                path,
                count,
                search_failed,
            } => {
                let note = if *search_failed { " (search stopped early)" } else { "" };
                println!("  ✓ {platform}: {count} repos -> {}{note}", path.display());
            }
            PlatformOutcome::Failed { platform, error } => {
                println!("  ✗ {platform}: {error}");
            }
        }
    }
}
