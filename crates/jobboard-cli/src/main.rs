//! # jobboard CLI entry point
//!
//! Parses command-line arguments, initialises logging and configuration,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jobboard_cli::config::CliConfig;
use jobboard_cli::jobs::{run_jobs, JobsArgs};
use jobboard_cli::posts::{run_posts, PostsArgs};
use jobboard_cli::slug::{run_slug, SlugArgs};

/// Job board toolkit.
///
/// Filters exported job and blog records exactly as the listing pages do,
/// encodes and decodes URL slugs, and builds new records from admin drafts.
#[derive(Parser, Debug)]
#[command(name = "jobboard", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a title to a slug, or decode a slug.
    Slug(SlugArgs),

    /// Filter, show or create job postings.
    Jobs(JobsArgs),

    /// Filter, resolve or create blog posts.
    Posts(PostsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_json);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "jobboard CLI starting");

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Slug(args) => run_slug(&args),
        Commands::Jobs(args) => run_jobs(&args, &config),
        Commands::Posts(args) => run_posts(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
