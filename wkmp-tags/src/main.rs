//! wkmp-tags - Audio tag batch reader
//!
//! Reads the tags of the given audio files, normalizes them and prints the
//! canonical tag maps as JSON on stdout. Logs go to stderr or the configured
//! log file.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use wkmp_common::config::LoggingConfig;
use wkmp_tags::config::{ConfigOverrides, TagsConfig};
use wkmp_tags::logging::{bootstrap_subscriber, init_logging};
use wkmp_tags::report::{read_path_list, write_json};
use wkmp_tags::services::{BatchParser, FailurePolicy, LoftyTagReader};

/// Command-line arguments for wkmp-tags
#[derive(Parser, Debug)]
#[command(name = "wkmp-tags")]
#[command(about = "Read and normalize audio file tags for WKMP")]
#[command(version)]
struct Args {
    /// Audio files to read
    paths: Vec<String>,

    /// File with additional paths, one per line
    #[arg(long, value_name = "FILE")]
    paths_from: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", env = "WKMP_TAGS_CONFIG")]
    config: Option<PathBuf>,

    /// Handling of unreadable files: keep-empty or exclude
    #[arg(long, env = "WKMP_TAGS_FAILURE_POLICY")]
    policy: Option<FailurePolicy>,

    /// Read files in parallel
    #[arg(long)]
    parallel: bool,

    /// Worker threads for parallel reads (implies --parallel)
    #[arg(long)]
    threads: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit the full report including failures
    #[arg(long)]
    with_failures: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.log_level.clone();

    // Logging config is only known after the file is read
    let bootstrap_level = log_level
        .clone()
        .unwrap_or_else(|| LoggingConfig::default().level);
    let bootstrap = bootstrap_subscriber(&bootstrap_level, io::stderr)?;
    let config = tracing::subscriber::with_default(bootstrap, || {
        TagsConfig::load(args.config.as_deref())
    })
    .context("Failed to load configuration")?;

    init_logging(&config.logging, log_level.as_deref())?;

    let config = config.apply(ConfigOverrides {
        failure_policy: args.policy,
        parallel: args.parallel,
        threads: args.threads,
        log_level,
    });

    let mut paths = args.paths;
    if let Some(list) = &args.paths_from {
        let listed = read_path_list(list)
            .with_context(|| format!("Failed to read path list {}", list.display()))?;
        paths.extend(listed);
    }

    info!(
        "Starting wkmp-tags v{} for {} file(s)",
        env!("CARGO_PKG_VERSION"),
        paths.len()
    );

    let parser = BatchParser::new(LoftyTagReader::new())
        .with_policy(config.failure_policy)
        .with_parallelism(config.parallel, config.threads);
    let result = parser.parse(&paths);

    write_json(io::stdout().lock(), &result, args.with_failures, args.pretty)
        .context("Failed to write output")?;

    Ok(())
}
