//! CLI entry point for newestfiles

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, SystemTime};

use clap::Parser;
use env_logger::Env;
use newestfiles::{
    ExtensionFilter, OutputConfig, OutputFormat, SortMode, Walker, WalkerConfig, list_files,
};

#[derive(Parser, Debug)]
#[command(name = "newestfiles")]
#[command(about = "List files under the current directory, newest first")]
#[command(version)]
struct Args {
    /// File extensions to include, with or without the leading dot (default: all files)
    extensions: Vec<String>,

    /// Output in JSON format
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Sort oldest to newest
    #[arg(short = 'o', long = "oldest")]
    oldest: bool,

    /// Sort by largest files first
    #[arg(short = 'l', long = "largest")]
    largest: bool,

    /// Sort by smallest files first
    #[arg(short = 's', long = "smallest")]
    smallest: bool,

    /// Directory to scan
    #[arg(short = 'C', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Show only the first N files
    #[arg(short = 'n', long = "limit", value_name = "N",
          value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,

    /// Show size and modification time next to each path (plain output only)
    #[arg(short = 'd', long = "details")]
    details: bool,

    /// Only show files modified more recently than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long = "newer", value_name = "DURATION")]
    newer: Option<String>,

    /// Only show files modified longer than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long = "older", value_name = "DURATION")]
    older: Option<String>,
}

/// Parse a duration string like "1h", "7d", "2w" into a Duration.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Resolve `--newer` / `--older` into a point in time, exiting on a bad duration.
fn time_ago(flag: &str, value: &str) -> SystemTime {
    let duration = parse_duration_string(value).unwrap_or_else(|e| {
        eprintln!("newestfiles: invalid --{} duration '{}': {}", flag, value, e);
        process::exit(1);
    });
    SystemTime::now()
        .checked_sub(duration)
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Validated before anything touches the filesystem
    let mode = SortMode::from_flags(args.oldest, args.largest, args.smallest).unwrap_or_else(|e| {
        eprintln!("newestfiles: {}", e);
        process::exit(e.exit_code());
    });

    let walker_config = WalkerConfig {
        extensions: ExtensionFilter::new(&args.extensions),
        newer_than: args.newer.as_deref().map(|s| time_ago("newer", s)),
        older_than: args.older.as_deref().map(|s| time_ago("older", s)),
    };

    let output_config = OutputConfig {
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        },
        details: args.details,
        limit: args.limit.map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
    };

    let walker = Walker::new(walker_config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = list_files(&args.dir, &walker, mode, &output_config, &mut out) {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("newestfiles: {}", e);
        process::exit(e.exit_code());
    }
}
