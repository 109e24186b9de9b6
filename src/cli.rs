//! Command-line interface components.

use crate::config::LockboxConfig;
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::file::{LockboxParser, ParseResult};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "lockbox")]
#[command(about = "Parse and validate BAI lockbox deposit files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject the whole file on the first bad line
    #[arg(long, global = true)]
    pub strict: bool,

    /// Check the destination trailer's record count
    #[arg(long, global = true)]
    pub verify_trailer: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Parse a file and print a summary
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Parse a file and print every record as JSON, one per line
    Dump {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "debug",
            _ => "trace",
        }
    }

    /// Load configuration from file or defaults, then apply flag overrides
    pub fn load_config(&self) -> Result<LockboxConfig> {
        let mut config = match &self.config {
            Some(path) => LockboxConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => LockboxConfig::default(),
        };

        if self.strict {
            config.strict = true;
        }
        if self.verify_trailer {
            config.verify_trailer_count = true;
        }
        config.validate()?;

        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }
}

/// Log to stderr; stdout carries `dump` output
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lockbox={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Run the selected subcommand
pub fn run(args: &Args) -> Result<ParseResult> {
    let config = args.load_config()?;
    let parser = LockboxParser::new(config)?;

    match &args.command {
        Commands::Check { file } => {
            let result = parser
                .parse_file(file)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            print_summary(&result);
            Ok(result)
        }
        Commands::Dump { file } => {
            let result = parser
                .parse_file(file)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            for record in &result.records {
                println!("{}", serde_json::to_string(record)?);
            }
            Ok(result)
        }
    }
}

fn print_summary(result: &ParseResult) {
    let stats = &result.stats;

    println!("{}", "Lockbox file summary".bright_green().bold());
    println!(
        "  Lines: {}  Records: {}  Skipped: {}",
        stats.total_lines,
        stats.records_parsed.to_string().bright_cyan(),
        if stats.lines_skipped > 0 {
            stats.lines_skipped.to_string().bright_red()
        } else {
            stats.lines_skipped.to_string().normal()
        }
    );

    for (kind, count) in result.kind_counts() {
        println!("  {:<26} {}", kind.name(), count);
    }

    println!(
        "  Deposit total: {}",
        result.deposit_total().to_string().bright_yellow()
    );

    for error in &stats.errors {
        println!("  {} {}", "error:".red().bold(), error);
    }
}
