use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::Result;

/// Operation mode of the `roundrobinizer` entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Write the deduplicated domains in round-robin order
    #[value(name = "roundrobinizer")]
    Roundrobinizer,
    /// Cross the round-robin domains with a pattern file
    #[value(name = "roundrobinizerfuzzlist")]
    RoundrobinizerFuzzList,
}

/// Round-robin domains from a text file and optionally generate fuzzed lists.
#[derive(Debug, Parser)]
#[command(name = "roundrobinizer", version, about)]
pub struct Cli {
    /// Input text file containing URLs
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output text file. Writes to stdout if not provided (required in fuzz mode)
    #[arg(short, long, required_if_eq("mode", "roundrobinizerfuzzlist"))]
    pub output: Option<PathBuf>,

    /// Path to a fuzzing pattern file to generate a fuzzed list
    #[arg(long, required_if_eq("mode", "roundrobinizerfuzzlist"))]
    pub fuzz: Option<PathBuf>,

    /// Operation mode
    #[arg(long, value_enum, default_value_t = Mode::Roundrobinizer)]
    pub mode: Mode,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Interleave URLs so no domain repeats until every other domain has been seen.
#[derive(Debug, Parser)]
#[command(name = "roundrobin-urls", version, about)]
pub struct UrlsCli {
    /// Input text file containing URLs. Reads from stdin if not provided
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output text file. Writes to stdout if not provided
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Flags shared by both entry points
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// TOML configuration file (defaults to ./roundrobinizer.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Full Public Suffix List file to use instead of the bundled rules
    #[arg(long)]
    pub suffix_list: Option<PathBuf>,

    /// Treat private suffixes from the bundled list (e.g. github.io) as public suffixes
    #[arg(long)]
    pub private_suffixes: bool,

    /// Scheme for generated fuzz URLs
    #[arg(long)]
    pub scheme: Option<String>,

    /// Write logs to a timestamped file in this directory
    #[arg(long)]
    pub log_dir: Option<String>,

    /// Suppress the banner and progress messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Applies command-line overrides on top of the loaded configuration
    ///
    /// The merged result is validated, so a bad `--scheme` is rejected the
    /// same way as a bad value from the config file.
    pub fn apply(&self, mut config: AppConfig) -> Result<AppConfig> {
        if let Some(path) = &self.suffix_list {
            config.suffix_list = Some(path.clone());
        }
        if self.private_suffixes {
            config.private_suffixes = true;
        }
        if let Some(scheme) = &self.scheme {
            config.fuzz_scheme = scheme.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
        if self.quiet {
            config.banner = false;
        }
        config.validate()?;
        Ok(config)
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
