use anyhow::Result;
use clap::Parser;
use roundrobinizer::cli::{Cli, Mode};
use roundrobinizer::config::{AppConfig, BANNER};
use roundrobinizer::runner::{run_domains, run_fuzz_list, RunOptions};
use roundrobinizer::utils::logger::init_logger;
use roundrobinizer::DomainExtractor;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.common.quiet;
    let level = cli.common.log_level();

    let config = cli.common.apply(AppConfig::load(cli.common.config.as_deref())?)?;
    init_logger(config.log_dir.as_deref(), level)?;

    if config.banner {
        eprintln!("{}", BANNER);
        eprintln!();
    }

    let extractor = DomainExtractor::from_config(&config)?;
    let opts = RunOptions {
        input: Some(cli.input),
        output: cli.output,
        fuzz: cli.fuzz,
        scheme: config.fuzz_scheme,
    };

    match cli.mode {
        Mode::Roundrobinizer => {
            if !quiet {
                eprintln!("Processing Round-Robin Algorithm for domains...");
            }
            let summary = run_domains(&extractor, &opts)?;
            if !quiet {
                eprintln!("Number of unique domains: {}", summary.unique_domains);
                if summary.records_skipped > 0 {
                    eprintln!("Skipped lines without a domain: {}", summary.records_skipped);
                }
            }
        }
        Mode::RoundrobinizerFuzzList => {
            if !quiet {
                eprintln!("Processing domains for round-robin...");
            }
            let summary = run_fuzz_list(&extractor, &opts)?;
            if !quiet {
                eprintln!("Number of unique domains: {}", summary.unique_domains);
                eprintln!(
                    "Generated {} fuzzed URLs from {} patterns",
                    summary.lines_written, summary.patterns
                );
            }
        }
    }

    Ok(())
}
