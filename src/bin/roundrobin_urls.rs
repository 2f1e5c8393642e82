use anyhow::Result;
use clap::Parser;
use roundrobinizer::cli::UrlsCli;
use roundrobinizer::config::{AppConfig, BANNER};
use roundrobinizer::runner::{run_urls, RunOptions};
use roundrobinizer::utils::logger::init_logger;
use roundrobinizer::DomainExtractor;

fn main() -> Result<()> {
    let cli = UrlsCli::parse();
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
        input: cli.input,
        output: cli.output,
        fuzz: None,
        scheme: config.fuzz_scheme,
    };

    let summary = run_urls(&extractor, &opts)?;
    if !quiet {
        eprintln!(
            "Interleaved {} URLs across {} domains",
            summary.lines_written, summary.unique_domains
        );
    }

    Ok(())
}
