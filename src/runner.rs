use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

use crate::domain_extractor::DomainExtractor;
use crate::error::{Result, RoundRobinError};
use crate::fuzz_list::{FuzzListGenerator, DEFAULT_SCHEME};
use crate::round_robin::{roundrobin_domains, roundrobin_urls, unique_domain_count};
use crate::text_io::{create_output, open_output, read_input, read_lines, write_lines};
use crate::utils::benchmarking::OperationTimer;

/// Files and settings for a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: Option<PathBuf>,  // URL list (stdin if None)
    pub output: Option<PathBuf>, // Destination (stdout if None, except in fuzz mode)
    pub fuzz: Option<PathBuf>,   // Pattern file for fuzz mode
    pub scheme: String,          // Scheme for generated fuzz URLs
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            fuzz: None,
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// Counters reported back to the caller after a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records_read: usize,    // Non-blank input lines
    pub records_skipped: usize, // Lines with no extractable domain
    pub unique_domains: usize,  // Distinct domains among the kept lines
    pub patterns: usize,        // Non-blank pattern lines (fuzz mode)
    pub lines_written: u64,     // Lines written to the output
}

/// Pairs every URL with its domain, dropping the ones without a host
fn extract_pairs(extractor: &DomainExtractor, urls: Vec<String>) -> (Vec<(String, String)>, usize) {
    let domains = extractor.extract_all(&urls);
    let mut skipped = 0;

    let pairs = urls
        .into_iter()
        .zip(domains)
        .filter_map(|(url, domain)| match domain {
            Some(domain) => Some((url, domain)),
            None => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!("Skipped {} lines without an extractable domain", skipped);
    }
    (pairs, skipped)
}

/// Reads URLs and produces the deduplicated round-robin domain list
fn ordered_domains(
    extractor: &DomainExtractor,
    opts: &RunOptions,
    timer: &mut OperationTimer,
    summary: &mut RunSummary,
) -> Result<Vec<String>> {
    let urls = timer.time("read input", || read_input(opts.input.as_deref(), "input"))?;
    if urls.is_empty() {
        return Err(RoundRobinError::EmptyInput);
    }
    summary.records_read = urls.len();

    let (pairs, skipped) = timer.time("extract domains", || extract_pairs(extractor, urls));
    summary.records_skipped = skipped;
    if pairs.is_empty() {
        return Err(RoundRobinError::NoDomains(skipped));
    }

    let domains = timer.time("round-robin", || {
        roundrobin_domains(pairs.into_iter().map(|(_, domain)| domain))
    });
    summary.unique_domains = domains.len();
    info!("Number of unique domains: {}", domains.len());
    Ok(domains)
}

/// Writes one domain per line, each distinct domain once, in round-robin order
///
/// Empty input is an error in this mode.
///
/// # Arguments
/// * `extractor` - Domain extractor to resolve each URL with
/// * `opts` - Input and output locations
///
/// # Returns
/// * `Result<RunSummary>` - Counters for the run, or the error that stopped it
#[instrument(level = "info", skip_all, fields(input = ?opts.input, output = ?opts.output))]
pub fn run_domains(extractor: &DomainExtractor, opts: &RunOptions) -> Result<RunSummary> {
    let mut timer = OperationTimer::new();
    let mut summary = RunSummary::default();

    let domains = ordered_domains(extractor, opts, &mut timer, &mut summary)?;

    let output = opts.output.as_deref();
    let mut out = open_output(output)?;
    summary.lines_written = timer
        .time("write output", || write_lines(&mut out, &domains))
        .map_err(|e| RoundRobinError::write(output, e))?;

    debug!("Timing report:\n{}", timer.report());
    Ok(summary)
}

/// Writes every URL, interleaved so domains take turns
///
/// Duplicate lines are kept. Empty input produces empty output.
#[instrument(level = "info", skip_all, fields(input = ?opts.input, output = ?opts.output))]
pub fn run_urls(extractor: &DomainExtractor, opts: &RunOptions) -> Result<RunSummary> {
    let mut timer = OperationTimer::new();
    let mut summary = RunSummary::default();

    let urls = timer.time("read input", || read_input(opts.input.as_deref(), "input"))?;
    summary.records_read = urls.len();

    let (pairs, skipped) = timer.time("extract domains", || extract_pairs(extractor, urls));
    summary.records_skipped = skipped;
    summary.unique_domains = unique_domain_count(pairs.iter().map(|(_, domain)| domain));
    info!("Number of unique domains: {}", summary.unique_domains);

    let ordered = timer.time("round-robin", || roundrobin_urls(pairs));

    let output = opts.output.as_deref();
    let mut out = open_output(output)?;
    summary.lines_written = timer
        .time("write output", || write_lines(&mut out, &ordered))
        .map_err(|e| RoundRobinError::write(output, e))?;

    debug!("Timing report:\n{}", timer.report());
    Ok(summary)
}

/// Writes `{scheme}://{domain}/{pattern}` for every pattern and domain
///
/// Both the pattern file and an explicit output file are required. Inputs
/// are read in full before the output file is created, so a read failure
/// leaves no partial file behind. The output handle stays open across all
/// patterns and is closed on every exit path.
#[instrument(level = "info", skip_all, fields(input = ?opts.input, fuzz = ?opts.fuzz, output = ?opts.output))]
pub fn run_fuzz_list(extractor: &DomainExtractor, opts: &RunOptions) -> Result<RunSummary> {
    let output = opts
        .output
        .as_deref()
        .ok_or(RoundRobinError::MissingArgument("--output"))?;
    let fuzz = opts
        .fuzz
        .as_deref()
        .ok_or(RoundRobinError::MissingArgument("--fuzz"))?;

    let mut timer = OperationTimer::new();
    let mut summary = RunSummary::default();

    let patterns = timer.time("read patterns", || read_lines(fuzz, "fuzz"))?;
    if patterns.is_empty() {
        return Err(RoundRobinError::EmptyPatterns);
    }
    summary.patterns = patterns.len();

    let domains = ordered_domains(extractor, opts, &mut timer, &mut summary)?;
    let generator = FuzzListGenerator::new(&domains).with_scheme(&opts.scheme);
    info!(
        "Generating fuzzed list: {} patterns x {} domains = {} URLs",
        patterns.len(),
        domains.len(),
        generator.expected_len(&patterns)
    );

    let mut out = create_output(output)?;
    summary.lines_written = timer
        .time("write fuzz list", || -> std::io::Result<u64> {
            let written = generator.write_to(&patterns, &mut out)?;
            out.flush()?;
            Ok(written)
        })
        .map_err(|e| RoundRobinError::write(Some(output), e))?;

    debug!("Timing report:\n{}", timer.report());
    Ok(summary)
}
