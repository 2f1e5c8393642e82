use std::io::{self, Write};
use tracing::{debug, info, instrument};

pub const DEFAULT_SCHEME: &str = "https";

/// Crosses an ordered domain list with path patterns
///
/// Output is pattern-major: one pattern is written for every domain before
/// the next pattern starts, so consecutive lines hit different hosts.
#[derive(Debug, Clone)]
pub struct FuzzListGenerator<'a> {
    domains: &'a [String],
    scheme: String,
}

impl<'a> FuzzListGenerator<'a> {
    pub fn new(domains: &'a [String]) -> Self {
        Self {
            domains,
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }

    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.trim_end_matches("://").to_string();
        self
    }

    /// URLs for a single pattern, one per domain in list order
    pub fn fuzz_urls<'p>(&'p self, pattern: &'p str) -> impl Iterator<Item = String> + 'p {
        self.domains
            .iter()
            .map(move |domain| format!("{}://{}/{}", self.scheme, domain, pattern))
    }

    /// Number of lines `write_to` produces for the given patterns
    pub fn expected_len<S: AsRef<str>>(&self, patterns: &[S]) -> u64 {
        self.domains.len() as u64 * patterns.len() as u64
    }

    /// Writes the full cross-product, flushing after every pattern
    ///
    /// Only one pattern's sweep is ever buffered; the writer is flushed
    /// before moving to the next pattern.
    ///
    /// # Arguments
    /// * `patterns` - Path patterns in file order
    /// * `out` - Destination, held open across all patterns
    ///
    /// # Returns
    /// * `io::Result<u64>` - Number of lines written
    #[instrument(level = "debug", skip_all, fields(domains = self.domains.len(), patterns = patterns.len()))]
    pub fn write_to<S, W>(&self, patterns: &[S], out: &mut W) -> io::Result<u64>
    where
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let mut written = 0u64;

        for (idx, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            for url in self.fuzz_urls(pattern) {
                writeln!(out, "{}", url)?;
                written += 1;
            }
            out.flush()?;
            debug!("Pattern {}/{} '{}' written", idx + 1, patterns.len(), pattern);
        }

        info!("Fuzz list complete: {} lines", written);
        Ok(written)
    }
}
