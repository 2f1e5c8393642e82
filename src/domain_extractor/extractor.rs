use publicsuffix::{Domain, List, Psl};
use std::path::Path;
use tracing::{debug, instrument, warn};
use url::Host;

use super::suffix_list::{load_suffix_list, EMBEDDED_FULL_LIST, EMBEDDED_ICANN_LIST};
use super::url_normalizer::parse_with_fallback;
use crate::config::AppConfig;
use crate::error::Result;

/// Where the extractor takes its suffix rules from
enum SuffixSource {
    EmbeddedIcann,
    EmbeddedFull,
    Custom(List),
}

/// Maps raw URL lines to their registrable domain (`name.suffix`)
///
/// Splitting is public-suffix aware, so `shop.example.co.uk` resolves to
/// `example.co.uk` rather than `co.uk`.
pub struct DomainExtractor {
    source: SuffixSource,
}

impl Default for DomainExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainExtractor {
    /// Creates an extractor backed by the ICANN section of the bundled list
    pub fn new() -> Self {
        Self { source: SuffixSource::EmbeddedIcann }
    }

    /// Creates an extractor that also honours private suffixes (`github.io`, `herokuapp.com`)
    pub fn with_private_suffixes() -> Self {
        Self { source: SuffixSource::EmbeddedFull }
    }

    /// Creates an extractor from a full Public Suffix List file
    pub fn from_suffix_file(path: &Path) -> Result<Self> {
        let list = load_suffix_list(path)?;
        Ok(Self { source: SuffixSource::Custom(list) })
    }

    /// Picks the rule set named by the configuration
    ///
    /// A suffix list file wins over the bundled rules; otherwise
    /// `private_suffixes` selects between the ICANN-only and full bundled list.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match &config.suffix_list {
            Some(path) => Self::from_suffix_file(path),
            None if config.private_suffixes => Ok(Self::with_private_suffixes()),
            None => Ok(Self::new()),
        }
    }

    fn lookup<'a>(&self, host: &'a [u8]) -> Option<Domain<'a>> {
        match &self.source {
            SuffixSource::EmbeddedIcann => EMBEDDED_ICANN_LIST.domain(host),
            SuffixSource::EmbeddedFull => EMBEDDED_FULL_LIST.domain(host),
            SuffixSource::Custom(list) => list.domain(host),
        }
    }

    /// Extracts the registrable domain of a single URL
    ///
    /// Schemes, ports, credentials, paths and queries are dropped. IP hosts
    /// come back unchanged. A host with no label in front of its suffix
    /// (`localhost`, a bare `co.uk`) comes back whole.
    ///
    /// # Arguments
    /// * `raw` - The URL line, with or without a scheme
    ///
    /// # Returns
    /// * `Option<String>` - The domain, or None when the line holds no host at all
    pub fn extract(&self, raw: &str) -> Option<String> {
        let url = parse_with_fallback(raw)?;
        match url.host()? {
            Host::Domain(host) => self.registrable_domain(host),
            Host::Ipv4(addr) => Some(addr.to_string()),
            Host::Ipv6(addr) => Some(addr.to_string()),
        }
    }

    fn registrable_domain(&self, host: &str) -> Option<String> {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        if host.is_empty() {
            return None;
        }

        let registrable = self
            .lookup(host.as_bytes())
            .map(|domain| String::from_utf8_lossy(domain.as_bytes()).into_owned());
        match registrable {
            Some(domain) => Some(domain),
            None => {
                debug!("No registrable domain under '{}', keeping the host", host);
                Some(host)
            }
        }
    }

    /// Extracts domains for a batch of URLs
    ///
    /// The result has one entry per input, in input order. A line that
    /// cannot be resolved produces None without affecting the others.
    #[instrument(level = "debug", skip_all, fields(count = urls.len()))]
    pub fn extract_all<S: AsRef<str>>(&self, urls: &[S]) -> Vec<Option<String>> {
        urls.iter()
            .map(|url| {
                let domain = self.extract(url.as_ref());
                if domain.is_none() {
                    warn!("Could not extract a domain from '{}'", url.as_ref());
                }
                domain
            })
            .collect()
    }
}
