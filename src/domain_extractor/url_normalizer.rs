use tracing::trace;
use url::Url;

const DEFAULT_SCHEME: &str = "http";

/// Parses a raw input line into a URL that carries a host
///
/// Lines are taken as-is first. Anything that does not yield a host
/// (`example.com/path`, `//cdn.example.com`, `host:8080`) is retried with an
/// `http://` prefix so schemeless input still resolves.
///
/// # Arguments
/// * `raw` - One input line, surrounding whitespace allowed
///
/// # Returns
/// * `Option<Url>` - The parsed URL, or None when no host can be found
pub fn parse_with_fallback(raw: &str) -> Option<Url> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(input) {
        if url.host().is_some() {
            return Some(url);
        }
        trace!("'{}' parsed without a host, retrying with {} scheme", input, DEFAULT_SCHEME);
    }

    let rest = input.strip_prefix("//").unwrap_or(input);
    let candidate = format!("{}://{}", DEFAULT_SCHEME, rest);
    match Url::parse(&candidate) {
        Ok(url) if url.host().is_some() => Some(url),
        Ok(_) => None,
        Err(e) => {
            trace!("'{}' is not a parseable URL: {}", input, e);
            None
        }
    }
}
