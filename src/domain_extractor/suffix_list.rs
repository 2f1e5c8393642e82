use once_cell::sync::Lazy;
use publicsuffix::{IcannList, List};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, RoundRobinError};

/// Unmodified copy of https://publicsuffix.org/list/public_suffix_list.dat
const EMBEDDED_SUFFIX_LIST: &str = include_str!("public_suffix_list.dat");

/// Bundled rules, ICANN section only (private suffixes like `github.io` ignored)
pub static EMBEDDED_ICANN_LIST: Lazy<IcannList> = Lazy::new(|| {
    EMBEDDED_SUFFIX_LIST
        .parse()
        .expect("bundled public_suffix_list.dat must parse")
});

/// Bundled rules, ICANN and private sections
pub static EMBEDDED_FULL_LIST: Lazy<List> = Lazy::new(|| {
    EMBEDDED_SUFFIX_LIST
        .parse()
        .expect("bundled public_suffix_list.dat must parse")
});

/// Loads a Public Suffix List file in the publicsuffix.org `.dat` format
///
/// Rules are only read inside the `===BEGIN ICANN DOMAINS===` and
/// `===BEGIN PRIVATE DOMAINS===` sections, as in the official file.
///
/// # Arguments
/// * `path` - Location of the list on disk
///
/// # Returns
/// * `Result<List>` - The parsed rule set, or a read/parse error naming the file
pub fn load_suffix_list(path: &Path) -> Result<List> {
    info!("Loading public suffix list from {}", path.display());

    let raw = fs::read_to_string(path).map_err(|source| RoundRobinError::Read {
        what: "public suffix list",
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes of suffix rules", raw.len());

    raw.parse::<List>().map_err(|e| RoundRobinError::SuffixList {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use publicsuffix::Psl;

    #[test]
    fn test_bundled_lists_parse() {
        assert!(!Lazy::force(&EMBEDDED_ICANN_LIST).is_empty());
        assert!(!Lazy::force(&EMBEDDED_FULL_LIST).is_empty());
    }

    #[test]
    fn test_embedded_list_knows_compound_suffixes() {
        let suffix = EMBEDDED_ICANN_LIST.suffix(b"shop.example.co.uk").unwrap();
        assert_eq!(suffix.as_bytes(), b"co.uk");
        assert!(suffix.is_known());
    }

    #[test]
    fn test_icann_list_ignores_private_rules() {
        let icann = EMBEDDED_ICANN_LIST.suffix(b"someone.github.io").unwrap();
        assert_eq!(icann.as_bytes(), b"io");

        let full = EMBEDDED_FULL_LIST.suffix(b"someone.github.io").unwrap();
        assert_eq!(full.as_bytes(), b"github.io");
    }

    #[test]
    fn test_missing_list_file_is_read_error() {
        let err = load_suffix_list(Path::new("/nonexistent/public_suffix_list.dat")).unwrap_err();
        assert!(matches!(err, RoundRobinError::Read { what: "public suffix list", .. }));
    }

    #[test]
    fn test_list_without_sections_is_rejected() {
        let path = std::env::temp_dir().join(format!("psl_nosections_{}.dat", std::process::id()));
        fs::write(&path, "com\nco.uk\n").unwrap();

        let err = load_suffix_list(&path).unwrap_err();
        assert!(matches!(err, RoundRobinError::SuffixList { .. }));

        fs::remove_file(&path).ok();
    }
}
