use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a round-robin run
///
/// Every variant is terminal: the binaries print the message to stderr and
/// exit with a non-zero status. Nothing is retried.
#[derive(Debug, Error)]
pub enum RoundRobinError {
    #[error("{0} is required for the selected mode")]
    MissingArgument(&'static str),

    #[error("Error reading {what} file '{}': {source}", .path.display())]
    Read {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading {what} from stdin: {source}")]
    ReadStdin {
        what: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Error writing output '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Input contains no URLs")]
    EmptyInput,

    #[error("None of the {0} input lines contained a domain")]
    NoDomains(usize),

    #[error("Fuzz pattern file contains no patterns")]
    EmptyPatterns,

    #[error("Error loading public suffix list '{}': {reason}", .path.display())]
    SuffixList { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RoundRobinError {
    pub(crate) fn write(path: Option<&std::path::Path>, source: io::Error) -> Self {
        let path = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdout>".to_string());
        RoundRobinError::Write { path, source }
    }
}

pub type Result<T> = std::result::Result<T, RoundRobinError>;
