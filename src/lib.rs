pub mod cli;
pub mod config;
pub mod domain_extractor;
pub mod error;
pub mod fuzz_list;
pub mod round_robin;
pub mod runner;
pub mod text_io;
pub mod utils;

pub use domain_extractor::DomainExtractor;
pub use error::RoundRobinError;
pub use fuzz_list::FuzzListGenerator;
pub use round_robin::{interleave, roundrobin_domains, roundrobin_urls};
pub use runner::{RunOptions, RunSummary};
