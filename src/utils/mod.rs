pub mod benchmarking;
pub mod logger;
