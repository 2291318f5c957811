//! Fetch a handful of pages, reduce each to its primary content and a small
//! set of semantic tags, and aggregate them into one styled HTML report.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod input;
pub mod parsers;
pub mod report;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use aggregator::{Aggregator, RunSummary, SkipReason};
pub use config::FetchConfig;
pub use error::{Error, Result};
pub use fetchers::{Fetcher, HttpFetcher};
pub use report::Document;
pub use results::{PageMetadata, PageResult};
