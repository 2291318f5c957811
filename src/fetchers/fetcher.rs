use async_trait::async_trait;

use crate::error::Result;

/// Source of raw page markup
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the markup behind a URL.
    ///
    /// Any transport error or non-success status is an `Err`.
    async fn fetch(&self, url: &str) -> Result<String>;
}
