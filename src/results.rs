use serde::{Deserialize, Serialize};

/// Placeholder used when a page has no usable `<title>`
pub const NO_TITLE: &str = "No title";

/// Placeholder used when a page has no `<meta name="description">`
pub const NO_DESCRIPTION: &str = "No description";

/// Metadata derived from one fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Plain text of the `<title>` element
    pub title: String,

    /// Value of the description meta tag
    pub description: String,

    /// URL the page was fetched from
    pub source_url: String,

    /// Local time of extraction, `YYYY-MM-DD HH:MM:SS`
    pub scraped_at: String,
}

/// Extracted page: metadata plus the pruned content fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub metadata: PageMetadata,

    /// Markup containing only allow-listed tags
    pub content: String,
}

impl PageResult {
    /// Create a new page result
    pub fn new(metadata: PageMetadata, content: String) -> Self {
        Self { metadata, content }
    }
}
