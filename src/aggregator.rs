use std::path::Path;

use crate::error::Result;
use crate::fetchers::Fetcher;
use crate::parsers;
use crate::report::Document;

/// Why a URL produced no section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Transport error or non-success status
    FetchFailed(String),
    /// The page had no content to extract
    Empty,
}

/// Outcome of a report run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// URLs attempted, in input order
    pub attempted: usize,
    /// Sections written
    pub sections: usize,
    /// Skipped URLs with the reason, in input order
    pub skipped: Vec<(String, SkipReason)>,
}

/// Drives fetch and extraction for each URL and assembles the report
pub struct Aggregator<F: Fetcher> {
    fetcher: F,
}

impl<F: Fetcher> Aggregator<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch and extract every URL in order, returning the document and
    /// what happened to each URL.
    ///
    /// Failed fetches and empty pages are skipped; they never abort the run.
    pub async fn collect(&self, urls: &[String]) -> (Document, RunSummary) {
        let mut document = Document::default();
        let mut summary = RunSummary {
            attempted: urls.len(),
            ..RunSummary::default()
        };

        for url in urls {
            let url = url.trim();
            println!("Scraping {}...", url);

            let markup = match self.fetcher.fetch(url).await {
                Ok(markup) => markup,
                Err(e) => {
                    println!("Error fetching {}: {}", url, e);
                    ::log::warn!("Skipping {}: {}", url, e);
                    summary
                        .skipped
                        .push((url.to_string(), SkipReason::FetchFailed(e.to_string())));
                    continue;
                }
            };

            match parsers::extract(&markup, url) {
                Some(page) => {
                    document.push(&page);
                    summary.sections += 1;
                }
                None => {
                    ::log::warn!("Skipping {}: no content extracted", url);
                    summary.skipped.push((url.to_string(), SkipReason::Empty));
                }
            }
        }

        (document, summary)
    }

    /// Build the report for `urls` and write it to `output_path`.
    ///
    /// A write failure is returned to the caller.
    pub async fn build_document<P: AsRef<Path>>(
        &self,
        urls: &[String],
        output_path: P,
    ) -> Result<RunSummary> {
        let output_path = output_path.as_ref();
        ::log::info!(
            "Building report from {} URLs into {}",
            urls.len(),
            output_path.display()
        );

        let (document, summary) = self.collect(urls).await;
        document.write_to(output_path)?;

        ::log::info!(
            "Wrote {} of {} sections to {}",
            summary.sections,
            summary.attempted,
            output_path.display()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Serves canned markup; unknown URLs fail like a 404
    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    impl StubFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.pages.get(url).cloned().ok_or_else(|| Error::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
        }
    }

    fn page(title: &str, body: &str) -> String {
        format!("<html><head><title>{title}</title></head><body><main>{body}</main></body></html>")
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_skips_failed_and_empty_pages() {
        let one = page("One", "<p>1</p>");
        let three = page("Three", "<p>3</p>");
        let fetcher = StubFetcher::new(&[
            ("https://a.test/1", one.as_str()),
            ("https://a.test/2", ""),
            ("https://a.test/3", three.as_str()),
        ]);
        let aggregator = Aggregator::new(fetcher);

        let (document, summary) = aggregator
            .collect(&urls(&[
                "https://a.test/1",
                "https://a.test/missing",
                "https://a.test/2",
                "https://a.test/3",
            ]))
            .await;

        assert_eq!(document.len(), 2);
        assert_eq!(summary.attempted, 4);
        assert_eq!(summary.sections, 2);
        assert_eq!(summary.skipped.len(), 2);
        assert_eq!(summary.skipped[0].0, "https://a.test/missing");
        assert!(matches!(summary.skipped[0].1, SkipReason::FetchFailed(_)));
        assert_eq!(
            summary.skipped[1],
            ("https://a.test/2".to_string(), SkipReason::Empty)
        );

        let html = document.render();
        let first = html.find("<h2>One</h2>").unwrap();
        let third = html.find("<h2>Three</h2>").unwrap();
        assert!(first < third);
    }

    #[tokio::test]
    async fn test_urls_are_trimmed() {
        let body = page("Trimmed", "<p>x</p>");
        let fetcher = StubFetcher::new(&[("https://a.test/t", body.as_str())]);
        let aggregator = Aggregator::new(fetcher);

        let (document, summary) = aggregator.collect(&urls(&["  https://a.test/t \n"])).await;
        assert_eq!(summary.sections, 1);
        assert!(document.render().contains("<strong>URL:</strong> https://a.test/t</p>"));
    }

    #[tokio::test]
    async fn test_build_document_writes_file() {
        let body = page("<script>x</script>", "<div><p>Hello</p></div>");
        let fetcher = StubFetcher::new(&[("https://a.test/ok", body.as_str())]);
        let aggregator = Aggregator::new(fetcher);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        let summary = aggregator
            .build_document(&urls(&["https://a.test/ok", "https://a.test/404"]), &path)
            .await
            .unwrap();

        assert_eq!(summary.sections, 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("class=\"page-section\"").count(), 1);
        assert!(written.contains("<h2>&lt;script&gt;x&lt;/script&gt;</h2>"));
        assert!(written.contains("<p>Hello</p>"));
    }

    #[tokio::test]
    async fn test_build_document_write_failure_propagates() {
        let aggregator = Aggregator::new(StubFetcher::new(&[]));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.html");

        let err = aggregator
            .build_document(&urls(&["https://a.test/x"]), &path)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
