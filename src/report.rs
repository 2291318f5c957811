//! Rendering of the aggregated HTML report.
//!
//! The report is a fixed skeleton (head with an embedded stylesheet, a
//! heading and a generation timestamp) around one `.page-section` block per
//! extracted page. Metadata is escaped on the way in; page content is
//! already restricted to allow-listed tags and is embedded as-is.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::results::PageResult;
use crate::utils::{escape, now_timestamp};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; max-width: 800px; margin: 0 auto; padding: 20px; }
.page-section { border: 1px solid #ccc; margin: 20px 0; padding: 20px; border-radius: 5px; }
.metadata { background: #f5f5f5; padding: 10px; margin-bottom: 15px; border-radius: 3px; }
.content { margin-top: 15px; }
h1 { color: #2c3e50; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }";

const FOOTER: &str = "</body>\n</html>\n";

/// The output document, built one section at a time
#[derive(Debug, Clone)]
pub struct Document {
    generated_at: String,
    sections: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(now_timestamp())
    }
}

impl Document {
    /// Create an empty document stamped with `generated_at`
    pub fn new(generated_at: String) -> Self {
        Self {
            generated_at,
            sections: Vec::new(),
        }
    }

    /// Append a section for one extracted page
    pub fn push(&mut self, page: &PageResult) {
        self.sections.push(render_section(page));
    }

    /// Number of page sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Full document markup
    pub fn render(&self) -> String {
        let mut out = render_header(&self.generated_at);
        for section in &self.sections {
            out.push_str(section);
        }
        out.push_str(FOOTER);
        out
    }

    /// Write the rendered document to `path` in a single write (UTF-8)
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

fn render_header(generated_at: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html>
<head>
<meta charset=\"UTF-8\">
<title>Scraped Content</title>
<style>
{STYLE}
</style>
</head>
<body>
<h1>Scraped Content Report</h1>
<p>Generated on: {generated_at}</p>
"
    )
}

/// Render one page as a `.page-section` block
pub fn render_section(page: &PageResult) -> String {
    let meta = &page.metadata;
    format!(
        "<div class=\"page-section\">
<div class=\"metadata\">
<h2>{title}</h2>
<p><strong>URL:</strong> {url}</p>
<p><strong>Description:</strong> {description}</p>
<p><strong>Scraped:</strong> {scraped_at}</p>
</div>
<div class=\"content\">
{content}
</div>
</div>
",
        title = escape(&meta.title),
        url = escape(&meta.source_url),
        description = escape(&meta.description),
        scraped_at = meta.scraped_at,
        content = page.content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::PageMetadata;

    fn page(title: &str, content: &str) -> PageResult {
        PageResult::new(
            PageMetadata {
                title: title.to_string(),
                description: "Desc & more".to_string(),
                source_url: "https://example.com/?a=1&b=2".to_string(),
                scraped_at: "2024-01-02 03:04:05".to_string(),
            },
            content.to_string(),
        )
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new("2024-01-02 03:04:05".to_string());
        let html = doc.render();

        assert!(doc.is_empty());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
        assert!(html.contains("<h1>Scraped Content Report</h1>"));
        assert!(html.contains("<p>Generated on: 2024-01-02 03:04:05</p>"));
        assert!(html.contains(".page-section { border: 1px solid #ccc;"));
        assert!(html.contains("table { border-collapse: collapse; width: 100%; }"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(!html.contains("class=\"page-section\""));
    }

    #[test]
    fn test_section_escapes_metadata_once() {
        let section = render_section(&page("<script>alert(1)</script>", "<p>Hi</p>"));

        assert!(section.contains("<h2>&lt;script&gt;alert(1)&lt;/script&gt;</h2>"));
        assert!(!section.contains("<script>"));
        assert!(!section.contains("&amp;lt;"));
        assert!(section.contains("https://example.com/?a=1&amp;b=2"));
        assert!(section.contains("Desc &amp; more"));
        assert!(section.contains("<p><strong>Scraped:</strong> 2024-01-02 03:04:05</p>"));
    }

    #[test]
    fn test_content_embedded_verbatim() {
        let section = render_section(&page("T", "<p>Fish &amp; <b>Chips</b></p>"));
        assert!(section.contains("<div class=\"content\">\n<p>Fish &amp; <b>Chips</b></p>\n</div>"));
    }

    #[test]
    fn test_sections_keep_push_order() {
        let mut doc = Document::new("now".to_string());
        doc.push(&page("First", "<p>1</p>"));
        doc.push(&page("Second", "<p>2</p>"));
        doc.push(&page("Third", "<p>3</p>"));

        let html = doc.render();
        assert_eq!(doc.len(), 3);
        assert_eq!(html.matches("class=\"page-section\"").count(), 3);

        let first = html.find("<h2>First</h2>").unwrap();
        let second = html.find("<h2>Second</h2>").unwrap();
        let third = html.find("<h2>Third</h2>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        let mut doc = Document::new("now".to_string());
        doc.push(&page("Ünïcödé", "<p>日本語</p>"));
        doc.write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.render());
        assert!(written.contains("<h2>Ünïcödé</h2>"));
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.html");

        let doc = Document::new("now".to_string());
        assert!(doc.write_to(&path).is_err());
    }
}
