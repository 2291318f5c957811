use chrono::NaiveDateTime;
use scraper::{Html, Selector};

use super::ContentRules;
use super::prune;
use crate::results::{NO_DESCRIPTION, NO_TITLE, PageMetadata, PageResult};
use crate::utils::{format_timestamp, now_timestamp};

/// Extracts metadata and pruned primary content from page markup.
///
/// Returns `None` for empty markup.
pub fn extract(markup: &str, source_url: &str) -> Option<PageResult> {
    extract_with(markup, source_url, now_timestamp())
}

/// Same as [`extract`] with a fixed extraction time
pub fn extract_at(markup: &str, source_url: &str, at: NaiveDateTime) -> Option<PageResult> {
    extract_with(markup, source_url, format_timestamp(at))
}

fn extract_with(markup: &str, source_url: &str, scraped_at: String) -> Option<PageResult> {
    if markup.trim().is_empty() {
        return None;
    }

    let mut doc = Html::parse_document(markup);

    let metadata = PageMetadata {
        title: title(&doc).unwrap_or_else(|| NO_TITLE.to_string()),
        description: description(&doc).unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        source_url: source_url.to_string(),
        scraped_at,
    };

    let rules = ContentRules::default();
    ::log::debug!(
        "Locating content in {} (rules: {})",
        source_url,
        rules.names().collect::<Vec<_>>().join(", ")
    );
    let root = {
        let (rule, element) = rules.locate(&doc)?;
        ::log::debug!("Primary content for {} matched rule '{}'", source_url, rule.name);
        element.id()
    };

    let unwrapped = prune::prune(&mut doc, root);
    ::log::debug!("Pruned {} elements from {}", unwrapped, source_url);

    Some(PageResult::new(metadata, prune::inner_markup(&doc, root)))
}

/// Plain text of the first `<title>` element, trimmed.
///
/// The parser keeps `<title>` content as raw text, so any markup inside it is
/// parsed again and reduced to its text.
pub fn title(doc: &Html) -> Option<String> {
    let selector = Selector::parse("title").expect("Title selector should be valid");
    let raw = doc
        .select(&selector)
        .next()?
        .text()
        .collect::<String>();

    let text = Html::parse_fragment(&raw)
        .root_element()
        .text()
        .collect::<String>();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// `content` of the first `<meta name="description">` element
pub fn description(doc: &Html) -> Option<String> {
    let selector =
        Selector::parse(r#"meta[name="description"]"#).expect("Meta selector should be valid");
    doc.select(&selector)
        .next()?
        .value()
        .attr("content")
        .map(|s| s.to_string())
}
