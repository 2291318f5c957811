pub mod html;
pub mod prune;


pub use html::{extract, extract_at};

use scraper::{ElementRef, Html, Selector};

/// Tags allowed to remain as elements in extracted content
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "p", "table", "tr", "td", "th", "strong", "em", "b", "i",
];

/// Returns whether an element with this tag name survives pruning
pub fn is_allowed(tag: &str) -> bool {
    ALLOWED_TAGS.contains(&tag)
}

/// One step of the primary-content search
#[derive(Debug)]
pub struct ContentRule {
    /// Short label used in logs
    pub name: &'static str,
    selector: Selector,
}

impl ContentRule {
    fn new(name: &'static str, css: &str) -> Self {
        Self {
            name,
            selector: Selector::parse(css).expect("Content rule selectors should be valid"),
        }
    }

    /// First element matching this rule, in document order
    pub fn find<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        doc.select(&self.selector).next()
    }
}

/// Ordered rules used to locate a page's primary content; the first rule
/// with a match wins.
#[derive(Debug)]
pub struct ContentRules {
    rules: Vec<ContentRule>,
}

impl Default for ContentRules {
    fn default() -> Self {
        Self {
            rules: vec![
                ContentRule::new("main", "main"),
                ContentRule::new("article", "article"),
                ContentRule::new("content div", "div#content, div#main-content"),
                ContentRule::new("body", "body"),
            ],
        }
    }
}

impl ContentRules {
    /// Locate the primary content element, returning the matching rule with it
    pub fn locate<'a>(&self, doc: &'a Html) -> Option<(&ContentRule, ElementRef<'a>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.find(doc).map(|element| (rule, element)))
    }

    /// Rule names in priority order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }
}
