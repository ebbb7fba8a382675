//! HTML parsing and link discovery
//!
//! Link extraction is a pure transform over one parsed document: it proposes
//! candidate URLs and leaves enqueueing and visited-set updates to the caller.

use crate::crawler::frontier::VisitedSet;
use crate::url::{resolve_link, same_origin, AdmissionPolicy};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Parses a response body into a document tree
pub fn parse_html(body: &str) -> Html {
    Html::parse_document(body)
}

/// Extracts the links on a page worth crawling
///
/// # Link Extraction Rules
///
/// **Include:** `<a href="...">` anchors anywhere in the document that
/// - resolve against `source_url` to an absolute HTTP(S) URL (fragment removed)
/// - share the origin of the crawl's `base` URL
/// - have not been visited yet
/// - are admitted by the target's [`AdmissionPolicy`]
///
/// **Exclude:** `<a download>`, `javascript:`, `mailto:`, `tel:`, data URIs and
/// fragment-only anchors.
///
/// The result keeps document order with duplicates removed.
pub fn extract_links(
    document: &Html,
    source_url: &Url,
    base: &Url,
    visited: &VisitedSet,
    policy: &AdmissionPolicy,
) -> Vec<Url> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&a_selector) {
        // Skip if it has the download attribute
        if element.value().attr("download").is_some() {
            continue;
        }

        let Some(url) = element
            .value()
            .attr("href")
            .and_then(|href| resolve_link(href, source_url))
        else {
            continue;
        };

        if !same_origin(&url, base) || visited.contains(&url) {
            continue;
        }

        let decision = policy.decide(url.as_str());
        tracing::trace!("{} -> {}", url, decision);
        if !decision.is_admitted() {
            continue;
        }

        if seen.insert(url.as_str().to_string()) {
            links.push(url);
        }
    }

    links
}
