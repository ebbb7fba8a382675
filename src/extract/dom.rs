//! Small helpers over the scraper parse tree
//!
//! Selector literals in this crate are static and known-good; a selector that
//! fails to parse simply matches nothing.

use scraper::{ElementRef, Selector};

/// All descendants of `el` matching `css`, in document order
pub fn select_all<'a>(el: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => el.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// First descendant of `el` matching `css`
pub fn select_first<'a>(el: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    el.select(&selector).next()
}

/// Visible text of an element with whitespace collapsed to single spaces
pub fn element_text(el: ElementRef<'_>) -> String {
    collapse(el.text())
}

/// Like [`element_text`] but drops any text inside `skip`
pub fn text_excluding(el: ElementRef<'_>, skip: ElementRef<'_>) -> String {
    let skip_id = skip.id();
    let pieces = el.descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        if node.ancestors().any(|a| a.id() == skip_id) {
            None
        } else {
            Some(&**text)
        }
    });
    collapse(pieces)
}

/// Raw concatenated text, whitespace untouched
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Truncates to at most `max` characters on a char boundary
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Maps blank text to None
pub fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn collapse<'a>(pieces: impl Iterator<Item = &'a str>) -> String {
    pieces
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
