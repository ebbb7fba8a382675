//! News teaser extraction

use crate::extract::dom::{element_text, select_all, select_first};
use crate::extract::records::NewsItem;
use crate::url::resolve_link;
use scraper::{ElementRef, Html};
use url::Url;

/// Articles taken per page
pub const MAX_ARTICLES: usize = 5;

/// Titles this short are labels, not headlines
const MIN_TITLE_CHARS: usize = 6;

/// Extracts up to [`MAX_ARTICLES`] news items
///
/// Links are resolved against the site's base URL. An article without a
/// usable headline or link is skipped but still counts toward the limit.
pub fn extract_news(document: &Html, base: &Url) -> Vec<NewsItem> {
    let root = document.root_element();

    let mut articles = select_all(root, "article");
    if articles.is_empty() {
        articles = select_all(root, "div.contentItem");
    }

    articles
        .into_iter()
        .take(MAX_ARTICLES)
        .filter_map(|article| parse_article(article, base))
        .collect()
}

fn parse_article(article: ElementRef<'_>, base: &Url) -> Option<NewsItem> {
    let heading = select_first(article, "h1")
        .or_else(|| select_first(article, "h2"))
        .or_else(|| select_first(article, "h3"))?;

    let title = element_text(heading);
    if title.chars().count() < MIN_TITLE_CHARS {
        return None;
    }

    let href = select_first(article, "a[href]")?.value().attr("href")?;
    let link = resolve_link(href, base)?;

    Some(NewsItem {
        title,
        link: link.to_string(),
    })
}
