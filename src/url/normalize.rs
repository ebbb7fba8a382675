use crate::UrlError;
use url::Url;

/// Normalizes an absolute URL string into its canonical visited-set form
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject anything that is not HTTP(S)
/// 3. Require a host
/// 4. Remove the fragment (everything after #)
///
/// Scheme, host, path and query are otherwise preserved. Parsing already
/// lowercases the host and resolves `.`/`..` path segments.
///
/// # Examples
///
/// ```
/// use roster_scout::url::normalize_url;
///
/// let url = normalize_url("https://www.espn.com/nba/team/_/name/bos/boston-celtics#top").unwrap();
/// assert_eq!(url.as_str(), "https://www.espn.com/nba/team/_/name/bos/boston-celtics");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;
    canonicalize(url)
}

/// Resolves an href found on `base` into a normalized absolute URL
///
/// Returns None if the link should be excluded:
/// - empty or fragment-only hrefs (same page anchors)
/// - javascript:, mailto:, tel:, data: schemes
/// - hrefs that fail to resolve
/// - non-HTTP(S) URLs after resolution
pub fn resolve_link(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    base.join(href).ok().and_then(|url| canonicalize(url).ok())
}

fn canonicalize(mut url: Url) -> Result<Url, UrlError> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);
    Ok(url)
}
