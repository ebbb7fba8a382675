use url::Url;

/// Extracts the lowercase host of a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use roster_scout::url::extract_host;
///
/// let url = Url::parse("https://WWW.ESPN.COM/nba").unwrap();
/// assert_eq!(extract_host(&url), Some("www.espn.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if `candidate` shares scheme, host and port with `base`
///
/// Only same-origin links are followed; the site's CDN and partner hosts are
/// never crawled.
pub fn same_origin(candidate: &Url, base: &Url) -> bool {
    candidate.origin() == base.origin()
}
