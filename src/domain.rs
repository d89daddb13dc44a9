/// Hostname extraction and normalization for failed page loads
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::Result;

/// URL prefixes that belong to extensions rather than to the web
pub const INTERNAL_SCHEMES: [&str; 2] = ["chrome-extension://", "moz-extension://"];

static IPV4_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+$").expect("IPv4 pattern is valid"));

/// Extract the hostname from a URL
///
/// Unlike a registrable domain, subdomains are kept as-is:
/// - https://www.google.com/search → www.google.com
/// - https://news.bbc.co.uk/article → news.bbc.co.uk
/// - http://localhost:3000 → localhost
///
/// Returns `Ok(None)` for URLs that parse but carry no host (e.g. `data:`).
pub fn extract_hostname(url: &str) -> Result<Option<String>> {
    let parsed = Url::parse(url)?;
    Ok(parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_string()))
}

/// Whether the URL belongs to an extension page
pub fn is_internal_url(url: &str) -> bool {
    INTERNAL_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

/// Check if a hostname is a strict dotted-quad
fn is_ipv4_literal(host: &str) -> bool {
    IPV4_LITERAL.is_match(host)
}

/// Hosts that never produce a failure record: localhost and bare IPv4 addresses
pub fn is_excluded_host(host: &str) -> bool {
    host == "localhost" || is_ipv4_literal(host)
}

/// Strip a single leading "www." so suggestions point at the bare domain
pub fn normalize_domain(domain: &str) -> &str {
    domain.strip_prefix("www.").unwrap_or(domain)
}

/// Path component of the failed URL, or "" when it does not parse
pub fn failed_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(e) => {
            log::debug!("No path for {:?}: {}", url, e);
            String::new()
        }
    }
}
