use serde::Serialize;
use url::{ParseError, Url};

use crate::paper::Paper;
use crate::researcher::Researcher;

/// `rel` values that stop a link from passing on link value.
const NOFOLLOW_RELS: &[&str] = &["nofollow", "sponsored", "ugc"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Internal,
    External,
    /// Fragments, `mailto:`, `tel:`, `javascript:` and unparseable targets.
    Other,
}

/// Link counts by type and follow status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStatistics {
    pub total: usize,
    pub internal_total: usize,
    pub internal_dofollow: usize,
    pub internal_nofollow: usize,
    pub external_total: usize,
    pub external_dofollow: usize,
    pub external_nofollow: usize,
    pub other_total: usize,
    pub other_dofollow: usize,
    pub other_nofollow: usize,
}

/// Parse a site URL or bare domain (Shopify passes `shop.example.com`).
fn parse_site(site: &str) -> Option<Url> {
    let site = site.trim();
    if site.is_empty() {
        return None;
    }
    match Url::parse(site) {
        Ok(url) if url.has_host() => Some(url),
        _ => Url::parse(&format!("https://{site}")).ok(),
    }
}

fn host_without_www(url: &Url) -> Option<String> {
    url.host_str()
        .map(|h| h.trim_start_matches("www.").to_ascii_lowercase())
}

/// Classify `href` relative to the site at `site_url`.
pub fn link_type(href: &str, site_url: &str) -> LinkType {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return LinkType::Other;
    }
    let target = match Url::parse(href) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) if href.starts_with("//") => {
            match Url::parse(&format!("https:{href}")) {
                Ok(url) => url,
                Err(_) => return LinkType::Other,
            }
        }
        Err(ParseError::RelativeUrlWithoutBase) => return LinkType::Internal,
        Err(_) => return LinkType::Other,
    };
    if !matches!(target.scheme(), "http" | "https") {
        return LinkType::Other;
    }
    let site_host = parse_site(site_url).and_then(|u| host_without_www(&u));
    match (host_without_www(&target), site_host) {
        (Some(target), Some(site)) if target == site => LinkType::Internal,
        _ => LinkType::External,
    }
}

/// Compare two URLs ignoring scheme, `www.`, fragment and trailing slash.
pub fn are_equal_urls(a: &str, b: &str) -> bool {
    fn normalize(raw: &str) -> String {
        match parse_site(raw) {
            Some(url) => format!(
                "{}{}{}",
                host_without_www(&url).unwrap_or_default(),
                url.path().trim_end_matches('/'),
                url.query().map(|q| format!("?{q}")).unwrap_or_default()
            ),
            None => raw.trim().trim_end_matches('/').to_string(),
        }
    }
    !a.trim().is_empty() && normalize(a) == normalize(b)
}

/// True for same-page fragments and links to the page's own URL or domain.
pub(crate) fn is_linking_to_self(href: &str, site_url: &str) -> bool {
    href.trim().starts_with('#') || are_equal_urls(href, site_url)
}

fn is_nofollow(rel: Option<&str>) -> bool {
    rel.is_some_and(|rel| {
        rel.split_whitespace()
            .any(|value| NOFOLLOW_RELS.contains(&value.to_ascii_lowercase().as_str()))
    })
}

/// Count the anchors with an `href` by type and follow status.
pub fn get_link_statistics(paper: &Paper, researcher: &Researcher) -> LinkStatistics {
    let tree = researcher.tree(paper);
    let mut stats = LinkStatistics::default();
    for anchor in tree.find_all(|n| n.name() == "a") {
        let Some(href) = anchor.attribute("href") else {
            continue;
        };
        let nofollow = is_nofollow(anchor.attribute("rel"));
        stats.total += 1;
        let (total, dofollow, nofollow_count) = match link_type(href, &paper.permalink) {
            LinkType::Internal => (
                &mut stats.internal_total,
                &mut stats.internal_dofollow,
                &mut stats.internal_nofollow,
            ),
            LinkType::External => (
                &mut stats.external_total,
                &mut stats.external_dofollow,
                &mut stats.external_nofollow,
            ),
            LinkType::Other => (
                &mut stats.other_total,
                &mut stats.other_dofollow,
                &mut stats.other_nofollow,
            ),
        };
        *total += 1;
        if nofollow {
            *nofollow_count += 1;
        } else {
            *dofollow += 1;
        }
    }
    stats
}
