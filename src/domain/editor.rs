//! Edits applied to a sitemap's URL list.
//!
//! The pipeline always runs [`remove_urls`], then [`add_urls`], then
//! [`replace_domain`]. Added URLs are therefore never subject to removal, and
//! removal patterns are matched against the locations as published upstream.

use crate::domain::entities::UrlEntry;
use crate::utils::pattern::UrlPattern;

/// Drops every entry whose location matches any of `patterns`.
///
/// Entries without a location are kept. Relative order of the survivors is
/// preserved.
pub fn remove_urls(urls: Vec<UrlEntry>, patterns: &[String]) -> Vec<UrlEntry> {
    if patterns.is_empty() {
        return urls;
    }

    let compiled: Vec<UrlPattern> = patterns.iter().map(|p| UrlPattern::compile(p)).collect();

    urls.into_iter()
        .filter(|entry| match entry.loc.as_deref() {
            Some(loc) => !compiled.iter().any(|pattern| pattern.matches(loc)),
            None => true,
        })
        .collect()
}

/// Appends one location-only entry per URL in `additions`, in order.
pub fn add_urls(mut urls: Vec<UrlEntry>, additions: &[String]) -> Vec<UrlEntry> {
    urls.extend(additions.iter().map(UrlEntry::new));
    urls
}

/// Rewrites the `origin` prefix of each location to `replacement`.
///
/// Only locations that start with `origin` (case-sensitive) are touched, and
/// only that leading occurrence is replaced. Does nothing unless both strings
/// are non-empty.
pub fn replace_domain(urls: Vec<UrlEntry>, origin: &str, replacement: &str) -> Vec<UrlEntry> {
    if origin.is_empty() || replacement.is_empty() {
        return urls;
    }

    urls.into_iter()
        .map(|mut entry| {
            if let Some(rest) = entry.loc.as_deref().and_then(|loc| loc.strip_prefix(origin)) {
                entry.loc = Some(format!("{}{}", replacement, rest));
            }
            entry
        })
        .collect()
}
