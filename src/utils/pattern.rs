//! Glob-style URL patterns used to drop entries from a sitemap.
//!
//! Two wildcard forms are supported:
//!
//! - `**` matches any run of characters, including `/`
//! - `*` matches one or more characters other than `/`
//!
//! Everything else in a pattern is literal. A pattern with no `*` at all is
//! compared with plain string equality.

use regex::Regex;
use tracing::warn;

/// A compiled URL pattern.
#[derive(Debug, Clone)]
pub enum UrlPattern {
    /// Pattern without wildcards, compared by equality.
    Exact(String),
    /// Anchored regex produced from a wildcard pattern.
    Glob(Regex),
    /// Pattern that failed to compile. Never matches.
    Invalid,
}

impl UrlPattern {
    /// Compiles a pattern string.
    ///
    /// Compilation never fails: a pattern whose regex cannot be built becomes
    /// [`UrlPattern::Invalid`] so one bad entry cannot abort a whole request.
    pub fn compile(pattern: &str) -> Self {
        if !pattern.contains('*') {
            return Self::Exact(pattern.to_string());
        }

        match Regex::new(&glob_to_regex(pattern)) {
            Ok(regex) => Self::Glob(regex),
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Ignoring URL pattern that failed to compile");
                Self::Invalid
            }
        }
    }

    /// Returns `true` if the whole `url` matches this pattern.
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Self::Exact(literal) => literal == url,
            Self::Glob(regex) => regex.is_match(url),
            Self::Invalid => false,
        }
    }
}

/// Convenience wrapper compiling `pattern` and testing `url` against it.
///
/// # Examples
///
/// ```ignore
/// assert!(url_matches_pattern("/a/b", "/a/*"));
/// assert!(!url_matches_pattern("/a/b/c", "/a/*"));
/// assert!(url_matches_pattern("/a/b/c", "/a/**"));
/// ```
pub fn url_matches_pattern(url: &str, pattern: &str) -> bool {
    UrlPattern::compile(pattern).matches(url)
}

/// Translates a wildcard pattern into an anchored regex source string.
fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push('^');

    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '*' {
            literal.push(c);
            continue;
        }

        regex.push_str(&regex::escape(&literal));
        literal.clear();

        if chars.peek() == Some(&'*') {
            chars.next();
            regex.push_str(".*");
        } else {
            regex.push_str("[^/]+");
        }
    }

    regex.push_str(&regex::escape(&literal));
    regex.push('$');
    regex
}
