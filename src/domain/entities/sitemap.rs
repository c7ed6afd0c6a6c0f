//! Parsed source sitemap and its root attributes.

use super::UrlEntry;

/// Attributes of the source `<urlset>` root element, in document order.
///
/// Namespace declarations (`xmlns`, `xmlns:image`, ...) and
/// `xsi:schemaLocation` live here. The bag is read once per fetch and copied
/// unchanged onto every URL-set document built from that fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeBag(Vec<(String, String)>);

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The `<urlset>` root of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlSet {
    pub attributes: AttributeBag,
    pub urls: Vec<UrlEntry>,
}

/// A fetched and parsed source document.
///
/// `urlset` is `None` when the root element is something other than
/// `<urlset>` (for example an upstream `<sitemapindex>`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceSitemap {
    pub urlset: Option<UrlSet>,
}

impl SourceSitemap {
    /// Root attributes, or an empty bag if there is no `<urlset>`.
    pub fn attributes(&self) -> AttributeBag {
        self.urlset
            .as_ref()
            .map(|set| set.attributes.clone())
            .unwrap_or_default()
    }

    /// The URL list, or `None` if the document lacks the expected
    /// `<urlset><url>...</url></urlset>` shape.
    pub fn url_list(&self) -> Option<&[UrlEntry]> {
        self.urlset
            .as_ref()
            .map(|set| set.urls.as_slice())
            .filter(|urls| !urls.is_empty())
    }

    /// Consumes the document, returning its attributes and URL entries.
    pub fn into_parts(self) -> (AttributeBag, Vec<UrlEntry>) {
        match self.urlset {
            Some(set) => (set.attributes, set.urls),
            None => (AttributeBag::new(), Vec::new()),
        }
    }
}
