//! URL entry entity representing one `<url>` element of a sitemap.

use super::XmlNode;

/// One `<url>` entry of a sitemap.
///
/// `loc` is the only field the pipeline looks at. Everything else the source
/// document put inside the `<url>` element is kept in `extra`, in document
/// order, and written back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlEntry {
    pub loc: Option<String>,
    pub extra: Vec<XmlNode>,
    /// Number of `extra` elements that came before `<loc>` in the source.
    pub loc_position: usize,
}

impl UrlEntry {
    /// Creates an entry with only a location.
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: Some(loc.into()),
            extra: Vec::new(),
            loc_position: 0,
        }
    }

    /// Extras written before and after `<loc>`, in source order.
    pub fn extra_around_loc(&self) -> (&[XmlNode], &[XmlNode]) {
        self.extra.split_at(self.loc_position.min(self.extra.len()))
    }

    /// Appends an extra child element.
    pub fn with_extra(mut self, node: XmlNode) -> Self {
        self.extra.push(node);
        self
    }
}
