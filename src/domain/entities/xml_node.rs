//! Generic XML element carried through the pipeline without interpretation.

/// An XML element with its attributes, text content and child elements.
///
/// Used for the extra children of a `<url>` entry (`<lastmod>`,
/// `<priority>`, `<image:image>`, ...). Those are never read by the
/// transformation steps, only copied back out on serialization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Creates an element with no attributes, text or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a text-only element such as `<lastmod>2024-01-01</lastmod>`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Returns true if the element carries nothing at all.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
            && self.children.is_empty()
            && self.text.as_deref().is_none_or(str::is_empty)
    }
}
