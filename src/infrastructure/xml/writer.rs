//! Sitemap XML rendering.

use crate::domain::entities::{AttributeBag, UrlEntry, XmlNode};
use crate::error::SitemapError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::SITEMAP_NAMESPACE;

type XmlWriter = Writer<Vec<u8>>;

/// Renders a `<urlset>` document carrying `attributes` on its root.
pub(crate) fn write_urlset(
    urls: &[UrlEntry],
    attributes: &AttributeBag,
    indent: usize,
) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);
    emit(&mut writer, declaration())?;

    emit(
        &mut writer,
        Event::Start(BytesStart::new("urlset").with_attributes(attributes.iter())),
    )?;
    for entry in urls {
        write_url(&mut writer, entry)?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    finish(writer)
}

/// Renders a `<sitemapindex>` document listing `locations`.
///
/// The root always declares the standard sitemap namespace, whatever the
/// source document declared.
pub(crate) fn write_index(locations: &[String], indent: usize) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);
    emit(&mut writer, declaration())?;

    emit(
        &mut writer,
        Event::Start(BytesStart::new("sitemapindex").with_attributes([("xmlns", SITEMAP_NAMESPACE)])),
    )?;
    for loc in locations {
        emit(&mut writer, Event::Start(BytesStart::new("sitemap")))?;
        write_text_element(&mut writer, "loc", loc)?;
        emit(&mut writer, Event::End(BytesEnd::new("sitemap")))?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("sitemapindex")))?;

    finish(writer)
}

fn write_url(writer: &mut XmlWriter, entry: &UrlEntry) -> Result<(), SitemapError> {
    let loc = entry.loc.as_deref().filter(|l| !l.is_empty());
    if loc.is_none() && entry.extra.iter().all(XmlNode::is_empty) {
        return Ok(());
    }

    let (before, after) = entry.extra_around_loc();

    emit(writer, Event::Start(BytesStart::new("url")))?;
    for node in before {
        write_node(writer, node)?;
    }
    if let Some(loc) = loc {
        write_text_element(writer, "loc", loc)?;
    }
    for node in after {
        write_node(writer, node)?;
    }
    emit(writer, Event::End(BytesEnd::new("url")))
}

/// Writes an opaque element back out, skipping it entirely when empty.
fn write_node(writer: &mut XmlWriter, node: &XmlNode) -> Result<(), SitemapError> {
    if node.is_empty() {
        return Ok(());
    }

    let start = BytesStart::new(node.name.as_str()).with_attributes(
        node.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );
    let text = node.text.as_deref().filter(|t| !t.is_empty());

    if text.is_none() && node.children.iter().all(XmlNode::is_empty) {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    if let Some(text) = text {
        emit(writer, Event::Text(BytesText::new(text)))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(node.name.as_str())))
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), SitemapError> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn declaration() -> Event<'static> {
    Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None))
}

fn emit(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), SitemapError> {
    writer
        .write_event(event)
        .map_err(|e| SitemapError::Serialize(e.to_string()))
}

fn finish(writer: XmlWriter) -> Result<String, SitemapError> {
    String::from_utf8(writer.into_inner()).map_err(|e| SitemapError::Serialize(e.to_string()))
}
