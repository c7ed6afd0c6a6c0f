//! Sitemap XML parsing.

use crate::domain::entities::{SourceSitemap, UrlEntry, UrlSet, XmlNode};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses a sitemap document.
///
/// Only a `<urlset>` root yields a [`UrlSet`]. Any other root element, or a
/// document with no element at all, parses to a [`SourceSitemap`] without
/// one so callers can decide how to treat the unexpected shape.
///
/// # Errors
///
/// Returns a description of the problem if the XML is not well-formed.
pub(crate) fn parse_sitemap(xml: &str) -> Result<SourceSitemap, String> {
    let Some(root) = read_root(xml)? else {
        return Ok(SourceSitemap::default());
    };

    if local_name(&root.name) != "urlset" {
        return Ok(SourceSitemap::default());
    }

    let urls = root
        .children
        .into_iter()
        .filter(|child| local_name(&child.name) == "url")
        .map(into_url_entry)
        .collect();

    Ok(SourceSitemap {
        urlset: Some(UrlSet {
            attributes: root.attributes.into_iter().collect(),
            urls,
        }),
    })
}

/// Reads the first root element of `xml` into a tree.
fn read_root(xml: &str) -> Result<Option<XmlNode>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(ref e) => stack.push(open_node(e)?),
            Event::Empty(ref e) => {
                let node = open_node(e)?;
                if let Some(root) = attach(&mut stack, node) {
                    return Ok(Some(root));
                }
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| "Unexpected closing tag".to_string())?;
                if let Some(root) = attach(&mut stack, node) {
                    return Ok(Some(root));
                }
            }
            Event::Text(ref t) => {
                if let Some(node) = stack.last_mut() {
                    append_text(node, &t.unescape().map_err(|e| e.to_string())?);
                }
            }
            Event::CData(ref c) => {
                if let Some(node) = stack.last_mut() {
                    append_text(node, &String::from_utf8_lossy(c));
                }
            }
            Event::Eof => {
                return if stack.is_empty() {
                    Ok(None)
                } else {
                    Err("Unexpected end of document".to_string())
                };
            }
            _ => {}
        }
    }
}

fn open_node(e: &BytesStart<'_>) -> Result<XmlNode, String> {
    let mut node = XmlNode::new(String::from_utf8_lossy(e.name().as_ref()));

    for attr in e.attributes() {
        let attr = attr.map_err(|e| format!("Invalid attribute: {}", e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| e.to_string())?
            .into_owned();
        node.attributes.push((key, value));
    }

    Ok(node)
}

/// Hands a finished element to its parent, or returns it if it is the root.
fn attach(stack: &mut [XmlNode], node: XmlNode) -> Option<XmlNode> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            None
        }
        None => Some(node),
    }
}

fn append_text(node: &mut XmlNode, text: &str) {
    match node.text.as_mut() {
        Some(existing) => existing.push_str(text),
        None => node.text = Some(text.to_string()),
    }
}

/// Splits a `<url>` element into its location and the remaining children.
fn into_url_entry(node: XmlNode) -> UrlEntry {
    let mut loc = None;
    let mut loc_position = 0;
    let mut extra = Vec::with_capacity(node.children.len());

    for child in node.children {
        if loc.is_none() && local_name(&child.name) == "loc" {
            loc = Some(child.text.unwrap_or_default());
            loc_position = extra.len();
        } else {
            extra.push(child);
        }
    }

    UrlEntry {
        loc: loc.filter(|l: &String| !l.is_empty()),
        extra,
        loc_position,
    }
}

fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}
