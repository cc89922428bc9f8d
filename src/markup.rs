//! Markup renderer: serializes elements to an SVG/XML string.

use crate::attrs::{AttrValue, Attrs};
use crate::errors::MarkupError;
use crate::log::trace;
use crate::render::Render;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render callback producing markup strings.
///
/// Attributes are written in insertion order. Elements without children are
/// self-closed.
#[derive(Debug, Clone, Default)]
pub struct Markup {
    standalone: bool,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `xmlns` to every `svg` element that does not set one, so the
    /// output can be written to a `.svg` file directly.
    pub fn standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}

impl Render for Markup {
    type Node = String;
    type Error = MarkupError;

    fn element(
        &self,
        tag: &str,
        attrs: Attrs,
        children: Vec<String>,
    ) -> Result<String, MarkupError> {
        if !is_xml_name(tag) {
            return Err(MarkupError::InvalidTagName {
                name: tag.to_string(),
            });
        }
        trace!(tag, attrs = attrs.len(), children = children.len(), "markup element");

        let mut out = String::new();
        out.push('<');
        out.push_str(tag);

        if self.standalone && tag == "svg" && !attrs.contains_key("xmlns") {
            push_attr(&mut out, "xmlns", SVG_NS);
        }

        for (name, value) in attrs.iter() {
            if !is_xml_name(name) {
                return Err(MarkupError::InvalidAttributeName {
                    tag: tag.to_string(),
                    name: name.to_string(),
                });
            }
            let text = match value {
                AttrValue::Text(s) => s.clone(),
                other => other.to_string(),
            };
            push_attr(&mut out, name, &text);
        }

        if children.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            for child in children {
                out.push_str(&child);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        Ok(out)
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_attr_into(out, value);
    out.push('"');
}

fn escape_attr_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Conservative XML name check (ASCII subset).
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}
