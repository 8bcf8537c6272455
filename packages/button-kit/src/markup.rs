//! HTML serialization of element trees.

use crate::types::{AttrValue, Content, Element};

/// Escape text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// `aria-*` and `data-*` booleans are enumerated strings, not HTML boolean
/// attributes.
fn is_enumerated(name: &str) -> bool {
    name.starts_with("aria-") || name.starts_with("data-")
}

fn write_attribute(out: &mut String, name: &str, value: &AttrValue) {
    match value {
        AttrValue::Bool(b) if is_enumerated(name) => {
            out.push_str(&format!(" {}=\"{}\"", name, b));
        }
        AttrValue::Bool(true) => {
            out.push(' ');
            out.push_str(name);
        }
        AttrValue::Bool(false) => {}
        AttrValue::Int(n) => out.push_str(&format!(" {}=\"{}\"", name, n)),
        AttrValue::Text(s) => {
            out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(s)));
        }
    }
}

fn write_content(out: &mut String, content: &Content) {
    match content {
        Content::Text(s) => out.push_str(&escape_text(s)),
        Content::Element(element) => write_element(out, element),
        Content::Fragment(items) => {
            for item in items {
                write_content(out, item);
            }
        }
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in element.attributes.iter() {
        write_attribute(out, name, value);
    }
    out.push('>');
    write_content(out, &element.children);
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

/// Render an element and its children as HTML.
pub fn element_to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}
