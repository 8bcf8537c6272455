//! Core data types for the button component: content trees, attributes,
//! and the control type.

use crate::{Error, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Type attribute of the rendered control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    /// Plain button, does not submit its form.
    #[default]
    Button,
    /// Form submit button.
    Submit,
}

impl ControlType {
    /// Resolve the control type from the `form_submit` flag.
    pub fn from_form_submit(form_submit: bool) -> Self {
        if form_submit {
            ControlType::Submit
        } else {
            ControlType::Button
        }
    }

    /// Attribute value as written into markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlType::Button => "button",
            ControlType::Submit => "submit",
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl AttrValue {
    /// Parse a command-line style value: `true`/`false` become booleans,
    /// integers in canonical form become numbers, anything else stays text.
    ///
    /// `007` or `+5` stay text so they render exactly as given.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => AttrValue::Bool(true),
            "false" => AttrValue::Bool(false),
            _ => match raw.parse::<i64>() {
                Ok(n) if n.to_string() == raw => AttrValue::Int(n),
                _ => AttrValue::Text(raw.to_string()),
            },
        }
    }

    /// Text value, if this is a text attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value, if this is a boolean attribute.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

/// Returns true if `name` can be written into markup as an attribute name.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Ordered attribute map. Insertion order is kept; setting an existing name
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Parse a `name=value` pair.
    ///
    /// A pair without `=` is a boolean attribute set to `true`.
    pub fn parse_pair(pair: &str) -> Result<(String, AttrValue)> {
        let (name, value) = match pair.split_once('=') {
            Some((name, value)) => (name.trim(), AttrValue::parse(value)),
            None => (pair.trim(), AttrValue::Bool(true)),
        };

        if !is_valid_attribute_name(name) {
            return Err(Error::InvalidAttribute(pair.to_string()));
        }

        Ok((name.to_string(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Renderable content: the children of an element.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Element(Box<Element>),
    Fragment(Vec<Content>),
}

impl Content {
    /// Concatenated text of every descendant text node.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Content::Text(s) => out.push_str(s),
            Content::Element(element) => element.children.collect_text(out),
            Content::Fragment(items) => {
                for item in items {
                    item.collect_text(out);
                }
            }
        }
    }

    /// The text, if this content is a single text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this content renders nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(s) => s.is_empty(),
            Content::Element(_) => false,
            Content::Fragment(items) => items.iter().all(Content::is_empty),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Fragment(Vec::new())
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<Element> for Content {
    fn from(value: Element) -> Self {
        Content::Element(Box::new(value))
    }
}

impl From<Vec<Content>> for Content {
    fn from(value: Vec<Content>) -> Self {
        Content::Fragment(value)
    }
}

/// A generic element in an output tree.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Element {
    /// Tag name, e.g. `button` or `span`
    pub tag: String,
    /// Attributes in render order
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    /// Child content
    #[serde(skip_serializing_if = "Content::is_empty")]
    pub children: Content,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Attributes::new(),
            children: Content::default(),
        }
    }

    /// Set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: impl Into<Content>) -> Self {
        self.children = children.into();
        self
    }

    /// Render this element as markup.
    pub fn to_html(&self) -> String {
        crate::markup::element_to_html(self)
    }
}

/// JSON response envelope used by the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
