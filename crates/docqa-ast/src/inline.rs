//! Inline nodes for document content
//!
//! This module defines inline-level nodes that appear within paragraphs:
//! formatting spans, hyperlinks and plain text.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// A formatting span (bold, italic, colored) around text
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Format {
    /// Identifier used in diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Formatting style (`bold`, `italic`, `color`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Six character color code, used with the `color` style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Text children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A hyperlink around text
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Link {
    /// Identifier used in diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The URL target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Text children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Plain text
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Text {
    /// Identifier used in diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Text is a leaf; any child is a structural error
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

element!(inline Format, { "style" => style, "color" => color });
element!(inline Link, { "href" => href });
element!(inline Text, { "value" => value });

/// Text formatting styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    Bold,
    Italic,
    Color,
}

impl FormatStyle {
    pub const ALL: [FormatStyle; 3] = [FormatStyle::Bold, FormatStyle::Italic, FormatStyle::Color];
    pub const NAMES: [&'static str; 3] = ["bold", "italic", "color"];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatStyle::Bold => "bold",
            FormatStyle::Italic => "italic",
            FormatStyle::Color => "color",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl Format {
    /// Set the formatting style
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the color code
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The style, if it names a known variant
    pub fn format_style(&self) -> Option<FormatStyle> {
        self.style.as_deref().and_then(FormatStyle::from_name)
    }
}

impl Link {
    /// Set the URL target
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

impl Text {
    /// Replace the text content
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Append to the text content, starting it if there is none yet
    pub fn push_str(&mut self, s: &str) {
        match self.value.as_mut() {
            Some(value) => value.push_str(s),
            None => self.value = Some(s.to_string()),
        }
    }
}
