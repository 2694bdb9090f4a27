//! The node sum type and its capability classification
//!
//! Every node kind is a separate struct. [`Node`] wraps them in a closed
//! enum, and the [`Element`] trait exposes the kind and capability of each
//! struct as associated constants, so they are a property of the type and
//! not of a particular value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block::{Chapter, Image, List, Paragraph};
use crate::inline::{Format, Link, Text};

/// The closed set of node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Chapter,
    Paragraph,
    List,
    Image,
    Format,
    Link,
    Text,
}

/// Structural category that decides legal parent/child pairings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// May appear inside chapters and lists
    Block,
    /// May appear inside paragraphs, formats and links
    Inline,
}

impl Kind {
    /// All kinds, in declaration order
    pub const ALL: [Kind; 7] = [
        Kind::Chapter,
        Kind::Paragraph,
        Kind::List,
        Kind::Image,
        Kind::Format,
        Kind::Link,
        Kind::Text,
    ];

    /// Lowercase name used as the document discriminator
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Chapter => "chapter",
            Kind::Paragraph => "paragraph",
            Kind::List => "list",
            Kind::Image => "image",
            Kind::Format => "format",
            Kind::Link => "link",
            Kind::Text => "text",
        }
    }

    /// Capitalized name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Kind::Chapter => "Chapter",
            Kind::Paragraph => "Paragraph",
            Kind::List => "List",
            Kind::Image => "Image",
            Kind::Format => "Format",
            Kind::Link => "Link",
            Kind::Text => "Text",
        }
    }

    /// Look up a kind by its discriminator name
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// The capability of every node of this kind
    pub fn capability(self) -> Capability {
        match self {
            Kind::Chapter => Chapter::CAPABILITY,
            Kind::Paragraph => Paragraph::CAPABILITY,
            Kind::List => List::CAPABILITY,
            Kind::Image => Image::CAPABILITY,
            Kind::Format => Format::CAPABILITY,
            Kind::Link => Link::CAPABILITY,
            Kind::Text => Text::CAPABILITY,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Block => write!(f, "block"),
            Capability::Inline => write!(f, "inline"),
        }
    }
}

/// Shared shape of every node struct
///
/// Implemented only through the `element!` macro, which also implements
/// exactly one of [`BlockElement`] or [`InlineElement`] to match
/// [`Element::CAPABILITY`].
pub trait Element {
    /// Kind of this node type
    const KIND: Kind;

    /// Capability of this node type
    const CAPABILITY: Capability;

    /// Optional identifier, used only in diagnostics
    fn id(&self) -> Option<&str>;

    /// Ordered child nodes
    fn children(&self) -> &[Node];

    /// Kind-specific attributes in declaration order (excluding `id`)
    fn attributes(&self) -> Vec<(&'static str, Option<&str>)>;
}

/// Marker for node types allowed inside chapters and lists
pub trait BlockElement: Element {}

/// Marker for node types allowed inside paragraphs, formats and links
pub trait InlineElement: Element {}

/// A node of the document content tree
///
/// Children are owned by value, so a `Node` is always a finite tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Chapter(Chapter),
    Paragraph(Paragraph),
    List(List),
    Image(Image),
    Format(Format),
    Link(Link),
    Text(Text),
}

macro_rules! dispatch {
    ($node:expr, $el:ident => $body:expr) => {
        match $node {
            Node::Chapter($el) => $body,
            Node::Paragraph($el) => $body,
            Node::List($el) => $body,
            Node::Image($el) => $body,
            Node::Format($el) => $body,
            Node::Link($el) => $body,
            Node::Text($el) => $body,
        }
    };
}

fn capability_of<T: Element>(_: &T) -> Capability {
    T::CAPABILITY
}

fn kind_of<T: Element>(_: &T) -> Kind {
    T::KIND
}

impl Node {
    /// The kind of this node
    pub fn kind(&self) -> Kind {
        dispatch!(self, el => kind_of(el))
    }

    /// The capability of this node, read from its type
    pub fn capability(&self) -> Capability {
        dispatch!(self, el => capability_of(el))
    }

    /// Check if this node may appear where block content is expected
    pub fn is_block(&self) -> bool {
        self.capability() == Capability::Block
    }

    /// Check if this node may appear where inline content is expected
    pub fn is_inline(&self) -> bool {
        self.capability() == Capability::Inline
    }

    /// Optional identifier
    pub fn id(&self) -> Option<&str> {
        dispatch!(self, el => el.id())
    }

    /// Ordered child nodes
    pub fn children(&self) -> &[Node] {
        dispatch!(self, el => el.children())
    }

    /// Kind-specific attributes in declaration order
    pub fn attributes(&self) -> Vec<(&'static str, Option<&str>)> {
        dispatch!(self, el => el.attributes())
    }

    /// Get an attribute value by name (`id` included)
    pub fn attribute(&self, name: &str) -> Option<&str> {
        if name == "id" {
            return self.id();
        }
        self.attributes()
            .into_iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value)
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}

impl fmt::Display for Node {
    /// `Kind[id]` when an id is present, otherwise the kind followed by its
    /// set attributes and the kinds of its children.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        if let Some(id) = self.id() {
            return write!(f, "[{}]", id);
        }

        let attributes: Vec<String> = self
            .attributes()
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
            .collect();
        let children: Vec<&str> = self.children().iter().map(|c| c.kind().name()).collect();

        write!(
            f,
            " with {{{}}}, [{}]",
            attributes.join(", "),
            children.join(", ")
        )
    }
}
