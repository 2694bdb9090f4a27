//! docqa-ast - Content node tree definitions
//!
//! This crate provides the node types used by docqa for representing
//! document content trees: chapters, paragraphs, lists and images on the
//! block level, formatting, links and text on the inline level.
//!
//! # Example
//!
//! ```
//! use docqa_ast::builder::{chapter, paragraph, text};
//! use docqa_ast::{Capability, Kind, Node};
//!
//! let root: Node = chapter()
//!     .with_title("Intro")
//!     .with_child(paragraph().with_child(text("Hello")))
//!     .into();
//!
//! assert_eq!(root.kind(), Kind::Chapter);
//! assert_eq!(root.capability(), Capability::Block);
//! assert_eq!(root.node_count(), 3);
//! ```

/// Implements [`Element`] plus exactly one capability marker trait for a
/// node struct, together with the shared `with_*` setters.
///
/// Every struct passed here must have `id: Option<String>` and
/// `children: Vec<Node>` fields.
macro_rules! element {
    (@impl $ty:ident, $kind:ident, $cap:ident, { $($name:literal => $field:ident),* }) => {
        impl $crate::node::Element for $ty {
            const KIND: $crate::node::Kind = $crate::node::Kind::$kind;
            const CAPABILITY: $crate::node::Capability = $crate::node::Capability::$cap;

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn children(&self) -> &[$crate::node::Node] {
                &self.children
            }

            fn attributes(&self) -> Vec<(&'static str, Option<&str>)> {
                vec![$(($name, self.$field.as_deref())),*]
            }
        }

        impl $ty {
            /// Set the diagnostic identifier
            pub fn with_id(mut self, id: impl Into<String>) -> Self {
                self.id = Some(id.into());
                self
            }

            /// Append a child node
            pub fn with_child(mut self, child: impl Into<$crate::node::Node>) -> Self {
                self.children.push(child.into());
                self
            }

            /// Append several child nodes, keeping their order
            pub fn with_children<I, N>(mut self, children: I) -> Self
            where
                I: IntoIterator<Item = N>,
                N: Into<$crate::node::Node>,
            {
                self.children.extend(children.into_iter().map(Into::into));
                self
            }
        }

        impl From<$ty> for $crate::node::Node {
            fn from(value: $ty) -> Self {
                $crate::node::Node::$kind(value)
            }
        }
    };
    (block $ty:ident, { $($name:literal => $field:ident),* $(,)? }) => {
        element!(@impl $ty, $ty, Block, { $($name => $field),* });
        impl $crate::node::BlockElement for $ty {}
    };
    (inline $ty:ident, { $($name:literal => $field:ident),* $(,)? }) => {
        element!(@impl $ty, $ty, Inline, { $($name => $field),* });
        impl $crate::node::InlineElement for $ty {}
    };
}

pub mod block;
pub mod builder;
pub mod inline;
pub mod node;

// Re-export main types
pub use block::{BulletType, Chapter, Image, ImageFormat, List, ListStyle, Paragraph};
pub use inline::{Format, FormatStyle, Link, Text};
pub use node::{BlockElement, Capability, Element, InlineElement, Kind, Node};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
