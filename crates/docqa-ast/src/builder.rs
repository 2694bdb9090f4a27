//! Constructor functions for building trees in code
//!
//! Each function returns the empty struct for its kind, ready for the
//! chained `with_*` setters.
//!
//! ```
//! use docqa_ast::builder::{format, link, paragraph, text};
//! use docqa_ast::Node;
//!
//! let para: Node = paragraph()
//!     .with_child(text("See "))
//!     .with_child(link().with_href("https://example.com").with_child(text("here")))
//!     .with_child(format().with_style("bold").with_child(text("!")))
//!     .into();
//!
//! assert_eq!(para.children().len(), 3);
//! ```

use crate::block::{Chapter, Image, List, Paragraph};
use crate::inline::{Format, Link, Text};

pub fn chapter() -> Chapter {
    Chapter::default()
}

pub fn paragraph() -> Paragraph {
    Paragraph::default()
}

pub fn list() -> List {
    List::default()
}

pub fn image() -> Image {
    Image::default()
}

pub fn format() -> Format {
    Format::default()
}

pub fn link() -> Link {
    Link::default()
}

/// A text node with the given content
pub fn text(value: impl Into<String>) -> Text {
    Text::default().with_value(value)
}
