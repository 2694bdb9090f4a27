//! Block-level nodes for document structure
//!
//! This module defines block-level nodes that form the document structure:
//! chapters, paragraphs, lists and images.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// A titled chapter holding block content
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Chapter {
    /// Identifier used in diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Chapter title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Block children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A paragraph holding inline content
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Paragraph {
    /// Identifier used in diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Inline children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A list of block items
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct List {
    /// Identifier used in diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// List style (`bullet`, `numerical`, `plain`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// First number of a numerical list
    #[serde(rename = "startWith", skip_serializing_if = "Option::is_none")]
    pub start_with: Option<String>,
    /// Bullet shape of a bullet list
    #[serde(rename = "bulletType", skip_serializing_if = "Option::is_none")]
    pub bullet_type: Option<String>,
    /// Block children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// An image, with an optional dark-mode variant
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Image {
    /// Identifier used in diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Image file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Image file name for dark mode
    #[serde(rename = "darkSrc", skip_serializing_if = "Option::is_none")]
    pub dark_src: Option<String>,
    /// Images are leaves; any child is a structural error
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

element!(block Chapter, { "title" => title });
element!(block Paragraph, {});
element!(block List, {
    "style" => style,
    "startWith" => start_with,
    "bulletType" => bullet_type,
});
element!(block Image, { "src" => src, "darkSrc" => dark_src });

/// List style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Bullet,
    Numerical,
    Plain,
}

/// Bullet shape variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletType {
    Circle,
    Square,
}

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpg,
    Jpeg,
    Svg,
}

impl ListStyle {
    pub const ALL: [ListStyle; 3] = [ListStyle::Bullet, ListStyle::Numerical, ListStyle::Plain];
    pub const NAMES: [&'static str; 3] = ["bullet", "numerical", "plain"];

    pub fn as_str(self) -> &'static str {
        match self {
            ListStyle::Bullet => "bullet",
            ListStyle::Numerical => "numerical",
            ListStyle::Plain => "plain",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl BulletType {
    pub const ALL: [BulletType; 2] = [BulletType::Circle, BulletType::Square];
    pub const NAMES: [&'static str; 2] = ["circle", "square"];

    pub fn as_str(self) -> &'static str {
        match self {
            BulletType::Circle => "circle",
            BulletType::Square => "square",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == name)
    }
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Png,
        ImageFormat::Jpg,
        ImageFormat::Jpeg,
        ImageFormat::Svg,
    ];
    pub const NAMES: [&'static str; 4] = ["png", "jpg", "jpeg", "svg"];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Svg => "svg",
        }
    }

    /// Look up a format by file extension (case-sensitive, no dot)
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == extension)
    }
}

impl Chapter {
    /// Set the chapter title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl List {
    /// Set the list style
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the first number of a numerical list
    pub fn with_start_with(mut self, start_with: impl Into<String>) -> Self {
        self.start_with = Some(start_with.into());
        self
    }

    /// Set the bullet shape
    pub fn with_bullet_type(mut self, bullet_type: impl Into<String>) -> Self {
        self.bullet_type = Some(bullet_type.into());
        self
    }

    /// The style, if it names a known variant
    pub fn list_style(&self) -> Option<ListStyle> {
        self.style.as_deref().and_then(ListStyle::from_name)
    }
}

impl Image {
    /// Set the image file name
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Set the dark-mode image file name
    pub fn with_dark_src(mut self, dark_src: impl Into<String>) -> Self {
        self.dark_src = Some(dark_src.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;

    #[test]
    fn test_chapter_default() {
        let chapter = Chapter::default();
        assert!(chapter.children.is_empty());
        assert!(chapter.title.is_none());
    }

    #[test]
    fn test_list_attributes_order() {
        let list = List::default()
            .with_style("bullet")
            .with_bullet_type("circle");
        assert_eq!(
            list.attributes(),
            vec![
                ("style", Some("bullet")),
                ("startWith", None),
                ("bulletType", Some("circle")),
            ]
        );
    }

    #[test]
    fn test_paragraph_has_no_attributes() {
        assert!(Paragraph::default().attributes().is_empty());
    }

    #[test]
    fn test_list_style_lookup() {
        assert_eq!(ListStyle::from_name("numerical"), Some(ListStyle::Numerical));
        assert_eq!(ListStyle::from_name("Numerical"), None);
        assert_eq!(
            List::default().with_style("plain").list_style(),
            Some(ListStyle::Plain)
        );
        assert_eq!(List::default().with_style("dotted").list_style(), None);
    }

    #[test]
    fn test_names_match_variants() {
        let list: Vec<&str> = ListStyle::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(list, ListStyle::NAMES);
        let bullets: Vec<&str> = BulletType::ALL.iter().map(|b| b.as_str()).collect();
        assert_eq!(bullets, BulletType::NAMES);
        let formats: Vec<&str> = ImageFormat::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(formats, ImageFormat::NAMES);
    }

    #[test]
    fn test_bullet_type_lookup() {
        assert_eq!(BulletType::from_name("square"), Some(BulletType::Square));
        assert_eq!(BulletType::from_name("triangle"), None);
    }

    #[test]
    fn test_image_format_lookup() {
        for format in ImageFormat::ALL {
            assert_eq!(ImageFormat::from_extension(format.as_str()), Some(format));
        }
        assert_eq!(ImageFormat::from_extension("bmp"), None);
        assert_eq!(ImageFormat::from_extension("PNG"), None);
    }
}
