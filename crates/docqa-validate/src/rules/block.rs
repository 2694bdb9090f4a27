//! Rules for chapters, paragraphs, lists and images

use docqa_ast::{BulletType, Chapter, Image, ImageFormat, Kind, List, ListStyle, Paragraph};
use docqa_core::diagnostics::{ChildRequirement, Reason};

use super::non_blank;
use crate::{ChildPolicy, NodeRules};

impl NodeRules for Chapter {
    const CHILDREN: ChildPolicy = ChildPolicy::Required(ChildRequirement::Block);

    fn check_attributes(&self) -> Vec<Reason> {
        let mut reasons = Vec::new();
        if non_blank(&self.title).is_none() {
            reasons.push(Reason::MissingAttribute {
                kind: Kind::Chapter,
                attribute: "title",
            });
        }
        reasons
    }
}

impl NodeRules for Paragraph {
    const CHILDREN: ChildPolicy = ChildPolicy::Required(ChildRequirement::Inline);

    fn check_attributes(&self) -> Vec<Reason> {
        Vec::new()
    }
}

impl NodeRules for List {
    const CHILDREN: ChildPolicy = ChildPolicy::Required(ChildRequirement::Block);

    fn check_attributes(&self) -> Vec<Reason> {
        let mut reasons = Vec::new();

        let Some(style) = non_blank(&self.style) else {
            reasons.push(Reason::MissingAttribute {
                kind: Kind::List,
                attribute: "style",
            });
            return reasons;
        };

        match ListStyle::from_name(style) {
            None => reasons.push(Reason::UnsupportedValue {
                kind: Kind::List,
                attribute: "style",
                value: style.to_string(),
                allowed: &ListStyle::NAMES,
            }),
            Some(ListStyle::Numerical) => {
                // A start that is not an integer is not reported
                if let Some(value) = non_blank(&self.start_with).and_then(|s| s.parse::<i64>().ok()) {
                    if value < 1 {
                        reasons.push(Reason::StartBelowOne { value });
                    }
                }
            }
            Some(ListStyle::Bullet) => {
                if let Some(bullet) = non_blank(&self.bullet_type) {
                    if BulletType::from_name(bullet).is_none() {
                        reasons.push(Reason::UnsupportedValue {
                            kind: Kind::List,
                            attribute: "bulletType",
                            value: bullet.to_string(),
                            allowed: &BulletType::NAMES,
                        });
                    }
                }
            }
            Some(ListStyle::Plain) => {}
        }

        reasons
    }
}

impl NodeRules for Image {
    const CHILDREN: ChildPolicy = ChildPolicy::Leaf;

    fn check_attributes(&self) -> Vec<Reason> {
        let mut reasons = Vec::new();
        reasons.extend(check_image_source("src", self.src.as_deref()));
        if let Some(dark_src) = non_blank(&self.dark_src) {
            reasons.extend(check_image_source("darkSrc", Some(dark_src)));
        }
        reasons
    }
}

/// Check an image file name: exactly one `.`, and a supported extension
///
/// A missing value fails the name check.
pub fn check_image_source(attribute: &'static str, value: Option<&str>) -> Option<Reason> {
    let parts: Vec<&str> = match value {
        Some(v) => v.split('.').collect(),
        None => Vec::new(),
    };

    match parts.as_slice() {
        [_, extension] => {
            if ImageFormat::from_extension(extension).is_some() {
                None
            } else {
                Some(Reason::UnsupportedImageFormat {
                    attribute,
                    extension: extension.to_string(),
                })
            }
        }
        _ => Some(Reason::InvalidImageName {
            attribute,
            value: value.map(str::to_string),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_ast::builder::{chapter, image, list};

    #[test]
    fn test_chapter_title() {
        assert!(chapter().with_title("Intro").check_attributes().is_empty());
        assert_eq!(
            chapter().with_title("   ").check_attributes(),
            vec![Reason::MissingAttribute {
                kind: Kind::Chapter,
                attribute: "title"
            }]
        );
        assert_eq!(chapter().check_attributes().len(), 1);
    }

    #[test]
    fn test_list_style_required() {
        let reasons = list().check_attributes();
        assert_eq!(reasons[0].code(), "DQ102");

        let reasons = list().with_style("").check_attributes();
        assert_eq!(reasons[0].code(), "DQ102");
    }

    #[test]
    fn test_list_style_enumeration() {
        for style in ListStyle::NAMES {
            assert!(list().with_style(style).check_attributes().is_empty(), "{style}");
        }
        let reasons = list().with_style("dotted").check_attributes();
        assert!(matches!(
            &reasons[..],
            [Reason::UnsupportedValue { attribute: "style", value, .. }] if value == "dotted"
        ));
    }

    #[test]
    fn test_numerical_start() {
        let numbered = |start: &str| list().with_style("numerical").with_start_with(start);

        assert!(numbered("1").check_attributes().is_empty());
        assert!(numbered("42").check_attributes().is_empty());
        assert_eq!(
            numbered("0").check_attributes(),
            vec![Reason::StartBelowOne { value: 0 }]
        );
        assert_eq!(
            numbered("-3").check_attributes(),
            vec![Reason::StartBelowOne { value: -3 }]
        );
        assert!(list().with_style("numerical").check_attributes().is_empty());
    }

    #[test]
    fn test_non_integer_start_is_not_reported() {
        let node = list().with_style("numerical").with_start_with("first");
        assert!(node.check_attributes().is_empty());
        let node = list().with_style("numerical").with_start_with("1.5");
        assert!(node.check_attributes().is_empty());
    }

    #[test]
    fn test_start_ignored_for_other_styles() {
        let node = list().with_style("plain").with_start_with("0");
        assert!(node.check_attributes().is_empty());
    }

    #[test]
    fn test_bullet_type() {
        let bullet = |shape: &str| list().with_style("bullet").with_bullet_type(shape);

        assert!(bullet("circle").check_attributes().is_empty());
        assert!(bullet("square").check_attributes().is_empty());
        assert!(list().with_style("bullet").check_attributes().is_empty());
        assert_eq!(bullet("triangle").check_attributes()[0].code(), "DQ103");

        // only checked for bullet lists
        let plain = list().with_style("plain").with_bullet_type("triangle");
        assert!(plain.check_attributes().is_empty());
    }

    #[test]
    fn test_image_source_names() {
        assert_eq!(check_image_source("src", Some("a.png")), None);
        assert_eq!(check_image_source("src", Some("photo.jpeg")), None);
        assert!(matches!(
            check_image_source("src", Some("a.bmp")),
            Some(Reason::UnsupportedImageFormat { ref extension, .. }) if extension == "bmp"
        ));
        assert!(matches!(
            check_image_source("src", Some("noext")),
            Some(Reason::InvalidImageName { .. })
        ));
        assert!(matches!(
            check_image_source("src", Some("a.b.png")),
            Some(Reason::InvalidImageName { .. })
        ));
        assert!(matches!(
            check_image_source("src", None),
            Some(Reason::InvalidImageName { value: None, .. })
        ));
        assert!(matches!(
            check_image_source("src", Some("A.PNG")),
            Some(Reason::UnsupportedImageFormat { .. })
        ));
    }

    #[test]
    fn test_image_dark_source() {
        assert!(image().with_src("a.png").check_attributes().is_empty());
        assert!(image()
            .with_src("a.png")
            .with_dark_src("a-dark.svg")
            .check_attributes()
            .is_empty());
        assert!(image()
            .with_src("a.png")
            .with_dark_src("")
            .check_attributes()
            .is_empty());

        let reasons = image()
            .with_src("a.png")
            .with_dark_src("a.dark.png")
            .check_attributes();
        assert!(matches!(
            &reasons[..],
            [Reason::InvalidImageName { attribute: "darkSrc", .. }]
        ));
    }

    #[test]
    fn test_image_checks_are_independent() {
        let reasons = image()
            .with_src("noext")
            .with_dark_src("a.tiff")
            .check_attributes();
        let codes: Vec<&str> = reasons.iter().map(Reason::code).collect();
        assert_eq!(codes, vec!["DQ303", "DQ304"]);
    }
}
