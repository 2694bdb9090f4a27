//! Rules for formats, links and text

use std::sync::OnceLock;

use docqa_ast::{Format, FormatStyle, Kind, Link, Text};
use docqa_core::diagnostics::{ChildRequirement, Reason};
use regex::Regex;

use super::non_blank;
use crate::{ChildPolicy, NodeRules};

/// Protocols a link href must mention
pub const ALLOWED_PROTOCOLS: [&str; 2] = ["http", "https"];

/// Required length of a color code
pub const COLOR_LENGTH: usize = 6;

impl NodeRules for Format {
    const CHILDREN: ChildPolicy = ChildPolicy::Required(ChildRequirement::Text);

    fn check_attributes(&self) -> Vec<Reason> {
        let mut reasons = Vec::new();

        let Some(style) = non_blank(&self.style) else {
            reasons.push(Reason::MissingAttribute {
                kind: Kind::Format,
                attribute: "style",
            });
            return reasons;
        };

        match FormatStyle::from_name(style) {
            None => reasons.push(Reason::UnsupportedValue {
                kind: Kind::Format,
                attribute: "style",
                value: style.to_string(),
                allowed: &FormatStyle::NAMES,
            }),
            Some(FormatStyle::Color) => match non_blank(&self.color) {
                None => reasons.push(Reason::MissingAttribute {
                    kind: Kind::Format,
                    attribute: "color",
                }),
                Some(color) if !is_color_code(color) => reasons.push(Reason::InvalidColor {
                    value: color.to_string(),
                }),
                Some(_) => {}
            },
            Some(FormatStyle::Bold | FormatStyle::Italic) => {}
        }

        reasons
    }
}

impl NodeRules for Link {
    const CHILDREN: ChildPolicy = ChildPolicy::Required(ChildRequirement::Text);

    fn check_attributes(&self) -> Vec<Reason> {
        let mut reasons = Vec::new();

        let Some(href) = non_blank(&self.href) else {
            reasons.push(Reason::MissingAttribute {
                kind: Kind::Link,
                attribute: "href",
            });
            return reasons;
        };

        if !is_valid_url(href) {
            reasons.push(Reason::MalformedUrl {
                href: href.to_string(),
            });
        }
        // Largely implied by the URL pattern, kept as its own check
        if !has_allowed_protocol(href) {
            reasons.push(Reason::UnsupportedProtocol {
                href: href.to_string(),
            });
        }

        reasons
    }
}

impl NodeRules for Text {
    const CHILDREN: ChildPolicy = ChildPolicy::Leaf;

    fn check_attributes(&self) -> Vec<Reason> {
        match non_blank(&self.value) {
            Some(_) => Vec::new(),
            None => vec![Reason::NoText],
        }
    }
}

/// Check an href against the http(s) URL pattern: scheme, dotted domain,
/// optional port, optional path/query/fragment
pub fn is_valid_url(href: &str) -> bool {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    let url_re = URL_RE.get_or_init(|| {
        Regex::new(r"^https?://[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+(?::[0-9]{1,5})?(?:[/?#]\S*)?$")
            .expect("URL pattern is valid")
    });
    url_re.is_match(href)
}

/// Check that an href contains one of [`ALLOWED_PROTOCOLS`] anywhere
pub fn has_allowed_protocol(href: &str) -> bool {
    ALLOWED_PROTOCOLS.iter().any(|protocol| href.contains(protocol))
}

/// Length-only color check; the characters are not checked to be hex digits
pub fn is_color_code(color: &str) -> bool {
    color.chars().count() == COLOR_LENGTH
}
