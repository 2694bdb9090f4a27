//! Document decoder
//!
//! This module turns tagged JSON records into `docqa_ast::Node` trees.
//!
//! # Format
//!
//! ```json
//! [
//!   { "type": "chapter",
//!     "properties": { "id": "c1", "title": "Intro" },
//!     "children": [ { "type": "paragraph", "children": [] } ] }
//! ]
//! ```
//!
//! Attributes are read from `properties`, falling back to fields on the
//! record itself. Decoding is lenient about content: unknown fields are
//! ignored, and attribute or `children` values of the wrong JSON type
//! decode as absent. Only the record structure itself (objects with a
//! known `type`) is required.
//!
//! # Example
//!
//! ```
//! use docqa_ast::Kind;
//! use docqa_core::decode::decode_str;
//!
//! let nodes = decode_str(r#"[{"type": "text", "properties": {"value": "hi"}}]"#).unwrap();
//! assert_eq!(nodes[0].kind(), Kind::Text);
//! assert_eq!(nodes[0].attribute("value"), Some("hi"));
//! ```

use docqa_ast::{Chapter, Format, Image, Kind, Link, List, Node, Paragraph, Text};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DecodeError, Result};

/// Decode a JSON document: an array of node records, or a single record
///
/// Nesting depth is not limited; deep documents grow the stack on demand.
pub fn decode_str(input: &str) -> Result<Vec<Node>> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    decode_value(&value)
}

/// Decode an already parsed JSON document
pub fn decode_value(value: &Value) -> Result<Vec<Node>> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| decode_at(entry, format!("/{}", index)))
            .collect(),
        Value::Object(_) => Ok(vec![decode_node(value)?]),
        other => Err(DecodeError::NotAnArray {
            found: json_type(other),
        }),
    }
}

/// Decode a single node record
pub fn decode_node(value: &Value) -> Result<Node> {
    decode_at(value, "(root)".to_string())
}

fn decode_at(value: &Value, path: String) -> Result<Node> {
    let Some(object) = value.as_object() else {
        return Err(DecodeError::NotAnObject {
            path,
            found: json_type(value),
        });
    };

    let kind = match object.get("type") {
        Some(Value::String(name)) => match Kind::from_name(name) {
            Some(kind) => kind,
            None => {
                return Err(DecodeError::UnknownKind {
                    path,
                    name: name.clone(),
                })
            }
        },
        Some(other) => {
            return Err(DecodeError::InvalidType {
                path,
                found: json_type(other),
            })
        }
        None => return Err(DecodeError::MissingType { path }),
    };

    let fields = Fields::new(object, &path);
    let children = decode_children(object, &path)?;
    let id = fields.string("id");

    let node = match kind {
        Kind::Chapter => Node::Chapter(Chapter {
            id,
            title: fields.string("title"),
            children,
        }),
        Kind::Paragraph => Node::Paragraph(Paragraph { id, children }),
        Kind::List => Node::List(List {
            id,
            style: fields.string("style"),
            start_with: fields.string("startWith"),
            bullet_type: fields.string("bulletType"),
            children,
        }),
        Kind::Image => Node::Image(Image {
            id,
            src: fields.string("src"),
            dark_src: fields.string("darkSrc"),
            children,
        }),
        Kind::Format => Node::Format(Format {
            id,
            style: fields.string("style"),
            color: fields.string("color"),
            children,
        }),
        Kind::Link => Node::Link(Link {
            id,
            href: fields.string("href"),
            children,
        }),
        Kind::Text => Node::Text(Text {
            id,
            value: fields.string("value"),
            children,
        }),
    };

    Ok(node)
}

fn decode_children(object: &Map<String, Value>, path: &str) -> Result<Vec<Node>> {
    match object.get("children") {
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| decode_at(entry, format!("{}/children/{}", path, index)))
            .collect(),
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(other) => {
            debug!(path, found = json_type(other), "non-array children decoded as empty");
            Ok(Vec::new())
        }
    }
}

/// Attribute lookup over `properties` and the record's own fields
struct Fields<'a> {
    properties: Option<&'a Map<String, Value>>,
    record: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> Fields<'a> {
    fn new(record: &'a Map<String, Value>, path: &'a str) -> Self {
        let properties = match record.get("properties") {
            Some(Value::Object(map)) => Some(map),
            Some(Value::Null) | None => None,
            Some(other) => {
                debug!(path, found = json_type(other), "non-object properties ignored");
                None
            }
        };
        Self {
            properties,
            record,
            path,
        }
    }

    /// String value of an attribute; anything that is not a string is absent
    fn string(&self, name: &str) -> Option<String> {
        let value = self
            .properties
            .and_then(|p| p.get(name))
            .or_else(|| self.record.get(name))?;
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => {
                debug!(
                    path = self.path,
                    attribute = name,
                    found = json_type(other),
                    "non-string attribute decoded as absent"
                );
                None
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
