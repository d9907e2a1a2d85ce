//! Permissive JSON-to-tree parser for rich-text payloads.
//!
//! Decoding is strict (the payload must be well-formed JSON); shape coercion
//! is deliberately loose. Unknown tags, wrong value types, and missing fields
//! all degrade to `Unknown` nodes or defaults rather than errors, so any
//! well-formed payload yields a tree. The only post-decode failure is the
//! nesting-depth limit.

use serde_json::Value;

use crate::ast::{
    BulletList, Document, Heading, Inline, ListItem, Mark, Node, Paragraph, TextRun, TextStyle,
};
use crate::error::ParseError;

/// Maximum block-nesting depth accepted by the parser.
///
/// Input nested deeper than this fails with
/// [`ParseErrorKind::DepthExceeded`](crate::error::ParseErrorKind), bounding
/// recursion on pathological payloads.
pub const MAX_DEPTH: usize = 64;

/// Parse a raw JSON payload into a node tree.
///
/// Returns `Err` only when the input is not well-formed JSON or nests deeper
/// than [`MAX_DEPTH`]. Everything else (unknown tags, missing fields, wrong
/// value types) parses into `Unknown` nodes or defaults.
#[inline]
pub fn parse(input: &str) -> Result<Node, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    parse_value(&value)
}

/// Parse an already-decoded JSON value into a node tree.
///
/// Same coercion rules as [`parse`]; only the depth limit can fail.
#[inline]
pub fn parse_value(value: &Value) -> Result<Node, ParseError> {
    block_node(value, 0)
}

/// Coerce one JSON value into a block node.
fn block_node(value: &Value, depth: usize) -> Result<Node, ParseError> {
    if depth > MAX_DEPTH {
        return Err(ParseError::depth_exceeded(MAX_DEPTH));
    }

    let Some(object) = value.as_object() else {
        return Ok(Node::Unknown);
    };

    let node = match object.get("type").and_then(Value::as_str) {
        Some("doc") => Node::Document(Document {
            children: block_children(value, depth)?,
        }),
        Some("heading") => Node::Heading(Heading {
            level: heading_level(value),
            children: inline_children(value),
        }),
        Some("paragraph") => Node::Paragraph(Paragraph {
            children: inline_children(value),
        }),
        Some("bulletList") => Node::BulletList(BulletList {
            items: list_items(value, depth)?,
        }),
        Some("listItem") => Node::ListItem(ListItem {
            children: block_children(value, depth)?,
        }),
        _ => Node::Unknown,
    };

    Ok(node)
}

/// Parse a node's `content` array as block children.
///
/// Absent or non-array `content` is an empty sequence, never an error.
fn block_children(value: &Value, depth: usize) -> Result<Vec<Node>, ParseError> {
    content(value)
        .iter()
        .map(|child| block_node(child, depth + 1))
        .collect()
}

/// Parse a `bulletList`'s `content` array as list items.
///
/// Every child becomes an item; its own `type` tag is not consulted.
fn list_items(value: &Value, depth: usize) -> Result<Vec<ListItem>, ParseError> {
    content(value)
        .iter()
        .map(|item| {
            Ok(ListItem {
                children: block_children(item, depth + 1)?,
            })
        })
        .collect()
}

/// Parse a node's `content` array as inline children.
fn inline_children(value: &Value) -> Vec<Inline> {
    content(value).iter().map(inline_node).collect()
}

/// Coerce one JSON value into an inline node. Only `text` tags are runs.
fn inline_node(value: &Value) -> Inline {
    if value.get("type").and_then(Value::as_str) != Some("text") {
        return Inline::Unknown;
    }

    let text = value
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let marks = value
        .get("marks")
        .and_then(Value::as_array)
        .map(|marks| marks.iter().map(mark).collect())
        .unwrap_or_default();

    Inline::Run(TextRun { text, marks })
}

/// Coerce one JSON value into a mark.
///
/// A `textStyle` mark without a string `attrs.color` does not match the wire
/// shape and is treated as unrecognized.
fn mark(value: &Value) -> Mark {
    match value.get("type").and_then(Value::as_str) {
        Some("bold") => Mark::Bold,
        Some("textStyle") => match value
            .get("attrs")
            .and_then(|attrs| attrs.get("color"))
            .and_then(Value::as_str)
        {
            Some(color) => Mark::TextStyle(TextStyle {
                color: color.to_string(),
            }),
            None => Mark::Unknown,
        },
        _ => Mark::Unknown,
    }
}

/// Extract `attrs.level`, defaulting anything outside 1-6 to level 1.
#[inline]
fn heading_level(value: &Value) -> u8 {
    match value
        .get("attrs")
        .and_then(|attrs| attrs.get("level"))
        .and_then(Value::as_i64)
    {
        Some(level @ 1..=6) => level as u8,
        _ => 1,
    }
}

/// A node's `content` array, or empty when absent or not an array.
#[inline]
fn content(value: &Value) -> &[Value] {
    value
        .get("content")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
