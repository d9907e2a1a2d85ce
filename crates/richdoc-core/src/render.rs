//! Tree renderer: node trees to render instruction sequences.
//!
//! The renderer is a pure, total function. Every input, including absent,
//! degenerate, and malformed content, maps to some well-defined instruction
//! sequence; no path panics or returns an error to the caller. Instructions
//! preserve the left-to-right, top-to-bottom order of the source exactly.

use serde::Serialize;

use crate::ast::{Inline, ListItem, Mark, Node, TextRun};
use crate::parser::parse;
use crate::style::{
    FontWeight, StylePreset, BULLET, NO_CONTENT_MESSAGE, RENDER_FAILURE_MESSAGE, SPACER_HEIGHT,
};

/// One presentation-agnostic unit of render output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Instruction {
    /// A styled block of text spans.
    Text(TextBlock),
    /// A fixed-height vertical gap (an empty paragraph's blank line).
    Spacer(Spacer),
    /// A bullet marker paired with nested content.
    ListRow(ListRow),
}

/// A block of text rendered under one style preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub preset: StylePreset,
    /// Resolved spans in source order. May be empty: a heading with no text
    /// children still emits its (empty) block.
    pub spans: Vec<TextSpan>,
}

/// A fixed-height vertical gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spacer {
    pub height: f32,
}

/// A list row: marker glyph plus the item's rendered content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRow {
    pub marker: char,
    pub content: Vec<Instruction>,
}

/// One text run with its marks resolved against the base style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSpan {
    /// May be empty; zero-length spans are kept to preserve spacing
    /// semantics between adjacent runs.
    pub text: String,
    pub weight: FontWeight,
    /// Raw color token from a `textStyle` mark, passed through unvalidated.
    /// `None` inherits the block's foreground. Applies to this run only.
    pub color: Option<String>,
}

/// Render a parsed tree into an instruction sequence.
///
/// `None` renders to an empty sequence.
pub fn render(root: Option<&Node>) -> Vec<Instruction> {
    match root {
        Some(node) => render_node(node),
        None => Vec::new(),
    }
}

/// Render the plain-text fallback.
///
/// Absent or empty text yields exactly one placeholder block; otherwise one
/// verbatim plain-text block.
pub fn render_plain_text(text: Option<&str>) -> Vec<Instruction> {
    match text {
        Some(text) if !text.is_empty() => vec![Instruction::Text(TextBlock {
            preset: StylePreset::PlainText,
            spans: vec![plain_span(text)],
        })],
        _ => vec![Instruction::Text(TextBlock {
            preset: StylePreset::Placeholder,
            spans: vec![plain_span(NO_CONTENT_MESSAGE)],
        })],
    }
}

/// Consumer entry point: structured rendering with plain-text fallback.
///
/// A non-empty `json` payload is parsed and rendered; a payload that fails
/// to parse degrades to exactly one failure block, with parser detail kept
/// out of the output. Without a payload the fallback text path applies.
pub fn render_rich_content(json: Option<&str>, fallback: Option<&str>) -> Vec<Instruction> {
    match json {
        Some(raw) if !raw.is_empty() => match parse(raw) {
            Ok(root) => render(Some(&root)),
            Err(_) => vec![Instruction::Text(TextBlock {
                preset: StylePreset::Error,
                spans: vec![plain_span(RENDER_FAILURE_MESSAGE)],
            })],
        },
        _ => render_plain_text(fallback),
    }
}

/// Depth-first, pre-order walk of one node.
fn render_node(node: &Node) -> Vec<Instruction> {
    match node {
        Node::Document(doc) => render_nodes(&doc.children),
        Node::Heading(heading) => vec![Instruction::Text(TextBlock {
            preset: StylePreset::Heading {
                level: heading.level,
            },
            spans: resolve_runs(&heading.children),
        })],
        Node::Paragraph(paragraph) => {
            if paragraph.children.is_empty() {
                vec![Instruction::Spacer(Spacer {
                    height: SPACER_HEIGHT,
                })]
            } else {
                vec![Instruction::Text(TextBlock {
                    preset: StylePreset::Paragraph,
                    spans: resolve_runs(&paragraph.children),
                })]
            }
        }
        Node::BulletList(list) => list.items.iter().map(render_list_item).collect(),
        // A stray item outside a list renders like a document
        Node::ListItem(item) => render_nodes(&item.children),
        Node::Unknown => Vec::new(),
    }
}

fn render_nodes(nodes: &[Node]) -> Vec<Instruction> {
    nodes.iter().flat_map(render_node).collect()
}

fn render_list_item(item: &ListItem) -> Instruction {
    Instruction::ListRow(ListRow {
        marker: BULLET,
        content: render_nodes(&item.children),
    })
}

/// Resolve a block's inline children to spans. Unknown inlines render
/// nothing; empty runs stay.
fn resolve_runs(children: &[Inline]) -> Vec<TextSpan> {
    children
        .iter()
        .filter_map(|inline| match inline {
            Inline::Run(run) => Some(resolve_marks(run)),
            Inline::Unknown => None,
        })
        .collect()
}

/// Apply a run's marks to the base style.
///
/// Marks compose additively except color, where the last mark wins. A
/// duplicate `Bold` has no additional effect.
fn resolve_marks(run: &TextRun) -> TextSpan {
    let mut weight = FontWeight::Normal;
    let mut color = None;

    for mark in &run.marks {
        match mark {
            Mark::Bold => weight = FontWeight::Bold,
            Mark::TextStyle(style) => color = Some(style.color.clone()),
            Mark::Unknown => {}
        }
    }

    TextSpan {
        text: run.text.clone(),
        weight,
        color,
    }
}

fn plain_span(text: &str) -> TextSpan {
    TextSpan {
        text: text.to_string(),
        weight: FontWeight::Normal,
        color: None,
    }
}
