//! Node and mark types for parsed rich-text documents.
//!
//! This module contains the typed tree produced by the parser.
//! The model is designed to be:
//!
//! - **Closed**: a fixed vocabulary of block and inline tags, with one
//!   designated `Unknown` variant absorbing everything else
//! - **Total**: every field the wire format may omit has a defined default,
//!   so a tree can always be built from any well-formed JSON value
//! - **Immutable**: the renderer walks the tree, it never mutates it

/// Block-level AST nodes.
///
/// Blocks are the structural elements of a document. Tags outside the
/// recognized vocabulary (`doc`, `heading`, `paragraph`, `bulletList`,
/// `listItem`) map to [`Node::Unknown`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Root container (`doc`).
    Document(Document),
    /// Section heading (levels 1-6).
    Heading(Heading),
    /// Text paragraph with styled runs.
    Paragraph(Paragraph),
    /// Unordered list of items.
    BulletList(BulletList),
    /// A list item outside any list (defensive; normally items live
    /// inside [`BulletList::items`]).
    ListItem(ListItem),
    /// Unrecognized node tag. Carries no semantics and renders nothing,
    /// but never aborts a tree walk.
    Unknown,
}

/// Root document container.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Child blocks in source order.
    pub children: Vec<Node>,
}

/// Section heading with level and inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// Heading level. Always 1-6: the parser defaults missing,
    /// non-integer, or out-of-range levels to 1.
    pub level: u8,
    /// Inline content in source order.
    pub children: Vec<Inline>,
}

/// Text paragraph containing inline runs.
///
/// A paragraph with no children is meaningful: it renders as a fixed-height
/// spacer (a blank line), not as an empty text block.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// Inline content in source order.
    pub children: Vec<Inline>,
}

/// Unordered (bulleted) list.
#[derive(Debug, Clone, PartialEq)]
pub struct BulletList {
    /// List items in source order.
    pub items: Vec<ListItem>,
}

/// A single list item (may contain nested blocks, including nested lists).
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Content blocks within the item.
    pub children: Vec<Node>,
}

/// Inline-level nodes (children of headings and paragraphs).
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// A styled text run (`text` tag).
    Run(TextRun),
    /// A child whose tag is not `text`. Renders nothing, but still counts
    /// as a child: a paragraph holding only unknown inlines is not empty.
    Unknown,
}

/// A run of text with zero or more style marks.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The text content. Missing or non-string `text` defaults to `""`;
    /// an empty run still contributes a zero-length span when rendered.
    pub text: String,
    /// Marks in source order. Duplicates are allowed and idempotent.
    pub marks: Vec<Mark>,
}

/// An inline style annotation attached to a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Bold weight (`bold`). A second `Bold` on the same run has no
    /// additional effect.
    Bold,
    /// Foreground color override (`textStyle`). When a run carries several,
    /// the last one in source order wins.
    TextStyle(TextStyle),
    /// Unrecognized or malformed mark. Ignored.
    Unknown,
}

/// Attributes of a `textStyle` mark.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Raw color token, passed through unvalidated.
    pub color: String,
}
