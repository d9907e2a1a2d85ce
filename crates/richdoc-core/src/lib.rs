//! # RichDoc Core
//!
//! A deterministic rich-text document rendering engine.
//!
//! RichDoc turns an untyped, externally-produced JSON tree describing
//! formatted text (headings, paragraphs, bullet lists, styled spans) into a
//! presentation-agnostic sequence of render instructions, with a safe
//! plain-text fallback and explicit handling of malformed input.
//!
//! ## Quick Start
//!
//! ```rust
//! use richdoc_core::{parse, render};
//!
//! let payload = r#"{"type":"doc","content":[
//!     {"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"Title"}]},
//!     {"type":"paragraph","content":[{"type":"text","text":"Body."}]}
//! ]}"#;
//!
//! let doc = parse(payload).unwrap();
//! let instructions = render(Some(&doc));
//!
//! assert_eq!(instructions.len(), 2);
//! ```
//!
//! ## Fallback and Failure
//!
//! Rendering never fails: a missing payload falls back to plain text (or a
//! placeholder), and a malformed payload degrades to a single visible
//! failure block:
//!
//! ```rust
//! use richdoc_core::render_rich_content;
//!
//! // No structured payload: render the fallback text verbatim.
//! let fallback = render_rich_content(None, Some("Just plain text."));
//! assert_eq!(fallback.len(), 1);
//!
//! // Malformed payload: exactly one failure instruction, no error escapes.
//! let failed = render_rich_content(Some("{not json"), None);
//! assert_eq!(failed.len(), 1);
//! ```
//!
//! ## Forward Compatibility
//!
//! Node and mark tags outside the recognized vocabulary parse into a
//! designated `Unknown` variant and render as nothing, so payloads from
//! newer producers degrade gracefully instead of erroring.

pub mod ast;
pub mod error;
pub mod parser;
pub mod render;
pub mod style;

pub use ast::{
    BulletList, Document, Heading, Inline, ListItem, Mark, Node, Paragraph, TextRun, TextStyle,
};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse, parse_value, MAX_DEPTH};
pub use render::{
    render, render_plain_text, render_rich_content, Instruction, ListRow, Spacer, TextBlock,
    TextSpan,
};
pub use style::{BlockStyle, FontWeight, StylePreset};
