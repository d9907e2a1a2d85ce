//! Style resolution policy.
//!
//! A fixed, deterministic preset table maps every block kind to concrete
//! style values. Presentation layers translate these into whatever their
//! surface understands; nothing here depends on a UI toolkit.

use serde::Serialize;

/// Marker glyph paired with each list row.
pub const BULLET: char = '●';

/// Height of the spacer emitted for an empty paragraph.
pub const SPACER_HEIGHT: f32 = 16.0;

/// Placeholder shown when neither structured nor plain content exists.
pub const NO_CONTENT_MESSAGE: &str = "No content available";

/// Fixed message shown when a payload cannot be decoded. Deliberately free
/// of parser detail.
pub const RENDER_FAILURE_MESSAGE: &str = "Failed to render content";

/// Foreground color token of the failure block.
pub const ERROR_COLOR: &str = "#ef4444";

/// Font weight of a block preset or resolved text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    Normal,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// CSS-compatible numeric weight.
    #[inline]
    pub const fn value(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// The fixed vocabulary of block style presets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum StylePreset {
    /// One of the six heading presets; size and weight shrink as the level
    /// grows.
    Heading { level: u8 },
    /// Body paragraph text.
    Paragraph,
    /// Verbatim fallback text. The presentation layer should place this in
    /// a scrollable container.
    PlainText,
    /// Italicized "no content" notice.
    Placeholder,
    /// Error-colored failure notice.
    Error,
}

/// Concrete style values a preset resolves to.
///
/// Sizes and margins are logical pixels; `color` is `None` when the block
/// inherits the surrounding theme's foreground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockStyle {
    pub size: f32,
    pub line_height: f32,
    pub weight: FontWeight,
    pub italic: bool,
    pub color: Option<&'static str>,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl BlockStyle {
    const fn plain(size: f32, line_height: f32) -> Self {
        Self {
            size,
            line_height,
            weight: FontWeight::Normal,
            italic: false,
            color: None,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    const fn heading(
        size: f32,
        line_height: f32,
        weight: FontWeight,
        margin_top: f32,
        margin_bottom: f32,
    ) -> Self {
        Self {
            size,
            line_height,
            weight,
            italic: false,
            color: None,
            margin_top,
            margin_bottom,
        }
    }
}

impl StylePreset {
    /// Resolve this preset to concrete style values.
    ///
    /// Total over every input: heading levels outside 1-6 resolve to the
    /// level-1 style (the parser already normalizes them, this keeps the
    /// function defensive).
    pub fn block_style(self) -> BlockStyle {
        match self {
            StylePreset::Heading { level } => heading_style(level),
            StylePreset::Paragraph => BlockStyle {
                margin_bottom: 16.0,
                ..BlockStyle::plain(16.0, 24.0)
            },
            StylePreset::PlainText => BlockStyle::plain(16.0, 24.0),
            StylePreset::Placeholder => BlockStyle {
                italic: true,
                ..BlockStyle::plain(16.0, 24.0)
            },
            StylePreset::Error => BlockStyle {
                color: Some(ERROR_COLOR),
                ..BlockStyle::plain(16.0, 24.0)
            },
        }
    }
}

fn heading_style(level: u8) -> BlockStyle {
    match level {
        2 => BlockStyle::heading(24.0, 32.0, FontWeight::Bold, 20.0, 12.0),
        3 => BlockStyle::heading(20.0, 28.0, FontWeight::SemiBold, 16.0, 12.0),
        4 => BlockStyle::heading(18.0, 28.0, FontWeight::SemiBold, 12.0, 8.0),
        5 => BlockStyle::heading(16.0, 24.0, FontWeight::SemiBold, 12.0, 8.0),
        6 => BlockStyle::heading(14.0, 20.0, FontWeight::SemiBold, 12.0, 8.0),
        _ => BlockStyle::heading(30.0, 36.0, FontWeight::Bold, 24.0, 16.0),
    }
}
