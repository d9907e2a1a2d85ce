use std::fmt;

/// Error kinds for categorizing parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is not well-formed JSON
    InvalidJson,
    /// Block nesting exceeds the parser's depth limit
    DepthExceeded,
}

/// A parse error with source location information.
///
/// This is the only failure the parser reports. Semantically surprising but
/// well-formed input (unknown tags, wrong value types, missing fields) is
/// absorbed into `Unknown` nodes instead, so a `ParseError` always means the
/// payload could not be decoded at all or nests beyond the depth limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message, including the location when known
    pub message: String,
    /// One-based line where decoding failed (0 when not applicable)
    pub line: usize,
    /// One-based column where decoding failed (0 when not applicable)
    pub column: usize,
    /// Error categorization
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create an error for input that is not well-formed JSON.
    pub fn invalid_json(source: &serde_json::Error) -> Self {
        Self {
            message: source.to_string(),
            line: source.line(),
            column: source.column(),
            kind: ParseErrorKind::InvalidJson,
        }
    }

    /// Create an error for block nesting beyond the depth limit.
    pub fn depth_exceeded(limit: usize) -> Self {
        Self {
            message: format!("document nesting exceeds {} levels", limit),
            line: 0,
            column: 0,
            kind: ParseErrorKind::DepthExceeded,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // serde_json messages already carry "at line L column C"
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        Self::invalid_json(&source)
    }
}
