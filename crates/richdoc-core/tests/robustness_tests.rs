//! Robustness tests: hostile, partial, and degenerate payloads.
//!
//! Every input must resolve to a well-defined instruction sequence through
//! the taxonomy: malformed input degrades to one visible failure block,
//! unrecognized shapes are skipped, missing fields default. Nothing panics.

use richdoc_core::style::RENDER_FAILURE_MESSAGE;
use richdoc_core::{
    parse, render, render_rich_content, Instruction, ParseErrorKind, StylePreset, MAX_DEPTH,
};

/// Inputs that are not well-formed JSON.
const MALFORMED: &[&str] = &[
    "{not json",
    "{\"type\":\"doc\"",
    "{\"type\":\"doc\",\"content\":[",
    "[1,2",
    "",
    "   ",
    "{\"type\": }",
    "nul",
    "{\"type\":\"doc\"}trailing",
    "\u{0}\u{1}\u{2}",
];

/// Well-formed JSON with surprising shapes at every position.
const WEIRD_SHAPES: &[&str] = &[
    "null",
    "true",
    "0",
    "-1.5e300",
    "\"just a string\"",
    "[]",
    "[{\"type\":\"doc\"}]",
    "{}",
    "{\"type\":[]}",
    "{\"type\":{}}",
    "{\"type\":\"doc\",\"content\":{}}",
    "{\"type\":\"doc\",\"content\":null}",
    "{\"type\":\"doc\",\"content\":[null,1,\"x\",[]]}",
    "{\"type\":\"paragraph\",\"content\":[{\"type\":\"text\",\"text\":null}]}",
    "{\"type\":\"paragraph\",\"content\":[{\"type\":\"text\",\"text\":42}]}",
    "{\"type\":\"paragraph\",\"content\":[{\"type\":\"text\",\"marks\":\"bold\"}]}",
    "{\"type\":\"paragraph\",\"content\":[{\"type\":\"text\",\"marks\":[null,7,\"x\"]}]}",
    "{\"type\":\"heading\",\"attrs\":null}",
    "{\"type\":\"heading\",\"attrs\":\"big\"}",
    "{\"type\":\"heading\",\"attrs\":{\"level\":null}}",
    "{\"type\":\"bulletList\",\"content\":[null,42]}",
    "{\"type\":\"bulletList\",\"content\":[{\"type\":\"bulletList\"}]}",
    "{\"type\":\"doc\",\"extra\":\"field\",\"content\":[],\"attrs\":{\"ignored\":true}}",
];

#[test]
fn test_malformed_inputs_degrade_to_single_failure_block() {
    for &input in MALFORMED {
        assert!(parse(input).is_err(), "expected parse failure for {:?}", input);

        let instructions = render_rich_content(Some(input), Some("fallback"));
        assert_eq!(instructions.len(), 1, "input: {:?}", input);
        match &instructions[0] {
            Instruction::Text(block) => {
                assert_eq!(block.preset, StylePreset::Error);
                assert_eq!(block.spans[0].text, RENDER_FAILURE_MESSAGE);
            }
            other => panic!("Expected failure block for {:?}, got {:?}", input, other),
        }
    }
}

#[test]
fn test_weird_shapes_parse_and_render_without_error() {
    for &input in WEIRD_SHAPES {
        let root = parse(input)
            .unwrap_or_else(|e| panic!("expected fail-soft parse for {:?}, got {}", input, e));
        // Render must be total; any count is acceptable
        let _ = render(Some(&root));
    }
}

#[test]
fn test_depth_beyond_limit_degrades_like_malformed_input() {
    let deep = wrap_in_docs(r#"{"type":"paragraph"}"#, MAX_DEPTH + 10);
    let err = parse(&deep).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::DepthExceeded);

    let instructions = render_rich_content(Some(&deep), None);
    assert_eq!(instructions.len(), 1);
    match &instructions[0] {
        Instruction::Text(block) => assert_eq!(block.preset, StylePreset::Error),
        other => panic!("Expected failure block, got {:?}", other),
    }
}

#[test]
fn test_nesting_within_limit_renders() {
    let depth = 16;
    let nested = wrap_in_lists(
        r#"{"type":"paragraph","content":[{"type":"text","text":"leaf"}]}"#,
        depth,
    );
    let root = parse(&nested).unwrap();
    let instructions = render(Some(&root));

    // One row per nesting level, single chain down to the leaf
    let mut current = &instructions;
    for _ in 0..depth {
        assert_eq!(current.len(), 1);
        match &current[0] {
            Instruction::ListRow(row) => current = &row.content,
            other => panic!("Expected list row, got {:?}", other),
        }
    }
    assert_eq!(current.len(), 1);
    assert!(matches!(&current[0], Instruction::Text(_)));
}

#[test]
fn test_render_is_idempotent() {
    let payload = r#"{"type":"doc","content":[
        {"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"T"}]},
        {"type":"paragraph","content":[]},
        {"type":"bulletList","content":[{"type":"listItem","content":[
            {"type":"paragraph","content":[{"type":"text","text":"x","marks":[{"type":"bold"}]}]}
        ]}]}
    ]}"#;
    let root = parse(payload).unwrap();
    assert_eq!(render(Some(&root)), render(Some(&root)));
}

#[test]
fn test_parse_is_deterministic() {
    for &input in WEIRD_SHAPES {
        assert_eq!(parse(input), parse(input), "input: {:?}", input);
    }
    assert_eq!(
        render_rich_content(Some(MALFORMED[0]), None),
        render_rich_content(Some(MALFORMED[0]), None)
    );
}

#[test]
fn test_unicode_text_passes_through() {
    let payload = "{\"type\":\"paragraph\",\"content\":[{\"type\":\"text\",\"text\":\"h\u{e9}llo \u{4e16}\u{754c} \u{1f680}\"}]}";
    let instructions = render(Some(&parse(payload).unwrap()));
    match &instructions[0] {
        Instruction::Text(block) => {
            assert_eq!(block.spans[0].text, "h\u{e9}llo \u{4e16}\u{754c} \u{1f680}")
        }
        other => panic!("Expected text block, got {:?}", other),
    }
}

#[test]
fn test_large_flat_document() {
    let paragraph = r#"{"type":"paragraph","content":[{"type":"text","text":"body"}]}"#;
    let blocks: Vec<&str> = std::iter::repeat(paragraph).take(1000).collect();
    let payload = format!(r#"{{"type":"doc","content":[{}]}}"#, blocks.join(","));

    let root = parse(&payload).unwrap();
    let instructions = render(Some(&root));
    assert_eq!(instructions.len(), 1000);
}

fn wrap_in_docs(leaf: &str, levels: usize) -> String {
    let mut payload = leaf.to_string();
    for _ in 0..levels {
        payload = format!(r#"{{"type":"doc","content":[{}]}}"#, payload);
    }
    payload
}

fn wrap_in_lists(leaf: &str, levels: usize) -> String {
    let mut payload = leaf.to_string();
    for _ in 0..levels {
        payload = format!(
            r#"{{"type":"bulletList","content":[{{"type":"listItem","content":[{}]}}]}}"#,
            payload
        );
    }
    payload
}
