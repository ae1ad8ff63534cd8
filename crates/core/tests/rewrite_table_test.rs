//! Tests for the color-table policy: per-operator injection, closeness
//! matching, own-space encoding, no reversion.

use inkswap_core::{Color, ColorTable, ContentProcessor, RewritePolicy, TableRewrite};
use lopdf::content::{Content, Operation};

fn policy(entries: &[(Color, Color)]) -> RewritePolicy {
    TableRewrite::new(entries.iter().copied().collect::<ColorTable>()).into()
}

fn rewrite(content: &[u8], policy: &mut RewritePolicy) -> Vec<u8> {
    ContentProcessor::new()
        .process(content, policy)
        .expect("rewrite")
}

fn decode(content: &[u8]) -> Vec<Operation> {
    Content::decode(content).expect("decode").operations
}

fn encode(operations: Vec<Operation>) -> Vec<u8> {
    Content { operations }.encode().expect("encode")
}

// ============================================================================
// Per-operator injection
// ============================================================================

#[test]
fn test_one_injection_before_each_text_operator_of_a_run() {
    let stream = b"1 0 0 rg (A) Tj (B) Tj (C) Tj";
    let replacement = Color::Gray(0.25);
    let mut policy = policy(&[(Color::Rgb(1.0, 0.0, 0.0), replacement)]);

    let output = rewrite(stream, &mut policy);

    // Three text-showing operators, three injections, one before each.
    let mut expected = decode(stream);
    expected.insert(1, replacement.to_operation());
    expected.insert(3, replacement.to_operation());
    expected.insert(5, replacement.to_operation());
    assert_eq!(output, encode(expected));
}

#[test]
fn test_non_text_operators_get_no_injection() {
    let stream = b"1 0 0 rg 0 0 10 10 re f (A) Tj";
    let replacement = Color::Gray(0.25);
    let mut policy = policy(&[(Color::Rgb(1.0, 0.0, 0.0), replacement)]);

    let output = rewrite(stream, &mut policy);

    // Fill matches throughout, but re/f are not text-showing.
    let mut expected = decode(stream);
    expected.insert(3, replacement.to_operation());
    assert_eq!(output, encode(expected));
}

#[test]
fn test_no_reversion_is_ever_emitted() {
    let stream = b"1 0 0 rg (A) Tj 0.5 g (B) Tj";
    let replacement = Color::Gray(0.25);
    let mut policy = policy(&[(Color::Rgb(1.0, 0.0, 0.0), replacement)]);

    let output = rewrite(stream, &mut policy);

    // After 0.5 g the fill no longer matches; the stream's own color
    // change is trusted, nothing is restored.
    let mut expected = decode(stream);
    expected.insert(1, replacement.to_operation());
    assert_eq!(output, encode(expected));
}

// ============================================================================
// Closeness matching
// ============================================================================

#[test]
fn test_fill_within_tolerance_matches() {
    let stream = b"0.004 g (A) Tj";
    let replacement = Color::Gray(1.0);
    let mut policy = policy(&[(Color::Gray(0.0), replacement)]);

    let output = rewrite(stream, &mut policy);

    let mut expected = decode(stream);
    expected.insert(1, replacement.to_operation());
    assert_eq!(output, encode(expected));
}

#[test]
fn test_fill_beyond_tolerance_passes_through() {
    let stream = b"0.0051 g (A) Tj";
    let mut policy = policy(&[(Color::Gray(0.0), Color::Gray(1.0))]);

    let output = rewrite(stream, &mut policy);
    assert_eq!(output, encode(decode(stream)));
}

#[test]
fn test_unknown_fill_color_never_matches() {
    let stream = b"/P1 scn (A) Tj";
    let mut policy = policy(&[(Color::Gray(0.0), Color::Gray(1.0))]);

    let output = rewrite(stream, &mut policy);
    assert_eq!(output, encode(decode(stream)));
}

#[test]
fn test_first_table_entry_wins_on_tie() {
    // Both entries are within tolerance of the observed fill; the one
    // inserted first decides.
    let stream = b"0.5 g (A) Tj";
    let first = Color::Gray(0.25);
    let second = Color::Gray(0.75);
    let mut policy = policy(&[
        (Color::Gray(0.5), first),
        (Color::Gray(0.502), second),
    ]);

    let output = rewrite(stream, &mut policy);

    let mut expected = decode(stream);
    expected.insert(1, first.to_operation());
    assert_eq!(output, encode(expected));
}

// ============================================================================
// Replacement encoding
// ============================================================================

#[test]
fn test_replacement_keeps_its_own_color_space() {
    // A CMYK replacement is injected through k, not forced to rg.
    let stream = b"0.5 g (A) Tj";
    let replacement = Color::Cmyk(0.0, 0.0, 0.0, 1.0);
    let mut policy = policy(&[(Color::Gray(0.5), replacement)]);

    let output = rewrite(stream, &mut policy);

    let operations = decode(&output);
    assert_eq!(operations[1].operator, "k");
    assert_eq!(operations[1].operands.len(), 4);

    let mut expected = decode(stream);
    expected.insert(1, replacement.to_operation());
    assert_eq!(output, encode(expected));
}

#[test]
fn test_multiple_targets_replaced_independently() {
    let stream = b"1 0 0 rg (A) Tj 0 1 0 rg (B) Tj";
    let red_replacement = Color::Rgb(0.5, 0.1, 0.1);
    let green_replacement = Color::Rgb(0.0, 0.0, 0.5);
    let mut policy = policy(&[
        (Color::Rgb(1.0, 0.0, 0.0), red_replacement),
        (Color::Rgb(0.0, 1.0, 0.0), green_replacement),
    ]);

    let output = rewrite(stream, &mut policy);

    let mut expected = decode(stream);
    expected.insert(1, red_replacement.to_operation());
    expected.insert(4, green_replacement.to_operation());
    assert_eq!(output, encode(expected));
}
