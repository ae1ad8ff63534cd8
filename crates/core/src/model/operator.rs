//! Classification of content-stream operator tokens.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Operators that paint or position glyphs or set text-rendering state.
///
/// Membership in this set is the sole predicate the rewrite policies use
/// to distinguish text runs from everything else in the stream.
pub const TEXT_SHOWING_OPERATORS: [&str; 17] = [
    "Tj", "'", "\"", "TJ", "Tf", "Td", "TD", "Tm", "T*", "Tw", "Tc", "Tz", "TL", "Ts", "BT", "ET",
    "Tr",
];

static TEXT_SHOWING: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| TEXT_SHOWING_OPERATORS.iter().copied().collect());

/// Whether `operator` is one of the text-showing tokens.
pub fn is_text_showing(operator: &str) -> bool {
    TEXT_SHOWING.contains(operator)
}
