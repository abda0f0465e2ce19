//! Type derivation for fused records.

use crate::record::Record;

/// Primary type of a head contributor.
///
/// A Normal/Flying creature contributes Flying: its Normal typing is
/// conventionally dropped when it heads a fusion.
pub fn head_type(head: &Record) -> &str {
    if head.type1().trim().eq_ignore_ascii_case("Normal")
        && head.type2().trim().eq_ignore_ascii_case("Flying")
    {
        head.type2()
    } else {
        head.type1()
    }
}

/// Derive `(Type 1, Type 2)` of a fusion.
///
/// Type 2 comes from the body's secondary type, falling back to the body's
/// primary type when the secondary is empty or repeats Type 1. A result with
/// two equal types keeps only the first.
pub fn derive_types(head: &Record, body: &Record) -> (String, String) {
    let primary = head_type(head).trim();

    let mut secondary = body.type2().trim();
    if secondary.is_empty() || secondary.eq_ignore_ascii_case(primary) {
        secondary = body.type1().trim();
    }
    if secondary.eq_ignore_ascii_case(primary) {
        secondary = "";
    }

    (primary.to_string(), secondary.to_string())
}
