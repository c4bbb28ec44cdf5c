//! Property-based tests - pragmatic approach testing the serialization
//! invariants across a wide range of generated inputs.

use cssom_write::{serialize_identifier, serialize_string, CustomPropertyName};
use proptest::prelude::*;

/// Positions of unescaped double quotes in `s`, skipping `\"` and `\\`.
fn unescaped_quote_positions(s: &str) -> Vec<usize> {
    let chars: Vec<char> = s.chars().collect();
    let mut positions = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '"' => {
                positions.push(i);
                i += 1;
            }
            _ => i += 1,
        }
    }
    positions
}

proptest! {
    // Totality: any input serializes without panicking.
    #[test]
    fn prop_string_total(s in any::<String>()) {
        let _ = serialize_string(&s);
    }

    #[test]
    fn prop_identifier_total(s in any::<String>()) {
        let _ = serialize_identifier(&s);
    }

    // The output is wrapped in exactly one pair of double quotes, and no
    // unescaped quote appears between them.
    #[test]
    fn prop_string_quoting_invariant(s in any::<String>()) {
        let out = serialize_string(&s);
        prop_assert!(out.starts_with('"'));
        prop_assert!(out.ends_with('"'));
        prop_assert!(out.chars().count() >= 2);

        let quotes = unescaped_quote_positions(&out);
        let len = out.chars().count();
        prop_assert_eq!(quotes, vec![0, len - 1]);
    }

    // No raw NUL or control character ever survives into the output.
    #[test]
    fn prop_string_no_raw_controls(s in any::<String>()) {
        let out = serialize_string(&s);
        let has_raw_control = out.chars().any(|c| c == '\0' || ('\u{1}'..='\u{1f}').contains(&c) || c == '\u{7f}');
        prop_assert!(!has_raw_control);
    }

    #[test]
    fn prop_identifier_no_raw_controls(s in any::<String>()) {
        let out = serialize_identifier(&s);
        let has_raw_control = out.chars().any(|c| c == '\0' || ('\u{1}'..='\u{1f}').contains(&c) || c == '\u{7f}');
        prop_assert!(!has_raw_control);
    }

    // An identifier never starts with an unescaped digit and is never a
    // bare single hyphen.
    #[test]
    fn prop_identifier_never_leads_with_digit(s in any::<String>()) {
        let out = serialize_identifier(&s);
        prop_assert!(!out.starts_with(|c: char| c.is_ascii_digit()));
        prop_assert_ne!(out, "-".to_string());
    }

    // Safe inputs (letters, then letters/digits/hyphens/underscores) pass
    // through unchanged.
    #[test]
    fn prop_identifier_idempotent_on_safe_input(s in "[a-zA-Z_][a-zA-Z0-9_-]{0,30}") {
        prop_assert_eq!(serialize_identifier(&s), s);
    }

    // Serializing a string of safe characters only adds the quotes.
    #[test]
    fn prop_string_safe_input_only_quoted(s in "[a-zA-Z0-9 .,;!?'()-]{0,40}") {
        prop_assert_eq!(serialize_string(&s), format!("\"{}\"", s));
    }

    // Output growth is bounded: worst case is 6 bytes per scalar value
    // (code-point escape of a control character), plus the two quotes.
    #[test]
    fn prop_string_output_bounded(s in any::<String>()) {
        let out = serialize_string(&s);
        prop_assert!(out.chars().count() <= s.chars().count() * 6 + 2);
    }

    // Constructing with or without the -- prefix serializes identically.
    #[test]
    fn prop_custom_property_prefix_dedup(s in "[a-z][a-z0-9-]{0,20}") {
        let bare = CustomPropertyName::new(s.clone());
        let prefixed = CustomPropertyName::new(format!("--{}", s));
        prop_assert_eq!(bare.css_text(), prefixed.css_text());
    }
}
