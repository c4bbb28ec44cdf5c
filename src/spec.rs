//! Serialization rules implemented by this crate.
//!
//! This module documents the escaping rules as implemented here; the
//! normative sources are the CSSOM specification's "Common serializing
//! idioms" (<https://drafts.csswg.org/cssom/#common-serializing-idioms>) and
//! the token grammar of CSS Syntax Level 3
//! (<https://drafts.csswg.org/css-syntax-3/>).
//!
//! # Code-point escapes
//!
//! A code-point escape renders one Unicode scalar value as:
//!
//! ```text
//! \<hex digits><space>
//! ```
//!
//! - hex digits are lowercase and minimal (no leading zeros)
//! - the trailing space is part of the escape; it terminates the hex run so a
//!   following hex digit or real space in the input cannot be misread as part
//!   of the escape
//!
//! Examples: U+000A → `\a `, U+001F → `\1f `, U+007F → `\7f `.
//!
//! # Strings
//!
//! A string serializes as a double-quoted literal. Per character, the first
//! matching rule applies:
//!
//! | Input | Output |
//! |-------|--------|
//! | U+0000 NUL | U+FFFD REPLACEMENT CHARACTER |
//! | U+0001..U+001F, U+007F | code-point escape |
//! | `"` | `\"` |
//! | `\` | `\\` |
//! | anything else | unchanged |
//!
//! The single quote `'` is never escaped: it cannot terminate a double-quoted
//! literal. Output quoting is fixed to double quotes; there is deliberately
//! no quote-style option.
//!
//! **Examples**:
//! ```text
//! Say "Hi"        →  "Say \"Hi\""
//! C:\path         →  "C:\\path"
//! Line 1␊Line 2   →  "Line 1\a Line 2"
//! ```
//!
//! # Identifiers
//!
//! An identifier serializes as a bare token. The empty string serializes to
//! the empty string. Per character, with its zero-based position, the first
//! matching rule applies:
//!
//! 1. U+0000 NUL → U+FFFD
//! 2. U+0001..U+001F or U+007F → code-point escape
//! 3. digit at position 0 → code-point escape (would start a number token)
//! 4. digit at position 1 after a leading `-` → code-point escape (same
//!    ambiguity one position later; the hyphen stays literal)
//! 5. `-` as the entire input → `\-` (a lone hyphen is not a valid ident)
//! 6. ASCII alphanumeric, `-`, `_`, or any scalar ≥ U+0080 → unchanged
//! 7. anything else → `\` + the character
//!
//! **Examples**:
//! ```text
//! my-color  →  my-color
//! 3d        →  \33 d
//! -1x       →  -\31 x
//! -         →  \-
//! hi.there  →  hi\.there
//! ```
//!
//! # Composed value forms
//!
//! The typed wrappers concatenate literal fragments around the two
//! algorithms; nothing else is escaped:
//!
//! | Value | CSS text |
//! |-------|----------|
//! | string | `serialize_string(value)` |
//! | URL | `url(` + `serialize_string(value)` + `)` |
//! | identifier, custom ident | `serialize_identifier(value)` |
//! | custom property name | `--` + `serialize_identifier(name)` |
//! | variable reference | `var(` + name text + `)` |
//! | variable reference with fallback | `var(` + name text + `, ` + fallback verbatim + `)` |
//! | data URL | `url("data:` + media type + `;base64,` + payload + `")` |
//!
//! A custom property name constructed from text that already starts with
//! `--` strips that one prefix on construction, so the serialized form never
//! doubles it.
//!
//! # Totality
//!
//! Both algorithms are total over all `&str` inputs: no input fails, and
//! every input has exactly one output. Inputs are processed as Unicode
//! scalar values, never as bytes, so multi-byte encodings of one scalar are
//! never split and misclassified.
//!
//! # Non-goals
//!
//! Parsing (the inverse direction), Unicode normalization, and semantic
//! validation of identifier names are all out of scope; any string is
//! accepted and transformed.

// This module contains only documentation; no implementation code
