//! CSSOM serialization algorithms.
//!
//! This module implements the two character-level algorithms from the CSSOM
//! specification's "Common serializing idioms" section:
//!
//! - [`serialize_string`]: serialize a string as a double-quoted CSS string
//!   literal, escaping quotes, backslashes, and control characters.
//! - [`serialize_identifier`]: serialize a string as a bare CSS identifier,
//!   escaping anything that would make the token ambiguous (leading digits, a
//!   lone hyphen, ASCII punctuation).
//!
//! Both share one leaf primitive, "escape a character as code point", which
//! renders a scalar value as `\` + minimal lowercase hex + one trailing space.
//! The trailing space is mandatory: it terminates the escape so a following
//! hex digit (or a real space) in the input is not consumed by a re-parser.
//!
//! ## Usage
//!
//! ```rust
//! use cssom_write::{serialize_string, serialize_identifier};
//!
//! assert_eq!(serialize_string("Say \"Hi\""), "\"Say \\\"Hi\\\"\"");
//! assert_eq!(serialize_identifier("3d"), "\\33 d");
//! assert_eq!(serialize_identifier("my-color"), "my-color");
//! ```
//!
//! The `write_*` variants push into a caller-supplied buffer, which is what
//! the typed wrappers in [`crate::value`] use to compose `url(...)` and
//! `var(...)` fragments without intermediate allocations.
//!
//! Both algorithms are total: every `&str` input (embedded NULs included) has
//! exactly one well-defined output, and no input fails. They operate on `char`
//! values, never on raw bytes, so multi-byte UTF-8 sequences are classified as
//! whole scalar values.

use std::fmt::Write;

/// Serialize a string as a double-quoted CSS string literal.
///
/// Per the CSSOM "serialize a string" algorithm:
///
/// - NUL becomes U+FFFD REPLACEMENT CHARACTER
/// - control characters (U+0001..U+001F, U+007F) become code-point escapes
/// - `"` and `\` become single-character escapes
/// - everything else, including `'` and non-ASCII, passes through unchanged
///
/// The output always begins and ends with exactly one `"`. The opposite quote
/// character `'` is never escaped: it cannot terminate a double-quoted
/// literal.
///
/// # Examples
///
/// ```rust
/// use cssom_write::serialize_string;
///
/// assert_eq!(serialize_string("hello"), "\"hello\"");
/// assert_eq!(serialize_string("C:\\path"), "\"C:\\\\path\"");
/// assert_eq!(serialize_string("Line 1\nLine 2"), "\"Line 1\\a Line 2\"");
/// assert_eq!(serialize_string(""), "\"\"");
/// ```
#[must_use]
pub fn serialize_string(value: &str) -> String {
    let mut dest = String::with_capacity(value.len() + 2);
    write_string(&mut dest, value);
    dest
}

/// Serialize a string as a double-quoted CSS string literal into `dest`.
///
/// In-place variant of [`serialize_string`].
pub fn write_string(dest: &mut String, value: &str) {
    dest.push('"');
    for c in value.chars() {
        match c {
            '\0' => dest.push('\u{FFFD}'),
            '\u{0001}'..='\u{001F}' | '\u{007F}' => push_code_point_escape(dest, c),
            '"' => dest.push_str("\\\""),
            '\\' => dest.push_str("\\\\"),
            _ => dest.push(c),
        }
    }
    dest.push('"');
}

/// Serialize a string as a bare (unquoted) CSS identifier.
///
/// Per the CSSOM "serialize an identifier" algorithm. Position-sensitive
/// rules keep the token unambiguous when re-scanned:
///
/// - a digit at position 0 is code-point escaped (would start a number)
/// - a digit at position 1 after a leading hyphen is code-point escaped
///   (`-1x` would also start a number; the hyphen itself stays literal)
/// - a lone `-` as the entire input becomes `\-` (not a valid ident alone)
/// - NUL and control characters are handled as in [`serialize_string`]
/// - ASCII letters, digits, `-`, `_`, and anything at or above U+0080 pass
///   through unchanged
/// - remaining ASCII punctuation gets a single-character escape (`\` + char)
///
/// The empty string serializes to the empty string: an identifier cannot be
/// synthesized from zero characters, so the degenerate case passes through
/// rather than failing.
///
/// # Examples
///
/// ```rust
/// use cssom_write::serialize_identifier;
///
/// assert_eq!(serialize_identifier("my-color"), "my-color");
/// assert_eq!(serialize_identifier("3d"), "\\33 d");
/// assert_eq!(serialize_identifier("-1x"), "-\\31 x");
/// assert_eq!(serialize_identifier("-"), "\\-");
/// assert_eq!(serialize_identifier("hi.there"), "hi\\.there");
/// ```
#[must_use]
pub fn serialize_identifier(value: &str) -> String {
    let mut dest = String::with_capacity(value.len());
    write_identifier(&mut dest, value);
    dest
}

/// Serialize a string as a bare CSS identifier into `dest`.
///
/// In-place variant of [`serialize_identifier`].
pub fn write_identifier(dest: &mut String, value: &str) {
    if value.is_empty() {
        return;
    }

    // The hyphen-then-digit rule needs look-back from position 1 to position
    // 0, so materialize the scalar values up front rather than using a
    // forward-only cursor.
    let chars: Vec<char> = value.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\0' => dest.push('\u{FFFD}'),
            '\u{0001}'..='\u{001F}' | '\u{007F}' => push_code_point_escape(dest, c),
            '0'..='9' if i == 0 => push_code_point_escape(dest, c),
            '0'..='9' if i == 1 && chars[0] == '-' => push_code_point_escape(dest, c),
            '-' if chars.len() == 1 => dest.push_str("\\-"),
            _ if is_ident_char(c) => dest.push(c),
            _ => {
                dest.push('\\');
                dest.push(c);
            }
        }
    }
}

/// Escape one scalar value as a code point: `\` + minimal lowercase hex +
/// one trailing space.
#[inline]
fn push_code_point_escape(dest: &mut String, c: char) {
    // Writing to a String never fails.
    let _ = write!(dest, "\\{:x} ", c as u32);
}

/// Whether `c` may appear unescaped in an identifier, position permitting.
///
/// <https://drafts.csswg.org/css-syntax-3/#ident-code-point>, collapsed to
/// the serialization view: ASCII alphanumerics, `-`, `_`, and every scalar
/// value at or above U+0080.
#[inline]
pub(crate) const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c as u32 >= 0x0080
}
