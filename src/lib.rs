//! # cssom_write
//!
//! CSSOM string and identifier serialization for Rust.
//!
//! ## What is this?
//!
//! When generating CSS, two kinds of text need escaping: quoted string
//! values (`content: "..."`, `url("...")`) and bare identifiers (property
//! names, keywords, `--custom-properties`). This crate implements the two
//! deterministic algorithms the CSSOM specification defines for them —
//! "serialize a string" and "serialize an identifier" — plus the thin typed
//! value layer that composes them into `url(...)`, `--name`, `var(...)`, and
//! base64 `data:` URLs.
//!
//! ## Key Features
//!
//! - **Spec-exact escaping**: control characters become `\<hex> ` escapes,
//!   NUL becomes U+FFFD, leading digits and lone hyphens in identifiers are
//!   escaped so tokens never re-scan ambiguously
//! - **Total**: every input string has exactly one output; nothing fails,
//!   nothing is rejected
//! - **Pure**: no state, no I/O; safe to call from any thread
//! - **Typed values**: [`CssString`], [`CssUrl`], [`CssIdent`],
//!   [`CustomIdent`], [`CustomPropertyName`], and [`DataUrl`] keep raw text
//!   and serialized text from being confused, with serde support
//!
//! ## Quick Start
//!
//! ```rust
//! use cssom_write::{serialize_identifier, serialize_string};
//!
//! // Strings are double-quoted, with quotes and backslashes escaped.
//! assert_eq!(serialize_string("Say \"Hi\""), "\"Say \\\"Hi\\\"\"");
//! assert_eq!(serialize_string("Line 1\nLine 2"), "\"Line 1\\a Line 2\"");
//!
//! // Identifiers stay bare; only ambiguous characters are escaped.
//! assert_eq!(serialize_identifier("my-color"), "my-color");
//! assert_eq!(serialize_identifier("3d"), "\\33 d");
//! assert_eq!(serialize_identifier("-"), "\\-");
//! ```
//!
//! ### Typed values
//!
//! ```rust
//! use cssom_write::{CssUrl, CustomPropertyName, DataUrl};
//!
//! let url = CssUrl::new("images/bg (1).png");
//! assert_eq!(url.css_text(), "url(\"images/bg (1).png\")");
//!
//! let name = CustomPropertyName::new("--main-bg");
//! assert_eq!(name.var_with_fallback("white"), "var(--main-bg, white)");
//!
//! let inline = DataUrl::new("image/png", b"abc".to_vec());
//! assert_eq!(inline.css_text(), "url(\"data:image/png;base64,YWJj\")");
//! ```
//!
//! ## Conformance
//!
//! The escaping rules follow the CSSOM "common serializing idioms"
//! (<https://drafts.csswg.org/cssom/#common-serializing-idioms>); the
//! [`spec`] module documents them in full. Output quoting is fixed to double
//! quotes — the specification leaves no room for a quote-style option, and
//! this crate does not add one.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API
//! - Inputs are processed as Unicode scalar values, never as raw bytes

pub mod ser;
pub mod spec;
pub mod value;

pub use ser::{serialize_identifier, serialize_string, write_identifier, write_string};
pub use value::{CssIdent, CssString, CssUrl, CustomIdent, CustomPropertyName, DataUrl};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_exports() {
        assert_eq!(serialize_string("x"), "\"x\"");
        assert_eq!(serialize_identifier("x"), "x");

        let mut buf = String::new();
        write_string(&mut buf, "x");
        write_identifier(&mut buf, "y");
        assert_eq!(buf, "\"x\"y");
    }

    #[test]
    fn test_wrapper_smoke() {
        assert_eq!(CssString::new("x").css_text(), "\"x\"");
        assert_eq!(CssUrl::new("x").css_text(), "url(\"x\")");
        assert_eq!(CssIdent::new("x").css_text(), "x");
        assert_eq!(CustomIdent::new("x").css_text(), "x");
        assert_eq!(CustomPropertyName::new("x").css_text(), "--x");
        assert_eq!(
            DataUrl::new("text/plain", b"hi".to_vec()).css_text(),
            "url(\"data:text/plain;base64,aGk=\")"
        );
    }
}
