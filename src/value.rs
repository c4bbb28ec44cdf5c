//! Typed CSS value wrappers.
//!
//! This module provides the thin value layer over the serialization
//! algorithms in [`crate::ser`]. Each wrapper stores the raw, unescaped text
//! and produces its CSS serialization on demand via [`Display`] or the
//! `css_text()` method; the serializers are pure, so recomputing is
//! observably identical to caching.
//!
//! ## Core Types
//!
//! - [`CssString`]: a quoted string value (`"..."`)
//! - [`CssUrl`]: a resource locator (`url("...")`)
//! - [`CssIdent`]: a bare identifier (keywords, property names)
//! - [`CustomIdent`]: an author-defined identifier; semantically distinct
//!   from [`CssIdent`] but serialized identically
//! - [`CustomPropertyName`]: a `--custom-property` name with `var()` helpers
//! - [`DataUrl`]: a builder for base64 `data:` URLs fed through [`CssUrl`]
//!
//! ## Usage
//!
//! ```rust
//! use cssom_write::{CssString, CssUrl, CustomPropertyName};
//!
//! assert_eq!(CssString::new("Say \"Hi\"").to_string(), "\"Say \\\"Hi\\\"\"");
//! assert_eq!(CssUrl::new("a b.png").to_string(), "url(\"a b.png\")");
//!
//! let name = CustomPropertyName::new("main-bg");
//! assert_eq!(name.css_text(), "--main-bg");
//! assert_eq!(name.var(), "var(--main-bg)");
//! ```
//!
//! None of these types validate their input: any string, embedded NULs
//! included, is accepted and transformed at serialization time.

use crate::ser::{write_identifier, write_string};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS string value, serialized as a double-quoted literal.
///
/// # Examples
///
/// ```rust
/// use cssom_write::CssString;
///
/// let s = CssString::new("Line 1\nLine 2");
/// assert_eq!(s.value(), "Line 1\nLine 2");
/// assert_eq!(s.css_text(), "\"Line 1\\a Line 2\"");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssString(String);

impl CssString {
    /// Creates a string value from raw, unescaped text.
    pub fn new(value: impl Into<String>) -> Self {
        CssString(value.into())
    }

    /// Returns the raw, unescaped text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the serialized CSS text, e.g. `"Say \"Hi\""`.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CssString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.0.len() + 2);
        write_string(&mut out, &self.0);
        f.write_str(&out)
    }
}

impl From<&str> for CssString {
    fn from(value: &str) -> Self {
        CssString::new(value)
    }
}

impl From<String> for CssString {
    fn from(value: String) -> Self {
        CssString(value)
    }
}

/// A CSS resource locator, serialized as `url("...")`.
///
/// The inner locator text goes through string serialization, so URLs with
/// spaces, quotes, or parentheses are always safe.
///
/// # Examples
///
/// ```rust
/// use cssom_write::CssUrl;
///
/// let url = CssUrl::new("image (1).png");
/// assert_eq!(url.css_text(), "url(\"image (1).png\")");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssUrl(String);

impl CssUrl {
    /// Creates a resource locator from raw, unescaped locator text.
    pub fn new(value: impl Into<String>) -> Self {
        CssUrl(value.into())
    }

    /// Returns the raw locator text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the serialized CSS text, e.g. `url("a.png")`.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CssUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.0.len() + 7);
        out.push_str("url(");
        write_string(&mut out, &self.0);
        out.push(')');
        f.write_str(&out)
    }
}

/// A bare CSS identifier: keywords, property names, counter names.
///
/// # Examples
///
/// ```rust
/// use cssom_write::CssIdent;
///
/// assert_eq!(CssIdent::new("my-color").css_text(), "my-color");
/// assert_eq!(CssIdent::new("3d").css_text(), "\\33 d");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssIdent(String);

impl CssIdent {
    /// Creates an identifier from raw, unescaped text.
    pub fn new(value: impl Into<String>) -> Self {
        CssIdent(value.into())
    }

    /// Returns the raw identifier text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the serialized CSS text.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CssIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.0.len());
        write_identifier(&mut out, &self.0);
        f.write_str(&out)
    }
}

/// An author-defined identifier (`<custom-ident>`).
///
/// Serialized exactly like [`CssIdent`]; the distinct type records that the
/// value is author-defined rather than a grammar keyword, so the two cannot
/// be mixed up in an API.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomIdent(String);

impl CustomIdent {
    /// Creates a custom identifier from raw, unescaped text.
    pub fn new(value: impl Into<String>) -> Self {
        CustomIdent(value.into())
    }

    /// Returns the raw identifier text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the serialized CSS text.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CustomIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.0.len());
        write_identifier(&mut out, &self.0);
        f.write_str(&out)
    }
}

/// A custom property name, serialized with a `--` prefix.
///
/// The constructor strips one leading `--` if the input already carries it,
/// so `"--main-bg"` and `"main-bg"` name the same property and serialize
/// identically. Only the first occurrence is stripped; the prefix is never
/// duplicated on output.
///
/// # Examples
///
/// ```rust
/// use cssom_write::CustomPropertyName;
///
/// let a = CustomPropertyName::new("--main-bg");
/// let b = CustomPropertyName::new("main-bg");
/// assert_eq!(a, b);
/// assert_eq!(a.css_text(), "--main-bg");
///
/// assert_eq!(a.var(), "var(--main-bg)");
/// assert_eq!(a.var_with_fallback("white"), "var(--main-bg, white)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CustomPropertyName(String);

impl CustomPropertyName {
    /// Creates a custom property name, stripping one leading `--` if present.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix("--") {
            Some(stripped) => CustomPropertyName(stripped.to_string()),
            None => CustomPropertyName(name),
        }
    }

    /// Returns the stored name, without the `--` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the serialized CSS text, e.g. `--main-bg`.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.to_string()
    }

    /// Returns a variable reference, e.g. `var(--main-bg)`.
    #[must_use]
    pub fn var(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 7);
        out.push_str("var(--");
        write_identifier(&mut out, &self.0);
        out.push(')');
        out
    }

    /// Returns a variable reference with a fallback, e.g.
    /// `var(--main-bg, white)`.
    ///
    /// The fallback is inserted verbatim: it is an arbitrary CSS value, not
    /// text to be escaped, so callers are responsible for its validity.
    #[must_use]
    pub fn var_with_fallback(&self, fallback: &str) -> String {
        let mut out = String::with_capacity(self.0.len() + fallback.len() + 9);
        out.push_str("var(--");
        write_identifier(&mut out, &self.0);
        out.push_str(", ");
        out.push_str(fallback);
        out.push(')');
        out
    }
}

impl fmt::Display for CustomPropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.0.len() + 2);
        out.push_str("--");
        write_identifier(&mut out, &self.0);
        f.write_str(&out)
    }
}

impl From<String> for CustomPropertyName {
    fn from(name: String) -> Self {
        CustomPropertyName::new(name)
    }
}

impl From<CustomPropertyName> for String {
    fn from(name: CustomPropertyName) -> Self {
        name.0
    }
}

/// A builder for base64 `data:` URLs.
///
/// Produces the raw locator text `data:<media type>;base64,<payload>` and
/// feeds it through [`CssUrl`], so the final CSS text is
/// `url("data:...;base64,...")`.
///
/// # Examples
///
/// ```rust
/// use cssom_write::DataUrl;
///
/// let url = DataUrl::new("image/png", b"abc".to_vec()).to_url();
/// assert_eq!(url.css_text(), "url(\"data:image/png;base64,YWJj\")");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataUrl {
    media_type: String,
    data: Vec<u8>,
}

impl DataUrl {
    /// Creates a data URL builder from a media type and a binary payload.
    ///
    /// The media type is taken verbatim; it is not validated.
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        DataUrl {
            media_type: media_type.into(),
            data,
        }
    }

    /// Returns the media type.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns the binary payload.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Builds the raw `data:` locator and wraps it as a [`CssUrl`].
    #[must_use]
    pub fn to_url(&self) -> CssUrl {
        let payload = STANDARD.encode(&self.data);
        let mut raw = String::with_capacity(self.media_type.len() + payload.len() + 13);
        raw.push_str("data:");
        raw.push_str(&self.media_type);
        raw.push_str(";base64,");
        raw.push_str(&payload);
        CssUrl(raw)
    }

    /// Returns the serialized CSS text, e.g. `url("data:image/png;base64,...")`.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.to_url().css_text()
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_url().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_string() {
        let s = CssString::new("Say \"Hi\"");
        assert_eq!(s.value(), "Say \"Hi\"");
        assert_eq!(s.css_text(), "\"Say \\\"Hi\\\"\"");
        assert_eq!(s.to_string(), s.css_text());
    }

    #[test]
    fn test_css_url() {
        assert_eq!(CssUrl::new("a.png").css_text(), "url(\"a.png\")");
        assert_eq!(
            CssUrl::new("weird \"url\"").css_text(),
            "url(\"weird \\\"url\\\"\")"
        );
    }

    #[test]
    fn test_idents_serialize_identically() {
        assert_eq!(CssIdent::new("3d").css_text(), "\\33 d");
        assert_eq!(CustomIdent::new("3d").css_text(), "\\33 d");
        assert_eq!(CssIdent::new("my-color").css_text(), "my-color");
    }

    #[test]
    fn test_custom_property_prefix_dedup() {
        let prefixed = CustomPropertyName::new("--already-prefixed");
        let bare = CustomPropertyName::new("already-prefixed");
        assert_eq!(prefixed, bare);
        assert_eq!(prefixed.css_text(), "--already-prefixed");
        assert_eq!(bare.css_text(), "--already-prefixed");
        assert_eq!(prefixed.name(), "already-prefixed");
    }

    #[test]
    fn test_custom_property_strips_only_first_prefix() {
        // "----x" stores "--x" and serializes with a single extra pair.
        let name = CustomPropertyName::new("----x");
        assert_eq!(name.name(), "--x");
        assert_eq!(name.css_text(), "----x");
    }

    #[test]
    fn test_var_reference() {
        let name = CustomPropertyName::new("main-bg");
        assert_eq!(name.var(), "var(--main-bg)");
        assert_eq!(name.var_with_fallback("white"), "var(--main-bg, white)");
        // Fallback is verbatim, not re-escaped.
        assert_eq!(
            name.var_with_fallback("url(\"x.png\")"),
            "var(--main-bg, url(\"x.png\"))"
        );
    }

    #[test]
    fn test_data_url() {
        let data = DataUrl::new("image/png", b"abc".to_vec());
        assert_eq!(data.media_type(), "image/png");
        assert_eq!(data.data(), b"abc");
        assert_eq!(data.to_url().value(), "data:image/png;base64,YWJj");
        assert_eq!(data.css_text(), "url(\"data:image/png;base64,YWJj\")");
        assert_eq!(data.to_string(), data.css_text());
    }

    #[test]
    fn test_data_url_empty_payload() {
        let data = DataUrl::new("text/plain", Vec::new());
        assert_eq!(data.css_text(), "url(\"data:text/plain;base64,\")");
    }

    #[test]
    fn test_serde_roundtrip() {
        let s = CssString::new("hello");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"hello\"");
        let back: CssString = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);

        // The prefix strip is re-applied on deserialization.
        let name: CustomPropertyName = serde_json::from_str("\"--main-bg\"").unwrap();
        assert_eq!(name.name(), "main-bg");
    }
}
