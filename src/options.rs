//! Configuration options for MSF parsing and serialization.
//!
//! - [`MsfOptions`]: main configuration struct shared by the parser and the serializer
//! - [`DuplicateKeys`]: what the parser does when a key is assigned twice
//!
//! The defaults produce and accept the canonical form: no indentation, and a
//! repeated key silently replaces the earlier value.
//!
//! ## Examples
//!
//! ```rust
//! use serde_msf::{parse, parse_with_options, serialize_with_options, DuplicateKeys, MsfOptions};
//!
//! // Two-space indentation
//! let doc = parse("{ a = { b = 1; }; }").unwrap();
//! let text = serialize_with_options(&doc, &MsfOptions::pretty());
//! assert_eq!(text, "{\n  a = {\n    b = 1;\n  };\n}");
//!
//! // Strict duplicate handling
//! let strict = MsfOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
//! assert!(parse_with_options("{ a = 1; a = 2; }", &strict).is_err());
//! ```

/// Parser behavior for a key that already exists in the document being built.
///
/// # Examples
///
/// ```rust
/// use serde_msf::DuplicateKeys;
///
/// assert_eq!(DuplicateKeys::default(), DuplicateKeys::Overwrite);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// The last assignment wins and the key keeps its first position.
    #[default]
    Overwrite,
    /// The second assignment is an [`Error::DuplicateKey`](crate::Error::DuplicateKey).
    Reject,
}

/// Configuration options for MSF parsing and serialization.
///
/// # Examples
///
/// ```rust
/// use serde_msf::{DuplicateKeys, MsfOptions};
///
/// // Canonical output, lenient duplicates
/// let options = MsfOptions::new();
/// assert_eq!(options.indent, 0);
///
/// // Indented output with 4 spaces per level, strict duplicates
/// let options = MsfOptions::pretty()
///     .with_indent(4)
///     .with_duplicate_keys(DuplicateKeys::Reject);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MsfOptions {
    /// Spaces per nesting level in serialized output; `0` is the canonical form.
    pub indent: usize,
    pub duplicate_keys: DuplicateKeys,
}

impl MsfOptions {
    /// Creates default options (canonical output, last write wins).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for indented output (2 spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_msf::MsfOptions;
    ///
    /// assert_eq!(MsfOptions::pretty().indent, 2);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        MsfOptions {
            indent: 2,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets how the parser treats a key assigned twice in one document.
    #[must_use]
    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }
}
