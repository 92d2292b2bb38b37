//! Error types for MSF parsing, serialization and typed access.
//!
//! Every failure is returned as an [`Error`] at the point it is detected; the
//! parser never hands back a partially built [`Document`](crate::Document).
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: the token stream does not match the grammar. They carry
//!   the offending token, its index in the token sequence and its line/column
//! - **Type Mismatches**: a typed accessor was used against another variant
//! - **Key Errors**: missing keys, malformed keys, duplicates in strict mode
//! - **Unsupported Types**: Rust values with no MSF representation (floats, `None`)
//!
//! ## Examples
//!
//! ```rust
//! use serde_msf::{parse, Error};
//!
//! let result = parse("{ a = 1 }");
//! assert!(matches!(result, Err(ref err) if err.is_syntax()));
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The token at `index` does not fit the grammar.
    #[error("Syntax error at line {line}, column {col} (token #{index} `{token}`): {msg}")]
    Syntax {
        line: usize,
        col: usize,
        index: usize,
        token: String,
        msg: String,
    },

    /// The token sequence ended while more input was required.
    #[error("Unexpected end of input at line {line}, column {col} (token #{index}): expected {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        index: usize,
        expected: String,
    },

    /// Typed access against a node holding another variant.
    #[error("Type mismatch{}: expected {expected}, found {found}", key_suffix(.key))]
    TypeMismatch {
        key: Option<String>,
        expected: &'static str,
        found: &'static str,
    },

    /// Typed access for a key the document does not contain.
    #[error("Missing key `{0}`")]
    MissingKey(String),

    /// A key assigned twice while duplicate keys are rejected.
    #[error("Duplicate key `{key}` at line {line}, column {col}")]
    DuplicateKey { key: String, line: usize, col: usize },

    /// A key that does not match the identifier syntax.
    #[error("Invalid key `{0}`: keys must match [_a-zA-Z][._a-zA-Z0-9]*")]
    InvalidKey(String),

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

fn key_suffix(key: &Option<String>) -> String {
    match key {
        Some(key) => format!(" for key `{}`", key),
        None => String::new(),
    }
}

impl Error {
    /// Creates a syntax error pointing at a token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_msf::Error;
    ///
    /// let err = Error::syntax(3, 7, 4, "}", "expected `;`");
    /// assert!(err.to_string().contains("line 3"));
    /// assert!(err.is_syntax());
    /// ```
    pub fn syntax(line: usize, col: usize, index: usize, token: &str, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            index,
            token: token.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, index: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            index,
            expected: expected.to_string(),
        }
    }

    /// Creates a type mismatch error that is not yet tied to a key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_msf::Error;
    ///
    /// let err = Error::type_mismatch("integer", "text");
    /// assert_eq!(err.to_string(), "Type mismatch: expected integer, found text");
    /// ```
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch {
            key: None,
            expected,
            found,
        }
    }

    pub fn missing_key(key: &str) -> Self {
        Error::MissingKey(key.to_string())
    }

    pub fn duplicate_key(key: &str, line: usize, col: usize) -> Self {
        Error::DuplicateKey {
            key: key.to_string(),
            line,
            col,
        }
    }

    pub fn invalid_key(key: &str) -> Self {
        Error::InvalidKey(key.to_string())
    }

    /// Creates an unsupported type error for values that cannot be written as MSF.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Attaches the accessed key to a [`Error::TypeMismatch`]; other variants
    /// are returned unchanged.
    #[must_use]
    pub fn at_key(self, key: &str) -> Self {
        match self {
            Error::TypeMismatch {
                key: None,
                expected,
                found,
            } => Error::TypeMismatch {
                key: Some(key.to_string()),
                expected,
                found,
            },
            other => other,
        }
    }

    /// Returns `true` for errors raised because the text does not match the grammar.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. } | Error::UnexpectedEof { .. })
    }

    /// Returns `true` for [`Error::TypeMismatch`].
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
