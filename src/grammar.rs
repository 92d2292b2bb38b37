//! MSF Format Description
//!
//! This module documents the MSF text format as implemented by this library.
//! It contains no code.
//!
//! # Overview
//!
//! An MSF file holds exactly one document: a brace-delimited sequence of
//! `key = value;` assignments. Values are typed; there is no implicit
//! conversion between them.
//!
//! # Grammar
//!
//! ```text
//! document := '{' node* '}'
//! node     := key '=' value ';'
//! value    := string | number | boolean | document | list
//! list     := '[' [ value (',' value)* ] ']'
//! string   := '"' raw-text? '"'
//! number   := -?[0-9]+
//! boolean  := 'true' | 'false'
//! key      := [_a-zA-Z][._a-zA-Z0-9]*
//! ```
//!
//! # Tokens
//!
//! Eight characters are singleton tokens: `;` `=` `,` `{` `}` `[` `]` `"`.
//! Outside double quotes, whitespace is discarded and every other run of
//! characters is one word. Whitespace therefore separates nothing:
//! `1 2` reads as the word `12`.
//!
//! Between a pair of double quotes the raw text is kept as is, spaces and
//! singleton characters included. There are no escape sequences, so text
//! cannot contain `"`.
//!
//! # Values
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Integer | decimal digits, optional leading `-`, 64-bit signed | `port = 8080;` |
//! | Text | `"..."` | `name = "server one";` |
//! | Boolean | `true` or `false` | `tls = false;` |
//! | List | `[a, b, c]`, elements of any type | `ids = [1, 2, 3];` |
//! | Document | `{ ... }` | `limits = { max = 1; };` |
//!
//! Anything else in value position is a syntax error: floats (`1.5`), words
//! with trailing letters (`12ab`), `null`, and capitalized booleans (`True`).
//! Lists take no trailing comma.
//!
//! # Keys
//!
//! Keys are never quoted. A key starts with a letter or `_` and continues
//! with letters, digits, `_` or `.`: `name`, `_private`, `db.host`.
//! `true` and `false` are valid keys.
//!
//! Within one document a repeated key replaces the earlier value and keeps
//! the earlier position (last write wins). With
//! [`DuplicateKeys::Reject`](crate::DuplicateKeys::Reject) it is an error
//! instead. Sibling and nested documents have independent key sets.
//!
//! # Canonical Form
//!
//! [`serialize`](crate::serialize) writes:
//!
//! - `{` and a newline
//! - one `key = value;` line per node, in insertion order
//! - `}`, with no newline after it
//!
//! List elements are separated by `, `. Nested documents follow the same
//! layout, so `}` of a nested document is immediately followed by `;` or by
//! the list separator:
//!
//! ```text
//! {
//! a = 1;
//! b = [{
//! x = 1;
//! }, {
//! x = 2;
//! }];
//! }
//! ```
//!
//! Parsing canonical text and serializing it again yields identical text.
//! With a non-zero [`MsfOptions::indent`](crate::MsfOptions::indent) node
//! lines are indented per nesting level; the result parses to the same
//! document.
//!
//! # Errors
//!
//! The first token that does not fit the grammar aborts the parse. The error
//! reports the token text, its index in the token sequence and its line and
//! column (1-based, counted in characters). Running out of tokens reports
//! [`Error::UnexpectedEof`](crate::Error::UnexpectedEof) with the position
//! just past the input. Tokens after the closing `}` of the document are an
//! error.
