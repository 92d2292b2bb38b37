//! Recursive-descent parser.
//!
//! The [`Parser`] walks the token sequence produced by [`tokenize`] with a
//! single token of lookahead and no backtracking:
//!
//! ```text
//! document := '{' node* '}'
//! node     := key '=' value ';'
//! value    := string | number | boolean | document | list
//! list     := '[' [ value (',' value)* ] ']'
//! string   := '"' raw-text? '"'
//! number   := -?[0-9]+
//! boolean  := 'true' | 'false'
//! ```
//!
//! The node loop of a document ends as soon as the lookahead is not a key;
//! the closing `}` is then required. The first mismatch aborts the parse with
//! an [`Error`] that names the offending token and its position.
//!
//! ```rust
//! use serde_msf::parser::Parser;
//! use serde_msf::MsfOptions;
//!
//! let options = MsfOptions::default();
//! let doc = Parser::new("{ a = [1, 2]; }", &options).parse().unwrap();
//! assert_eq!(doc.get::<&[serde_msf::Value]>("a").unwrap().len(), 2);
//! ```

use crate::document::is_valid_key;
use crate::options::DuplicateKeys;
use crate::token::{tokenize, Token, TokenKind};
use crate::{Document, Error, MsfOptions, Result, Value};

/// Parser state: the token sequence and a cursor into it.
///
/// A parser is single use; [`Parser::parse`] consumes it.
pub struct Parser<'o> {
    tokens: Vec<Token>,
    position: usize,
    options: &'o MsfOptions,
    /// Line and column just past the last character, for end-of-input errors.
    end: (usize, usize),
}

impl<'o> Parser<'o> {
    pub fn new(source: &str, options: &'o MsfOptions) -> Self {
        let tokens = tokenize(source);
        log::trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
        Parser {
            tokens,
            position: 0,
            options,
            end: end_position(source),
        }
    }

    /// Parses exactly one document; any token after its closing `}` is an error.
    pub fn parse(mut self) -> Result<Document> {
        let result = self.parse_document().and_then(|doc| match self.peek() {
            Some(token) => Err(unexpected(token, "trailing tokens after the document")),
            None => Ok(doc),
        });
        if let Err(err) = &result {
            log::debug!("failed to parse MSF document: {}", err);
        }
        result
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.is(kind))
    }

    fn eof(&self, expected: &str) -> Error {
        Error::unexpected_eof(self.end.0, self.end.1, self.tokens.len(), expected)
    }

    /// Consumes the next token if it is `kind`, fails otherwise.
    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        match self.tokens.get(self.position) {
            Some(token) if token.is(kind) => {
                self.position += 1;
                Ok(())
            }
            Some(token) => Err(unexpected(token, &format!("expected {}", kind.describe()))),
            None => Err(self.eof(kind.describe())),
        }
    }

    fn parse_document(&mut self) -> Result<Document> {
        self.expect(TokenKind::OpenBrace)?;

        let mut doc = Document::new();
        while let Some((key, value)) = self.parse_node()? {
            if self.options.duplicate_keys == DuplicateKeys::Reject
                && doc.contains_key(&key.text)
            {
                return Err(Error::duplicate_key(&key.text, key.line, key.column));
            }
            doc.insert(key.text, value);
        }

        self.expect(TokenKind::CloseBrace)?;
        Ok(doc)
    }

    /// Returns `Ok(None)` when the lookahead cannot start a node, which ends
    /// the node loop of the enclosing document.
    fn parse_node(&mut self) -> Result<Option<(Token, Value)>> {
        let key = match self.peek() {
            Some(token) if token.is(TokenKind::Word) && is_valid_key(&token.text) => {
                token.clone()
            }
            _ => return Ok(None),
        };
        self.position += 1;

        self.expect(TokenKind::Assign)?;
        let value = self.parse_value()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Some((key, value)))
    }

    fn parse_value(&mut self) -> Result<Value> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.eof("a value")),
        };

        match token.kind {
            TokenKind::Quote => self.parse_text(),
            TokenKind::OpenBrace => Ok(Value::Object(self.parse_document()?)),
            TokenKind::OpenBracket => self.parse_list(),
            TokenKind::Word if token.text == "true" => {
                self.position += 1;
                Ok(Value::Boolean(true))
            }
            TokenKind::Word if token.text == "false" => {
                self.position += 1;
                Ok(Value::Boolean(false))
            }
            TokenKind::Word if starts_like_number(&token.text) => self.parse_integer(),
            _ => Err(unexpected(token, "expected a value")),
        }
    }

    fn parse_text(&mut self) -> Result<Value> {
        self.expect(TokenKind::Quote)?;

        // `""` has no word token between the quotes.
        let text = match self.peek() {
            Some(token) if token.is(TokenKind::Word) => {
                let text = token.text.clone();
                self.position += 1;
                text
            }
            _ => String::new(),
        };

        self.expect(TokenKind::Quote)?;
        Ok(Value::Text(text))
    }

    fn parse_integer(&mut self) -> Result<Value> {
        let Some(token) = self.tokens.get(self.position) else {
            return Err(self.eof("an integer"));
        };

        let digits = token.text.strip_prefix('-').unwrap_or(&token.text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unexpected(token, "invalid integer literal"));
        }
        let value = token
            .text
            .parse::<i64>()
            .map_err(|_| unexpected(token, "integer does not fit in 64 bits"))?;
        self.position += 1;
        Ok(Value::Integer(value))
    }

    fn parse_list(&mut self) -> Result<Value> {
        self.expect(TokenKind::OpenBracket)?;

        let mut items = Vec::new();
        if !self.peek_is(TokenKind::CloseBracket) {
            loop {
                items.push(self.parse_value()?);
                if !self.peek_is(TokenKind::Comma) {
                    break;
                }
                self.position += 1;
            }
        }

        self.expect(TokenKind::CloseBracket)?;
        Ok(Value::List(items))
    }
}

fn starts_like_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

fn unexpected(token: &Token, msg: &str) -> Error {
    Error::syntax(token.line, token.column, token.index, &token.text, msg)
}

fn end_position(source: &str) -> (usize, usize) {
    source.chars().fold((1, 1), |(line, column), ch| {
        if ch == '\n' {
            (line + 1, 1)
        } else {
            (line, column + 1)
        }
    })
}
