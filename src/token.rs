//! Tokenizer.
//!
//! Turns source text into a fully materialized `Vec<Token>`. Tokenizing never
//! fails: malformed text still yields some token sequence and the problem is
//! reported by the [parser](crate::parser).
//!
//! Outside double quotes whitespace is dropped and the eight singleton
//! characters `; = , { } [ ] "` each form a token of their own; every other
//! run of characters forms a [`TokenKind::Word`]. Between a pair of quotes the
//! raw text, whitespace and singletons included, is a single word token.
//!
//! ```rust
//! use serde_msf::token::{tokenize, TokenKind};
//!
//! let tokens = tokenize("{ name = \"A, B\"; }");
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["{", "name", "=", "\"", "A, B", "\"", ";", "}"]);
//! assert_eq!(tokens[4].kind, TokenKind::Word);
//! ```

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Semicolon,
    Assign,
    Comma,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Quote,
    /// Any run of non-singleton characters, or the raw content of a quoted string.
    Word,
}

impl TokenKind {
    /// Maps a singleton character to its kind.
    #[must_use]
    pub const fn singleton(ch: char) -> Option<TokenKind> {
        match ch {
            ';' => Some(TokenKind::Semicolon),
            '=' => Some(TokenKind::Assign),
            ',' => Some(TokenKind::Comma),
            '{' => Some(TokenKind::OpenBrace),
            '}' => Some(TokenKind::CloseBrace),
            '[' => Some(TokenKind::OpenBracket),
            ']' => Some(TokenKind::CloseBracket),
            '"' => Some(TokenKind::Quote),
            _ => None,
        }
    }

    /// Human readable description used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            TokenKind::Semicolon => "`;`",
            TokenKind::Assign => "`=`",
            TokenKind::Comma => "`,`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::Quote => "`\"`",
            TokenKind::Word => "a word",
        }
    }
}

/// A token with the position of its first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Position in the token sequence.
    pub index: usize,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

struct Tokenizer {
    tokens: Vec<Token>,
    word: String,
    word_start: (usize, usize),
    line: usize,
    column: usize,
    in_string: bool,
}

impl Tokenizer {
    fn new(capacity: usize) -> Self {
        Tokenizer {
            tokens: Vec::with_capacity(capacity),
            word: String::new(),
            word_start: (1, 1),
            line: 1,
            column: 1,
            in_string: false,
        }
    }

    fn push(&mut self, kind: TokenKind, text: String, (line, column): (usize, usize)) {
        let index = self.tokens.len();
        self.tokens.push(Token {
            kind,
            text,
            index,
            line,
            column,
        });
    }

    fn flush_word(&mut self) {
        if !self.word.is_empty() {
            let text = std::mem::take(&mut self.word);
            self.push(TokenKind::Word, text, self.word_start);
        }
    }

    fn push_char(&mut self, ch: char) {
        if self.word.is_empty() {
            self.word_start = (self.line, self.column);
        }
        self.word.push(ch);
    }

    fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn feed(&mut self, ch: char) {
        let here = (self.line, self.column);
        if self.in_string {
            if ch == '"' {
                self.flush_word();
                self.push(TokenKind::Quote, ch.to_string(), here);
                self.in_string = false;
            } else {
                self.push_char(ch);
            }
        } else if let Some(kind) = TokenKind::singleton(ch) {
            self.flush_word();
            self.push(kind, ch.to_string(), here);
            self.in_string = kind == TokenKind::Quote;
        } else if !ch.is_whitespace() {
            self.push_char(ch);
        }
        self.advance(ch);
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush_word();
        self.tokens
    }
}

/// Splits `source` into tokens.
///
/// An unterminated string keeps everything up to the end of input in its
/// word token; the parser then reports the missing closing quote.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source.len() / 2);
    for ch in source.chars() {
        tokenizer.feed(ch);
    }
    tokenizer.finish()
}
