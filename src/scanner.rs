//! The scanning engine.
//!
//! [`Scanner`] owns the input as a character sequence plus a cursor, and
//! exposes a single operation: [`Scanner::next_token`], which classifies the
//! upcoming characters into one [`Token`] per call. Each call performs a
//! bounded amount of one-character lookahead and advances the cursor only
//! over the characters belonging to that token.
//!
//! Lexical failures are data, not control flow: a malformed fragment is
//! returned as an [`Unknown`](TokenKind::Unknown) token carrying the partial text
//! consumed so far, and the caller decides whether that is fatal. The
//! scanner itself never returns `Result` and never panics.
//!
//! ## Examples
//!
//! ```rust
//! use jsonlex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("[1, 2]");
//! let mut kinds = Vec::new();
//! loop {
//!     let token = scanner.next_token();
//!     if token.is_end() {
//!         break;
//!     }
//!     kinds.push(token.kind);
//! }
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Separator,
//!         TokenKind::Number,
//!         TokenKind::Separator,
//!         TokenKind::Whitespace,
//!         TokenKind::Number,
//!         TokenKind::Separator,
//!     ]
//! );
//! ```

use crate::token::{Token, TokenKind};

/// A lexical scanner over a fixed, in-memory character sequence.
///
/// Construct one per input with [`Scanner::new`], then call
/// [`Scanner::next_token`] until it yields
/// [`TokenKind::EndOfInput`](crate::TokenKind::EndOfInput). Once the end is
/// reached, every further call yields a fresh end-of-input token, so the
/// loop condition cannot be missed.
///
/// The scanner is synchronous and owns its state exclusively; share one
/// across threads only behind external synchronization.
pub struct Scanner {
    /// The full input, fixed at construction.
    source: Vec<char>,
    /// Index of the next unread character. Always in `[0, source.len()]`.
    cursor: usize,
    /// The most recently read character, i.e. `source[cursor - 1]` after a
    /// successful read.
    ch: char,
}

impl Scanner {
    /// Creates a scanner over the complete input text.
    ///
    /// There is no streaming or incremental feed; the input is fixed for the
    /// scanner's lifetime.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Scanner {
            source: input.chars().collect(),
            cursor: 0,
            ch: '\0',
        }
    }

    /// Returns the character offset of the next unread character.
    ///
    /// Useful for callers that wrap the scanner to attach diagnostics; the
    /// tokens themselves carry no position metadata.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Reads one character, advancing the cursor. `None` at end of input.
    fn read_char(&mut self) -> Option<char> {
        let ch = *self.source.get(self.cursor)?;
        self.cursor += 1;
        self.ch = ch;
        Some(ch)
    }

    /// Looks at the next unread character without advancing the cursor.
    fn peek(&self) -> Option<char> {
        self.source.get(self.cursor).copied()
    }

    /// Scans and returns the next token, advancing past it.
    ///
    /// Exactly one token is produced per call. Whitespace is returned as a
    /// token like everything else, never skipped. Repeated calls after the
    /// end of input keep returning end-of-input tokens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonlex::{Scanner, TokenKind};
    ///
    /// let mut scanner = Scanner::new("null");
    /// assert_eq!(scanner.next_token().kind, TokenKind::Null);
    /// assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
    /// assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Token {
        let Some(ch) = self.read_char() else {
            return Token::end();
        };

        match ch {
            '{' | '}' | '[' | ']' | ',' | ':' => Token::new(TokenKind::Separator, ch),
            '"' => self.scan_string(),
            't' => self.scan_keyword(TokenKind::Bool, "true"),
            'f' => self.scan_keyword(TokenKind::Bool, "false"),
            'n' => self.scan_keyword(TokenKind::Null, "null"),
            c if c.is_ascii_digit() || c == '-' => self.scan_number(),
            c if c.is_whitespace() => self.scan_whitespace(),
            c => Token::new(TokenKind::Unknown, c),
        }
    }

    /// Scans a string literal. The opening quote has already been consumed.
    ///
    /// The returned text excludes the surrounding quotes and keeps escape
    /// sequences exactly as written in the source.
    fn scan_string(&mut self) -> Token {
        let mut text = String::new();
        loop {
            let Some(ch) = self.read_char() else {
                // Input ran out before the closing quote.
                return Token::new(TokenKind::Unknown, text);
            };
            match ch {
                '"' => return Token::new(TokenKind::String, text),
                '\\' => {
                    text.push('\\');
                    let Some(code) = self.read_char() else {
                        return Token::new(TokenKind::Unknown, text);
                    };
                    match code {
                        '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' => text.push(code),
                        'u' => {
                            for _ in 0..4 {
                                match self.read_char() {
                                    Some(digit) if digit.is_ascii_hexdigit() => text.push(digit),
                                    _ => return Token::new(TokenKind::Unknown, text),
                                }
                            }
                        }
                        _ => return Token::new(TokenKind::Unknown, text),
                    }
                }
                other => text.push(other),
            }
        }
    }

    /// Scans a numeric literal: optional sign, integer part, optional
    /// fraction, optional exponent. The first character (a digit or `-`)
    /// has already been consumed.
    fn scan_number(&mut self) -> Token {
        let mut text = String::new();

        if self.ch == '-' {
            text.push('-');
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    self.read_char();
                }
                _ => return Token::new(TokenKind::Unknown, text),
            }
        }
        text.push(self.ch);

        if self.ch == '0' {
            // A leading zero must stand alone: `01` is malformed.
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Token::new(TokenKind::Unknown, text);
            }
        } else {
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.read_char();
                text.push(self.ch);
            }
        }

        if self.peek() == Some('.') {
            self.read_char();
            text.push('.');
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Token::new(TokenKind::Unknown, text);
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.read_char();
                text.push(self.ch);
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.read_char();
            text.push(self.ch);
            if matches!(self.peek(), Some('+' | '-')) {
                self.read_char();
                text.push(self.ch);
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Token::new(TokenKind::Unknown, text);
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.read_char();
                text.push(self.ch);
            }
        }

        Token::new(TokenKind::Number, text)
    }

    /// Scans a maximal run of whitespace into a single token. The first
    /// whitespace character has already been consumed.
    fn scan_whitespace(&mut self) -> Token {
        let mut text = String::new();
        text.push(self.ch);
        while self.peek().is_some_and(char::is_whitespace) {
            self.read_char();
            text.push(self.ch);
        }
        Token::new(TokenKind::Whitespace, text)
    }

    /// Scans a multi-character keyword (`true`, `false`, `null`), comparing
    /// consumed characters against the expected literal one at a time. The
    /// first character has already been consumed.
    ///
    /// On the first mismatch, or if the input ends before the literal is
    /// complete, the token is `Unknown` and carries everything matched so
    /// far, including the mismatching character where one was read.
    fn scan_keyword(&mut self, kind: TokenKind, literal: &str) -> Token {
        let mut text = String::new();
        let mut expected = literal.chars();

        text.push(self.ch);
        if expected.next() != Some(self.ch) {
            return Token::new(TokenKind::Unknown, text);
        }
        for want in expected {
            let Some(got) = self.read_char() else {
                return Token::new(TokenKind::Unknown, text);
            };
            text.push(got);
            if got != want {
                return Token::new(TokenKind::Unknown, text);
            }
        }
        Token::new(kind, text)
    }
}

/// A fused iterator over a scanner's tokens.
///
/// Yields every token up to, but not including, the end-of-input marker.
/// Created by converting a [`Scanner`] into an iterator.
///
/// # Examples
///
/// ```rust
/// use jsonlex::{Scanner, TokenKind};
///
/// let kinds: Vec<_> = Scanner::new("{}").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![TokenKind::Separator, TokenKind::Separator]);
/// ```
pub struct Tokens {
    scanner: Scanner,
    done: bool,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.scanner.next_token();
        if token.is_end() {
            self.done = true;
            return None;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens {}

impl IntoIterator for Scanner {
    type Item = Token;
    type IntoIter = Tokens;

    fn into_iter(self) -> Tokens {
        Tokens {
            scanner: self,
            done: false,
        }
    }
}
