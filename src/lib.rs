//! # jsonlex
//!
//! A lossless lexical analyzer for JSON: raw text in, classified tokens out.
//!
//! ## What it does
//!
//! `jsonlex` recognizes the lexical grammar of JSON and nothing more. It
//! splits input into structural separators, string/number/keyword literals
//! and whitespace, reporting malformed fragments along the way. It does not
//! build a value tree, check that brackets match, or perform any I/O; it is
//! the bottom layer for a parser to sit on.
//!
//! ## Key Properties
//!
//! - **Lossless lexemes**: every token carries the exact source substring it
//!   was scanned from. Whitespace is a first-class token, and escape
//!   sequences inside strings are preserved verbatim rather than decoded.
//! - **Errors are data**: a malformed fragment comes back as an
//!   [`Unknown`](TokenKind::Unknown) token instead of an error or a panic,
//!   so the scanner can be embedded in high-volume parsing loops without
//!   unwinding overhead. A `Result`-shaped entry point ([`tokenize`]) is
//!   provided on top for callers who want one.
//! - **Bounded work per call**: each [`Scanner::next_token`] call uses at
//!   most one character of lookahead and touches only the characters of the
//!   token it returns.
//! - **No unsafe code**: the scanner is written entirely in safe Rust.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonlex::Scanner;
//!
//! let mut scanner = Scanner::new(r#"{"active": true}"#);
//! loop {
//!     let token = scanner.next_token();
//!     if token.is_end() {
//!         break;
//!     }
//!     println!("{token}");
//! }
//! ```
//!
//! ### Strict scanning
//!
//! [`tokenize`] drives the loop for you and turns the first malformed
//! fragment into an error with line/column context:
//!
//! ```rust
//! use jsonlex::{tokenize, TokenKind};
//!
//! let tokens = tokenize(r#"[1, "two", null]"#).unwrap();
//! assert_eq!(tokens.first().map(|t| t.kind), Some(TokenKind::Separator));
//!
//! let err = tokenize("[01]").unwrap_err();
//! assert!(err.to_string().contains("malformed fragment `0`"));
//! ```
//!
//! ### Iterating
//!
//! The scanner converts into a fused iterator, which makes dropping
//! whitespace a one-liner:
//!
//! ```rust
//! use jsonlex::Scanner;
//!
//! let significant: Vec<_> = Scanner::new("[1, 2]")
//!     .into_iter()
//!     .filter(|t| !t.is_whitespace())
//!     .collect();
//! assert_eq!(significant.len(), 5);
//! ```

pub mod error;
pub mod grammar;
pub mod scanner;
pub mod token;

pub use error::{Error, Result};
pub use scanner::{Scanner, Tokens};
pub use token::{Token, TokenKind};

/// Scans the complete input into a vector of tokens.
///
/// Whitespace tokens are included; filter them out if they are not wanted.
/// The end-of-input marker is not part of the returned vector.
///
/// # Examples
///
/// ```rust
/// use jsonlex::{tokenize, TokenKind};
///
/// let tokens = tokenize("true").unwrap();
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind, TokenKind::Bool);
/// ```
///
/// # Errors
///
/// Returns [`Error::Lexical`] for the first malformed fragment encountered,
/// with the line and column at which scanning stopped.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        match token.kind {
            TokenKind::EndOfInput => return Ok(tokens),
            TokenKind::Unknown => {
                let (line, column) = line_col(input, scanner.position());
                return Err(Error::lexical(line, column, token.text));
            }
            _ => tokens.push(token),
        }
    }
}

/// Converts a character offset into 1-based line and column numbers.
fn line_col(input: &str, char_offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in input.chars().take(char_offset) {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
