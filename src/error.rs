//! Error type for the strict tokenizing entry point.
//!
//! The scanner itself never fails: malformed input comes back as
//! [`Unknown`](crate::TokenKind::Unknown) tokens, and the caller decides what
//! to do with them. This module exists one layer above that, for callers who
//! want the usual `Result` shape instead: [`tokenize`](crate::tokenize)
//! converts the first `Unknown` token it meets into an [`Error`] carrying
//! line/column context.
//!
//! ## Examples
//!
//! ```rust
//! use jsonlex::tokenize;
//!
//! let err = tokenize("[1, @]").unwrap_err();
//! assert!(err.to_string().contains("line 1"));
//! ```

use thiserror::Error;

/// An error produced by the strict tokenizing entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A malformed fragment was encountered. The position points at the
    /// character after the fragment, where scanning stopped; `fragment` is
    /// the partial text the scanner consumed before detecting the problem.
    #[error("lexical error at line {line}, column {column}: malformed fragment `{fragment}`")]
    Lexical {
        line: usize,
        column: usize,
        fragment: String,
    },
}

impl Error {
    /// Creates a lexical error with position information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonlex::Error;
    ///
    /// let err = Error::lexical(2, 5, "1e+");
    /// assert!(err.to_string().contains("line 2, column 5"));
    /// assert!(err.to_string().contains("`1e+`"));
    /// ```
    pub fn lexical(line: usize, column: usize, fragment: impl Into<String>) -> Self {
        Error::Lexical {
            line,
            column,
            fragment: fragment.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
