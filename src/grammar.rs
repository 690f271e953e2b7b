//! JSON Lexical Grammar
//!
//! This module documents the lexical grammar recognized by the scanner.
//! It contains no code.
//!
//! # Token Inventory
//!
//! | Kind | Lexemes |
//! |------|---------|
//! | Separator | `{` `}` `[` `]` `,` `:` (one character each) |
//! | Bool | `true`, `false` |
//! | Null | `null` |
//! | Number | see *Numbers* below |
//! | String | see *Strings* below |
//! | Whitespace | maximal run of whitespace characters |
//! | EndOfInput | empty; produced at and after the end of the input |
//! | Unknown | any malformed fragment (partial text preserved) |
//!
//! # Strings
//!
//! A string is a `"`-delimited sequence. Inside it the scanner accepts:
//!
//! - any character other than `"` and `\`, taken verbatim;
//! - a two-character escape `\"` `\\` `\/` `\b` `\f` `\n` `\r` `\t`;
//! - a Unicode escape `\u` followed by exactly four hexadecimal digits.
//!
//! The token text excludes the delimiting quotes and keeps every escape
//! sequence exactly as written; no decoding is performed. A string cut off
//! by the end of the input, an invalid escape code, or a non-hex character
//! inside a `\u` escape produces an `Unknown` token holding the text
//! accumulated up to that point.
//!
//! # Numbers
//!
//! ```text
//! number   = [ "-" ] int [ frac ] [ exp ]
//! int      = "0" / digit1-9 *digit
//! frac     = "." 1*digit
//! exp      = ("e" / "E") [ "+" / "-" ] 1*digit
//! ```
//!
//! Digits are ASCII. A leading `0` immediately followed by another digit is
//! malformed (`01` stops after the `0`), as are a fraction dot with no
//! following digit (`1.`) and an exponent marker, with or without sign,
//! lacking digits (`1e`, `1e+`). Each phase is extended using a single
//! character of lookahead, so the character after a number is never
//! consumed.
//!
//! # Whitespace
//!
//! Whitespace is classified with the standard character class
//! ([`char::is_whitespace`]) and is returned as a token rather than being
//! skipped. Consecutive whitespace characters coalesce into a single token
//! holding the entire run.
//!
//! # Malformed input
//!
//! There is exactly one failure shape: the `Unknown` token. The scanner
//! attaches no position information and performs no recovery; it simply
//! leaves the cursor after the characters it consumed, and the caller
//! chooses whether to stop or keep scanning. The strict
//! [`tokenize`](crate::tokenize) helper stops at the first `Unknown` and
//! reports line and column.
