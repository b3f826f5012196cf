/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// https://drafts.csswg.org/css-syntax-3/#tokenization

use crate::char_class::{is_digit, is_hex_digit, is_name, is_name_start, is_whitespace};
use crate::input::RuneBuffer;

use self::Token::*;

/// One of the pieces the stylesheet input is broken into.
///
/// Tokenization is error-tolerant: malformed input degrades to `BadString`,
/// `BadUrl`, or `Delim` tokens rather than failing, and every stream ends
/// with exactly one `Eof`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// An [`<ident-token>`](https://drafts.csswg.org/css-syntax-3/#ident-token-diagram)
    Ident(String),

    /// A [`<function-token>`](https://drafts.csswg.org/css-syntax-3/#function-token-diagram)
    ///
    /// The value (name) does not include the `(` marker. A quoted
    /// `url("…")` is tokenized as `Function("url")`, not as `Url`.
    Function(String),

    /// A [`<url-token>`](https://drafts.csswg.org/css-syntax-3/#url-token-diagram)
    ///
    /// The value does not include the `url(` `)` markers.
    Url(String),

    /// A `<bad-url-token>`. This token always indicates a parse error.
    ///
    /// The value is the recovery text consumed while skipping to the
    /// closing `)` or the end of input.
    BadUrl(String),

    /// A [`<string-token>`](https://drafts.csswg.org/css-syntax-3/#string-token-diagram)
    ///
    /// The value does not include the quotes; escapes are decoded. A string
    /// cut short by end of input is still a `QuotedString`.
    QuotedString(String),

    /// A `<bad-string-token>`: a string cut short by a raw newline.
    /// This token always indicates a parse error; no partial value is kept.
    BadString,

    /// A [`<hash-token>`](https://drafts.csswg.org/css-syntax-3/#hash-token-diagram)
    ///
    /// The value does not include the `#` marker.
    Hash(String),

    /// An [`<at-keyword-token>`](https://drafts.csswg.org/css-syntax-3/#at-keyword-token-diagram)
    ///
    /// Wraps the ident-like token scanned after the `@` marker. Unlike the
    /// CSS spec this is emitted whether or not the following code points
    /// would validly start an identifier.
    AtKeyword(Box<Token>),

    /// A [`<number-token>`](https://drafts.csswg.org/css-syntax-3/#number-token-diagram)
    Digit {
        /// The value as a float.
        value: f64,
        /// `Integer` unless a fractional part or exponent was present.
        kind: NumberKind,
    },

    /// A [`<percentage-token>`](https://drafts.csswg.org/css-syntax-3/#percentage-token-diagram)
    Percentage {
        /// The value as written, not divided by 100.
        value: f64,
    },

    /// A [`<dimension-token>`](https://drafts.csswg.org/css-syntax-3/#dimension-token-diagram)
    Dimension {
        /// The numeric value as a float.
        value: f64,
        /// `Integer` unless a fractional part or exponent was present.
        kind: NumberKind,
        /// The unit, as the ident-like token following the number.
        unit: Box<Token>,
    },

    /// A `<delim-token>`: any code point not claimed by a more specific rule.
    Delim(char),

    /// A comment, block (`/* … */`) or SCSS line (`// …`) form.
    ///
    /// The CSS Syntax spec does not generate tokens for comments, but we do
    /// so that downstream consumers can skip (or reject) them explicitly.
    /// The value has the comment markers removed and surrounding spaces
    /// trimmed.
    Comment {
        /// The textual form this comment was written in.
        kind: CommentKind,
        /// The trimmed text inside the comment.
        value: String,
    },

    /// A [`<whitespace-token>`](https://drafts.csswg.org/css-syntax-3/#whitespace-token-diagram):
    /// one maximal run of whitespace, newline-normalized.
    WhiteSpace(String),

    /// A `<(-token>`
    LeftParenthesis,
    /// A `<)-token>`
    RightParenthesis,
    /// A `<comma-token>`
    Comma,
    /// A `<colon-token>`
    Colon,
    /// A `<semicolon-token>`
    Semicolon,
    /// A `<[-token>`
    LeftSquareBracket,
    /// A `<]-token>`
    RightSquareBracket,
    /// A `<{-token>`
    LeftCurlyBracket,
    /// A `<}-token>`
    RightCurlyBracket,
    /// A `<!--` [`<CDO-token>`](https://drafts.csswg.org/css-syntax-3/#CDO-token-diagram)
    CDO,
    /// A `-->` [`<CDC-token>`](https://drafts.csswg.org/css-syntax-3/#CDC-token-diagram)
    CDC,

    /// The terminal sentinel: always exactly one, last in the stream.
    Eof,
}

/// The type flag of `Digit` and `Dimension` tokens.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    /// No fractional part or exponent was present in the source.
    Integer,
    /// The spec calls this "number"; a fractional part or exponent was present.
    Number,
}

/// The textual form of a `Comment` token.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentKind {
    /// An SCSS `//` comment running to the end of the line.
    Line,
    /// A `/* … */` comment. Does not nest; an unclosed one runs to EOF.
    Block,
}

/// A tokenizer for one stylesheet, borrowing its input.
///
/// Tokenizers are cheap to create, one per file; they hold no shared state,
/// so callers may parallelize across files freely.
pub struct Tokenizer<'a> {
    input: RuneBuffer<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given input.
    #[inline]
    pub fn new(input: &str) -> Tokenizer {
        Tokenizer {
            input: RuneBuffer::new(input),
        }
    }

    /// Returns the next token. Never fails; once the end of input is
    /// reached this returns `Token::Eof` on every subsequent call.
    #[inline]
    pub fn scan(&mut self) -> Token {
        next_token(self)
    }

    /// Returns all remaining tokens, up to and including the `Eof` token.
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan();
            let done = token == Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }
}

// https://drafts.csswg.org/css-syntax-3/#consume-token
fn next_token(tokenizer: &mut Tokenizer) -> Token {
    let c = match tokenizer.input.read() {
        Some(c) => c,
        None => return Eof,
    };
    match c {
        '/' => match tokenizer.input.peek() {
            Some('/') => {
                tokenizer.input.read();
                consume_line_comment(tokenizer)
            }
            Some('*') => {
                tokenizer.input.read();
                consume_block_comment(tokenizer)
            }
            // Not a comment, probably a division operator.
            _ => Delim('/'),
        },
        _ if is_whitespace(c) => consume_whitespace(tokenizer, c),
        '"' => consume_string(tokenizer, '"'),
        '\'' => consume_string(tokenizer, '\''),
        '#' => Hash(consume_name(tokenizer)),
        '(' => LeftParenthesis,
        ')' => RightParenthesis,
        ',' => Comma,
        ':' => Colon,
        ';' => Semicolon,
        '[' => LeftSquareBracket,
        ']' => RightSquareBracket,
        '{' => LeftCurlyBracket,
        '}' => RightCurlyBracket,
        '@' => AtKeyword(Box::new(consume_ident_like(tokenizer))),
        '-' => {
            if tokenizer.input.peek().map_or(false, is_digit) {
                tokenizer.input.unread();
                consume_numeric(tokenizer)
            } else if tokenizer.input.peek_n(2) == "->" {
                tokenizer.input.read();
                tokenizer.input.read();
                CDC
            } else {
                Delim('-')
            }
        }
        '.' => {
            if tokenizer.input.peek().map_or(false, is_digit) {
                tokenizer.input.unread();
                consume_numeric(tokenizer)
            } else {
                Delim('.')
            }
        }
        '<' => {
            if tokenizer.input.peek_n(3) == "!--" {
                tokenizer.input.read();
                tokenizer.input.read();
                tokenizer.input.read();
                CDO
            } else {
                Delim('<')
            }
        }
        '\\' => {
            // The escape starts an identifier.
            tokenizer.input.unread();
            consume_ident_like(tokenizer)
        }
        _ if is_digit(c) => {
            tokenizer.input.unread();
            consume_numeric(tokenizer)
        }
        _ if is_name_start(c) => {
            tokenizer.input.unread();
            consume_ident_like(tokenizer)
        }
        _ => Delim(c),
    }
}

/// Consumes a maximal whitespace run; `first` has already been read.
fn consume_whitespace(tokenizer: &mut Tokenizer, first: char) -> Token {
    let mut value = first.to_string();
    loop {
        match tokenizer.input.read() {
            Some(c) if is_whitespace(c) => value.push(c),
            Some(_) => {
                tokenizer.input.unread();
                break;
            }
            None => break,
        }
    }
    WhiteSpace(value)
}

/// Consumes an SCSS `//` comment; the two slashes have already been read.
/// The terminating newline is not part of the token and is re-scanned
/// as whitespace afterwards.
fn consume_line_comment(tokenizer: &mut Tokenizer) -> Token {
    let mut text = String::new();
    loop {
        match tokenizer.input.read() {
            Some('\n') => {
                tokenizer.input.unread();
                break;
            }
            Some(c) => text.push(c),
            None => break,
        }
    }
    Comment {
        kind: CommentKind::Line,
        value: text.trim_matches(' ').to_owned(),
    }
}

/// Consumes a `/* … */` comment; the opener has already been read.
/// The first `*/` closes the comment (they do not nest); end of input
/// before the closer is tolerated.
fn consume_block_comment(tokenizer: &mut Tokenizer) -> Token {
    let mut text = String::new();
    loop {
        match tokenizer.input.read() {
            Some('*') if tokenizer.input.peek() == Some('/') => {
                tokenizer.input.read();
                break;
            }
            Some(c) => text.push(c),
            None => break,
        }
    }
    Comment {
        kind: CommentKind::Block,
        value: text.trim_matches(' ').to_owned(),
    }
}

// https://drafts.csswg.org/css-syntax-3/#consume-string-token
fn consume_string(tokenizer: &mut Tokenizer, delimiter: char) -> Token {
    let mut value = String::new();
    loop {
        match tokenizer.input.read() {
            // Unterminated at EOF is still a valid string.
            None => return QuotedString(value),
            Some(c) if c == delimiter => return QuotedString(value),
            // Unterminated at a raw newline is not. The newline is consumed.
            Some('\n') => return BadString,
            Some('\\') => match tokenizer.input.peek() {
                // Escaped EOF contributes nothing.
                None => {}
                // Escaped newline: line continuation.
                Some('\n') => {
                    tokenizer.input.read();
                }
                Some(_) => value.push(consume_escape(tokenizer)),
            },
            Some(c) => value.push(c),
        }
    }
}

// https://drafts.csswg.org/css-syntax-3/#consume-name
fn consume_name(tokenizer: &mut Tokenizer) -> String {
    let mut value = String::new();
    loop {
        match tokenizer.input.read() {
            Some(c) if is_name(c) => value.push(c),
            Some('\\') => value.push(consume_escape(tokenizer)),
            Some(_) => {
                tokenizer.input.unread();
                break;
            }
            None => break,
        }
    }
    value
}

/// Decodes an escape; the `\` has already been consumed.
///
/// 1–6 hex digits, optionally followed by one whitespace code point,
/// decode as a code point (replacement character when not a Unicode
/// scalar value). `\` at EOF decodes to the replacement character.
/// Anything else escapes to the literal following code point.
fn consume_escape(tokenizer: &mut Tokenizer) -> char {
    let first = match tokenizer.input.read() {
        Some(c) => c,
        None => return '\u{FFFD}',
    };
    if !is_hex_digit(first) {
        return first;
    }
    let mut value = first.to_digit(16).unwrap_or(0);
    for _ in 0..5 {
        match tokenizer.input.peek() {
            Some(c) if is_hex_digit(c) => {
                tokenizer.input.read();
                value = value * 16 + c.to_digit(16).unwrap_or(0);
            }
            _ => break,
        }
    }
    if tokenizer.input.peek().map_or(false, is_whitespace) {
        tokenizer.input.read();
    }
    std::char::from_u32(value).unwrap_or('\u{FFFD}')
}

// https://drafts.csswg.org/css-syntax-3/#consume-ident-like-token
fn consume_ident_like(tokenizer: &mut Tokenizer) -> Token {
    let value = consume_name(tokenizer);
    if tokenizer.input.peek() == Some('(') {
        tokenizer.input.read();
        if value.eq_ignore_ascii_case("url") {
            consume_url(tokenizer, value)
        } else {
            Function(value)
        }
    } else {
        Ident(value)
    }
}

/// Decides between `Function("url")` and an unquoted URL; `url(` has
/// already been consumed.
fn consume_url(tokenizer: &mut Tokenizer, name: String) -> Token {
    for _ in 0..2 {
        if tokenizer.input.peek().map_or(false, is_whitespace) {
            tokenizer.input.read();
        }
    }
    let quoted = match tokenizer.input.peek() {
        Some('"') | Some('\'') => true,
        Some(c) if is_whitespace(c) => {
            tokenizer.input.read();
            matches!(tokenizer.input.peek(), Some('"') | Some('\''))
        }
        _ => false,
    };
    if quoted {
        // The quoted value is left in the stream to be tokenized as a string.
        Function(name)
    } else {
        consume_unquoted_url(tokenizer)
    }
}

// https://drafts.csswg.org/css-syntax-3/#consume-url-token
fn consume_unquoted_url(tokenizer: &mut Tokenizer) -> Token {
    let mut value = String::new();
    while tokenizer.input.peek().map_or(false, is_whitespace) {
        tokenizer.input.read();
    }
    loop {
        match tokenizer.input.read() {
            // EOF before the closing paren is a parse error.
            None => return BadUrl(value),
            Some(')') => return Url(value),
            Some(c) if is_whitespace(c) => {
                while tokenizer.input.peek().map_or(false, is_whitespace) {
                    tokenizer.input.read();
                }
                return match tokenizer.input.read() {
                    Some(')') => Url(value),
                    Some(c) => {
                        value.push(c);
                        consume_bad_url(tokenizer, value)
                    }
                    None => BadUrl(value),
                };
            }
            Some(c) if c == '"' || c == '\'' || c == '(' || is_non_printable(c) => {
                return consume_bad_url(tokenizer, value)
            }
            Some('\\') => {
                if tokenizer.input.peek() == Some('\n') {
                    return consume_bad_url(tokenizer, value);
                }
                value.push(consume_escape(tokenizer));
            }
            Some(c) => value.push(c),
        }
    }
}

/// Consumes the remnants of a bad url up to the closing paren or EOF,
/// keeping the skipped text as the token's recovery value.
fn consume_bad_url(tokenizer: &mut Tokenizer, mut value: String) -> Token {
    loop {
        match tokenizer.input.read() {
            None | Some(')') => return BadUrl(value),
            // Skipping the escape lets an escaped `)` through without
            // ending the token.
            Some('\\') => value.push(consume_escape(tokenizer)),
            Some(c) => value.push(c),
        }
    }
}

// https://drafts.csswg.org/css-syntax-3/#consume-number
fn consume_number(tokenizer: &mut Tokenizer) -> (f64, NumberKind) {
    // [+-]? digit* ('.' digit+)? ([eE][+-]? digit+)?
    // Always called so that there is at least one digit present.
    let mut repr = String::new();
    let mut kind = NumberKind::Integer;

    if let Some(sign) = tokenizer.input.peek().filter(|&c| c == '+' || c == '-') {
        tokenizer.input.read();
        repr.push(sign);
    }
    consume_digits(tokenizer, &mut repr);

    if tokenizer.input.peek() == Some('.') && tokenizer.input.peek_offset(1).map_or(false, is_digit)
    {
        tokenizer.input.read();
        repr.push('.');
        consume_digits(tokenizer, &mut repr);
        kind = NumberKind::Number;
    }

    if let Some(e) = tokenizer.input.peek().filter(|&c| c == 'e' || c == 'E') {
        let has_exponent = match tokenizer.input.peek_offset(1) {
            Some(c) if is_digit(c) => true,
            Some(c) if c == '+' || c == '-' => {
                tokenizer.input.peek_offset(2).map_or(false, is_digit)
            }
            _ => false,
        };
        if has_exponent {
            tokenizer.input.read();
            repr.push(e);
            if let Some(sign) = tokenizer.input.peek().filter(|&c| c == '+' || c == '-') {
                tokenizer.input.read();
                repr.push(sign);
            }
            consume_digits(tokenizer, &mut repr);
            kind = NumberKind::Number;
        }
    }

    (repr.parse().unwrap_or(0.0), kind)
}

fn consume_digits(tokenizer: &mut Tokenizer, repr: &mut String) {
    while let Some(c) = tokenizer.input.peek().filter(|&c| is_digit(c)) {
        tokenizer.input.read();
        repr.push(c);
    }
}

// https://drafts.csswg.org/css-syntax-3/#consume-numeric-token
fn consume_numeric(tokenizer: &mut Tokenizer) -> Token {
    let (value, kind) = consume_number(tokenizer);
    if would_start_identifier(&tokenizer.input) {
        Dimension {
            value,
            kind,
            unit: Box::new(consume_ident_like(tokenizer)),
        }
    } else if tokenizer.input.peek() == Some('%') {
        tokenizer.input.read();
        Percentage { value }
    } else {
        Digit { value, kind }
    }
}

// https://drafts.csswg.org/css-syntax-3/#would-start-an-identifier
fn would_start_identifier(input: &RuneBuffer) -> bool {
    match input.peek() {
        Some('-') => match input.peek_offset(1) {
            Some(c) if is_name_start(c) || c == '-' => true,
            Some('\\') => is_valid_escape(input.peek_offset(1), input.peek_offset(2)),
            _ => false,
        },
        Some('\\') => is_valid_escape(input.peek(), input.peek_offset(1)),
        Some(c) => is_name_start(c),
        None => false,
    }
}

// https://drafts.csswg.org/css-syntax-3/#starts-with-a-valid-escape
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second != Some('\n')
}

fn is_non_printable(c: char) -> bool {
    matches!(c, '\x01'..='\x08' | '\x0B' | '\x0E'..='\x1F' | '\x7F')
}
