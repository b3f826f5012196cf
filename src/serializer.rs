/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Stable `<TypeName "value">` tag rendering for tokens.
//!
//! The rendering distinguishes every token kind and payload, which is what
//! test assertions diff against. It is stable but not round-trippable
//! stylesheet text.

use std::fmt;

use crate::tokenizer::{CommentKind, NumberKind, Token};

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            NumberKind::Integer => "Integer",
            NumberKind::Number => "Number",
        })
    }
}

impl fmt::Display for CommentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            CommentKind::Line => "LineComment",
            CommentKind::Block => "BlockComment",
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Ident(value) => write!(f, "<Ident {:?}>", value),
            Token::Function(name) => write!(f, "<Function {:?}>", name),
            Token::Url(value) => write!(f, "<URL {:?}>", value),
            Token::BadUrl(value) => write!(f, "<BadURL {:?}>", value),
            Token::QuotedString(value) => write!(f, "<String {:?}>", value),
            Token::BadString => f.write_str("<BadString>"),
            Token::Hash(value) => write!(f, "<Hash {:?}>", value),
            Token::AtKeyword(ident) => write!(f, "<At {}>", ident),
            Token::Digit { value, kind } => {
                write!(f, "<Digit ({}) ", kind)?;
                write_numeric(f, *value, *kind)?;
                f.write_str(">")
            }
            Token::Percentage { value } => {
                f.write_str("<Percentage ")?;
                write_float(f, *value)?;
                f.write_str(">")
            }
            Token::Dimension { value, kind, unit } => {
                write!(f, "<Dimension ({}) ", kind)?;
                write_numeric(f, *value, *kind)?;
                write!(f, " {}>", unit)
            }
            Token::Delim(c) => write!(f, "<Delim {:?}>", c),
            Token::Comment { kind, value } => write!(f, "<Comment ({}) {:?}>", kind, value),
            Token::WhiteSpace(value) => write!(f, "<WhiteSpace {:?}>", value),
            Token::LeftParenthesis => f.write_str("<LeftParenthesis>"),
            Token::RightParenthesis => f.write_str("<RightParenthesis>"),
            Token::Comma => f.write_str("<Comma>"),
            Token::Colon => f.write_str("<Colon>"),
            Token::Semicolon => f.write_str("<Semicolon>"),
            Token::LeftSquareBracket => f.write_str("<LeftSquareBracket>"),
            Token::RightSquareBracket => f.write_str("<RightSquareBracket>"),
            Token::LeftCurlyBracket => f.write_str("<LeftCurlyBracket>"),
            Token::RightCurlyBracket => f.write_str("<RightCurlyBracket>"),
            Token::CDO => f.write_str("<CDO>"),
            Token::CDC => f.write_str("<CDC>"),
            Token::Eof => f.write_str("<EOF>"),
        }
    }
}

/// Integer-flagged values render through `itoa`, everything else through
/// `dtoa-short`'s shortest form.
fn write_numeric(f: &mut fmt::Formatter, value: f64, kind: NumberKind) -> fmt::Result {
    match kind {
        NumberKind::Integer => f.write_str(itoa::Buffer::new().format(value as i64)),
        NumberKind::Number => write_float(f, value),
    }
}

fn write_float(f: &mut fmt::Formatter, value: f64) -> fmt::Result {
    dtoa_short::write(f, value as f32)?;
    Ok(())
}
