/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! `@import` extraction over the token stream, and the per-file record
//! handed to build-file generators.

use std::fs;
use std::path::{Path, PathBuf};

use smallvec::SmallVec;

use crate::tokenizer::{Token, Tokenizer};

/// Metadata extracted from a single `.sass`/`.scss` file.
///
/// This is the sole interface to the directory walkers and build-file
/// emitters downstream: plain data, no behavior, created once per file.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path of the scanned file.
    pub path: PathBuf,
    /// File name within its directory.
    pub name: String,
    /// The paths named by well-formed `@import` statements, sorted
    /// lexicographically.
    pub imports: Vec<String>,
}

impl FileInfo {
    /// Reads and scans `name` under `dir`.
    ///
    /// This never fails: an unreadable file is reported once through the
    /// `log` facade and yields a `FileInfo` with empty imports, and each
    /// malformed `@import` statement inside a readable file gets its own
    /// diagnostic line. Bytes are decoded as UTF-8 with replacement
    /// characters for invalid sequences.
    pub fn from_file(dir: &Path, name: &str) -> FileInfo {
        let path = dir.join(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("{}: error reading sass file: {}", path.display(), err);
                return FileInfo {
                    path,
                    name: name.to_owned(),
                    imports: Vec::new(),
                };
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        let extraction = extract_imports(&text);
        for error in &extraction.errors {
            log::warn!("{}: {}", path.display(), error);
        }
        FileInfo {
            path,
            name: name.to_owned(),
            imports: extraction.imports,
        }
    }
}

/// A recoverable syntax error found while extracting `@import` statements.
///
/// The offending statement is dropped from the import list; scanning of
/// the rest of the file continues unaffected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// `@import` was not followed by a quoted path.
    #[error("expected a quoted import path after @import, found {found}")]
    ExpectedImportPath {
        /// Tag rendering of the offending token.
        found: String,
    },
    /// An import statement was not terminated with `;`.
    #[error("expected `;` to end the @import statement, found {found}")]
    ExpectedSemicolon {
        /// Tag rendering of the offending token.
        found: String,
    },
}

/// The result of scanning one stylesheet for `@import` statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extraction {
    /// Paths from well-formed statements, sorted lexicographically
    /// (code point order).
    pub imports: Vec<String>,
    /// One record per malformed statement, in encounter order.
    pub errors: Vec<ImportError>,
}

/// Scans `input` for `@import "path" (, "path")* ;` statements.
///
/// Whitespace tokens are skipped between the meaningful tokens of a
/// statement; comments are not, so a comment inside a statement makes it
/// malformed. Only the quoted form is recognized — `@import url(…)` and
/// the legacy bare-identifier form are not import declarations here.
pub fn extract_imports(input: &str) -> Extraction {
    let tokens = Tokenizer::new(input).scan_all();
    let mut extraction = Extraction::default();

    let mut i = 0;
    while i < tokens.len() {
        let at_import = match &tokens[i] {
            Token::AtKeyword(inner) => matches!(&**inner, Token::Ident(name) if name == "import"),
            _ => false,
        };
        if !at_import {
            i += 1;
            continue;
        }

        // The statement's paths are held back until the terminating
        // semicolon proves the statement well-formed.
        let mut paths: SmallVec<[String; 2]> = SmallVec::new();
        let mut cursor = skip_whitespace(&tokens, i + 1);
        match &tokens[cursor] {
            Token::QuotedString(value) => {
                paths.push(value.clone());
                cursor += 1;
            }
            other => {
                extraction.errors.push(ImportError::ExpectedImportPath {
                    found: other.to_string(),
                });
                // Abandon the statement; the offending token is re-examined
                // by the outer scan.
                i = cursor;
                continue;
            }
        }

        loop {
            let comma = skip_whitespace(&tokens, cursor);
            if tokens[comma] != Token::Comma {
                cursor = comma;
                break;
            }
            let path = skip_whitespace(&tokens, comma + 1);
            match &tokens[path] {
                Token::QuotedString(value) => {
                    paths.push(value.clone());
                    cursor = path + 1;
                }
                // A comma not followed by a string ends the list without
                // error; the semicolon check decides the statement's fate.
                _ => {
                    cursor = path;
                    break;
                }
            }
        }

        match &tokens[cursor] {
            Token::Semicolon => {
                extraction.imports.extend(paths);
                i = cursor + 1;
            }
            other => {
                extraction.errors.push(ImportError::ExpectedSemicolon {
                    found: other.to_string(),
                });
                i = cursor;
            }
        }
    }

    extraction.imports.sort();
    extraction
}

/// Index of the first non-whitespace token at or after `i`. The stream's
/// trailing `Eof` token guarantees this stays in bounds.
fn skip_whitespace(tokens: &[Token], mut i: usize) -> usize {
    while matches!(tokens.get(i), Some(Token::WhiteSpace(_))) {
        i += 1;
    }
    i
}
