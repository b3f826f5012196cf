/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// https://drafts.csswg.org/css-syntax-3/#input-preprocessing

/// A stream of code points over borrowed input, with one-slot pushback and
/// arbitrary fixed-offset lookahead.
///
/// Preprocessing happens on the fly rather than in a separate pass:
/// every `read` and `peek` sees `\r\n`, a lone `\r`, and `\x0C` as `\n`,
/// and U+0000 NULL as U+FFFD REPLACEMENT CHARACTER. Peeking is
/// side-effect-free; peeking any distance ahead and then reading
/// reproduces the normalized stream exactly.
#[derive(Clone)]
pub struct RuneBuffer<'a> {
    input: &'a str,

    /// Counted in bytes, not code points. From 0.
    position: usize,

    /// Byte length of the last `read`, for `unread`. Cleared by `unread`
    /// and by reading EOF.
    last_advance: Option<usize>,
}

impl<'a> RuneBuffer<'a> {
    /// Creates a buffer over the given input.
    #[inline]
    pub fn new(input: &str) -> RuneBuffer {
        RuneBuffer {
            input,
            position: 0,
            last_advance: None,
        }
    }

    /// Decodes the normalized code point starting at `position`,
    /// returning it with the number of input bytes it spans.
    fn decode_at(&self, position: usize) -> Option<(char, usize)> {
        let rest = &self.input[position..];
        let c = rest.chars().next()?;
        Some(match c {
            '\r' => {
                if rest[1..].starts_with('\n') {
                    ('\n', 2)
                } else {
                    ('\n', 1)
                }
            }
            '\x0C' => ('\n', 1),
            '\0' => ('\u{FFFD}', 1),
            _ => (c, c.len_utf8()),
        })
    }

    /// Consumes and returns the next code point, or `None` at end of input.
    pub fn read(&mut self) -> Option<char> {
        match self.decode_at(self.position) {
            Some((c, len)) => {
                self.position += len;
                self.last_advance = Some(len);
                Some(c)
            }
            None => {
                self.last_advance = None;
                None
            }
        }
    }

    /// Pushes back the code point returned by the last `read`.
    ///
    /// # Panics
    ///
    /// Panics if called twice without an intervening successful `read`,
    /// or right after `read` returned `None`. That is a caller bug, not
    /// an input condition.
    pub fn unread(&mut self) {
        let len = self
            .last_advance
            .take()
            .expect("unread called without a preceding read");
        self.position -= len;
    }

    /// Returns the next code point without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.peek_offset(0)
    }

    /// Returns the code point `offset` positions ahead without consuming
    /// anything, or `None` if the stream ends first.
    pub fn peek_offset(&self, offset: usize) -> Option<char> {
        let mut position = self.position;
        for _ in 0..offset {
            let (_, len) = self.decode_at(position)?;
            position += len;
        }
        self.decode_at(position).map(|(c, _)| c)
    }

    /// Returns the next `n` code points without consuming anything.
    /// The result is shorter than `n` if the stream ends first.
    pub fn peek_n(&self, n: usize) -> String {
        let mut position = self.position;
        let mut out = String::new();
        for _ in 0..n {
            match self.decode_at(position) {
                Some((c, len)) => {
                    out.push(c);
                    position += len;
                }
                None => break,
            }
        }
        out
    }

    /// True if the next `read` would return `None`.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }
}
