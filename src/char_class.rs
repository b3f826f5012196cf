/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// https://drafts.csswg.org/css-syntax-3/#tokenizer-definitions

/// U+0030 DIGIT ZERO (0) to U+0039 DIGIT NINE (9) inclusive.
#[inline]
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// A digit, or `a`-`f` / `A`-`F`.
#[inline]
pub(crate) fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// An uppercase or lowercase ASCII letter.
#[inline]
pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// A code point with a value equal to or greater than U+0080.
#[inline]
pub(crate) fn is_non_ascii(c: char) -> bool {
    c >= '\u{80}'
}

/// A letter, a non-ASCII code point, or U+005F LOW LINE (_).
#[inline]
pub(crate) fn is_name_start(c: char) -> bool {
    is_letter(c) || is_non_ascii(c) || c == '_'
}

/// A name-start code point, a digit, or U+002D HYPHEN-MINUS (-).
#[inline]
pub(crate) fn is_name(c: char) -> bool {
    is_name_start(c) || is_digit(c) || c == '-'
}

/// A newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE.
///
/// The input stream is newline-normalized before this is consulted,
/// so `\n` is the only newline form that can occur.
#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(!is_digit('/'));
        assert!(!is_digit(':'));
    }

    #[test]
    fn hex_digits() {
        for c in "0123456789abcdefABCDEF".chars() {
            assert!(is_hex_digit(c), "{:?} should be a hex digit", c);
        }
        assert!(!is_hex_digit('g'));
        assert!(!is_hex_digit('G'));
    }

    #[test]
    fn name_start() {
        assert!(is_name_start('a'));
        assert!(is_name_start('Z'));
        assert!(is_name_start('_'));
        assert!(is_name_start('é'));
        assert!(is_name_start('\u{80}'));
        assert!(!is_name_start('\u{7f}'));
        assert!(!is_name_start('-'));
        assert!(!is_name_start('4'));
    }

    #[test]
    fn name() {
        assert!(is_name('a'));
        assert!(is_name('4'));
        assert!(is_name('-'));
        assert!(is_name('_'));
        assert!(is_name('ü'));
        assert!(!is_name(' '));
        assert!(!is_name('('));
        assert!(!is_name('\\'));
    }

    #[test]
    fn whitespace() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        // Normalized away before the classifier ever sees them.
        assert!(!is_whitespace('\r'));
        assert!(!is_whitespace('\x0C'));
        assert!(!is_whitespace('a'));
    }
}
