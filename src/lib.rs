/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![deny(missing_docs)]

/*!

Tokenization of [CSS Syntax Module Level 3](https://drafts.csswg.org/css-syntax-3/)
plus SCSS line comments, and extraction of `@import` dependency declarations,
for use by build-file generators that need a stylesheet's module dependency graph.

# Input

Everything is based on `Tokenizer` objects, which borrow a `&str` input.
If you have bytes (from a file, the network, or something), decode them first;
`FileInfo::from_file` does this for you with UTF-8 and replacement characters.

# Error tolerance

Tokenization never fails: malformed constructs degrade to `BadString`,
`BadUrl`, or `Delim` tokens and every input terminates in exactly one
`Token::Eof`. Malformed `@import` statements are dropped from the import
list and reported as `ImportError` values; they never abort the scan.

# Example

```rust
use scss_imports::extract_imports;

let extraction = extract_imports("@import \"b\", \"a\";");
assert_eq!(extraction.imports, vec!["a".to_owned(), "b".to_owned()]);
assert!(extraction.errors.is_empty());
```

*/

mod char_class;
mod fileinfo;
mod input;
mod serializer;
mod tokenizer;


pub use crate::fileinfo::{extract_imports, Extraction, FileInfo, ImportError};
pub use crate::input::RuneBuffer;
pub use crate::tokenizer::{CommentKind, NumberKind, Token, Tokenizer};
