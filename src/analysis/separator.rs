//! Separator character classification shared by the tokenizers.
//!
//! A separator is any Unicode whitespace or punctuation character
//! (including newline and carriage return); every other character is a
//! word character.

use std::sync::LazyLock;

use regex::Regex;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}").expect("punctuation character class compiles"));

/// Check whether `c` is a separator character.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION.is_match(c.encode_utf8(&mut [0u8; 4]))
}
