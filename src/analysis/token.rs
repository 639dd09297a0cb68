//! Token types produced by the tokenizers.
//!
//! A [`Token`] is a typed span over the scanned query string. Tokens are
//! produced in left-to-right, non-overlapping, position-covering order:
//! concatenating the `text` of every token reproduces the case-folded
//! input exactly, and each token's offsets index into the original,
//! pre-folding string.
//!
//! # Examples
//!
//! ```
//! use synonymy::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("hello", TokenKind::Word, 0, 0, 5);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.kind, TokenKind::Word);
//! assert_eq!(token.start_offset, 0);
//! assert_eq!(token.end_offset, 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a scanned span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A maximal run of word characters not recognized as a synonym phrase.
    Word,
    /// A maximal run of whitespace and/or punctuation characters.
    Separator,
    /// A span whose text exactly matches a registered synonym phrase.
    Synonym,
}

/// A single typed span over the scanned query string.
///
/// `text` holds the case-folded characters the span covers, while
/// `start_offset`/`end_offset` are byte offsets into the original string,
/// so the original-cased substring can be recovered by slicing the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The matched text, lowercased.
    pub text: String,

    /// What kind of span this token covers.
    pub kind: TokenKind,

    /// The index of this token in the token sequence (0-based).
    pub position: usize,

    /// The byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text (exclusive).
    pub end_offset: usize,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(
        text: S,
        kind: TokenKind,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            kind,
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this token is a word.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Check if this token is a separator run.
    pub fn is_separator(&self) -> bool {
        self.kind == TokenKind::Separator
    }

    /// Check if this token is a recognized synonym phrase.
    pub fn is_synonym(&self) -> bool {
        self.kind == TokenKind::Synonym
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

/// Case-fold a single character.
///
/// Multi-character lowercase expansions are truncated to their first
/// character so the folded text stays aligned with the original characters.
pub(crate) fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
