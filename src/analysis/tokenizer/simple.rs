//! Simple word/separator tokenizer without synonym awareness.

use super::Tokenizer;

use crate::analysis::separator::is_separator;
use crate::analysis::token::{Token, TokenKind, TokenStream, fold_char};
use crate::error::Result;

/// A tokenizer that splits text into word and separator runs.
///
/// This is the fallback tokenizer: it behaves exactly like
/// [`SynonymScanner`](super::SynonymScanner) with an empty candidate phrase
/// list. Token texts are case folded; offsets index into the original text.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    /// Create a new simple tokenizer.
    pub fn new() -> Self {
        SimpleTokenizer
    }

    /// Split `text` into an ordered, position-covering token sequence.
    pub fn split(&self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut kind = TokenKind::Separator;
        let mut start = 0usize;
        let mut value = String::new();

        for (offset, c) in text.char_indices() {
            let folded = fold_char(c);
            let next = if is_separator(folded) {
                TokenKind::Separator
            } else {
                TokenKind::Word
            };

            if next != kind {
                if !value.is_empty() {
                    let position = tokens.len();
                    tokens.push(Token::new(
                        std::mem::take(&mut value),
                        kind,
                        position,
                        start,
                        offset,
                    ));
                }
                kind = next;
                start = offset;
            }
            value.push(folded);
        }

        if !value.is_empty() {
            let position = tokens.len();
            tokens.push(Token::new(value, kind, position, start, text.len()));
        }

        tokens
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.split(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
