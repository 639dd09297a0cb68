//! Query text analysis: tokens, separator classification, and tokenizers.
//!
//! The synonym-aware [`SynonymScanner`](tokenizer::SynonymScanner) is the
//! scanner the registry uses; [`SimpleTokenizer`](tokenizer::SimpleTokenizer)
//! is the synonym-unaware fallback.

pub mod separator;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::{IntoTokenStream, Token, TokenKind, TokenStream};
pub use tokenizer::{SimpleTokenizer, SynonymScanner, Tokenizer};
