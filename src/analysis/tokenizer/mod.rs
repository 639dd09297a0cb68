//! Tokenizer implementations for query scanning.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod simple;
pub mod synonym;

// Re-export all tokenizers for convenient access
pub use simple::SimpleTokenizer;
pub use synonym::SynonymScanner;
