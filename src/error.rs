//! Error types for the Synonymy library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SynonymyError`] enum. Registry validation failures carry the offending
//! phrase so callers can report it.
//!
//! # Examples
//!
//! ```
//! use synonymy::error::{Result, SynonymyError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynonymyError::InvalidGroupSize)
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Synonymy operations.
///
/// The first four variants are raised synchronously by group validation in
/// [`SynonymRegistry::add_group`](crate::synonym::SynonymRegistry::add_group)
/// and during registry construction; none of them leaves partial registry
/// state behind. The remaining variants surface I/O and parse failures from
/// [`SynonymRegistry::load_from_file`](crate::synonym::SynonymRegistry::load_from_file).
#[derive(Error, Debug)]
pub enum SynonymyError {
    /// A synonym group was supplied with fewer than two phrases.
    #[error("Synonym group must contain at least 2 phrases")]
    InvalidGroupSize,

    /// A synonym group contains a phrase that is empty after case folding.
    #[error("Synonym group contains an empty phrase")]
    EmptyPhrase,

    /// The same phrase appears more than once inside one group being added.
    #[error("Duplicate phrase `{0}` in synonym group")]
    DuplicateWithinGroup(String),

    /// A phrase being added already belongs to a different existing group.
    #[error("Phrase `{0}` already belongs to another group")]
    PhraseAlreadyGrouped(String),

    /// I/O error while reading a synonym group file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON error while parsing a synonym group file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with [`SynonymyError`].
pub type Result<T> = std::result::Result<T, SynonymyError>;
