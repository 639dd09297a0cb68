//! # Synonymy
//!
//! Synonym-based query expansion for full-text search.
//!
//! Synonymy expands a free-text query into the set of alternative query
//! strings obtained by substituting user-defined synonyms, so that a
//! downstream search engine can match any of several interchangeable terms.
//! It is a pre-processing stage: indexing, ranking, and result scoring stay
//! with the search engine behind it.
//!
//! ## Features
//!
//! - Whole-group synonym registry with case-insensitive membership
//! - Single-pass scanner recognizing single- and multi-word phrases,
//!   including overlapping phrase boundaries
//! - Deterministic, ordered cross-product expansion
//! - Result type serializing to the `{"combineWith":"OR","queries":[...]}`
//!   shape search engines accept as a structured query
//!
//! ## Example
//!
//! ```
//! use synonymy::synonym::SynonymRegistry;
//!
//! let registry = SynonymRegistry::with_groups(vec![
//!     vec!["auto".to_string(), "car".to_string(), "vehicle".to_string()],
//! ])
//! .unwrap();
//!
//! let expansion = registry.expand_query("car");
//! let expanded = expansion.as_expanded().unwrap();
//! assert_eq!(expanded.queries, vec!["car", "auto", "vehicle"]);
//! ```

pub mod analysis;
pub mod error;
pub mod synonym;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
