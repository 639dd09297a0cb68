//! Synonym groups, registry, and query expansion.

pub mod expander;
pub mod expansion;
pub mod registry;

// Re-export commonly used types
pub use expander::AlternativesByPosition;
pub use expansion::{CombineWith, ExpandedQuery, Expansion};
pub use registry::SynonymRegistry;
