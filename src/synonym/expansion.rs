//! Expansion result types handed to the downstream search engine.

use serde::{Deserialize, Serialize};

/// How the downstream engine combines the expanded query strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombineWith {
    /// Match any of the expanded queries.
    #[serde(rename = "OR")]
    Or,
}

/// A set of alternative query strings to be combined disjunctively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedQuery {
    /// Combination operator for the downstream engine.
    pub combine_with: CombineWith,

    /// Every reconstructed query string, in deterministic order.
    pub queries: Vec<String>,
}

impl ExpandedQuery {
    /// Create an OR combination over `queries`.
    pub fn or(queries: Vec<String>) -> Self {
        ExpandedQuery {
            combine_with: CombineWith::Or,
            queries,
        }
    }
}

/// The result of expanding a raw query string.
///
/// Serializes either to the verbatim input string or to the structured
/// `{"combineWith":"OR","queries":[...]}` object the downstream search
/// engine accepts as its query argument.
///
/// # Examples
///
/// ```
/// use synonymy::synonym::{Expansion, ExpandedQuery};
///
/// let unchanged = Expansion::Unchanged("no synonyms here".to_string());
/// assert!(!unchanged.is_expanded());
///
/// let expanded = Expansion::Expanded(ExpandedQuery::or(vec![
///     "car".to_string(),
///     "auto".to_string(),
/// ]));
/// assert!(expanded.is_expanded());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expansion {
    /// No synonym occurred (or the query was empty): the input unchanged.
    Unchanged(String),
    /// The ordered set of substituted query strings.
    Expanded(ExpandedQuery),
}

impl Expansion {
    /// True if substitution produced alternative queries.
    pub fn is_expanded(&self) -> bool {
        matches!(self, Expansion::Expanded(_))
    }

    /// The unchanged query string, if no expansion happened.
    pub fn as_unchanged(&self) -> Option<&str> {
        match self {
            Expansion::Unchanged(query) => Some(query),
            Expansion::Expanded(_) => None,
        }
    }

    /// The expanded query set, if expansion happened.
    pub fn as_expanded(&self) -> Option<&ExpandedQuery> {
        match self {
            Expansion::Unchanged(_) => None,
            Expansion::Expanded(expanded) => Some(expanded),
        }
    }
}
