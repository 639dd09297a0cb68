//! Deterministic cross-product expansion over scanned tokens.

use std::collections::BTreeMap;

use crate::analysis::token::Token;
use crate::synonym::expansion::{ExpandedQuery, Expansion};

/// Alternative query terms keyed by token position, ascending.
///
/// Each entry lists the matched word first, followed by its groupmates in
/// the group's sorted order.
pub type AlternativesByPosition = BTreeMap<usize, Vec<String>>;

/// Expand `query` into the ordered cross-product of per-position
/// alternatives.
///
/// With no active positions the query is returned unchanged. Otherwise
/// positions are processed in ascending token order: the combination list
/// is seeded with the first position's alternatives, and every further
/// position multiplies the list, iterating its own alternatives in the
/// outer loop and the accumulated combinations in the inner loop. The
/// nested-loop order is observable in the output and callers rely on it.
pub fn expand(
    query: &str,
    tokens: &[Token],
    alternatives: &AlternativesByPosition,
) -> Expansion {
    if alternatives.is_empty() {
        return Expansion::Unchanged(query.to_owned());
    }

    let positions: Vec<usize> = alternatives.keys().copied().collect();

    let mut combinations: Vec<Vec<&str>> = Vec::new();
    for (slot, position) in positions.iter().enumerate() {
        let choices = &alternatives[position];
        if slot == 0 {
            combinations = choices.iter().map(|choice| vec![choice.as_str()]).collect();
        } else {
            let mut extended = Vec::with_capacity(combinations.len() * choices.len());
            for choice in choices {
                for combination in &combinations {
                    let mut next = combination.clone();
                    next.push(choice);
                    extended.push(next);
                }
            }
            combinations = extended;
        }
    }

    let queries = combinations
        .iter()
        .map(|combination| reconstruct(tokens, &positions, combination))
        .collect();

    Expansion::Expanded(ExpandedQuery::or(queries))
}

/// Rebuild one query string, substituting the chosen alternative at every
/// active position and emitting every other token's text verbatim.
fn reconstruct(tokens: &[Token], positions: &[usize], combination: &[&str]) -> String {
    let mut query = String::new();
    for token in tokens {
        match positions.binary_search(&token.position) {
            Ok(slot) => query.push_str(combination[slot]),
            Err(_) => query.push_str(&token.text),
        }
    }
    query
}
