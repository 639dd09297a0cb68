//! Synonym group registry and the query-expansion entry point.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::analysis::token::TokenKind;
use crate::analysis::tokenizer::SynonymScanner;
use crate::error::{Result, SynonymyError};
use crate::synonym::expander::{self, AlternativesByPosition};
use crate::synonym::expansion::Expansion;

/// Registry of synonym groups.
///
/// A group is a lexicographically sorted, lowercased list of at least two
/// distinct phrases that are mutually interchangeable. No phrase belongs
/// to more than one group. Groups are added and removed whole; "adding a
/// synonym to an existing group" is not supported.
///
/// The per-phrase membership index is derived state owned by the registry:
/// it is extended on every add and rebuilt on every remove, and is never
/// written from anywhere else.
///
/// The registry provides no internal locking. Callers sharing one instance
/// across threads must serialize [`add_group`](Self::add_group) and
/// [`remove_group`](Self::remove_group) against the read operations
/// themselves.
///
/// # Examples
///
/// ```
/// use synonymy::synonym::SynonymRegistry;
///
/// let mut registry = SynonymRegistry::new();
/// registry
///     .add_group(vec!["big".to_string(), "large".to_string()])
///     .unwrap();
///
/// assert_eq!(registry.synonyms_of("big"), vec!["large"]);
/// assert!(registry.expand_query("big dog").is_expanded());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SynonymRegistry {
    /// The registered groups, each sorted and lowercased.
    groups: Vec<Vec<String>>,
    /// Phrase -> index of its group in `groups`.
    membership: AHashMap<String, usize>,
}

impl SynonymRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        SynonymRegistry {
            groups: Vec::new(),
            membership: AHashMap::new(),
        }
    }

    /// Build a registry from an initial list of groups.
    ///
    /// Each group is validated and added exactly as
    /// [`add_group`](Self::add_group) would; the first validation error
    /// aborts construction.
    pub fn with_groups(groups: Vec<Vec<String>>) -> Result<Self> {
        let mut registry = SynonymRegistry::new();
        for group in groups {
            registry.add_group(group)?;
        }
        Ok(registry)
    }

    /// Load a registry from a JSON file holding an array of groups.
    ///
    /// Example format:
    /// ```json
    /// [
    ///   ["auto", "car", "vehicle"],
    ///   ["ai", "artificial intelligence"]
    /// ]
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let groups: Vec<Vec<String>> = serde_json::from_str(&content)?;
        Self::with_groups(groups)
    }

    /// Add a group of mutually interchangeable phrases.
    ///
    /// Phrases are case folded and stored in lexicographic order. Fails
    /// with [`SynonymyError::InvalidGroupSize`] for fewer than two
    /// phrases, [`SynonymyError::EmptyPhrase`] for an empty phrase,
    /// [`SynonymyError::DuplicateWithinGroup`] when the same folded phrase
    /// appears twice in the input, and
    /// [`SynonymyError::PhraseAlreadyGrouped`] when a phrase already
    /// belongs to an existing group. The registry is unchanged when any
    /// validation fails.
    pub fn add_group(&mut self, phrases: Vec<String>) -> Result<()> {
        if phrases.len() < 2 {
            return Err(SynonymyError::InvalidGroupSize);
        }

        let mut group: Vec<String> = phrases
            .iter()
            .map(|phrase| phrase.to_lowercase())
            .collect();
        if group.iter().any(|phrase| phrase.is_empty()) {
            return Err(SynonymyError::EmptyPhrase);
        }

        group.sort();
        if let Some(pair) = group.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(SynonymyError::DuplicateWithinGroup(pair[0].clone()));
        }
        if let Some(taken) = group
            .iter()
            .find(|phrase| self.membership.contains_key(*phrase))
        {
            return Err(SynonymyError::PhraseAlreadyGrouped(taken.clone()));
        }

        let index = self.groups.len();
        for phrase in &group {
            self.membership.insert(phrase.clone(), index);
        }
        debug!("registered synonym group {group:?}");
        self.groups.push(group);
        Ok(())
    }

    /// Remove the whole group containing `phrase`.
    ///
    /// The lookup is case insensitive; an unknown phrase is a no-op.
    pub fn remove_group(&mut self, phrase: &str) {
        let folded = phrase.to_lowercase();
        let Some(&index) = self.membership.get(&folded) else {
            return;
        };

        let removed = self.groups.remove(index);
        debug!("removed synonym group {removed:?}");
        self.rebuild_membership();
    }

    /// Rebuild the phrase index from the group list.
    fn rebuild_membership(&mut self) {
        self.membership.clear();
        for (index, group) in self.groups.iter().enumerate() {
            for phrase in group {
                self.membership.insert(phrase.clone(), index);
            }
        }
    }

    /// All synonyms of `word`: its group's phrase list minus `word`
    /// itself, in the group's sorted order. Empty if `word` is in no
    /// group; never contains `word`.
    pub fn synonyms_of(&self, word: &str) -> Vec<String> {
        let folded = word.to_lowercase();
        match self.membership.get(&folded) {
            Some(&index) => self.groups[index]
                .iter()
                .filter(|phrase| **phrase != folded)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every registered phrase, exactly once. Order is unspecified.
    pub fn candidate_phrases(&self) -> Vec<String> {
        self.membership.keys().cloned().collect()
    }

    /// Whether `word` belongs to any group (case insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.membership.contains_key(&word.to_lowercase())
    }

    /// The registered groups, each sorted and lowercased.
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// The number of registered groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the registry holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Expand `query` into the deterministic set of alternative queries.
    ///
    /// The query is scanned against the registered phrases; every synonym
    /// occurrence contributes its alternative list (the matched word
    /// first, then its groupmates in sorted order), and the expansion is
    /// the ordered cross-product over all occurrences. An empty query, or
    /// a query containing no registered phrase, is returned unchanged.
    pub fn expand_query(&self, query: &str) -> Expansion {
        if query.is_empty() {
            return Expansion::Unchanged(query.to_owned());
        }

        let scanner = SynonymScanner::new(self.candidate_phrases());
        let tokens = scanner.scan(query);

        let mut alternatives = AlternativesByPosition::new();
        for token in &tokens {
            if token.kind != TokenKind::Synonym {
                continue;
            }
            let others = self.synonyms_of(&token.text);
            if others.is_empty() {
                continue;
            }
            let mut choices = Vec::with_capacity(others.len() + 1);
            choices.push(token.text.clone());
            choices.extend(others);
            alternatives.insert(token.position, choices);
        }

        let expansion = expander::expand(query, &tokens, &alternatives);
        if let Expansion::Expanded(expanded) = &expansion {
            debug!("expanded query into {} alternatives", expanded.queries.len());
        }
        expansion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(phrases: &[&str]) -> Vec<String> {
        phrases.iter().map(|phrase| phrase.to_string()).collect()
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = SynonymRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.candidate_phrases().is_empty());
    }

    #[test]
    fn test_add_group_sorts_and_folds() {
        let mut registry = SynonymRegistry::new();
        registry
            .add_group(group(&["Vehicle", "Auto", "Car"]))
            .unwrap();

        assert_eq!(registry.groups(), [group(&["auto", "car", "vehicle"])]);
        assert!(registry.contains("auto"));
        assert!(registry.contains("CAR"));
        assert!(registry.contains("vehicle"));
    }

    #[test]
    fn test_add_group_rejects_small_groups() {
        let mut registry = SynonymRegistry::new();

        let err = registry.add_group(group(&[])).unwrap_err();
        assert!(matches!(err, SynonymyError::InvalidGroupSize));

        let err = registry.add_group(group(&["hi"])).unwrap_err();
        assert!(matches!(err, SynonymyError::InvalidGroupSize));
    }

    #[test]
    fn test_add_group_rejects_empty_phrases() {
        let mut registry = SynonymRegistry::new();
        let err = registry.add_group(group(&["hi", ""])).unwrap_err();
        assert!(matches!(err, SynonymyError::EmptyPhrase));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_group_rejects_duplicates_within_group() {
        let mut registry = SynonymRegistry::new();
        let err = registry.add_group(group(&["hi", "Hi"])).unwrap_err();
        assert!(matches!(err, SynonymyError::DuplicateWithinGroup(p) if p == "hi"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_group_rejects_phrases_in_other_groups() {
        let mut registry = SynonymRegistry::new();
        registry.add_group(group(&["hello", "hi"])).unwrap();

        let err = registry.add_group(group(&["hi", "hey"])).unwrap_err();
        assert!(matches!(err, SynonymyError::PhraseAlreadyGrouped(p) if p == "hi"));
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("hey"));
    }

    #[test]
    fn test_with_groups_aborts_on_first_error() {
        let result =
            SynonymRegistry::with_groups(vec![group(&["hello", "hi"]), group(&["hi", "hey"])]);
        assert!(matches!(
            result.unwrap_err(),
            SynonymyError::PhraseAlreadyGrouped(p) if p == "hi"
        ));
    }

    #[test]
    fn test_groups_accept_punctuation_and_whitespace() {
        let registry =
            SynonymRegistry::with_groups(vec![group(&["hello-world", "hi pal", "hi"])]).unwrap();
        assert_eq!(registry.groups(), [group(&["hello-world", "hi", "hi pal"])]);
    }

    #[test]
    fn test_remove_group_by_any_member() {
        let mut registry =
            SynonymRegistry::with_groups(vec![group(&["auto", "car", "vehicle"])]).unwrap();
        registry.remove_group("auto");

        assert!(registry.is_empty());
        assert!(!registry.contains("car"));
        assert!(registry.synonyms_of("car").is_empty());
    }

    #[test]
    fn test_remove_group_is_case_insensitive() {
        let mut registry =
            SynonymRegistry::with_groups(vec![group(&["auto", "car", "vehicle"])]).unwrap();
        registry.remove_group("Auto");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_group_unknown_phrase_is_noop() {
        let mut registry =
            SynonymRegistry::with_groups(vec![group(&["auto", "car", "vehicle"])]).unwrap();
        registry.remove_group("bike");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.synonyms_of("auto"), group(&["car", "vehicle"]));
    }

    #[test]
    fn test_remove_group_keeps_other_groups_consistent() {
        let mut registry = SynonymRegistry::with_groups(vec![
            group(&["auto", "car", "vehicle"]),
            group(&["Bike", "bicycle"]),
        ])
        .unwrap();
        registry.remove_group("auto");

        assert_eq!(registry.groups(), [group(&["bicycle", "bike"])]);
        assert_eq!(registry.synonyms_of("bike"), group(&["bicycle"]));
        assert_eq!(registry.synonyms_of("bicycle"), group(&["bike"]));
        assert!(registry.synonyms_of("car").is_empty());
    }

    #[test]
    fn test_synonyms_of_excludes_the_queried_word() {
        let registry =
            SynonymRegistry::with_groups(vec![group(&["auto", "car", "vehicle"])]).unwrap();

        assert_eq!(registry.synonyms_of("auto"), group(&["car", "vehicle"]));
        assert_eq!(registry.synonyms_of("car"), group(&["auto", "vehicle"]));
        assert_eq!(registry.synonyms_of("vehicle"), group(&["auto", "car"]));
    }

    #[test]
    fn test_synonyms_of_is_case_insensitive() {
        let registry =
            SynonymRegistry::with_groups(vec![group(&["auto", "car", "vehicle"])]).unwrap();
        assert_eq!(registry.synonyms_of("Car"), group(&["auto", "vehicle"]));
    }

    #[test]
    fn test_synonyms_of_unknown_word_is_empty() {
        let registry =
            SynonymRegistry::with_groups(vec![group(&["auto", "car", "vehicle"])]).unwrap();
        assert!(registry.synonyms_of("bike").is_empty());
    }

    #[test]
    fn test_candidate_phrases_lists_every_phrase_once() {
        let registry = SynonymRegistry::with_groups(vec![
            group(&["auto", "car", "vehicle"]),
            group(&["hello!", "hi"]),
        ])
        .unwrap();

        let mut phrases = registry.candidate_phrases();
        phrases.sort();
        assert_eq!(
            phrases,
            group(&["auto", "car", "hello!", "hi", "vehicle"])
        );
    }

    #[test]
    fn test_expand_query_empty_is_unchanged() {
        let registry =
            SynonymRegistry::with_groups(vec![group(&["auto", "car", "vehicle"])]).unwrap();
        assert_eq!(registry.expand_query(""), Expansion::Unchanged(String::new()));
    }

    #[test]
    fn test_expand_query_without_matches_is_unchanged() {
        let registry =
            SynonymRegistry::with_groups(vec![group(&["auto", "car", "vehicle"])]).unwrap();
        assert_eq!(
            registry.expand_query("no synonyms here"),
            Expansion::Unchanged("no synonyms here".to_string())
        );
    }

    #[test]
    fn test_expand_query_single_synonym() {
        let registry =
            SynonymRegistry::with_groups(vec![group(&["auto", "car", "vehicle"])]).unwrap();
        let expansion = registry.expand_query("car");

        let expanded = expansion.as_expanded().unwrap();
        assert_eq!(expanded.queries, group(&["car", "auto", "vehicle"]));
    }
}
