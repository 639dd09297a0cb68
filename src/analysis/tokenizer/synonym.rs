//! Synonym-aware scanner implementation.

use log::trace;

use super::Tokenizer;

use crate::analysis::separator::is_separator;
use crate::analysis::token::{Token, TokenKind, TokenStream, fold_char};
use crate::error::Result;

/// A single-pass scanner that recognizes registered synonym phrases
/// embedded in free text while splitting everything else into word and
/// separator runs.
///
/// The scanner walks the case-folded input left to right with three states
/// (separator, word, synonym) and no backtracking. It keeps exactly one
/// in-flight token and corrects it as new characters arrive: a phrase
/// committed at a word boundary may later be extended to a longer
/// registered phrase, or demoted to an ordinary word when the text
/// continues past the phrase without a separator.
///
/// # Examples
///
/// ```
/// use synonymy::analysis::tokenizer::SynonymScanner;
///
/// let scanner = SynonymScanner::new(["artificial intelligence"]);
/// let tokens = scanner.scan("the artificial intelligence era");
///
/// assert_eq!(tokens[2].text, "artificial intelligence");
/// assert!(tokens[2].is_synonym());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SynonymScanner {
    /// Candidate phrases, case folded. Enumeration order breaks ties when
    /// several phrases match at the same boundary.
    phrases: Vec<String>,
}

impl SynonymScanner {
    /// Create a scanner for the given candidate phrases.
    ///
    /// Phrases are case folded on construction; empty phrases are
    /// discarded, since they would match at every boundary without
    /// consuming input.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|phrase| phrase.as_ref().to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect();

        SynonymScanner { phrases }
    }

    /// The candidate phrases this scanner recognizes.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Scan `text` into an ordered, position-covering token sequence.
    ///
    /// Tokens are contiguous and non-overlapping: concatenating their
    /// texts reproduces the case-folded input, and each token's offsets
    /// index into the original string. Empty input produces no tokens.
    pub fn scan(&self, text: &str) -> Vec<Token> {
        let folded: Vec<(usize, char)> = text
            .char_indices()
            .map(|(offset, c)| (offset, fold_char(c)))
            .collect();

        let mut tokens: Vec<Token> = Vec::new();
        // The in-flight token: kind, start index and length in `folded`.
        let mut kind = TokenKind::Separator;
        let mut start = 0usize;
        let mut len = 0usize;

        let mut i = 0usize;
        while i < folded.len() {
            let (_, c) = folded[i];
            match kind {
                TokenKind::Separator => {
                    if let Some(matched) = self.match_phrase_at(&folded, i, 0) {
                        trace!("phrase match at byte {}", folded[i].0);
                        flush(&mut tokens, text, &folded, kind, start, len);
                        kind = TokenKind::Synonym;
                        start = i;
                        len = matched;
                        i += matched;
                    } else if is_separator(c) {
                        len += 1;
                        i += 1;
                    } else {
                        flush(&mut tokens, text, &folded, kind, start, len);
                        kind = TokenKind::Word;
                        start = i;
                        len = 1;
                        i += 1;
                    }
                }
                TokenKind::Synonym => {
                    if is_separator(c) {
                        flush(&mut tokens, text, &folded, kind, start, len);
                        kind = TokenKind::Separator;
                        start = i;
                        len = 1;
                        i += 1;
                    } else if let Some(extended) = self.match_phrase_at(&folded, start, len) {
                        // A longer phrase covers the matched text and the
                        // characters that follow it.
                        trace!("phrase extended at byte {}", folded[start].0);
                        i += extended - len;
                        len = extended;
                    } else {
                        // A phrase prefix of a longer ordinary word: the
                        // token absorbs characters as a word from here on.
                        kind = TokenKind::Word;
                        len += 1;
                        i += 1;
                    }
                }
                TokenKind::Word => {
                    if is_separator(c) {
                        flush(&mut tokens, text, &folded, kind, start, len);
                        kind = TokenKind::Separator;
                        start = i;
                        len = 1;
                        i += 1;
                    } else {
                        len += 1;
                        i += 1;
                    }
                }
            }
        }

        flush(&mut tokens, text, &folded, kind, start, len);
        tokens
    }

    /// Find the first candidate phrase, in enumeration order, that is a
    /// literal prefix of `folded[at..]` and longer than `longer_than`
    /// characters. Returns the matched length in characters.
    fn match_phrase_at(
        &self,
        folded: &[(usize, char)],
        at: usize,
        longer_than: usize,
    ) -> Option<usize> {
        self.phrases.iter().find_map(|phrase| {
            let matched = phrase_prefix_len(folded, at, phrase)?;
            (matched > longer_than).then_some(matched)
        })
    }
}

/// Match `phrase` against `folded[at..]`, returning its length in
/// characters if every phrase character matches.
fn phrase_prefix_len(folded: &[(usize, char)], at: usize, phrase: &str) -> Option<usize> {
    let mut len = 0usize;
    for expected in phrase.chars() {
        match folded.get(at + len) {
            Some(&(_, c)) if c == expected => len += 1,
            _ => return None,
        }
    }
    Some(len)
}

/// Emit the in-flight token if it is non-empty.
fn flush(
    tokens: &mut Vec<Token>,
    text: &str,
    folded: &[(usize, char)],
    kind: TokenKind,
    start: usize,
    len: usize,
) {
    if len == 0 {
        return;
    }
    let value: String = folded[start..start + len].iter().map(|&(_, c)| c).collect();
    let start_offset = folded[start].0;
    let end_offset = folded.get(start + len).map_or(text.len(), |&(offset, _)| offset);
    let position = tokens.len();
    tokens.push(Token::new(value, kind, position, start_offset, end_offset));
}

impl Tokenizer for SynonymScanner {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.scan(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "synonym"
    }
}
