// ============================================================
// Layer 5 - Frequency Scorer
// ============================================================
// Word-frequency sentence scoring.
//
//   1. Lowercase the whole text and pull out every run of
//      letters, digits and underscores. Combining marks are not
//      word characters: a decomposed "Cafe\u{301}" gives "cafe"
//   2. Count each token, skipping stopwords entirely
//   3. A sentence's score is the sum of the counts of its own
//      tokens; tokens missing from the table add 0
//
// Example:
//   text  = "Cats nap. Cats purr."
//   table = { cats: 2, nap: 1, purr: 1 }
//   score("Cats nap.") = 2 + 1 = 3
//
// Long sentences full of frequent words win. That bias is the
// whole heuristic; no length normalisation is applied.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use crate::summary::stopwords::StopwordSet;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));

/// Lowercase `text`, then yield its word tokens in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Token → occurrence count, stopwords excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    /// Count occurrences. 0 for stopwords and unseen tokens.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Build the frequency table for a whole text.
pub fn build_frequencies(text: &str, stopwords: &StopwordSet) -> FrequencyTable {
    let mut counts: FxHashMap<String, u64> = FxHashMap::default();

    for token in tokenize(text) {
        if stopwords.contains(&token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    FrequencyTable { counts }
}

/// Sum of table counts over the sentence's tokens.
pub fn score_sentence(sentence: &str, table: &FrequencyTable) -> u64 {
    tokenize(sentence).iter().map(|t| table.get(t)).sum()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Hello, WORLD! snake_case 42x"), vec!["hello", "world", "snake_case", "42x"]);
    }

    #[test]
    fn test_combining_marks_split_tokens() {
        assert_eq!(tokenize("Cafe\u{301} bar"), vec!["cafe", "bar"]);
        // Precomposed letters stay inside the word
        assert_eq!(tokenize("Café bar"), vec!["café", "bar"]);
    }

    #[test]
    fn test_counts_are_case_folded() {
        let table = build_frequencies("Cats cats CATS dogs", &StopwordSet::from_list(&[]));
        assert_eq!(table.get("cats"), 3);
        assert_eq!(table.get("dogs"), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_stopwords_are_absent_not_zero() {
        let table = build_frequencies("The cat and the hat", &StopwordSet::default());
        assert!(!table.counts.contains_key("the"));
        assert!(!table.counts.contains_key("and"));
        assert_eq!(table.get("cat"), 1);
        assert_eq!(table.get("hat"), 1);
    }

    #[test]
    fn test_sentence_score_sums_frequencies() {
        let text  = "Cats nap. Cats purr.";
        let table = build_frequencies(text, &StopwordSet::default());
        assert_eq!(score_sentence("Cats nap.", &table), 3);
        assert_eq!(score_sentence("Cats purr.", &table), 3);
        // Unknown words and stopwords contribute nothing
        assert_eq!(score_sentence("The zebra", &table), 0);
    }

    #[test]
    fn test_repeated_token_in_sentence_counts_each_time() {
        let table = build_frequencies("go go stop", &StopwordSet::from_list(&[]));
        assert_eq!(score_sentence("go go", &table), 4);
    }

    #[test]
    fn test_all_stopword_text_gives_empty_table() {
        let table = build_frequencies("the and of it", &StopwordSet::default());
        assert!(table.is_empty());
        assert_eq!(score_sentence("the and of it", &table), 0);
    }

    #[test]
    fn test_empty_text() {
        assert!(build_frequencies("", &StopwordSet::default()).is_empty());
        assert_eq!(score_sentence("", &FrequencyTable::default()), 0);
    }
}
