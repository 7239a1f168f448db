//! Frequency keyword ranker
//!
//! A deterministic `KeywordRanker` built on the same tokeniser as the
//! sentence scorer. Words are ranked by how often they occur; ties go
//! to the word that appears first. Useful offline and in tests, where
//! YAKE's statistical scores would make assertions brittle.

use rustc_hash::FxHashMap;

use crate::data::normalizer::TextNormalizer;
use crate::domain::traits::KeywordRanker;
use crate::summary::scorer::tokenize;
use crate::summary::stopwords::StopwordSet;

/// Words shorter than this are never keywords
const MIN_KEYWORD_CHARS: usize = 3;

#[derive(Debug, Clone)]
pub struct FrequencyKeywordRanker {
    normalizer: TextNormalizer,
    stopwords:  StopwordSet,
}

impl Default for FrequencyKeywordRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyKeywordRanker {
    /// Ranker that filters the full English stopword list
    pub fn new() -> Self {
        Self::with_stopwords(StopwordSet::english())
    }

    pub fn with_stopwords(stopwords: StopwordSet) -> Self {
        Self { normalizer: TextNormalizer::new(), stopwords }
    }
}

impl KeywordRanker for FrequencyKeywordRanker {
    fn extract_keywords(&self, text: &str, top_k: usize) -> Vec<String> {
        let text = self.normalizer.normalize(text);
        if text.is_empty() || top_k == 0 {
            return Vec::new();
        }

        // token → (count, first position)
        let mut stats: FxHashMap<String, (u64, usize)> = FxHashMap::default();
        for (pos, token) in tokenize(&text).into_iter().enumerate() {
            if token.chars().count() < MIN_KEYWORD_CHARS
                || token.chars().all(|c| c.is_ascii_digit())
                || self.stopwords.contains(&token)
            {
                continue;
            }
            stats.entry(token).or_insert((0, pos)).0 += 1;
        }

        let mut ranked: Vec<(String, (u64, usize))> = stats.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

        ranked.into_iter().take(top_k).map(|(word, _)| word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_by_frequency_then_first_seen() {
        let ranker = FrequencyKeywordRanker::with_stopwords(StopwordSet::default());
        let text   = "Rust compiles fast. Rust is safe. Cargo builds Rust. Cargo tests.";
        assert_eq!(
            ranker.extract_keywords(text, 3),
            vec!["rust", "cargo", "compiles"]
        );
    }

    #[test]
    fn test_skips_stopwords_short_words_and_numbers() {
        let ranker = FrequencyKeywordRanker::with_stopwords(StopwordSet::default());
        let kws    = ranker.extract_keywords("The ox and the 2024 budget of an ox", 10);
        assert_eq!(kws, vec!["budget"]);
    }

    #[test]
    fn test_empty_text_and_zero_k() {
        let ranker = FrequencyKeywordRanker::new();
        assert!(ranker.extract_keywords("", 5).is_empty());
        assert!(ranker.extract_keywords("plenty of words here", 0).is_empty());
    }

    #[test]
    fn test_top_k_limits_output() {
        let ranker = FrequencyKeywordRanker::with_stopwords(StopwordSet::from_list(&[]));
        let kws    = ranker.extract_keywords("alpha beta gamma delta epsilon", 2);
        assert_eq!(kws, vec!["alpha", "beta"]);
    }
}
