// ============================================================
// Layer 6 - YAKE Keyword Ranker
// ============================================================
// Wraps YAKE (Yet Another Keyword Extractor) from the
// keyword_extraction crate behind the KeywordRanker trait.
//
// YAKE scores candidate keyphrases (n-grams of up to three
// words that neither start nor end with a stopword) from local
// statistics only: position, frequency, casing and context
// spread. No corpus or model file is needed.
//
// Lower YAKE scores mean MORE relevant phrases, so results are
// sorted ascending and the best phrase comes first.

use keyword_extraction::yake::{Yake, YakeParams};
use std::cmp::Ordering;

use crate::data::normalizer::TextNormalizer;
use crate::domain::traits::KeywordRanker;
use crate::summary::stopwords::StopwordSet;

pub struct YakeKeywordRanker {
    normalizer: TextNormalizer,
    stopwords:  Vec<String>,
}

impl Default for YakeKeywordRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl YakeKeywordRanker {
    /// Creates a ranker with the English stopword list
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            stopwords:  StopwordSet::english().to_vec(),
        }
    }

    /// Every candidate keyphrase with its YAKE score, best (lowest) first.
    pub fn ranked_phrases(&self, text: &str) -> Vec<(String, f32)> {
        let text = self.normalizer.normalize(text);
        if text.is_empty() {
            return Vec::new();
        }

        let yake       = Yake::new(YakeParams::WithDefaults(&text, &self.stopwords));
        let mut scored = yake.get_ranked_keyword_scores(usize::MAX);
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        scored
    }
}

impl KeywordRanker for YakeKeywordRanker {
    fn extract_keywords(&self, text: &str, top_k: usize) -> Vec<String> {
        if top_k == 0 {
            return Vec::new();
        }

        let scored = self.ranked_phrases(text);
        tracing::debug!("YAKE scored {} keyphrases, keeping {}", scored.len(), top_k);
        scored.into_iter().take(top_k).map(|(phrase, _)| phrase).collect()
    }
}
