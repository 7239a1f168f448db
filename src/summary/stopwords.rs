//! Stopword sets
//!
//! The summariser uses a small fixed English list. The keyword
//! ranker wants a fuller list, which comes from the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Words excluded from sentence scoring.
const SUMMARY_STOPWORDS: [&str; 65] = [
    "the", "a", "an", "and", "or", "but", "if", "then",
    "of", "on", "in", "to", "for", "by", "is", "are",
    "was", "were", "be", "being", "been", "as", "at",
    "that", "this", "with", "from", "it", "its", "they",
    "them", "their", "we", "our", "you", "your", "i", "me",
    "he", "she", "his", "her", "not", "no", "so", "such",
    "can", "may", "will", "would", "could", "should",
    "have", "has", "had", "do", "does", "did", "about",
    "into", "over", "also", "than", "there", "here",
];

/// A set of lowercase stopwords
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_list(&SUMMARY_STOPWORDS)
    }
}

impl StopwordSet {
    /// Create a stopword set from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// The full English list shipped with the `stop-words` crate
    pub fn english() -> Self {
        Self {
            words: get(LANGUAGE::English).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Check a token that is already lowercase
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Owned copy of the words, in no particular order
    pub fn to_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }
}
