// ============================================================
// Layer 5 - Summarizer Pipeline
// ============================================================
// Wires the pure pipeline stages together:
//
//   Step 1: Cap the input size           (max_input_bytes)
//   Step 2: Normalise                    (Layer 4 - data)
//   Step 3: Segment into sentences       (Layer 4 - data)
//   Step 4: Passthrough if few sentences
//   Step 5: Build the frequency table    (scorer)
//   Step 6: Score every sentence         (scorer)
//   Step 7: Select the top N             (selector)
//   Step 8: Join into one string         (assembler)
//
// No state is kept between calls and nothing here can fail:
// empty text, text without terminals and all-stopword text
// all degrade to an empty or single-sentence summary.

use serde::{Deserialize, Serialize};

use crate::data::normalizer::TextNormalizer;
use crate::data::segmenter::SentenceSegmenter;
use crate::summary::assembler::assemble;
use crate::summary::scorer::{build_frequencies, score_sentence};
use crate::summary::selector::{select_top, DEFAULT_MAX_SENTENCES};
use crate::summary::stopwords::StopwordSet;

/// Raw text beyond this many bytes is ignored (8 MiB).
/// Scoring cost grows with sentences × sentence length.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 8 * 1024 * 1024;

// ─── Summary Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Maximum number of sentences in the summary
    pub max_sentences:   usize,

    /// Input ceiling in bytes; longer input is truncated first
    pub max_input_bytes: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_sentences:   DEFAULT_MAX_SENTENCES,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

// ─── Summarizer ───────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct Summarizer {
    config:     SummaryConfig,
    normalizer: TextNormalizer,
    segmenter:  SentenceSegmenter,
    stopwords:  StopwordSet,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummaryConfig::default())
    }
}

impl Summarizer {
    pub fn new(config: SummaryConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::new(),
            segmenter:  SentenceSegmenter::new(),
            stopwords:  StopwordSet::default(),
        }
    }

    /// Extractive summary of `raw`: the highest-scoring sentences,
    /// in document order, joined with single spaces.
    pub fn summarize(&self, raw: &str) -> String {
        let text = self.prepare(raw);
        if text.is_empty() {
            return String::new();
        }

        let sentences = self.segmenter.segment(&text);
        let max       = self.config.max_sentences;

        if sentences.len() <= max {
            return assemble(&sentences);
        }

        let freq = build_frequencies(&text, &self.stopwords);
        if freq.is_empty() {
            // Every score would be 0; the stable order keeps the leading sentences
            tracing::debug!("No scoring words, keeping the first {} sentences", max);
            return assemble(&sentences[..max]);
        }

        let scores: Vec<u64> = sentences
            .iter()
            .map(|s| score_sentence(s, &freq))
            .collect();

        tracing::debug!(
            "Scored {} sentences against {} distinct words, keeping {}",
            sentences.len(),
            freq.len(),
            max
        );

        assemble(&select_top(&sentences, &scores, max))
    }

    /// The normalised text split into sentences, for callers that
    /// analyse sentences on their own.
    pub fn sentences(&self, raw: &str) -> Vec<String> {
        let text = self.prepare(raw);
        self.segmenter
            .segment(&text)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Steps 1 and 2: apply the size ceiling, then normalise.
    fn prepare(&self, raw: &str) -> String {
        let raw = truncate_at_char_boundary(raw, self.config.max_input_bytes);
        self.normalizer.normalize(raw)
    }
}

/// Longest prefix of `text` that is at most `max_bytes` long and
/// ends on a char boundary.
fn truncate_at_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }

    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    tracing::warn!(
        "Input of {} bytes exceeds the {} byte ceiling; summarising the first {} bytes",
        text.len(),
        max_bytes,
        end
    );
    &text[..end]
}
