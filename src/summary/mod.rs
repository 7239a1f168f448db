// ============================================================
// Layer 5 - Summary Layer
// ============================================================
// The extractive summarisation core. Pure functions only:
// no file access, no shared state, safe to call from any
// number of threads at once.
//
//   stopwords.rs  - the fixed scoring stopword list
//   scorer.rs     - word frequency table + sentence scores
//   selector.rs   - top-N selection in document order
//   assembler.rs  - joins the chosen sentences
//   summarizer.rs - the end-to-end pipeline and its config
//   keywords.rs   - a frequency-based keyword ranker

pub mod assembler;
pub mod keywords;
pub mod scorer;
pub mod selector;
pub mod stopwords;
pub mod summarizer;
