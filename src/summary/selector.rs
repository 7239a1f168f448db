// ============================================================
// Layer 5 - Top-N Selector
// ============================================================
// Picks the best `max_count` sentences and gives them back in
// document order.
//
//   1. If there are no more sentences than `max_count`, return
//      them all unchanged (passthrough)
//   2. Otherwise sort sentence indices by score, highest first.
//      The sort is stable, so equal scores keep their original
//      order and the lower index wins a tie at the cut
//   3. Keep the first `max_count` indices
//   4. Sort those indices ascending to restore document order
//
// Example with max_count = 2:
//   scores   = [5, 9, 1, 9]
//   ranked   = [1, 3, 0, 2]
//   chosen   = [1, 3]        → sentences 1 and 3, in that order
//
// max_count = 0 selects nothing.

/// Default number of summary sentences
pub const DEFAULT_MAX_SENTENCES: usize = 8;

/// Select the top `max_count` sentences by score, in document order.
///
/// `sentences` and `scores` are parallel slices. A length mismatch is a
/// caller bug; only the common prefix is considered.
pub fn select_top<'a>(sentences: &[&'a str], scores: &[u64], max_count: usize) -> Vec<&'a str> {
    debug_assert_eq!(sentences.len(), scores.len(), "one score per sentence");
    let n = sentences.len().min(scores.len());

    if n <= max_count {
        return sentences[..n].to_vec();
    }

    let mut ranked: Vec<usize> = (0..n).collect();
    // sort_by is stable: ties keep ascending index order
    ranked.sort_by(|&a, &b| scores[b].cmp(&scores[a]));

    let mut chosen: Vec<usize> = ranked.into_iter().take(max_count).collect();
    chosen.sort_unstable();

    tracing::debug!("Selected sentence indices {:?} out of {}", chosen, n);

    chosen.into_iter().map(|i| sentences[i]).collect()
}
