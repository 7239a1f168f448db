// ============================================================
// Layer 4 - Text Normalizer
// ============================================================
// Cleans raw text extracted from PDFs before summarisation
// and keyword ranking.
//
// Text pulled out of a PDF often contains:
//   - Markup fragments such as <b>, </i>, <br/>
//   - Glyph placeholders like "cid:123" or "CID-14" when the
//     extractor cannot map a font glyph back to a character
//   - NUL characters
//   - Line breaks in the middle of sentences
//
// Cleaning steps (applied in this exact order, later steps
// assume the earlier noise is already gone):
//   1. Replace <...> markup with a space
//   2. Replace cid tokens (cid, cid12, cid:12, cid-12) with a space
//   3. Replace any leftover standalone "cid" word with a space
//   4. Replace NUL characters with a space
//   5. Collapse every whitespace run into a single space
//   6. Trim leading/trailing whitespace
//
// The cid patterns use Unicode word boundaries, where a
// combining mark belongs to the word it follows.
//
// Any string is valid input. Empty in, empty out.
//
// Reference: regex crate documentation (LazyLock statics)

use regex::Regex;
use std::sync::LazyLock;

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"));

static CID_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcid[:\-]?\d*\b").expect("cid token pattern is valid"));

static CID_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcid\b").expect("cid word pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Strips markup, PDF glyph noise and NULs, then collapses whitespace.
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a new TextNormalizer instance
    pub fn new() -> Self {
        Self
    }

    /// Normalise a raw text string. Takes a &str and returns an owned String.
    pub fn normalize(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        // ── Step 1: Markup ───────────────────────────────────────────────────
        let text = MARKUP.replace_all(raw, " ");

        // ── Steps 2 and 3: cid glyph placeholders ────────────────────────────
        let text = CID_TOKEN.replace_all(&text, " ");
        let text = CID_WORD.replace_all(&text, " ");

        // ── Step 4: NUL characters ───────────────────────────────────────────
        let text = text.replace('\0', " ");

        // ── Steps 5 and 6: Whitespace ────────────────────────────────────────
        WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{seq::SliceRandom, Rng};

    fn normalize(raw: &str) -> String {
        TextNormalizer::new().normalize(raw)
    }

    #[test]
    fn test_markup_and_cid_removed() {
        assert_eq!(normalize("<b>Report</b> cid123 findings"), "Report findings");
    }

    #[test]
    fn test_cid_variants() {
        assert_eq!(normalize("a cid:12 b CID-14 c Cid0 d"), "a b c d");
        assert_eq!(normalize("(cid) value"), "( ) value");
    }

    #[test]
    fn test_cid_inside_word_is_kept() {
        assert_eq!(normalize("acidic decide cider"), "acidic decide cider");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_nul_becomes_space() {
        assert_eq!(normalize("hello\0world"), "hello world");
    }

    #[test]
    fn test_collapses_whitespace_and_newlines() {
        assert_eq!(normalize("  one\n\n two\t\tthree  "), "one two three");
    }

    #[test]
    fn test_markup_spanning_lines() {
        assert_eq!(normalize("before<div\nclass=\"x\">after"), "before after");
    }

    #[test]
    fn test_unclosed_bracket_survives() {
        assert_eq!(normalize("a < b and c"), "a < b and c");
    }

    #[test]
    fn test_empty_angle_brackets_are_markup() {
        assert_eq!(normalize("a <> b"), "a b");
        assert_eq!(normalize("x<>y"), "x y");
    }

    #[test]
    fn test_cid_followed_by_combining_mark_is_a_word() {
        // U+0301 extends the word, so "cid\u{301}" is not a glyph placeholder
        assert_eq!(normalize("cid\u{301} x"), "cid\u{301} x");
        assert_eq!(normalize("\u{301}cid x"), "\u{301}cid x");
    }

    // Random strings built from the characters the normaliser cares about,
    // so that tags, cid tokens and whitespace runs show up often.
    fn random_noisy_text(rng: &mut impl Rng) -> String {
        let pieces = [
            "<", ">", "<b>", "</p>", "cid", "CID:", "cid-7", "12", " ", "  ", "\n", "\t",
            "\0", "word", "Cats", ".", "!", "?", "a", "é", "<x", "y>",
        ];
        let len = rng.gen_range(0..40);
        (0..len)
            .map(|_| *pieces.choose(rng).unwrap_or(&" "))
            .collect()
    }

    #[test]
    fn test_random_inputs_hold_invariants() {
        let mut rng = rand::thread_rng();
        let markup = Regex::new(r"<[^>]*>").unwrap();

        for _ in 0..500 {
            let raw = random_noisy_text(&mut rng);
            let once = normalize(&raw);

            assert!(!markup.is_match(&once), "markup left in {once:?}");
            assert!(!once.contains('\0'));
            assert!(!once.contains("  "), "double space in {once:?}");
            assert_eq!(once.trim(), once);
            assert!(!CID_WORD.is_match(&once), "cid left in {once:?}");

            // Idempotence
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
