// ============================================================
// Layer 4 - Sentence Segmenter
// ============================================================
// Splits normalised text into sentences.
//
// A boundary sits right AFTER a terminal character
// ('.', '!' or '?') when the next character is whitespace.
// The terminal stays with its sentence, the whitespace run
// that follows it is dropped.
//
// Example:
//   "Cats nap. Dogs bark! Why?"
//   → ["Cats nap.", "Dogs bark!", "Why?"]
//
// Abbreviations ("e.g. this") are split like any other
// terminal; no language model is involved.

/// Characters that can end a sentence
const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Punctuation-boundary sentence splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into trimmed, non-empty sentences in document order.
    /// The returned slices borrow from `text`.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start     = 0usize;
        let mut chars     = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !TERMINALS.contains(&c) {
                continue;
            }

            // Only split when whitespace follows the terminal
            let boundary = i + c.len_utf8();
            if !matches!(chars.peek(), Some((_, next)) if next.is_whitespace()) {
                continue;
            }

            push_fragment(&mut sentences, &text[start..boundary]);

            // Consume the whitespace run; the next sentence starts after it
            start = boundary;
            while let Some(&(j, ws)) = chars.peek() {
                if !ws.is_whitespace() {
                    break;
                }
                start = j + ws.len_utf8();
                chars.next();
            }
        }

        push_fragment(&mut sentences, &text[start..]);
        sentences
    }
}

fn push_fragment<'a>(out: &mut Vec<&'a str>, fragment: &'a str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<&str> {
        SentenceSegmenter::new().segment(text)
    }

    #[test]
    fn test_splits_on_each_terminal() {
        assert_eq!(
            segment("Cats nap. Dogs bark! Why? Because."),
            vec!["Cats nap.", "Dogs bark!", "Why?", "Because."]
        );
    }

    #[test]
    fn test_terminal_without_whitespace_does_not_split() {
        assert_eq!(segment("Version 1.5 is out.Really"), vec!["Version 1.5 is out.Really"]);
    }

    #[test]
    fn test_no_terminal_gives_single_sentence() {
        assert_eq!(segment("just some words"), vec!["just some words"]);
    }

    #[test]
    fn test_empty_text_gives_no_sentences() {
        assert!(segment("").is_empty());
        assert!(segment("   ").is_empty());
    }

    #[test]
    fn test_whitespace_runs_and_newlines() {
        assert_eq!(segment("One.\n\n  Two?\tThree"), vec!["One.", "Two?", "Three"]);
    }

    #[test]
    fn test_repeated_terminals_stay_together() {
        assert_eq!(segment("Wait... What?! Yes."), vec!["Wait...", "What?!", "Yes."]);
    }

    #[test]
    fn test_trailing_terminal_and_space() {
        assert_eq!(segment("End. "), vec!["End."]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(segment("Café ouvert. Très bien!"), vec!["Café ouvert.", "Très bien!"]);
    }
}
