// ============================================================
// Layer 5 - Summary Assembler
// ============================================================

use std::borrow::Borrow;

/// Join the selected sentences with a single space.
/// No sentences gives an empty summary.
pub fn assemble<S: Borrow<str>>(selected: &[S]) -> String {
    selected.join(" ")
}
