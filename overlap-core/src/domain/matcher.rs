//! Fragment discovery for each comparison granularity
//!
//! Each function tokenizes both documents under one rule and returns the
//! fragments the two have in common. Fragments borrow from the documents
//! until the final intersection, so only shared fragments are allocated.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::types::SharedFragments;

/// Terminator, optional closing quotes/brackets, then whitespace or end of text
const SENTENCE_END: &str = r#"[.?!]["'”’)\]}»]*(?:\s+|\z)"#;

fn sentence_end() -> &'static Regex {
    static SENTENCE_END_RE: OnceLock<Regex> = OnceLock::new();
    SENTENCE_END_RE.get_or_init(|| Regex::new(SENTENCE_END).expect("sentence pattern is valid"))
}

/// Lines present in both documents
///
/// Lines end at `\n` or `\r\n`. A final line break does not start an extra
/// empty line, but an empty line between two breaks is a fragment.
pub fn shared_lines(first: &str, second: &str) -> SharedFragments {
    SharedFragments::intersect(first.lines().collect(), second.lines().collect())
}

/// Sentences present in both documents
pub fn shared_sentences(first: &str, second: &str) -> SharedFragments {
    SharedFragments::intersect(
        sentences(first).collect(),
        sentences(second).collect(),
    )
}

/// Substrings of exactly `length` code points present in both documents
pub fn shared_substrings(first: &str, second: &str, length: NonZeroUsize) -> SharedFragments {
    SharedFragments::intersect(
        substring_windows(first, length.get()),
        substring_windows(second, length.get()),
    )
}

/// Split `text` into trimmed, non-empty sentences
pub fn sentences(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut last = 0;
    let mut ends = sentence_end().find_iter(text);

    std::iter::from_fn(move || loop {
        let segment = match ends.next() {
            Some(end) => {
                let segment = &text[last..end.end()];
                last = end.end();
                segment
            }
            None if last < text.len() => {
                let segment = &text[last..];
                last = text.len();
                segment
            }
            None => return None,
        };

        let segment = segment.trim();
        if !segment.is_empty() {
            return Some(segment);
        }
    })
}

/// Every window of `length` code points in `text`, deduplicated
///
/// A text shorter than `length` has no windows, and neither does a zero length.
pub fn substring_windows(text: &str, length: usize) -> HashSet<&str> {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();

    if length == 0 || length >= boundaries.len() {
        return HashSet::new();
    }

    boundaries
        .windows(length + 1)
        .map(|window| &text[window[0]..window[length]])
        .collect()
}
