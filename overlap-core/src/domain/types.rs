//! Value types shared by the matcher and the highlighter

use std::collections::hash_set;
use std::collections::HashSet;
use std::ops::Range;

/// A half-open byte interval `[start, end)` into a document
///
/// Both ends always fall on `char` boundaries of the document they index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Byte offset of the first byte
    pub start: usize,
    /// Byte offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past its end {end}");
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `next` overlaps or touches this span
    pub fn reaches(&self, next: &Span) -> bool {
        next.start <= self.end
    }

    /// Byte range, for slicing the document
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// One match of one pattern within a document
pub type Occurrence = Span;

/// A maximal union of overlapping or touching occurrences
pub type HighlightedInterval = Span;

/// A tagged slice of a document
///
/// The regions produced for one document tile it exactly: contiguous,
/// non-overlapping, first starting at 0 and last ending at the document length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Byte interval in the document
    pub span: Span,
    /// Code point offset of the region start
    pub char_start: usize,
    /// Code point offset of the region end
    pub char_end: usize,
    /// Whether the region is shared with the other document
    pub highlighted: bool,
}

impl Region {
    /// Text of this region within `document`
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.span.range()]
    }

    /// Length in code points
    pub fn char_len(&self) -> usize {
        self.char_end - self.char_start
    }
}

/// Set of fragments present in both documents of a pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedFragments {
    fragments: HashSet<String>,
}

impl SharedFragments {
    /// Intersect two fragment sets, probing the larger with the smaller
    pub fn intersect<'a>(first: HashSet<&'a str>, second: HashSet<&'a str>) -> Self {
        let (small, large) = if first.len() <= second.len() {
            (first, second)
        } else {
            (second, first)
        };

        let fragments = small
            .into_iter()
            .filter(|fragment| large.contains(fragment))
            .map(str::to_owned)
            .collect();

        Self { fragments }
    }

    /// Number of shared fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the documents share nothing
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Whether `fragment` is shared
    pub fn contains(&self, fragment: &str) -> bool {
        self.fragments.contains(fragment)
    }

    /// Iterate in unspecified order
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.fragments.iter()
    }

    /// Fragments in lexicographic order, for stable display
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.fragments.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }
}

impl<'a> IntoIterator for &'a SharedFragments {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<String> for SharedFragments {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}
