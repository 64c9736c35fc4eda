//! Region highlighting
//!
//! Occurrences of every pattern are collected, sorted by start, merged into
//! disjoint highlighted intervals, and the document is then partitioned into
//! an ordered sequence of highlighted and plain regions covering every byte
//! exactly once.

use crate::domain::escape::push_escaped;
use crate::domain::pattern::Pattern;
use crate::domain::types::{HighlightedInterval, Occurrence, Region, Span};

/// Delimiters wrapped around highlighted region text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    open: String,
    close: String,
}

impl Marker {
    /// `<span>` ... `</span>`
    pub fn span() -> Self {
        Self::new("<span>", "</span>")
    }

    /// `<span class="...">` ... `</span>`, with the class name escaped
    pub fn with_class(class: &str) -> Self {
        let mut open = String::from("<span class=\"");
        push_escaped(&mut open, class);
        open.push_str("\">");
        Self::new(open, "</span>")
    }

    /// Arbitrary delimiters, inserted unescaped
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Opening delimiter
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Closing delimiter
    pub fn close(&self) -> &str {
        &self.close
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::span()
    }
}

/// Partition `document` into regions, highlighting every occurrence of `patterns`
pub fn highlight(document: &str, patterns: &[Pattern]) -> Vec<Region> {
    let intervals = merge(collect_occurrences(document, patterns));
    partition(document, &intervals)
}

/// All occurrences of all patterns, sorted by start
///
/// The sort is stable, so occurrences sharing a start keep discovery order.
pub fn collect_occurrences(document: &str, patterns: &[Pattern]) -> Vec<Occurrence> {
    let mut occurrences: Vec<Occurrence> = patterns
        .iter()
        .flat_map(|pattern| pattern.occurrences(document))
        .collect();
    occurrences.sort_by_key(|occurrence| occurrence.start);
    occurrences
}

/// Merge start-sorted occurrences into disjoint highlighted intervals
///
/// An occurrence joins the previous interval when it starts at or before that
/// interval's end, so touching occurrences merge too.
pub fn merge(occurrences: Vec<Occurrence>) -> Vec<HighlightedInterval> {
    let mut merged: Vec<HighlightedInterval> = Vec::with_capacity(occurrences.len());

    for occurrence in occurrences {
        match merged.last_mut() {
            Some(last) if last.reaches(&occurrence) => {
                // sorted by start only; a later occurrence may end earlier
                last.end = last.end.max(occurrence.end);
            }
            _ => merged.push(occurrence),
        }
    }

    merged
}

/// Tile `document` with plain regions around the given highlighted intervals
///
/// `intervals` must be sorted and disjoint, as produced by [`merge`]. With no
/// intervals the whole document is a single plain region, which for an empty
/// document is the region `[0, 0)`.
pub fn partition(document: &str, intervals: &[HighlightedInterval]) -> Vec<Region> {
    let mut builder = RegionBuilder::new(document);

    for interval in intervals {
        if builder.position < interval.start {
            builder.push(interval.start, false);
        }
        builder.push(interval.end, true);
    }

    if builder.position < document.len() || builder.regions.is_empty() {
        builder.push(document.len(), false);
    }

    builder.regions
}

/// Concatenate escaped region text, wrapping highlighted regions in `marker`
pub fn render(document: &str, regions: &[Region], marker: &Marker) -> String {
    let mut out = String::with_capacity(document.len() + regions.len() * 16);

    for region in regions {
        let text = region.text(document);
        if region.highlighted {
            out.push_str(marker.open());
            push_escaped(&mut out, text);
            out.push_str(marker.close());
        } else {
            push_escaped(&mut out, text);
        }
    }

    out
}

/// Accumulates contiguous regions, tracking code point offsets as it goes
struct RegionBuilder<'a> {
    document: &'a str,
    position: usize,
    char_position: usize,
    regions: Vec<Region>,
}

impl<'a> RegionBuilder<'a> {
    fn new(document: &'a str) -> Self {
        Self {
            document,
            position: 0,
            char_position: 0,
            regions: Vec::new(),
        }
    }

    fn push(&mut self, end: usize, highlighted: bool) {
        let span = Span::new(self.position, end);
        let char_end = self.char_position + self.document[span.range()].chars().count();

        self.regions.push(Region {
            span,
            char_start: self.char_position,
            char_end,
            highlighted,
        });
        self.position = end;
        self.char_position = char_end;
    }
}
