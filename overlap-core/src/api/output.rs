//! Output types for the comparison API

use crate::api::Mode;
use crate::domain::{render, Marker, Region, SharedFragments};

/// One document partitioned into highlighted and plain regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedDocument {
    text: String,
    regions: Vec<Region>,
}

impl HighlightedDocument {
    pub(crate) fn new(text: String, regions: Vec<Region>) -> Self {
        Self { text, regions }
    }

    /// Original document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Regions tiling the document, in order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Regions paired with their text
    pub fn segments(&self) -> impl Iterator<Item = (&str, &Region)> {
        self.regions
            .iter()
            .map(move |region| (region.text(&self.text), region))
    }

    /// Number of highlighted regions
    pub fn highlighted_count(&self) -> usize {
        self.regions.iter().filter(|region| region.highlighted).count()
    }

    /// Code points covered by highlighted regions
    pub fn highlighted_chars(&self) -> usize {
        self.regions
            .iter()
            .filter(|region| region.highlighted)
            .map(Region::char_len)
            .sum()
    }

    /// Escaped text with highlighted regions wrapped in `marker`
    pub fn render(&self, marker: &Marker) -> String {
        render(&self.text, &self.regions, marker)
    }
}

/// Result of comparing two documents
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Granularity the documents were compared at
    pub mode: Mode,
    /// Fragments present in both documents
    pub shared: SharedFragments,
    /// First document, highlighted
    pub first: HighlightedDocument,
    /// Second document, highlighted
    pub second: HighlightedDocument,
    pub(crate) marker: Marker,
}

impl Comparison {
    /// Rendered first document, using the configured marker
    pub fn first_markup(&self) -> String {
        self.first.render(&self.marker)
    }

    /// Rendered second document, using the configured marker
    pub fn second_markup(&self) -> String {
        self.second.render(&self.marker)
    }

    /// Marker used by [`Comparison::first_markup`] and [`Comparison::second_markup`]
    pub fn marker(&self) -> &Marker {
        &self.marker
    }
}
