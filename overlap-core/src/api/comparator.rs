//! Document comparator implementation

use crate::api::{Comparison, Config, Error, HighlightedDocument, Input, Mode, Side};
use crate::domain::{highlight, Pattern};

/// Compares pairs of documents under one configuration
///
/// Holds no mutable state, so one comparator can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: Config,
}

impl Comparator {
    /// Create a comparator with the default configuration (line mode)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comparator with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create a comparator for a raw selector and optional raw length
    pub fn for_mode(name: &str, length: Option<&str>) -> Result<Self, Error> {
        let mode = Mode::from_selector(Some(name), length)?;
        Ok(Self::with_config(Config::for_mode(mode)))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read and decode both documents, then compare them
    ///
    /// Both documents are decoded before any matching starts.
    pub fn compare(&self, first: Input, second: Input) -> Result<Comparison, Error> {
        let first = first.into_text(Side::First)?;
        let second = second.into_text(Side::Second)?;
        Ok(self.compare_owned(first, second))
    }

    /// Compare two decoded documents
    pub fn compare_text(&self, first: &str, second: &str) -> Comparison {
        self.compare_owned(first.to_owned(), second.to_owned())
    }

    fn compare_owned(&self, first: String, second: String) -> Comparison {
        let mode = self.config.mode;
        let shared = mode.shared_fragments(&first, &second);
        let patterns = mode.patterns(&shared);

        let (first, second) = highlight_pair(first, second, &patterns);

        Comparison {
            mode,
            shared,
            first,
            second,
            marker: self.config.marker.clone(),
        }
    }
}

#[cfg(feature = "parallel")]
fn highlight_pair(
    first: String,
    second: String,
    patterns: &[Pattern],
) -> (HighlightedDocument, HighlightedDocument) {
    rayon::join(
        || highlight_document(first, patterns),
        || highlight_document(second, patterns),
    )
}

#[cfg(not(feature = "parallel"))]
fn highlight_pair(
    first: String,
    second: String,
    patterns: &[Pattern],
) -> (HighlightedDocument, HighlightedDocument) {
    (
        highlight_document(first, patterns),
        highlight_document(second, patterns),
    )
}

fn highlight_document(text: String, patterns: &[Pattern]) -> HighlightedDocument {
    let regions = highlight(&text, patterns);
    HighlightedDocument::new(text, regions)
}
