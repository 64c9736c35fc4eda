//! Output formatting module

use anyhow::Result;
use overlap_core::Comparison;

/// Display names of the two compared documents
#[derive(Debug, Clone)]
pub struct DocumentLabels {
    /// Label of the first document
    pub first: String,
    /// Label of the second document
    pub second: String,
}

impl DocumentLabels {
    /// Create labels for a pair of documents
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one comparison
    fn format_comparison(&mut self, comparison: &Comparison, labels: &DocumentLabels)
        -> Result<()>;

    /// Finalize output and flush the writer
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;
