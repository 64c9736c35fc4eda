//! JSON output formatter

use super::{DocumentLabels, OutputFormatter};
use anyhow::Result;
use overlap_core::{Comparison, HighlightedDocument, Mode};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - shared fragments plus per-document regions
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonData {
    /// Mode name
    pub mode: String,
    /// Substring length, for substring mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Shared fragments in lexicographic order
    pub shared: Vec<String>,
    /// The two documents, first then second
    pub documents: Vec<DocumentData>,
}

/// One highlighted document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Document label
    pub label: String,
    /// Escaped markup with highlight spans
    pub rendered: String,
    /// Regions tiling the document
    pub regions: Vec<RegionData>,
}

/// One region of a document
#[derive(Debug, Serialize, Deserialize)]
pub struct RegionData {
    /// Starting byte offset
    pub start: usize,
    /// Ending byte offset (exclusive)
    pub end: usize,
    /// Starting code point offset
    pub char_start: usize,
    /// Ending code point offset (exclusive)
    pub char_end: usize,
    /// Whether the region is shared
    pub highlighted: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl ComparisonData {
    /// Collect serializable data from a comparison
    pub fn from_comparison(comparison: &Comparison, labels: &DocumentLabels) -> Self {
        let length = match comparison.mode {
            Mode::Substrings { length } => Some(length.get()),
            Mode::Lines | Mode::Sentences => None,
        };

        Self {
            mode: comparison.mode.name().to_string(),
            length,
            shared: comparison
                .shared
                .sorted()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            documents: vec![
                DocumentData::new(
                    &labels.first,
                    comparison.first_markup(),
                    &comparison.first,
                ),
                DocumentData::new(
                    &labels.second,
                    comparison.second_markup(),
                    &comparison.second,
                ),
            ],
        }
    }
}

impl DocumentData {
    fn new(label: &str, rendered: String, document: &HighlightedDocument) -> Self {
        Self {
            label: label.to_string(),
            rendered,
            regions: document
                .regions()
                .iter()
                .map(|region| RegionData {
                    start: region.span.start,
                    end: region.span.end,
                    char_start: region.char_start,
                    char_end: region.char_end,
                    highlighted: region.highlighted,
                })
                .collect(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_comparison(
        &mut self,
        comparison: &Comparison,
        labels: &DocumentLabels,
    ) -> Result<()> {
        let data = ComparisonData::from_comparison(comparison, labels);
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &data)?;
        } else {
            serde_json::to_writer(&mut self.writer, &data)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
