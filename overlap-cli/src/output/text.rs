//! Plain text output formatter

use super::{DocumentLabels, OutputFormatter};
use anyhow::Result;
use overlap_core::Comparison;
use std::io::Write;

/// Plain text formatter - each rendered document under a header line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_comparison(
        &mut self,
        comparison: &Comparison,
        labels: &DocumentLabels,
    ) -> Result<()> {
        writeln!(self.writer, "==> {} <==", labels.first)?;
        writeln!(self.writer, "{}", comparison.first_markup())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "==> {} <==", labels.second)?;
        writeln!(self.writer, "{}", comparison.second_markup())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "Shared fragments: {} ({})",
            comparison.shared.len(),
            comparison.mode
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
