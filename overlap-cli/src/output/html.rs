//! HTML output formatter

use super::{DocumentLabels, OutputFormatter};
use anyhow::Result;
use overlap_core::domain::escape_markup;
use overlap_core::Comparison;
use std::io::Write;

/// HTML formatter - a standalone page with both documents side by side
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_document(&mut self, label: &str, markup: &str) -> Result<()> {
        writeln!(self.writer, "<section>")?;
        writeln!(self.writer, "<h2>{}</h2>", escape_markup(label))?;
        writeln!(self.writer, "<pre>{markup}</pre>")?;
        writeln!(self.writer, "</section>")?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_comparison(
        &mut self,
        comparison: &Comparison,
        labels: &DocumentLabels,
    ) -> Result<()> {
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html lang=\"en\">")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<meta charset=\"utf-8\">")?;
        writeln!(self.writer, "<title>Comparison ({})</title>", comparison.mode)?;
        writeln!(
            self.writer,
            "<style>main{{display:flex;gap:1em}}section{{flex:1}}pre{{white-space:pre-wrap}}pre span{{background-color:yellow}}</style>"
        )?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        writeln!(self.writer, "<main>")?;
        self.write_document(&labels.first, &comparison.first_markup())?;
        self.write_document(&labels.second, &comparison.second_markup())?;
        writeln!(self.writer, "</main>")?;
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
