//! Literal search targets built from shared fragments

use crate::domain::types::Occurrence;

/// A fragment turned into a literal search target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Matches the text anywhere
    Literal(String),
    /// Matches the text only when it is an entire line
    Line(String),
}

impl Pattern {
    /// Pattern matching `text` anywhere in a document
    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal(text.into())
    }

    /// Pattern matching `text` only as a whole line
    pub fn line(text: impl Into<String>) -> Self {
        Pattern::Line(text.into())
    }

    /// The literal text searched for
    pub fn text(&self) -> &str {
        match self {
            Pattern::Literal(text) | Pattern::Line(text) => text,
        }
    }

    /// Whether the pattern is empty and therefore matches nothing
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Leftmost, non-overlapping occurrences of this pattern in `document`
    ///
    /// An empty pattern yields no occurrences.
    pub fn occurrences<'a>(&'a self, document: &'a str) -> impl Iterator<Item = Occurrence> + 'a {
        let needle = self.text();

        (!needle.is_empty())
            .then(|| document.match_indices(needle))
            .into_iter()
            .flatten()
            .map(|(start, matched)| Occurrence::new(start, start + matched.len()))
            .filter(move |occurrence| self.accepts(document, occurrence))
    }

    fn accepts(&self, document: &str, occurrence: &Occurrence) -> bool {
        match self {
            Pattern::Literal(_) => true,
            Pattern::Line(_) => {
                starts_line(document, occurrence.start) && ends_line(document, occurrence.end)
            }
        }
    }
}

fn starts_line(document: &str, offset: usize) -> bool {
    offset == 0 || document.as_bytes()[offset - 1] == b'\n'
}

fn ends_line(document: &str, offset: usize) -> bool {
    let rest = &document[offset..];
    rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n")
}
