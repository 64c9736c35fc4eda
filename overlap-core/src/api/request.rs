//! Raw comparison requests, as a transport receives them

use crate::api::{Comparator, Comparison, Config, Error, Input, Side};

/// A comparison request whose parts may be missing
///
/// [`Request::run`] validates everything before matching starts, in this
/// order: both documents present, both decodable, mode, then length.
#[derive(Debug, Default)]
pub struct Request {
    first: Option<Input>,
    second: Option<Input>,
    mode: Option<String>,
    length: Option<String>,
    highlight_class: Option<String>,
}

impl Request {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first document
    pub fn first(mut self, input: Input) -> Self {
        self.first = Some(input);
        self
    }

    /// Set the second document
    pub fn second(mut self, input: Input) -> Self {
        self.second = Some(input);
        self
    }

    /// Set the granularity selector
    pub fn mode(mut self, name: impl Into<String>) -> Self {
        self.mode = Some(name.into());
        self
    }

    /// Set the raw substring length
    pub fn length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    /// Set the CSS class used for highlights
    pub fn highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = Some(class.into());
        self
    }

    /// Validate the request and compare the documents
    pub fn run(self) -> Result<Comparison, Error> {
        let first = self.first.ok_or(Error::MissingDocument(Side::First))?;
        let second = self.second.ok_or(Error::MissingDocument(Side::Second))?;

        let first = first.into_text(Side::First)?;
        let second = second.into_text(Side::Second)?;

        let mut builder = Config::builder();
        if let Some(mode) = self.mode {
            builder = builder.mode(mode);
        }
        if let Some(length) = self.length {
            builder = builder.length(length);
        }
        if let Some(class) = self.highlight_class {
            builder = builder.highlight_class(class);
        }
        let config = builder.build()?;

        Ok(Comparator::with_config(config).compare_text(&first, &second))
    }
}
