//! Comparison granularity

use std::fmt;
use std::num::NonZeroUsize;

use crate::api::{Error, Result};
use crate::domain::matcher;
use crate::domain::{Pattern, SharedFragments};

/// Granularity at which two documents are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Whole lines
    #[default]
    Lines,
    /// Sentences ending in `.`, `?` or `!`
    Sentences,
    /// Substrings of a fixed number of code points
    Substrings {
        /// Window length in code points
        length: NonZeroUsize,
    },
}

impl Mode {
    /// Selector names accepted by [`Mode::from_selector`]
    pub const NAMES: [&'static str; 3] = ["lines", "sentences", "substrings"];

    /// Substring mode with the given length, rejecting zero
    pub fn substrings(length: usize) -> Result<Self> {
        NonZeroUsize::new(length)
            .map(|length| Mode::Substrings { length })
            .ok_or_else(|| Error::InvalidLength(length.to_string()))
    }

    /// Parse a raw selector and optional raw length, as a form would supply them
    ///
    /// The selector must match a mode name exactly; an empty value counts as
    /// missing. The length is only consulted for substring mode and must parse,
    /// after trimming, as a positive integer.
    pub fn from_selector(name: Option<&str>, length: Option<&str>) -> Result<Self> {
        let name = name.filter(|name| !name.is_empty()).ok_or(Error::MissingMode)?;

        match name {
            "lines" => Ok(Mode::Lines),
            "sentences" => Ok(Mode::Sentences),
            "substrings" => {
                let raw = length
                    .filter(|length| !length.is_empty())
                    .ok_or(Error::MissingLength)?;
                let length: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| Error::InvalidLength(raw.to_string()))?;
                if length <= 0 {
                    return Err(Error::InvalidLength(raw.to_string()));
                }
                let length =
                    usize::try_from(length).map_err(|_| Error::InvalidLength(raw.to_string()))?;
                Mode::substrings(length)
            }
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }

    /// Selector name of this mode
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Lines => "lines",
            Mode::Sentences => "sentences",
            Mode::Substrings { .. } => "substrings",
        }
    }

    /// One-line description for listings
    pub fn description(name: &str) -> Option<&'static str> {
        match name {
            "lines" => Some("Lines present in both documents"),
            "sentences" => Some("Sentences present in both documents"),
            "substrings" => Some("Substrings of a given length present in both documents"),
            _ => None,
        }
    }

    /// Fragments the two documents share under this mode
    pub fn shared_fragments(&self, first: &str, second: &str) -> SharedFragments {
        match self {
            Mode::Lines => matcher::shared_lines(first, second),
            Mode::Sentences => matcher::shared_sentences(first, second),
            Mode::Substrings { length } => matcher::shared_substrings(first, second, *length),
        }
    }

    /// Search patterns for shared fragments; line fragments are anchored to lines
    pub fn patterns(&self, shared: &SharedFragments) -> Vec<Pattern> {
        shared
            .iter()
            .map(|fragment| match self {
                Mode::Lines => Pattern::line(fragment.as_str()),
                Mode::Sentences | Mode::Substrings { .. } => Pattern::literal(fragment.as_str()),
            })
            .collect()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Substrings { length } => write!(f, "substrings ({length})"),
            other => write!(f, "{}", other.name()),
        }
    }
}
