//! Pure matching and highlighting algorithms
//!
//! Nothing in this layer performs I/O or holds shared state; every function
//! is a deterministic transformation of its arguments.

pub mod escape;
pub mod highlight;
pub mod matcher;
pub mod pattern;
pub mod types;

pub use escape::escape_markup;
pub use highlight::{highlight, merge, partition, render, Marker};
pub use matcher::{shared_lines, shared_sentences, shared_substrings};
pub use pattern::Pattern;
pub use types::{HighlightedInterval, Occurrence, Region, SharedFragments, Span};
