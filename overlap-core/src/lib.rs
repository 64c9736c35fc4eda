//! Shared-fragment detection and highlighting for pairs of text documents
//!
//! Two documents are compared at one of three granularities: whole lines,
//! sentences, or substrings of a fixed number of code points. The fragments
//! present in both documents are located in each, merged into maximal
//! intervals, and each document is returned as an ordered partition into
//! highlighted and plain regions, ready to render as escaped markup.
//!
//! # Architecture
//!
//! - **Domain layer**: pure tokenizers, pattern scanning, interval merging
//!   and rendering
//! - **API layer**: parameter validation, document decoding, and the
//!   [`Comparator`] facade used by transports
//!
//! # Example
//!
//! ```rust
//! use overlap_core::{Comparator, Config};
//!
//! let config = Config::builder().mode("lines").build().unwrap();
//! let comparator = Comparator::with_config(config);
//!
//! let comparison = comparator.compare_text("hello world\nfoo\n", "goodbye\nfoo\n");
//!
//! assert_eq!(comparison.shared.sorted(), vec!["foo"]);
//! assert_eq!(comparison.first_markup(), "hello world\n<span>foo</span>\n");
//! ```

pub mod api;
pub mod domain;

pub use api::{
    Comparator, Comparison, Config, ConfigBuilder, Error, ErrorKind, HighlightedDocument, Input,
    Mode, Request, Result, Side,
};
pub use domain::{Marker, Pattern, Region, SharedFragments, Span};
