//! Calling contract for transports
//!
//! This module is the boundary a transport (CLI, web handler, bindings)
//! talks to. It validates raw parameters into a [`Config`], decodes document
//! sources, and runs the matcher and highlighter from [`crate::domain`].

mod comparator;
mod config;
mod error;
mod input;
mod mode;
mod output;
mod request;


pub use comparator::Comparator;
pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, ErrorKind, Result, Side};
pub use input::Input;
pub use mode::Mode;
pub use output::{Comparison, HighlightedDocument};
pub use request::Request;
