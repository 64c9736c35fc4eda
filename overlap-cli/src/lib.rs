//! Overlap CLI library
//!
//! This library provides the command-line interface for comparing two
//! documents and highlighting the content they share.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
