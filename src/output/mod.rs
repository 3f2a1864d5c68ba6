//! Consumers of the ordered file list
//!
//! - [`ListSink`]: prints the paths (one per line or as JSON)
//! - [`ConcatSink`]: writes the concatenated bundle file
//!
//! Sinks only ever see a complete, ordered list; a failed run emits nothing.

use std::path::PathBuf;

use crate::error::Result;

pub mod concat;
pub mod list;

pub use concat::ConcatSink;
pub use list::{ListFormat, ListSink};

/// Receives the ordered main files of a bundle
pub trait BundleSink {
    fn emit(&mut self, files: &[PathBuf]) -> Result<()>;
}
