//! Printing the ordered file list

use std::io::Write;
use std::path::PathBuf;

use clap::ValueEnum;

use super::BundleSink;
use crate::error::{BowerConcatError, Result};
use crate::path_utils::to_forward_slashes;

/// Output format for the file list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One path per line
    #[default]
    Lines,
    /// JSON array of paths
    Json,
}

/// Writes the file list to any writer
pub struct ListSink<W> {
    writer: W,
    format: ListFormat,
}

impl<W: Write> ListSink<W> {
    pub fn new(writer: W, format: ListFormat) -> Self {
        Self { writer, format }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BundleSink for ListSink<W> {
    fn emit(&mut self, files: &[PathBuf]) -> Result<()> {
        let paths: Vec<String> = files.iter().map(|f| to_forward_slashes(f)).collect();

        match self.format {
            ListFormat::Lines => {
                for path in &paths {
                    writeln!(self.writer, "{path}")?;
                }
            }
            ListFormat::Json => {
                let json = serde_json::to_string_pretty(&paths).map_err(|e| {
                    BowerConcatError::IoError {
                        message: e.to_string(),
                    }
                })?;
                writeln!(self.writer, "{json}")?;
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}
