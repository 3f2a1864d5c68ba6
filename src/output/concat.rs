//! Writing the concatenated bundle

use std::fs;
use std::path::{Path, PathBuf};

use super::BundleSink;
use crate::error::{BowerConcatError, Result};

/// Default separator between concatenated files
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Concatenates the main files into one destination file
#[derive(Debug, Clone)]
pub struct ConcatSink {
    /// Directory the file paths are relative to
    base_dir: PathBuf,
    dest: PathBuf,
    separator: String,
}

impl ConcatSink {
    pub fn new(base_dir: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            dest: dest.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Destination path, resolved against the base directory
    pub fn dest_path(&self) -> PathBuf {
        self.base_dir.join(&self.dest)
    }

    fn read_all(&self, files: &[PathBuf]) -> Result<Vec<String>> {
        files
            .iter()
            .map(|file| {
                let path = self.base_dir.join(file);
                fs::read_to_string(&path).map_err(|e| BowerConcatError::FileReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

/// Write `content` to `path` through a temp file in the same directory
///
/// Readers never observe a partially written bundle.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_failed = |path: &Path, e: std::io::Error| BowerConcatError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_failed(parent, e))?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp_path, content).map_err(|e| write_failed(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| write_failed(path, e))
}

impl BundleSink for ConcatSink {
    fn emit(&mut self, files: &[PathBuf]) -> Result<()> {
        // Read everything first so a missing file leaves dest untouched
        let contents = self.read_all(files)?;
        let bundle = contents.join(&self.separator);

        let dest = self.dest_path();
        write_atomic(&dest, &bundle)?;
        tracing::info!("Wrote {} files to {}", files.len(), dest.display());
        Ok(())
    }
}
