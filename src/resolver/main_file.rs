//! Main file detection for components
//!
//! Bower's `paths` listing reports either the component's declared `main`
//! files or, when the package declares none, its install directory. This
//! module picks the single JavaScript file to put in the bundle:
//!
//! 1. A declared `.js` main file always wins (first one listed).
//! 2. Otherwise the `*.js` files directly inside the reported directories are
//!    listed. A single file is the main file.
//! 3. With several files, the one whose name is closest to the component name
//!    (by edit distance) is picked. Files are scanned longest path first and a
//!    later file replaces the current best on an equal score, so among equally
//!    close names the shortest path wins.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::distance::distance;
use crate::error::{BowerConcatError, Result};
use crate::path_utils;

/// Pattern for script files inside a component directory
const SCRIPT_GLOB: &str = "*.js";

/// Check if a path names a JavaScript file
pub fn is_js_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext == "js")
}

/// Resolve the main file of a component
///
/// `candidates` are the paths bower reported for the component, relative to
/// `base` unless absolute. Returns `None` when no `.js` file can be found.
///
/// # Errors
///
/// Returns an error if a reported directory exists but cannot be read.
pub fn resolve_main(name: &str, candidates: &[String], base: &Path) -> Result<Option<PathBuf>> {
    if let Some(main) = candidates.iter().find(|c| is_js_file(c)) {
        tracing::debug!("{}: using declared main file {}", name, main);
        return Ok(Some(PathBuf::from(main)));
    }

    let mut files = Vec::new();
    for dir in candidates {
        files.extend(list_script_files(Path::new(dir), base)?);
    }

    match files.len() {
        0 => Ok(None),
        1 => {
            tracing::debug!("{}: only one script file found", name);
            Ok(files.pop())
        }
        _ => Ok(guess_main_file(name, files)),
    }
}

/// List `*.js` files directly inside `dir`, sorted by file name
///
/// Paths are returned as `dir/<file>`. Hidden files (`.eslintrc.js`) never
/// match. A `dir` that is not a directory (a stylesheet, a missing path) has
/// no script files.
fn list_script_files(dir: &Path, base: &Path) -> Result<Vec<PathBuf>> {
    let on_disk = base.join(dir);
    if !on_disk.is_dir() {
        tracing::debug!("{} is not a directory, skipping", on_disk.display());
        return Ok(Vec::new());
    }

    let glob = Glob::new(SCRIPT_GLOB).map_err(|e| BowerConcatError::ConfigInvalid {
        message: format!("Invalid script pattern '{SCRIPT_GLOB}': {e}"),
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&on_disk)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| BowerConcatError::FileReadFailed {
            path: on_disk.display().to_string(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with('.') {
            continue;
        }
        let candidate = CandidatePath::from(file_name.as_str());
        if glob.matched(&candidate).is_some() {
            files.push(dir.join(&file_name));
        }
    }

    Ok(files)
}

/// Pick the file whose stem is closest to `name`
fn guess_main_file(name: &str, mut files: Vec<PathBuf>) -> Option<PathBuf> {
    // Longest path first; stable so equal lengths keep file name order
    files.sort_by_key(|file| std::cmp::Reverse(path_len(file)));

    let mut best: Option<(usize, usize)> = None;
    for (index, file) in files.iter().enumerate() {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        let dist = distance(name, &stem);
        tracing::debug!("{}: {} scores {}", name, file.display(), dist);

        if best.is_none_or(|(min_dist, _)| dist <= min_dist) {
            best = Some((dist, index));
        }
    }

    best.map(|(_, index)| files.swap_remove(index))
}

fn path_len(path: &Path) -> usize {
    path_utils::to_forward_slashes(path).chars().count()
}
