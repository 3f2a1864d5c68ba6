//! Component domain types

use std::path::PathBuf;

use serde::Serialize;

/// A component whose main file has been resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedComponent {
    pub name: String,
    pub file: PathBuf,
}

impl ResolvedComponent {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// How resolved components are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Pairwise comparator: a component goes before the components that list
    /// it as a dependency, otherwise the later component goes first
    #[default]
    Comparator,
    /// Depth-first topological sort, failing on cycles
    Strict,
}

impl SortMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            SortMode::Strict
        } else {
            SortMode::Comparator
        }
    }
}
