//! Listings read from saved JSON files
//!
//! Lets a build run offline from the output of `bower list --map --json` and
//! `bower list --paths --json` captured earlier.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::{DependencyListing, PackageManager, PathsListing};
use crate::error::{Result, query_failed};

/// Map and paths listings stored on disk
#[derive(Debug, Clone)]
pub struct ListingFiles {
    pub map_file: PathBuf,
    pub paths_file: PathBuf,
}

impl ListingFiles {
    pub fn new(map_file: impl Into<PathBuf>, paths_file: impl Into<PathBuf>) -> Self {
        Self {
            map_file: map_file.into(),
            paths_file: paths_file.into(),
        }
    }
}

async fn read_listing<T: DeserializeOwned>(kind: &str, path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| query_failed(kind, format!("{}: {e}", path.display())))?;

    serde_json::from_str(&content)
        .map_err(|e| query_failed(kind, format!("{}: invalid JSON: {e}", path.display())))
}

impl PackageManager for ListingFiles {
    async fn dependency_map(&self) -> Result<DependencyListing> {
        read_listing("map", &self.map_file).await
    }

    async fn paths_map(&self) -> Result<PathsListing> {
        read_listing("paths", &self.paths_file).await
    }
}
