//! Package manager queries
//!
//! Bower answers two questions about the installed components:
//!
//! - the *map* listing: per component metadata, including its declared
//!   `dependencies` (name → version spec)
//! - the *paths* listing: per component one or many file/directory paths
//!
//! Both are fetched concurrently by [`fetch_listings`]; the first failure
//! aborts the run.

use std::collections::BTreeMap;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod cli;
pub mod listing;
pub mod paths;

pub use cli::BowerCli;
pub use listing::ListingFiles;
pub use paths::PathsListing;

/// Metadata reported for one component by the map listing
///
/// Only `dependencies` is used; everything else bower reports is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Declared dependencies, name → version spec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, serde_json::Value>>,
}

impl ComponentMeta {
    /// Declared dependency names, if the component declares any
    pub fn dependency_names(&self) -> Option<Vec<String>> {
        self.dependencies
            .as_ref()
            .map(|deps| deps.keys().cloned().collect())
    }
}

/// Map listing: component name → metadata
pub type DependencyListing = BTreeMap<String, ComponentMeta>;

/// Both listings of one invocation
#[derive(Debug, Clone, Default)]
pub struct Listings {
    pub components: DependencyListing,
    pub paths: PathsListing,
}

/// Source of component listings
pub trait PackageManager {
    /// Query the map listing
    fn dependency_map(&self) -> impl Future<Output = Result<DependencyListing>> + Send;

    /// Query the paths listing
    fn paths_map(&self) -> impl Future<Output = Result<PathsListing>> + Send;
}

/// Run both queries concurrently and wait for both
///
/// The first error wins; the other query is dropped.
pub async fn fetch_listings<P: PackageManager>(package_manager: &P) -> Result<Listings> {
    let (components, paths) =
        tokio::try_join!(package_manager.dependency_map(), package_manager.paths_map())?;

    tracing::debug!(
        "Bower reported {} components with metadata and {} with paths",
        components.len(),
        paths.len()
    );

    Ok(Listings { components, paths })
}
