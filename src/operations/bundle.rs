//! Bundle resolution workflow
//!
//! Coordinates one run:
//!
//! 1. query bower for the map and paths listings (concurrently)
//! 2. merge dependency overrides with reported dependencies
//! 3. drop components rejected by the include/exclude filters
//! 4. resolve each remaining component's main file
//! 5. order the resolved components
//!
//! Any failure aborts the whole run before anything is emitted.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::bower::{Listings, PackageManager, fetch_listings};
use crate::config::{OneOrMany, TaskConfig};
use crate::domain::{ResolvedComponent, SortMode};
use crate::error::{BowerConcatError, Result};
use crate::resolver::{collect_dependencies, resolve_main, sort_components};

/// Options for one bundle run
#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    /// Component names to keep (empty keeps all)
    pub includes: Vec<String>,
    /// Component names to drop
    pub excludes: Vec<String>,
    /// Dependency overrides
    pub dependencies: BTreeMap<String, OneOrMany<String>>,
    pub sort_mode: SortMode,
    /// Directory the reported paths are relative to
    pub base_dir: PathBuf,
}

impl BundleOptions {
    pub fn from_config(config: &TaskConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            includes: config.includes(),
            excludes: config.excludes(),
            dependencies: config.dependencies.clone(),
            sort_mode: SortMode::from_strict(config.strict_order),
            base_dir: base_dir.into(),
        }
    }

    /// Check whether a component passes the include/exclude filters
    pub fn is_selected(&self, name: &str) -> bool {
        if !self.includes.is_empty() && !self.includes.iter().any(|n| n == name) {
            return false;
        }
        !self.excludes.iter().any(|n| n == name)
    }
}

/// Orchestrates a bundle run against a package manager
pub struct BundleOperation<'a, P> {
    package_manager: &'a P,
    options: BundleOptions,
}

impl<'a, P: PackageManager> BundleOperation<'a, P> {
    pub fn new(package_manager: &'a P, options: BundleOptions) -> Self {
        Self {
            package_manager,
            options,
        }
    }

    /// Query bower and resolve the ordered component list
    pub async fn run(&self) -> Result<Vec<ResolvedComponent>> {
        let listings = fetch_listings(self.package_manager).await?;
        resolve_listings(&listings, &self.options)
    }
}

/// Resolve and order the components of already fetched listings
///
/// # Errors
///
/// Returns `MainFileNotFound` for the first selected component without a
/// main file, and the sort's error in strict mode.
pub fn resolve_listings(
    listings: &Listings,
    options: &BundleOptions,
) -> Result<Vec<ResolvedComponent>> {
    // Filtered-out components still contribute their dependencies
    let deps = collect_dependencies(&listings.components, &options.dependencies);

    if listings.paths.is_empty() {
        tracing::warn!("Bower reported no installed components");
    }

    // Reported order matters: the default ordering is input-order dependent
    let mut resolved = Vec::new();
    for (name, paths) in &listings.paths {
        if !options.is_selected(name) {
            tracing::debug!("{}: skipped by include/exclude filters", name);
            continue;
        }

        let candidates = paths.clone().into_vec();
        let Some(main) = resolve_main(name, &candidates, &options.base_dir)? else {
            return Err(BowerConcatError::MainFileNotFound { name: name.clone() });
        };
        resolved.push(ResolvedComponent::new(name.clone(), main));
    }

    let sorted = sort_components(resolved, &deps, options.sort_mode)?;
    tracing::info!("Resolved {} components", sorted.len());
    Ok(sorted)
}

/// Main files of ordered components, names dropped
pub fn file_paths(components: Vec<ResolvedComponent>) -> Vec<PathBuf> {
    components.into_iter().map(|c| c.file).collect()
}
