//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::bower::{BowerCli, ListingFiles};
use crate::cli::TaskArgs;
use crate::config::{TaskConfig, TaskOverrides, load_task_config, parse_dependency_override};
use crate::domain::ResolvedComponent;
use crate::error::{BowerConcatError, Result};
use crate::operations::{BundleOperation, BundleOptions};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| BowerConcatError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Load the task config and layer the command line flags over it
pub fn load_task(workspace: &Path, args: &TaskArgs) -> Result<TaskConfig> {
    let mut config = load_task_config(workspace, args.config.as_deref())?;

    let dependencies = args
        .dependencies
        .iter()
        .map(|raw| parse_dependency_override(raw))
        .collect::<Result<Vec<_>>>()?;

    config.apply_overrides(TaskOverrides {
        include: args.include.clone(),
        exclude: args.exclude.clone(),
        dependencies,
        strict_order: args.strict_order,
    });

    Ok(config)
}

/// Resolve the ordered components for a task
///
/// Uses the saved listings when `--map-file`/`--paths-file` are given and
/// the bower executable otherwise.
pub fn run_task(
    workspace: &Path,
    args: &TaskArgs,
    config: &TaskConfig,
) -> Result<Vec<ResolvedComponent>> {
    let options = BundleOptions::from_config(config, workspace);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| BowerConcatError::IoError {
            message: format!("Failed to start async runtime: {e}"),
        })?;

    match (&args.map_file, &args.paths_file) {
        (Some(map_file), Some(paths_file)) => {
            let listings = ListingFiles::new(workspace.join(map_file), workspace.join(paths_file));
            runtime.block_on(BundleOperation::new(&listings, options).run())
        }
        _ => {
            let bower = BowerCli::new(args.bower.clone(), workspace);
            runtime.block_on(BundleOperation::new(&bower, options).run())
        }
    }
}
