//! Resolve command implementation

use std::path::PathBuf;

use crate::cli::ResolveArgs;
use crate::commands::helpers::{load_task, resolve_workspace_path, run_task};
use crate::error::Result;
use crate::operations::file_paths;
use crate::output::{BundleSink, ListSink};

/// Run resolve command
///
/// Prints the main files in bundle order to stdout.
pub fn run(workspace: Option<PathBuf>, args: ResolveArgs) -> Result<()> {
    let workspace = resolve_workspace_path(workspace)?;
    let config = load_task(&workspace, &args.task)?;
    let components = run_task(&workspace, &args.task, &config)?;

    let mut sink = ListSink::new(std::io::stdout().lock(), args.format);
    sink.emit(&file_paths(components))
}
