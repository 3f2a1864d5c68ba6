//! Concat command implementation

use std::path::PathBuf;

use console::style;

use crate::cli::ConcatArgs;
use crate::commands::helpers::{load_task, resolve_workspace_path, run_task};
use crate::error::{BowerConcatError, Result};
use crate::operations::file_paths;
use crate::output::{BundleSink, ConcatSink};

/// Run concat command
///
/// Writes the main files, in bundle order, into a single destination file.
pub fn run(workspace: Option<PathBuf>, args: ConcatArgs) -> Result<()> {
    let workspace = resolve_workspace_path(workspace)?;
    let config = load_task(&workspace, &args.task)?;

    let dest = args
        .dest
        .clone()
        .or_else(|| config.dest.clone())
        .ok_or_else(|| BowerConcatError::ConfigInvalid {
            message: "No destination given; pass --dest or set `dest` in bower-concat.yaml"
                .to_string(),
        })?;

    let components = run_task(&workspace, &args.task, &config)?;
    let files = file_paths(components);

    let mut sink = ConcatSink::new(&workspace, &dest).with_separator(args.separator);
    sink.emit(&files)?;

    println!(
        "{} {} files into {}",
        style("Bundled").green().bold(),
        files.len(),
        style(dest.display()).cyan()
    );

    Ok(())
}
