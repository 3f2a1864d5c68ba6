//! Listings from the `bower` executable

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tokio::process::Command;

use super::{DependencyListing, PackageManager, PathsListing};
use crate::error::{Result, query_failed};

/// Default bower executable
pub const DEFAULT_BOWER_PROGRAM: &str = "bower";

/// Queries an installed bower via `bower list --json`
#[derive(Debug, Clone)]
pub struct BowerCli {
    /// Executable to run
    pub program: String,
    /// Directory holding `bower.json`
    pub cwd: PathBuf,
}

impl BowerCli {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
        }
    }

    /// Run `bower list --<kind> --json` and parse its stdout
    async fn list<T: DeserializeOwned>(&self, kind: &str) -> Result<T> {
        let flag = format!("--{kind}");
        tracing::debug!("Running {} list {} --json", self.program, flag);

        let output = Command::new(&self.program)
            .args(["list", flag.as_str(), "--json"])
            .current_dir(&self.cwd)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| query_failed(kind, format!("failed to run '{}': {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(query_failed(
                kind,
                format!("{} exited with {}: {}", self.program, output.status, stderr.trim()),
            ));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| query_failed(kind, format!("invalid JSON from bower: {e}")))
    }
}

impl Default for BowerCli {
    fn default() -> Self {
        Self::new(DEFAULT_BOWER_PROGRAM, ".")
    }
}

impl PackageManager for BowerCli {
    async fn dependency_map(&self) -> Result<DependencyListing> {
        self.list("map").await
    }

    async fn paths_map(&self) -> Result<PathsListing> {
        self.list("paths").await
    }
}
