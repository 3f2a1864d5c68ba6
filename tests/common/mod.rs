//! Common test utilities for bower-concat integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway bower project
///
/// Components are written as real files under `bower_components/` and the
/// listings bower would report are saved as `map.json` and `paths.json`, so
/// tests run without a bower install.
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
    map: serde_json::Map<String, serde_json::Value>,
    paths: serde_json::Map<String, serde_json::Value>,
}

impl TestProject {
    /// Create a new, empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self {
            temp,
            path,
            map: serde_json::Map::new(),
            paths: serde_json::Map::new(),
        }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Add a component reported by directory, with the given script files
    pub fn add_component(&mut self, name: &str, deps: &[&str], files: &[&str]) {
        let dir = format!("bower_components/{name}");
        for file in files {
            self.write_file(&format!("{dir}/{file}"), &format!("/* {name}/{file} */"));
        }
        self.report(name, deps, serde_json::json!(dir));
    }

    /// Add a component reported by its declared main files
    pub fn add_component_with_main(&mut self, name: &str, deps: &[&str], main: &[&str]) {
        for file in main {
            self.write_file(file, &format!("/* {file} */"));
        }
        self.report(name, deps, serde_json::json!(main));
    }

    fn report(&mut self, name: &str, deps: &[&str], paths: serde_json::Value) {
        let deps: serde_json::Map<String, serde_json::Value> = deps
            .iter()
            .map(|d| ((*d).to_string(), serde_json::json!("*")))
            .collect();
        self.map.insert(
            name.to_string(),
            serde_json::json!({ "dependencies": deps }),
        );
        self.paths.insert(name.to_string(), paths);
    }

    /// Save the listings next to the components
    pub fn save_listings(&self) {
        self.write_file(
            "map.json",
            &serde_json::to_string_pretty(&self.map).expect("Failed to encode map"),
        );
        self.write_file(
            "paths.json",
            &serde_json::to_string_pretty(&self.paths).expect("Failed to encode paths"),
        );
    }

    /// Command running `bower-concat <subcommand>` against the saved listings
    pub fn cmd(&self, subcommand: &str) -> Command {
        self.save_listings();
        let mut cmd = bower_concat_cmd();
        cmd.current_dir(&self.path)
            .env_remove("RUST_LOG")
            .arg(subcommand)
            .args(["--map-file", "map.json", "--paths-file", "paths.json"]);
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the bower-concat binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn bower_concat_cmd() -> Command {
    Command::cargo_bin("bower-concat").expect("bower-concat binary should be built")
}
