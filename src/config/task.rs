//! Task configuration (`bower-concat.yaml`)
//!
//! The file is optional. Values from the command line are layered on top with
//! [`TaskConfig::apply_overrides`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::OneOrMany;
use crate::error::{BowerConcatError, Result};

/// Task config filename
pub const TASK_CONFIG_FILE: &str = "bower-concat.yaml";

/// Include/exclude filters, dependency overrides and output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    /// Component names to include (empty means all)
    #[serde(default)]
    pub include: OneOrMany<String>,

    /// Component names to skip
    #[serde(default)]
    pub exclude: OneOrMany<String>,

    /// Dependency overrides, taking precedence over bower metadata
    #[serde(default)]
    pub dependencies: BTreeMap<String, OneOrMany<String>>,

    /// Use a real topological sort instead of the pairwise comparator
    #[serde(default)]
    pub strict_order: bool,

    /// Default destination for `concat`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<PathBuf>,
}

/// Command line values layered over the file
#[derive(Debug, Clone, Default)]
pub struct TaskOverrides {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub dependencies: Vec<(String, Vec<String>)>,
    pub strict_order: bool,
}

impl TaskConfig {
    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid, empty config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Include list as a sequence
    pub fn includes(&self) -> Vec<String> {
        self.include.clone().into_vec()
    }

    /// Exclude list as a sequence
    pub fn excludes(&self) -> Vec<String> {
        self.exclude.clone().into_vec()
    }

    /// Layer command line values over the file values
    ///
    /// Non-empty include/exclude lists replace the file's lists; dependency
    /// entries replace the file's entry for the same component.
    pub fn apply_overrides(&mut self, overrides: TaskOverrides) {
        if !overrides.include.is_empty() {
            self.include = OneOrMany::Many(overrides.include);
        }
        if !overrides.exclude.is_empty() {
            self.exclude = OneOrMany::Many(overrides.exclude);
        }
        for (name, deps) in overrides.dependencies {
            self.dependencies.insert(name, OneOrMany::Many(deps));
        }
        self.strict_order |= overrides.strict_order;
    }
}

/// Load the task configuration
///
/// With an explicit path the file must exist. Otherwise `bower-concat.yaml` in
/// `workspace` is read when present and the default config is used when not.
pub fn load_task_config(workspace: &Path, explicit: Option<&Path>) -> Result<TaskConfig> {
    let path = match explicit {
        Some(path) => {
            let path = workspace.join(path);
            if !path.is_file() {
                return Err(BowerConcatError::ConfigNotFound {
                    path: path.display().to_string(),
                });
            }
            path
        }
        None => {
            let path = workspace.join(TASK_CONFIG_FILE);
            if !path.exists() {
                tracing::debug!("No {} in {}, using defaults", TASK_CONFIG_FILE, workspace.display());
                return Ok(TaskConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path).map_err(|e| BowerConcatError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    TaskConfig::from_yaml(&content).map_err(|e| match e {
        BowerConcatError::ConfigParseFailed { reason, .. } => {
            BowerConcatError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            }
        }
        other => other,
    })
}

/// Parse a `name=dep1,dep2` dependency override from the command line
pub fn parse_dependency_override(raw: &str) -> Result<(String, Vec<String>)> {
    let Some((name, deps)) = raw.split_once('=') else {
        return Err(BowerConcatError::ConfigInvalid {
            message: format!("Dependency override '{raw}' must look like name=dep1,dep2"),
        });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(BowerConcatError::ConfigInvalid {
            message: format!("Dependency override '{raw}' has an empty component name"),
        });
    }

    let deps = deps
        .split(',')
        .map(str::trim)
        .filter(|dep| !dep.is_empty())
        .map(ToString::to_string)
        .collect();

    Ok((name.to_string(), deps))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_yaml_full() {
        let yaml = r"
include: [jquery, app]
exclude: modernizr
dependencies:
  app: lib
  lib: [jquery, underscore]
strict_order: true
dest: dist/bower.js
";
        let config = TaskConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.includes(), vec!["jquery", "app"]);
        assert_eq!(config.excludes(), vec!["modernizr"]);
        assert_eq!(
            config.dependencies.get("app").cloned().map(OneOrMany::into_vec),
            Some(vec!["lib".to_string()])
        );
        assert_eq!(
            config.dependencies.get("lib").cloned().map(OneOrMany::into_vec),
            Some(vec!["jquery".to_string(), "underscore".to_string()])
        );
        assert!(config.strict_order);
        assert_eq!(config.dest, Some(PathBuf::from("dist/bower.js")));
    }

    #[test]
    fn test_from_yaml_empty() {
        let config = TaskConfig::from_yaml("").unwrap();
        assert_eq!(config, TaskConfig::default());
        assert!(config.includes().is_empty());
        assert!(config.excludes().is_empty());
    }

    #[test]
    fn test_from_yaml_unknown_field() {
        let result = TaskConfig::from_yaml("includes: [a]\n");
        assert!(matches!(
            result,
            Err(BowerConcatError::ConfigParseFailed { .. })
        ));
    }

    #[test]
    fn test_apply_overrides_replaces_lists() {
        let mut config = TaskConfig::from_yaml("include: [a]\nexclude: [b]\n").unwrap();
        config.apply_overrides(TaskOverrides {
            include: vec!["c".to_string()],
            exclude: Vec::new(),
            dependencies: vec![("app".to_string(), vec!["lib".to_string()])],
            strict_order: false,
        });

        assert_eq!(config.includes(), vec!["c"]);
        assert_eq!(config.excludes(), vec!["b"]);
        assert!(config.dependencies.contains_key("app"));
        assert!(!config.strict_order);
    }

    #[test]
    fn test_load_missing_default_config() {
        let temp = TempDir::new().unwrap();
        let config = load_task_config(temp.path(), None).unwrap();
        assert_eq!(config, TaskConfig::default());
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let temp = TempDir::new().unwrap();
        let result = load_task_config(temp.path(), Some(Path::new("nope.yaml")));
        assert!(matches!(result, Err(BowerConcatError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_default_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(TASK_CONFIG_FILE), "exclude: [jquery]\n").unwrap();

        let config = load_task_config(temp.path(), None).unwrap();
        assert_eq!(config.excludes(), vec!["jquery"]);
    }

    #[test]
    fn test_load_malformed_config_names_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(TASK_CONFIG_FILE), "include: [unclosed\n").unwrap();

        match load_task_config(temp.path(), None) {
            Err(BowerConcatError::ConfigParseFailed { path, .. }) => {
                assert!(path.ends_with(TASK_CONFIG_FILE));
            }
            other => panic!("Expected ConfigParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_dependency_override() {
        let (name, deps) = parse_dependency_override("app=lib, jquery").unwrap();
        assert_eq!(name, "app");
        assert_eq!(deps, vec!["lib", "jquery"]);
    }

    #[test]
    fn test_parse_dependency_override_no_deps() {
        let (name, deps) = parse_dependency_override("app=").unwrap();
        assert_eq!(name, "app");
        assert!(deps.is_empty());
    }

    #[test]
    fn test_parse_dependency_override_invalid() {
        assert!(parse_dependency_override("app").is_err());
        assert!(parse_dependency_override("=lib").is_err());
    }
}
