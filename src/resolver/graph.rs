//! Dependency map building
//!
//! The dependency graph is represented as a map from component names to their
//! list of dependencies:
//!
//! ```text
//! BTreeMap<String, Vec<String>>
//!    ↓              ↓
//!  component     [dep1, dep2, dep3]
//! ```
//!
//! Two sources feed it: the caller's overrides and the `dependencies` bower
//! reports. An override replaces the reported list for that component
//! entirely; lists are never merged entry by entry.

use std::collections::BTreeMap;

use crate::bower::DependencyListing;
use crate::config::OneOrMany;

/// Component name → names of the components it depends on
pub type DependencyMap = BTreeMap<String, Vec<String>>;

/// Merge overrides with the dependencies bower reports
///
/// Every reported component that declares dependencies and has no override
/// gets its declared dependency names. All reported components are
/// considered, including ones a task later filters out. The caller's
/// overrides are left untouched.
///
/// # Example
///
/// ```text
/// Overrides:
///   app → "lib"
///
/// Reported:
///   app    (depends on: jquery)
///   lib    (depends on: jquery)
///   jquery (no dependencies field)
///
/// Output:
///   "app" → ["lib"]
///   "lib" → ["jquery"]
/// ```
pub fn collect_dependencies(
    components: &DependencyListing,
    overrides: &BTreeMap<String, OneOrMany<String>>,
) -> DependencyMap {
    let mut deps: DependencyMap = overrides
        .iter()
        .map(|(name, value)| (name.clone(), value.clone().into_vec()))
        .collect();

    for (name, component) in components {
        if deps.contains_key(name) {
            continue;
        }
        if let Some(names) = component.dependency_names() {
            deps.insert(name.clone(), names);
        }
    }

    deps
}

/// Check whether `component` lists `dependency` in `deps`
pub fn depends_on(deps: &DependencyMap, component: &str, dependency: &str) -> bool {
    deps.get(component)
        .is_some_and(|list| list.iter().any(|d| d == dependency))
}
