//! Ordering of resolved components
//!
//! Two modes are available (see [`SortMode`]):
//!
//! ## Comparator (default)
//!
//! Components are ordered with a pairwise rule: `a` goes before `b` only when
//! `b` lists `a` as a dependency; in every other case `b` goes first. The rule
//! is not a total order (two unrelated components each claim to go after the
//! other), so it drives a plain insertion sort rather than `slice::sort_by`,
//! which may panic on inconsistent comparators. Each component moves left
//! until it meets one of its own dependencies.
//!
//! Direct dependencies always end up first. Long chains and cycles get a
//! best-effort placement.
//!
//! ## Strict
//!
//! Depth-first search with three-color marking, as used for installs:
//!
//! 1. **WHITE** (unvisited): Node hasn't been processed
//! 2. **GRAY** (temporarily visited): Node is in current recursion stack
//! 3. **BLACK** (permanently visited): Node has been fully processed
//!
//! Cycles are detected when we encounter a GRAY node. Dependencies that were
//! not resolved (filtered out, never installed) are ignored.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use super::graph::{DependencyMap, depends_on};
use crate::domain::{ResolvedComponent, SortMode};
use crate::error::{BowerConcatError, Result};

/// Order `components` according to `mode`
///
/// # Errors
///
/// Only the strict mode fails, on a circular dependency.
pub fn sort_components(
    components: Vec<ResolvedComponent>,
    deps: &DependencyMap,
    mode: SortMode,
) -> Result<Vec<ResolvedComponent>> {
    tracing::debug!("Sorting {} components ({:?})", components.len(), mode);
    match mode {
        SortMode::Comparator => Ok(comparator_sort(components, deps)),
        SortMode::Strict => topological_sort(&components, deps),
    }
}

/// Pairwise ordering rule
///
/// `Less` (a first) only when `b` depends on `a`; `Greater` (b first) for
/// everything else, including unrelated pairs.
pub fn compare(a: &ResolvedComponent, b: &ResolvedComponent, deps: &DependencyMap) -> Ordering {
    if depends_on(deps, &b.name, &a.name) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Insertion sort driven by [`compare`]
pub fn comparator_sort(
    mut components: Vec<ResolvedComponent>,
    deps: &DependencyMap,
) -> Vec<ResolvedComponent> {
    for i in 1..components.len() {
        let mut j = i;
        while j > 0 && compare(&components[j - 1], &components[j], deps) == Ordering::Greater {
            components.swap(j - 1, j);
            j -= 1;
        }
    }
    components
}

/// Context for topological sort operations
struct TopoSortContext<'a> {
    /// Dependency map (adjacency list)
    deps: &'a DependencyMap,
    /// Resolved components keyed by name
    resolved: BTreeMap<&'a str, &'a ResolvedComponent>,
    /// Visited components (BLACK)
    visited: HashSet<&'a str>,
    /// Current DFS path (GRAY), kept in order for cycle reporting
    path: Vec<&'a str>,
    /// Result in dependency order
    result: Vec<ResolvedComponent>,
}

/// Depth-first topological sort
///
/// Returns components with dependencies first. Independent components keep
/// name order.
///
/// # Errors
///
/// Returns error if a circular dependency is detected among resolved
/// components.
///
/// # Example
///
/// ```text
/// Dependencies:
///   app depends on lib
///   lib depends on jquery
///   jquery has no dependencies
///
/// Result: [jquery, lib, app]
/// ```
pub fn topological_sort(
    components: &[ResolvedComponent],
    deps: &DependencyMap,
) -> Result<Vec<ResolvedComponent>> {
    let mut ctx = TopoSortContext {
        deps,
        resolved: components.iter().map(|c| (c.name.as_str(), c)).collect(),
        visited: HashSet::new(),
        path: Vec::new(),
        result: Vec::with_capacity(components.len()),
    };

    let names: Vec<&str> = ctx.resolved.keys().copied().collect();
    for name in names {
        topo_dfs(&mut ctx, name)?;
    }

    Ok(ctx.result)
}

/// DFS helper with cycle detection
///
/// Post-order adds nodes to result after all dependencies are processed.
fn topo_dfs<'a>(ctx: &mut TopoSortContext<'a>, name: &'a str) -> Result<()> {
    if ctx.visited.contains(name) {
        return Ok(());
    }

    if let Some(start) = ctx.path.iter().position(|n| *n == name) {
        let mut chain: Vec<&str> = ctx.path[start..].to_vec();
        chain.push(name);
        return Err(BowerConcatError::CircularDependency {
            chain: chain.join(" -> "),
        });
    }

    ctx.path.push(name);

    let deps = ctx.deps;
    if let Some(component_deps) = deps.get(name) {
        for dep_name in component_deps {
            // Unresolved dependencies have no file to order
            let resolved_dep = ctx
                .resolved
                .get_key_value(dep_name.as_str())
                .map(|(key, _)| *key);
            if let Some(dep) = resolved_dep {
                topo_dfs(ctx, dep)?;
            }
        }
    }

    ctx.path.pop();
    ctx.visited.insert(name);

    if let Some(component) = ctx.resolved.get(name) {
        ctx.result.push((*component).clone());
    }

    Ok(())
}
