//! High-level operations
//!
//! - `BundleOperation`: query bower, resolve main files, order them
//!
//! The operation coordinates with:
//! - Bower: component listings (from bower module)
//! - Resolver: main file detection and ordering (from resolver module)

pub mod bundle;

pub use bundle::{BundleOperation, BundleOptions, file_paths};
