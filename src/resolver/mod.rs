//! Resolution of bower components into ordered main files
//!
//! - [`distance`]: edit distance used to rank candidate file names
//! - [`main_file`]: picks each component's main JavaScript file
//! - [`graph`]: merges dependency overrides with reported dependencies
//! - [`sort`]: orders resolved components so dependencies come first

pub mod distance;
pub mod graph;
pub mod main_file;
pub mod sort;

pub use graph::collect_dependencies;
pub use main_file::resolve_main;
pub use sort::sort_components;
