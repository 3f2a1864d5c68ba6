//! Configuration handling for bower-concat
//!
//! This module contains:
//! - `bower-concat.yaml` - Task configuration (filters, dependency overrides)
//! - [`OneOrMany`] - scalar-or-sequence values shared with bower metadata

pub mod one_or_many;
pub mod task;

// Re-export commonly used types
pub use one_or_many::OneOrMany;
pub use task::{TaskConfig, TaskOverrides, load_task_config, parse_dependency_override};
