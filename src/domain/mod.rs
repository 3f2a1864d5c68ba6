//! Domain models for bower-concat
//!
//! Plain data passed between the resolver stages.

pub mod component;

pub use component::{ResolvedComponent, SortMode};
