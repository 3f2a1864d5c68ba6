//! Command implementations for bower-concat CLI

pub mod completions;
pub mod concat;
pub mod helpers;
pub mod resolve;
pub mod version;
