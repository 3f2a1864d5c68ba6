//! Cross-platform path utilities
//!
//! Bundle file lists are printed and measured with forward slashes so the
//! output and the main file tie-break are the same on every platform.

use std::path::Path;

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
