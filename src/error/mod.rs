//! Error types and handling for bower-concat
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every error is fatal for the whole run: nothing is emitted once one of
//! these is returned.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bower-concat operations
#[derive(Error, Diagnostic, Debug)]
pub enum BowerConcatError {
    // Package manager errors
    #[error("Bower query '{query}' failed: {reason}")]
    #[diagnostic(
        code(bower_concat::bower::query_failed),
        help("Check that bower is installed and `bower list` works in this directory")
    )]
    QueryFailed { query: String, reason: String },

    // Resolution errors
    #[error("Can't detect main file for \"{name}\" component")]
    #[diagnostic(
        code(bower_concat::resolve::main_not_found),
        help(
            "You should add it manually to the concat task and exclude it from the bower task build"
        )
    )]
    MainFileNotFound { name: String },

    #[error("Circular dependency detected: {chain}")]
    #[diagnostic(
        code(bower_concat::deps::circular),
        help("Break the cycle with a `dependencies` override or drop --strict-order")
    )]
    CircularDependency { chain: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(bower_concat::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(bower_concat::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(bower_concat::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(bower_concat::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(bower_concat::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(bower_concat::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bower_concat::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BowerConcatError {
    fn from(err: std::io::Error) -> Self {
        BowerConcatError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BowerConcatError {
    fn from(err: serde_yaml::Error) -> Self {
        BowerConcatError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BowerConcatError>;

/// Creates a query failure for the named bower listing
pub fn query_failed(query: impl Into<String>, reason: impl ToString) -> BowerConcatError {
    BowerConcatError::QueryFailed {
        query: query.into(),
        reason: reason.to_string(),
    }
}
