//! Error types for JTAP.

use std::io;

/// Errors produced by the JTAP console and its support crates.
#[derive(Debug, thiserror::Error)]
pub enum JtapError {
    /// Allocation failed while duplicating a completion match.
    #[error("out of memory")]
    OutOfMemory,

    /// An operation was attempted in a state that cannot support it,
    /// e.g. a transport-dependent command with no cable attached.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// A required argument is missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric literal (or similar token) failed to parse.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Cable driver failure: unknown driver, open failure, transport I/O.
    #[error("cable error: {0}")]
    Cable(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, JtapError>;
