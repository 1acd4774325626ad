//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers only what
//! lives in `dn-core` itself (configuration and its parsing).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `dn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
