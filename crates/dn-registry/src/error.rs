use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("a point named {0:?} already exists")]
    DuplicateName(String),

    #[error("no point named {0:?}")]
    NotFound(String),

    #[error("invalid point {name:?}: {reason}")]
    InvalidPoint { name: String, reason: String },

    #[error("point file parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
