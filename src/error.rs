use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures while decoding an imported snapshot. `Malformed` means the
/// text never parsed as JSON; `InvalidShape` means it parsed but a
/// top-level key failed its structural check. Either way the import is
/// rejected before any collection is touched.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed JSON: {0}")]
    Malformed(String),

    #[error("Invalid snapshot shape: {0}")]
    InvalidShape(String),
}
