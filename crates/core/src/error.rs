//! Domain error type.
//!
//! "Record absent" is never an error in this crate; repositories signal it
//! through `Option`/`bool` returns so callers can treat it as a normal
//! branch. [`CoreError`] covers outright storage failure, which repositories
//! never swallow and use cases never translate.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The backing store could not be read or written.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted blob could not be serialized or deserialized.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
