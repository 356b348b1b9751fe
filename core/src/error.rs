use thiserror::Error;

/// Errors raised while parsing or resolving a token document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse token document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("collection {collection:?} declares no modes")]
    EmptyModes { collection: String },

    #[error("collection {collection:?} declares mode {mode:?} more than once")]
    DuplicateMode { collection: String, mode: String },
}
