//! Error types.
//!
//! Only structural problems with a document (or with getting it off disk) are
//! errors. Unknown type references and malformed allowed-value text are
//! absorbed into placeholder examples and never show up here.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The decoded tree has no `definitions` container at its root.
    #[error("document has no `definitions` element (is this a decision model?)")]
    MissingDefinitions,

    #[error("unsupported file `{path}`: expected a name ending in `{expected}`")]
    UnsupportedFileType { path: String, expected: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse decoded tree ({path}): {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON pointer `{pointer}` selects nothing in {path}")]
    PointerMiss { pointer: String, path: String },

    #[error("jq filter failed on {path}: {message}")]
    Jq { path: String, message: String },

    #[error("invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("glob pattern matched no files: {0}")]
    NoFilesMatched(String),
}

impl Error {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
