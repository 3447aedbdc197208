use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("failed to read persona file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid persona definitions: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("persona with empty id at position {0}")]
    EmptyId(usize),

    #[error("duplicate persona id: {0}")]
    DuplicateId(String),
}
