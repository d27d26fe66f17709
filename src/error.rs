use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Note not found: {0}")]
    NotFound(u64),

    #[error("Notes file {} is corrupt: {source}", path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No note ids left: largest stored id is {max_id}")]
    IdSpaceExhausted { max_id: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, NotesError>;
