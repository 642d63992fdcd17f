use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotkeyForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to write {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Validation(String),
}

pub type HfResult<T> = Result<T, HotkeyForgeError>;
