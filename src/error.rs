use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CovhtmlError {
    #[error("read coverage data: {0}")]
    InputRead(#[source] std::io::Error),

    #[error("unmarshal coverage data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("stylesheet: {} not found", .0.display())]
    StylesheetNotFound(PathBuf),

    #[error("stylesheet: {}: {source}", path.display())]
    StylesheetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("execute template: {0}")]
    Render(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CovhtmlError>;
