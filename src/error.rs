use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Members CSV does not exist: {0}")]
    FileNotFound(String),

    #[error("Resume folder does not exist: {0}")]
    FolderNotFound(String),

    #[error("{0} not found, please install it to use this tool")]
    ToolNotFound(String),

    #[error("No command found to convert doc to pdf, tried {}", .0.join(", "))]
    NoConverter(Vec<String>),

    #[error("Error creating {}: {source}", path.display())]
    StagingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading {}: {source}", path.display())]
    StagingRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No resumes to combine")]
    NoPages,

    #[error("Error combining pdfs: {0}")]
    Merge(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error(transparent)]
    Common(#[from] booklet_common::Error),
}

pub type Result<T> = std::result::Result<T, BookletError>;
