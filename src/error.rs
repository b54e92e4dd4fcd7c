use thiserror::Error;

#[derive(Error, Debug)]
pub enum SprintboardError {
    #[error("sprint data source not found: {0}")]
    SourceNotFound(String),

    #[error("failed to read sprint data source {path}: {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("team not found: {0}")]
    TeamNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SprintboardError>;
