use thiserror::Error;

#[derive(Debug, Error)]
pub enum CuratorError {
    #[error("Connector error: {0}")]
    Connector(#[from] arte_connectors::ConnectorError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid JSON in completion: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid generated content: {0}")]
    InvalidContent(String),
}

pub type CuratorResult<T> = Result<T, CuratorError>;
