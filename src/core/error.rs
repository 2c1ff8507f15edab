use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown fighter: {0}")]
    UnknownFighter(String),

    #[error("Unknown ability: {0}")]
    UnknownAbility(String),

    #[error("Name already registered: {0}")]
    DuplicateName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
