use crate::pipeline::GenerateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChlogError {
    #[error("GEMINI_API_KEY environment variable is not set, and no geminiApiKey could be read from ~/.gemini/settings.json")]
    MissingCredential,

    #[error("failed to read git log: {0}")]
    GitLog(String),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChlogError>;
