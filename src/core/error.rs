use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Invalid save record: {0}")]
    InvalidRecord(String),

    #[error("No save file found")]
    NoSaveFile,
}

pub type Result<T> = std::result::Result<T, PetError>;
