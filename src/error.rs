use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum McuError {
    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    #[error("Picture not found: {0}")]
    PictureNotFound(String),

    #[error("No cast recorded for picture: {0}")]
    NoCast(String),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McuError {
    /// Machine-readable code exposed in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            McuError::CharacterNotFound(_) | McuError::PictureNotFound(_) | McuError::NoCast(_) => {
                "NOT_FOUND"
            }
            McuError::DuplicateId { .. } => "DUPLICATE_ID",
            McuError::InvalidDate(_) => "BAD_USER_INPUT",
            McuError::Config(_) => "CONFIGURATION",
            McuError::Io(_) | McuError::Yaml(_) | McuError::Json(_) => "INTERNAL",
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == "NOT_FOUND"
    }
}

impl ErrorExtensions for McuError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code().to_string()))
    }
}

pub type Result<T> = std::result::Result<T, McuError>;
