// Thu Oct 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("Unknown type: {0}")]
    UnknownType(String),
    #[error("Invalid schema {schema}: {reason}")]
    InvalidSchema { schema: String, reason: String },
    #[error("Schema already registered: {0}")]
    DuplicateSchema(String),
    #[error("Schema not registered: {0}")]
    UnknownSchema(String),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl StructureError {
    pub fn invalid_schema(schema: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            schema: schema.to_string(),
            reason: reason.into(),
        }
    }
}

pub type StructureResult<T> = Result<T, StructureError>;
