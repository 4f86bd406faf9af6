use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Field not found: {0}")]
    NotFound(String),

    #[error("Record not found: {resource}/{id}")]
    RecordNotFound { resource: String, id: String },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    DateFormat { value: String },

    #[error("Schema mismatch on {resource}.{field}: {reason}")]
    SchemaMismatch {
        resource: &'static str,
        field: String,
        reason: String,
    },

    #[error("Wire format error: {0}")]
    Wire(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl RecordError {
    pub(crate) fn mismatch(
        resource: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RecordError::SchemaMismatch {
            resource,
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
