use thiserror::Error;

/// Errors returned by record decoding and field selection.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("record length mismatch: expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("record truncated: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("no transform registered for field '{name}'")]
    MissingTransform { name: &'static str },
    #[error("unknown field name '{name}'")]
    UnknownField { name: String },
}
