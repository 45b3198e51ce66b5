//! Configuration validation errors.

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing key: {key}")]
    Missing { key: String },

    #[error("Not a number: {key} = {value}")]
    NotANumber { key: String, value: String },

    #[error("Invalid value: {key} = {value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn invalid(key: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
