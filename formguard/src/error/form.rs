//! Errors raised by validation triggers

use super::ConfigError;

/// Error type for operations on an initialized form.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The trigger named a field the form does not contain.
    #[error("Field '{field}' not found in form")]
    UnknownField { field: String },

    /// A rule could not be resolved while evaluating a field.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}
