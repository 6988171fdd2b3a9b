//! Configuration errors raised while building a form

/// Error raised when a form or its rules are misconfigured.
///
/// These are reported when the form is initialized, never during
/// validation of a value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Two field descriptors share the same name.
    #[error("Field '{field}' is declared more than once")]
    DuplicateField { field: String },

    /// A rule name has no registered evaluator and fallback is disabled.
    #[error("Field '{field}' uses unknown rule '{rule}'")]
    UnknownRule { field: String, rule: String },

    /// A field was declared without any rules.
    #[error("Field '{field}' has no validation rules")]
    NoRules { field: String },

    /// A form descriptor could not be parsed.
    #[error("Invalid form descriptor: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new duplicate field error.
    pub fn duplicate_field(field: impl Into<String>) -> Self {
        Self::DuplicateField {
            field: field.into(),
        }
    }

    /// Creates a new unknown rule error.
    pub fn unknown_rule(field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::UnknownRule {
            field: field.into(),
            rule: rule.into(),
        }
    }
}
