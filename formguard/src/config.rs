//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default message template. `{label}` is the field's display label and
/// `{reason}` the failing rule's reason fragment.
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "The {label} field is {reason}";

/// What to do with a rule name that has no registered evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRulePolicy {
    /// Fail form initialization with [`ConfigError::UnknownRule`](crate::error::ConfigError::UnknownRule).
    #[default]
    Reject,
    /// Evaluate the unknown rule with the `required` evaluator.
    FallbackRequired,
}

/// Configuration for a [`ValidationEngine`](crate::ValidationEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Policy for rule names missing from the registry.
    pub unknown_rules: UnknownRulePolicy,

    /// Template used to build error messages.
    pub message_template: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            unknown_rules: UnknownRulePolicy::default(),
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a config with lenient unknown-rule handling.
    pub fn lenient() -> Self {
        Self {
            unknown_rules: UnknownRulePolicy::FallbackRequired,
            ..Default::default()
        }
    }

    /// Set the unknown-rule policy.
    pub fn unknown_rules(mut self, policy: UnknownRulePolicy) -> Self {
        self.unknown_rules = policy;
        self
    }

    /// Set the message template.
    pub fn message_template(mut self, template: impl Into<String>) -> Self {
        self.message_template = template.into();
        self
    }

    /// Render an error message for a field label and failure reason.
    pub fn render_message(&self, label: &str, reason: &str) -> String {
        self.message_template
            .replace("{reason}", reason)
            .replace("{label}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let config = EngineConfig::default();
        assert_eq!(
            config.render_message("email", "required."),
            "The email field is required."
        );
    }

    #[test]
    fn test_custom_template() {
        let config = EngineConfig::default().message_template("{label}: {reason}");
        assert_eq!(config.render_message("Name", "required."), "Name: required.");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "unknown_rules": "fallback_required" }"#).unwrap();
        assert_eq!(config.unknown_rules, UnknownRulePolicy::FallbackRequired);
        assert_eq!(config.message_template, DEFAULT_MESSAGE_TEMPLATE);
    }
}
