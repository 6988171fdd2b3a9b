//! Validation rules and their evaluators.
//!
//! A rule is identified by a [`RuleName`] and implemented by an
//! [`Evaluator`]. Evaluators are pure: they look only at the raw value and
//! never at the surrounding field or form.

mod email;
mod required;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use email::EmailEvaluator;
pub use required::RequiredEvaluator;

/// Identifier of a validation rule.
///
/// The built-in rules have their own variants; any other name is kept as
/// [`RuleName::Custom`] and resolved through the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleName {
    /// The value must contain non-whitespace characters.
    Required,
    /// The value must be an email address.
    Email,
    /// Any other registered rule.
    Custom(String),
}

impl RuleName {
    /// Get the rule name as it appears in rule lists.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::Custom(name) => name,
        }
    }

    /// Check if this is the `required` rule.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

impl From<&str> for RuleName {
    fn from(name: &str) -> Self {
        match name.trim() {
            "required" => Self::Required,
            "email" => Self::Email,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for RuleName {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<RuleName> for String {
    fn from(rule: RuleName) -> Self {
        rule.as_str().to_string()
    }
}

impl FromStr for RuleName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a comma-separated rule list such as `"required,email"`.
///
/// Names are trimmed and empty segments are skipped.
pub fn parse_rules(list: &str) -> Vec<RuleName> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(RuleName::from)
        .collect()
}

/// Result of evaluating one rule against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The value satisfies the rule.
    Valid,
    /// The value fails the rule.
    Invalid {
        /// Reason fragment completing "The <label> field is ...".
        reason: String,
    },
}

impl RuleOutcome {
    /// Create a failing outcome with the given reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    /// Check if the value passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Get the failure reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason } => Some(reason),
        }
    }
}

/// A stateless validation predicate.
///
/// Implementations must be safe to share between forms, so evaluation takes
/// `&self` and may not keep per-call state.
pub trait Evaluator: Send + Sync {
    /// Evaluate the rule against a raw field value.
    fn evaluate(&self, value: &str) -> RuleOutcome;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> RuleOutcome + Send + Sync,
{
    fn evaluate(&self, value: &str) -> RuleOutcome {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name_from_str() {
        assert_eq!(RuleName::from("required"), RuleName::Required);
        assert_eq!(RuleName::from(" email "), RuleName::Email);
        assert_eq!(
            RuleName::from("phone"),
            RuleName::Custom("phone".to_string())
        );
    }

    #[test]
    fn test_rule_name_display() {
        assert_eq!(RuleName::Required.to_string(), "required");
        assert_eq!(RuleName::Custom("zip".into()).to_string(), "zip");
    }

    #[test]
    fn test_parse_rules_attribute() {
        assert_eq!(
            parse_rules("required, email"),
            vec![RuleName::Required, RuleName::Email]
        );
        assert_eq!(parse_rules("required,,"), vec![RuleName::Required]);
        assert!(parse_rules("  ").is_empty());
    }

    #[test]
    fn test_closure_is_evaluator() {
        let digits = |v: &str| {
            if v.chars().all(|c| c.is_ascii_digit()) {
                RuleOutcome::Valid
            } else {
                RuleOutcome::invalid("not numeric.")
            }
        };
        assert!(digits.evaluate("123").is_valid());
        assert_eq!(digits.evaluate("12a").reason(), Some("not numeric."));
    }
}
