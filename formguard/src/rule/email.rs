use std::sync::LazyLock;

use regex::Regex;

use super::{Evaluator, RuleOutcome};

/// Reason reported when a value is not an email address.
pub const EMAIL_REASON: &str = "not email type.";

// local part: dot-separated atoms or a quoted string
// domain: bracketed dotted quad, or labels ending in a 2+ letter TLD
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-z\-0-9]+\.)+[a-z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

/// Fails when the value is not an email address. Matching is
/// case-insensitive; the empty string fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailEvaluator;

impl EmailEvaluator {
    /// Check a value against the email grammar.
    pub fn is_email(value: &str) -> bool {
        EMAIL_PATTERN.is_match(&value.to_lowercase())
    }
}

impl Evaluator for EmailEvaluator {
    fn evaluate(&self, value: &str) -> RuleOutcome {
        if Self::is_email(value) {
            RuleOutcome::Valid
        } else {
            RuleOutcome::invalid(EMAIL_REASON)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(EmailEvaluator::is_email("a@b.co"));
        assert!(EmailEvaluator::is_email("first.last@mail.example.org"));
        assert!(EmailEvaluator::is_email("a@[192.168.0.1]"));
        assert!(EmailEvaluator::is_email("\"odd name\"@example.com"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(EmailEvaluator::is_email("John.Doe@Example.COM"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!EmailEvaluator::is_email(""));
        assert!(!EmailEvaluator::is_email("not-an-email"));
        assert!(!EmailEvaluator::is_email("a@b"));
        assert!(!EmailEvaluator::is_email("a@b.c"));
        assert!(!EmailEvaluator::is_email("a b@c.com"));
        assert!(!EmailEvaluator::is_email("a..b@c.com"));
        assert!(!EmailEvaluator::is_email("a@[1.2.3]"));
    }

    #[test]
    fn test_outcome_reason() {
        assert_eq!(
            EmailEvaluator.evaluate("nope").reason(),
            Some(EMAIL_REASON)
        );
        assert!(EmailEvaluator.evaluate("a@b.co").is_valid());
    }
}
