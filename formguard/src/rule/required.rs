use super::{Evaluator, RuleOutcome};

/// Reason reported when a required value is blank.
pub const REQUIRED_REASON: &str = "required.";

/// Fails when the value is empty after trimming whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredEvaluator;

impl Evaluator for RequiredEvaluator {
    fn evaluate(&self, value: &str) -> RuleOutcome {
        if value.trim().is_empty() {
            RuleOutcome::invalid(REQUIRED_REASON)
        } else {
            RuleOutcome::Valid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_fail() {
        assert!(!RequiredEvaluator.evaluate("").is_valid());
        assert!(!RequiredEvaluator.evaluate("   ").is_valid());
        assert!(!RequiredEvaluator.evaluate("\t\n").is_valid());
    }

    #[test]
    fn test_non_blank_value_passes() {
        assert!(RequiredEvaluator.evaluate("x").is_valid());
        assert!(RequiredEvaluator.evaluate("  x  ").is_valid());
    }
}
