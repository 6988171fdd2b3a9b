//! Per-field validation state.

use serde::Serialize;

use crate::rule::RuleName;

/// Lifecycle of a field control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlStatus {
    /// Never evaluated since creation or the last reset.
    Untouched,
    /// Every rule passed on the last evaluation.
    Valid,
    /// At least one rule failed on the last evaluation.
    Invalid,
}

/// Validation bookkeeping for one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldControl {
    /// Unique field identifier.
    name: String,
    /// Display label used in error messages.
    label: String,
    /// Rules in evaluation order.
    rules: Vec<RuleName>,
    /// Current value.
    value: String,
    /// Value the field was created with (restored by reset).
    #[serde(skip)]
    initial_value: String,
    /// True iff every rule passed on the last evaluation.
    validated: bool,
    /// Whether the control has been evaluated since creation or reset.
    #[serde(skip)]
    touched: bool,
    /// Failure messages of the last evaluation, primary first.
    errors: Vec<String>,
    /// Rules that failed on the last evaluation.
    failed_rules: Vec<RuleName>,
}

impl FieldControl {
    /// Create an untouched control.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
        rules: Vec<RuleName>,
    ) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            label: label.into(),
            rules,
            initial_value: value.clone(),
            value,
            validated: false,
            touched: false,
            errors: Vec::new(),
            failed_rules: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rules(&self) -> &[RuleName] {
        &self.rules
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check if every rule passed on the last evaluation.
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Error messages of the last evaluation, primary first.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The message the presentation layer should show first.
    ///
    /// A `required` failure always takes precedence.
    pub fn primary_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// Rules that failed on the last evaluation.
    pub fn failed_rules(&self) -> &[RuleName] {
        &self.failed_rules
    }

    pub fn status(&self) -> ControlStatus {
        if !self.touched {
            ControlStatus::Untouched
        } else if self.validated {
            ControlStatus::Valid
        } else {
            ControlStatus::Invalid
        }
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the validation state with the result of one evaluation.
    ///
    /// `failures` pairs each failing rule with its rendered message, in
    /// evaluation order. Previous errors are discarded.
    pub(crate) fn apply(&mut self, value: String, failures: Vec<(RuleName, String)>) {
        self.value = value;
        self.touched = true;
        self.errors.clear();
        self.failed_rules.clear();

        if failures.is_empty() {
            self.validated = true;
            return;
        }

        // required first, otherwise keep evaluation order
        let (required, others): (Vec<_>, Vec<_>) =
            failures.into_iter().partition(|(rule, _)| rule.is_required());

        for (rule, message) in required.into_iter().chain(others) {
            if !self.failed_rules.contains(&rule) {
                self.failed_rules.push(rule);
            }
            if !self.errors.contains(&message) {
                self.errors.push(message);
            }
        }
        self.validated = false;
    }

    /// Return to the untouched state with the initial value.
    pub(crate) fn reset(&mut self) {
        self.value = self.initial_value.clone();
        self.validated = false;
        self.touched = false;
        self.errors.clear();
        self.failed_rules.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control() -> FieldControl {
        FieldControl::new(
            "email",
            "email",
            "",
            vec![RuleName::Email, RuleName::Required],
        )
    }

    #[test]
    fn test_new_control_is_untouched() {
        let control = control();
        assert_eq!(control.status(), ControlStatus::Untouched);
        assert!(!control.is_validated());
        assert!(control.errors().is_empty());
    }

    #[test]
    fn test_required_failure_is_primary() {
        let mut control = control();
        control.apply(
            String::new(),
            vec![
                (RuleName::Email, "not email".to_string()),
                (RuleName::Required, "required".to_string()),
            ],
        );
        assert_eq!(control.primary_error(), Some("required"));
        assert_eq!(control.errors(), ["required", "not email"]);
        assert_eq!(control.failed_rules(), [RuleName::Required, RuleName::Email]);
        assert_eq!(control.status(), ControlStatus::Invalid);
    }

    #[test]
    fn test_duplicate_messages_suppressed() {
        let mut control = control();
        control.apply(
            String::new(),
            vec![
                (RuleName::Custom("a".into()), "same".to_string()),
                (RuleName::Custom("b".into()), "same".to_string()),
            ],
        );
        assert_eq!(control.errors(), ["same"]);
        assert_eq!(control.failed_rules().len(), 2);
    }

    #[test]
    fn test_success_clears_errors() {
        let mut control = control();
        control.apply(String::new(), vec![(RuleName::Required, "required".into())]);
        control.apply("a@b.co".to_string(), Vec::new());
        assert!(control.is_validated());
        assert!(control.errors().is_empty());
        assert!(control.failed_rules().is_empty());
        assert_eq!(control.status(), ControlStatus::Valid);
    }

    #[test]
    fn test_reset_restores_initial_value() {
        let mut control = FieldControl::new("name", "Name", "Ann", vec![RuleName::Required]);
        control.apply(String::new(), vec![(RuleName::Required, "required".into())]);
        control.reset();
        assert_eq!(control.value(), "Ann");
        assert_eq!(control.status(), ControlStatus::Untouched);
        assert!(control.errors().is_empty());
    }
}
