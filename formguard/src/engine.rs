//! Validation engine: evaluates rules and reconciles form state.

use log::{debug, info, trace, warn};

use crate::config::EngineConfig;
use crate::control::FieldControl;
use crate::descriptor::FieldDescriptor;
use crate::error::{ConfigError, FormError};
use crate::event::FormEvent;
use crate::factory::RuleFactory;
use crate::rule::{RuleName, RuleOutcome};
use crate::state::FormState;

/// Result of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    /// Field name.
    pub field: String,
    /// Value that was evaluated.
    pub value: String,
    /// True iff every rule passed.
    pub validated: bool,
    /// Primary error message when the field failed.
    pub primary_error: Option<String>,
    /// Form validity after this update.
    pub form_valid: bool,
}

impl FieldReport {
    /// Events describing this update, in emission order.
    pub fn events(&self) -> Vec<FormEvent> {
        let mut events = vec![FormEvent::ValueChanged {
            field: self.field.clone(),
            value: self.value.clone(),
        }];
        if let Some(message) = &self.primary_error {
            events.push(FormEvent::ValidationFailed {
                field: self.field.clone(),
                message: message.clone(),
            });
        }
        events
    }
}

/// Result of validating every field (a submit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReport {
    /// Aggregate form validity.
    pub valid: bool,
    /// Per-field reports in declaration order.
    pub fields: Vec<FieldReport>,
}

impl SubmitReport {
    /// Names of fields that failed.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.validated)
            .map(|f| f.field.as_str())
            .collect()
    }

    /// Events describing this submit, in emission order.
    pub fn events(&self) -> Vec<FormEvent> {
        let mut events: Vec<FormEvent> = self.fields.iter().flat_map(FieldReport::events).collect();
        events.push(FormEvent::Submitted { valid: self.valid });
        events
    }
}

/// Orchestrates rule evaluation for forms.
///
/// The engine holds the rule registry and configuration and can be shared
/// between any number of forms. All per-form state lives in [`FormState`].
///
/// # Example
///
/// ```ignore
/// let engine = ValidationEngine::new(EngineConfig::default());
/// let mut state = engine.initialize_form([
///     FieldDescriptor::from_attr("name", "", "required"),
///     FieldDescriptor::from_attr("email", "", "required,email"),
/// ])?;
///
/// engine.validate_field(&mut state, "email", "a@b.co")?;
/// if !engine.validate_all(&mut state)?.valid {
///     // block submission
/// }
/// ```
#[derive(Debug)]
pub struct ValidationEngine {
    factory: RuleFactory,
    config: EngineConfig,
}

impl ValidationEngine {
    /// Create an engine with the built-in rules.
    pub fn new(config: EngineConfig) -> Self {
        let factory = RuleFactory::with_policy(config.unknown_rules);
        Self::with_factory(config, factory)
    }

    /// Create an engine with a custom rule registry.
    ///
    /// The registry's own policy decides unknown-rule handling.
    pub fn with_factory(config: EngineConfig, factory: RuleFactory) -> Self {
        Self { factory, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn factory(&self) -> &RuleFactory {
        &self.factory
    }

    /// Build the state for a new form, one untouched control per descriptor.
    ///
    /// Every rule is resolved here so misconfiguration fails before any
    /// value is evaluated.
    pub fn initialize_form<I>(&self, descriptors: I) -> Result<FormState, ConfigError>
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        let mut state = FormState::new();

        for descriptor in descriptors {
            if descriptor.rules.is_empty() {
                return Err(ConfigError::NoRules {
                    field: descriptor.name,
                });
            }
            for rule in &descriptor.rules {
                let (resolved, _) = self.factory.resolve_as(&descriptor.name, rule)?;
                if &resolved != rule {
                    warn!(
                        "Unknown rule '{}' on field '{}', falling back to '{}'",
                        rule, descriptor.name, resolved
                    );
                }
            }

            let label = descriptor.display_label().to_string();
            state.insert(FieldControl::new(
                descriptor.name,
                label,
                descriptor.value,
                descriptor.rules,
            ))?;
        }

        debug!("Initialized form with {} field(s)", state.len());
        Ok(state)
    }

    /// Evaluate every rule of `field` against `value` and store the result.
    ///
    /// All rules run; the control's errors are replaced by this evaluation's
    /// failures with a `required` failure first.
    pub fn validate_field(
        &self,
        state: &mut FormState,
        field: &str,
        value: impl Into<String>,
    ) -> Result<FieldReport, FormError> {
        let value = value.into();
        let control = state
            .control_mut(field)
            .ok_or_else(|| FormError::unknown_field(field))?;

        let failures = self.evaluate(control, &value)?;
        control.apply(value, failures);

        let validated = control.is_validated();
        let primary_error = control.primary_error().map(str::to_string);
        let value = control.value().to_string();
        let form_valid = state.recompute();

        debug!(
            "Validated field '{}': {} (form valid: {})",
            field,
            if validated { "ok" } else { "invalid" },
            form_valid
        );

        Ok(FieldReport {
            field: field.to_string(),
            value,
            validated,
            primary_error,
            form_valid,
        })
    }

    /// Re-validate every control with its stored value, as on submit.
    pub fn validate_all(&self, state: &mut FormState) -> Result<SubmitReport, FormError> {
        let fields: Vec<(String, String)> = state
            .controls()
            .iter()
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect();

        let mut reports = Vec::with_capacity(fields.len());
        for (field, value) in fields {
            reports.push(self.validate_field(state, &field, value)?);
        }

        let valid = state.is_valid();
        info!(
            "Form submitted: {} ({} field(s))",
            if valid { "valid" } else { "invalid" },
            reports.len()
        );

        Ok(SubmitReport {
            valid,
            fields: reports,
        })
    }

    /// Current aggregate validity.
    pub fn validity(&self, state: &FormState) -> bool {
        state.is_valid()
    }

    fn evaluate(
        &self,
        control: &FieldControl,
        value: &str,
    ) -> Result<Vec<(RuleName, String)>, ConfigError> {
        let mut failures = Vec::new();

        for rule in control.rules() {
            let (resolved, evaluator) = self.factory.resolve_as(control.name(), rule)?;
            match evaluator.evaluate(value) {
                RuleOutcome::Valid => trace!("Rule '{}' passed for '{}'", rule, control.name()),
                RuleOutcome::Invalid { reason } => {
                    trace!("Rule '{}' failed for '{}'", rule, control.name());
                    let message = self.config.render_message(control.label(), &reason);
                    failures.push((resolved, message));
                }
            }
        }

        Ok(failures)
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
