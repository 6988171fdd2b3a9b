//! Rule registry mapping rule names to evaluators.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::UnknownRulePolicy;
use crate::error::ConfigError;
use crate::rule::{EmailEvaluator, Evaluator, RequiredEvaluator, RuleName};

/// Registry of rule evaluators.
///
/// Each name maps to one shared, stateless evaluator. Lookups of names that
/// were never registered follow the factory's [`UnknownRulePolicy`].
///
/// # Example
///
/// ```ignore
/// let mut factory = RuleFactory::new();
/// factory.register("numeric", |v: &str| {
///     if v.chars().all(|c| c.is_ascii_digit()) {
///         RuleOutcome::Valid
///     } else {
///         RuleOutcome::invalid("not a number.")
///     }
/// });
/// ```
pub struct RuleFactory {
    evaluators: HashMap<RuleName, Arc<dyn Evaluator>>,
    policy: UnknownRulePolicy,
}

impl RuleFactory {
    /// Create a factory with the built-in rules and the default policy.
    pub fn new() -> Self {
        Self::with_policy(UnknownRulePolicy::default())
    }

    /// Create a factory with the built-in rules and the given policy.
    pub fn with_policy(policy: UnknownRulePolicy) -> Self {
        let mut evaluators: HashMap<RuleName, Arc<dyn Evaluator>> = HashMap::new();
        evaluators.insert(RuleName::Required, Arc::new(RequiredEvaluator));
        evaluators.insert(RuleName::Email, Arc::new(EmailEvaluator));

        Self { evaluators, policy }
    }

    /// Get the unknown-rule policy.
    pub fn policy(&self) -> UnknownRulePolicy {
        self.policy
    }

    /// Register an evaluator, replacing any existing one with the same name.
    pub fn register<E>(&mut self, name: impl Into<RuleName>, evaluator: E) -> &mut Self
    where
        E: Evaluator + 'static,
    {
        self.evaluators.insert(name.into(), Arc::new(evaluator));
        self
    }

    /// Check if a rule name has a registered evaluator.
    pub fn contains(&self, name: &RuleName) -> bool {
        self.evaluators.contains_key(name)
    }

    /// Look up the evaluator for a rule used by `field`.
    pub fn resolve(&self, field: &str, name: &RuleName) -> Result<Arc<dyn Evaluator>, ConfigError> {
        self.resolve_as(field, name).map(|(_, evaluator)| evaluator)
    }

    /// Look up the evaluator for a rule used by `field`, together with the
    /// rule it actually runs as.
    ///
    /// Under [`UnknownRulePolicy::FallbackRequired`] an unknown name resolves
    /// to the currently registered `required` evaluator and reports
    /// [`RuleName::Required`].
    pub fn resolve_as(
        &self,
        field: &str,
        name: &RuleName,
    ) -> Result<(RuleName, Arc<dyn Evaluator>), ConfigError> {
        if let Some(evaluator) = self.evaluators.get(name) {
            return Ok((name.clone(), Arc::clone(evaluator)));
        }

        let fallback = match self.policy {
            UnknownRulePolicy::Reject => None,
            UnknownRulePolicy::FallbackRequired => self.evaluators.get(&RuleName::Required),
        };

        fallback
            .map(|evaluator| (RuleName::Required, Arc::clone(evaluator)))
            .ok_or_else(|| ConfigError::unknown_rule(field, name.as_str()))
    }
}

impl Default for RuleFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.evaluators.keys().map(RuleName::as_str).collect();
        names.sort_unstable();
        f.debug_struct("RuleFactory")
            .field("rules", &names)
            .field("policy", &self.policy)
            .finish()
    }
}
