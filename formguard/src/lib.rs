//! Form validation core.
//!
//! Fields are declared with an ordered list of rule names. The
//! [`ValidationEngine`] resolves each rule through a [`RuleFactory`],
//! evaluates it against the field's value, and reconciles the outcomes into
//! per-field [`FieldControl`]s and the aggregate [`FormState`]. A [`Form`]
//! wraps the state with observers that receive [`FormEvent`]s.
//!
//! Rendering and widget binding are left to the caller; the engine only ever
//! sees field names and plain string values.

pub mod config;
pub mod control;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod event;
pub mod factory;
pub mod form;
pub mod rule;
pub mod state;

pub use config::{EngineConfig, UnknownRulePolicy};
pub use control::{ControlStatus, FieldControl};
pub use descriptor::{FieldDescriptor, FormDescriptor};
pub use engine::{FieldReport, SubmitReport, ValidationEngine};
pub use error::{ConfigError, FormError};
pub use event::{EventKind, FormEvent, Listeners, SubscriptionId};
pub use factory::RuleFactory;
pub use form::{Form, FormOptions};
pub use rule::{Evaluator, RuleName, RuleOutcome};
pub use state::FormState;
