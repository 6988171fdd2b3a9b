//! Form wrapper tying state, engine and observers together.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::control::FieldControl;
use crate::descriptor::{FieldDescriptor, FormDescriptor};
use crate::engine::{FieldReport, SubmitReport, ValidationEngine};
use crate::error::{ConfigError, FormError};
use crate::event::{EventKind, FormEvent, Listeners, SubscriptionId};
use crate::state::FormState;

/// Behavior options for a [`Form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// When set, [`Form::can_submit`] is false while the form is invalid.
    pub disable_submit_when_invalid: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            disable_submit_when_invalid: true,
        }
    }
}

/// A validated form: its state, the engine evaluating it and its observers.
///
/// This is the entry point for a binding layer. Triggers take `&mut self`,
/// so evaluations of one form never overlap.
///
/// # Example
///
/// ```ignore
/// let mut form = Form::new(engine, [
///     FieldDescriptor::from_attr("email", "", "required,email"),
/// ])?;
///
/// form.subscribe(EventKind::ValidationFailed, |event| {
///     log::warn!("{:?}", event);
/// });
///
/// form.change("email", "a@b.co")?;
/// if form.submit()?.valid {
///     // send it
/// }
/// ```
#[derive(Debug)]
pub struct Form {
    engine: Arc<ValidationEngine>,
    state: FormState,
    options: FormOptions,
    listeners: Listeners,
}

impl Form {
    /// Create a form from field descriptors.
    pub fn new<I>(engine: Arc<ValidationEngine>, descriptors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        let state = engine.initialize_form(descriptors)?;
        Ok(Self {
            engine,
            state,
            options: FormOptions::default(),
            listeners: Listeners::new(),
        })
    }

    /// Create a form and its engine from a complete descriptor.
    pub fn from_descriptor(descriptor: FormDescriptor) -> Result<Self, ConfigError> {
        let engine = Arc::new(ValidationEngine::new(descriptor.config));
        Ok(Self::new(engine, descriptor.fields)?.with_options(descriptor.options))
    }

    /// Set the form options.
    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    /// Get a control by field name.
    pub fn control(&self, name: &str) -> Option<&FieldControl> {
        self.state.control(name)
    }

    pub fn is_valid(&self) -> bool {
        self.engine.validity(&self.state)
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.options.disable_submit_when_invalid || self.is_valid()
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Register a handler for one kind of event.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&FormEvent) + Send + 'static,
    {
        self.listeners.subscribe(kind, handler)
    }

    /// Remove a handler. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Triggers
    // -------------------------------------------------------------------------

    /// A field's value changed: validate it and notify observers.
    pub fn change(&mut self, field: &str, value: impl Into<String>) -> Result<FieldReport, FormError> {
        let report = self.engine.validate_field(&mut self.state, field, value)?;
        for event in report.events() {
            self.listeners.emit(&event);
        }
        Ok(report)
    }

    /// The form was submitted: validate every field and notify observers.
    pub fn submit(&mut self) -> Result<SubmitReport, FormError> {
        let report = self.engine.validate_all(&mut self.state)?;
        for event in report.events() {
            self.listeners.emit(&event);
        }
        Ok(report)
    }

    /// Return every control to its initial, untouched state.
    pub fn reset(&mut self) {
        for control in self.state.controls_mut() {
            control.reset();
        }
        self.state.recompute();
    }
}
