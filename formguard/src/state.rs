//! Aggregate form state.

use std::collections::HashMap;

use serde::Serialize;

use crate::control::FieldControl;
use crate::error::ConfigError;

/// All field controls of one form plus the derived overall validity.
///
/// Controls keep their declaration order and are looked up by name through
/// an index, so the state serializes `controls` as an ordered list rather
/// than a name-keyed map. `is_valid` is never set directly; it is
/// recomputed after every change.
#[derive(Debug, Clone, Serialize)]
pub struct FormState {
    controls: Vec<FieldControl>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    is_valid: bool,
}

impl FormState {
    /// Create an empty form state.
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            index: HashMap::new(),
            is_valid: true,
        }
    }

    /// Check if every control passed its last evaluation.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Get a control by field name.
    pub fn control(&self, name: &str) -> Option<&FieldControl> {
        self.index.get(name).map(|&i| &self.controls[i])
    }

    /// All controls in declaration order.
    pub fn controls(&self) -> &[FieldControl] {
        &self.controls
    }

    /// Names of controls that are not validated.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.controls
            .iter()
            .filter(|c| !c.is_validated())
            .map(FieldControl::name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub(crate) fn insert(&mut self, control: FieldControl) -> Result<(), ConfigError> {
        if self.index.contains_key(control.name()) {
            return Err(ConfigError::duplicate_field(control.name()));
        }
        self.index
            .insert(control.name().to_string(), self.controls.len());
        self.controls.push(control);
        self.recompute();
        Ok(())
    }

    pub(crate) fn control_mut(&mut self, name: &str) -> Option<&mut FieldControl> {
        let i = *self.index.get(name)?;
        self.controls.get_mut(i)
    }

    pub(crate) fn controls_mut(&mut self) -> impl Iterator<Item = &mut FieldControl> {
        self.controls.iter_mut()
    }

    /// Recompute `is_valid` from the controls.
    pub(crate) fn recompute(&mut self) -> bool {
        self.is_valid = self.controls.iter().all(FieldControl::is_validated);
        self.is_valid
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
