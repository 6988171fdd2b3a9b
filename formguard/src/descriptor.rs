//! Field and form descriptors used to build a form.

use serde::{Deserialize, Deserializer};

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::form::FormOptions;
use crate::rule::{RuleName, parse_rules};

/// Description of one field: identifier, initial value and rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    /// Unique field identifier.
    pub name: String,
    /// Display label for messages. Defaults to the name.
    #[serde(default)]
    pub label: Option<String>,
    /// Initial value.
    #[serde(default)]
    pub value: String,
    /// Rules in evaluation order. Accepts a list or a comma-separated string.
    #[serde(deserialize_with = "deserialize_rules")]
    pub rules: Vec<RuleName>,
}

impl FieldDescriptor {
    /// Creates a new descriptor.
    pub fn new<R>(name: impl Into<String>, value: impl Into<String>, rules: R) -> Self
    where
        R: IntoIterator,
        R::Item: Into<RuleName>,
    {
        Self {
            name: name.into(),
            label: None,
            value: value.into(),
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a descriptor from a comma-separated rule attribute such as
    /// `"required,email"`.
    pub fn from_attr(name: impl Into<String>, value: impl Into<String>, rules: &str) -> Self {
        Self {
            name: name.into(),
            label: None,
            value: value.into(),
            rules: parse_rules(rules),
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The label used in messages.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RulesRepr {
    List(Vec<String>),
    Attr(String),
}

fn deserialize_rules<'de, D>(deserializer: D) -> Result<Vec<RuleName>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RulesRepr::deserialize(deserializer)? {
        RulesRepr::List(names) => names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(RuleName::from)
            .collect(),
        RulesRepr::Attr(list) => parse_rules(&list),
    })
}

/// A complete form definition as loaded from JSON.
///
/// ```json
/// {
///   "config": { "unknown_rules": "reject" },
///   "options": { "disable_submit_when_invalid": true },
///   "fields": [
///     { "name": "email", "label": "Email", "rules": "required,email" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormDescriptor {
    #[serde(default)]
    pub config: EngineConfig,
    #[serde(default)]
    pub options: FormOptions,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDescriptor {
    /// Parse a descriptor from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get a field descriptor by name.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}
