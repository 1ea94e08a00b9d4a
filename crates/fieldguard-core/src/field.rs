//! Field bindings.
//!
//! A [`Field`] ties a shared [`FieldRule`] to a public attribute name and to the
//! protected slot where the accepted value is stored on each record. Every
//! assignment goes through [`Field::set`], which validates before storing.

use std::{collections::HashMap, fmt, sync::Arc};

use tracing::debug;

use crate::{errors::RuleError, rules::FieldRule, value::Value};

/// Per-record storage, keyed by the protected name of each field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slots {
    values: HashMap<String, Value>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, protected_name: &str) -> Option<&Value> {
        self.values.get(protected_name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn store(&mut self, protected_name: &str, value: Value) -> Option<Value> {
        self.values.insert(protected_name.to_string(), value)
    }
}

#[derive(Clone)]
pub struct Field {
    public_name: String,
    protected_name: String,
    rule: Arc<dyn FieldRule>,
}

impl Field {
    /// Binds `rule` to the attribute `name`; values land in the `_name` slot.
    pub fn bind(name: impl Into<String>, rule: Arc<dyn FieldRule>) -> Self {
        let public_name = name.into();
        let protected_name = format!("_{}", public_name);
        Self {
            public_name,
            protected_name,
            rule,
        }
    }

    pub fn public_name(&self) -> &str {
        &self.public_name
    }

    pub fn protected_name(&self) -> &str {
        &self.protected_name
    }

    pub fn rule(&self) -> &Arc<dyn FieldRule> {
        &self.rule
    }

    pub fn get<'a>(&self, slots: &'a Slots) -> Result<&'a Value, RuleError> {
        slots
            .get(&self.protected_name)
            .ok_or_else(|| RuleError::UnsetField(self.public_name.clone()))
    }

    /// Validates `value` and stores it. On rejection the slot keeps its previous value.
    pub fn set(&self, slots: &mut Slots, value: Value) -> Result<(), RuleError> {
        if let Err(e) = self.rule.validate(&value) {
            debug!(field = %self.public_name, rule = self.rule.name(), value = %value, error = %e, "assignment rejected");
            return Err(RuleError::InvalidField {
                field: self.public_name.clone(),
                source: Box::new(e),
            });
        }
        debug!(field = %self.public_name, value = %value, "assignment accepted");
        slots.store(&self.protected_name, value);
        Ok(())
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("public_name", &self.public_name)
            .field("protected_name", &self.protected_name)
            .field("rule", &self.rule.name())
            .finish()
    }
}
