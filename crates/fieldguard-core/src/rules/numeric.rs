use crate::{errors::RuleError, rules::FieldRule, value::Value};

/// Inclusive integer range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    min: i64,
    max: i64,
}

impl Number {
    pub fn new(min: i64, max: i64) -> Result<Self, RuleError> {
        if min > max {
            return Err(RuleError::InvalidRule(format!(
                "Number minimum {} is greater than maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl FieldRule for Number {
    fn name(&self) -> &'static str {
        "Number"
    }

    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        let i = value.as_number().ok_or(RuleError::TypeMismatch {
            expected: "integer",
            found: value.type_name(),
        })?;
        if i < self.min || i > self.max {
            return Err(RuleError::OutOfRange {
                value: i,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("integer between {} and {}", self.min, self.max)
    }
}
