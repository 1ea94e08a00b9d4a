pub mod choice;
pub mod numeric;

pub use choice::OneOf;
pub use numeric::Number;

use std::fmt::Debug;

use crate::{errors::RuleError, value::Value};

/// A constraint checked before a value is stored on a field.
///
/// A single rule instance is shared by every record of a type, so it must not
/// hold per-record state.
pub trait FieldRule: Send + Sync + Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;
    /// Checks one value, returning the reason it is rejected.
    fn validate(&self, value: &Value) -> Result<(), RuleError>;
    /// Human readable summary of what the rule accepts.
    fn describe(&self) -> String;
}
