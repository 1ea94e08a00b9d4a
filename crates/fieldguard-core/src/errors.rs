use thiserror::Error;

/// Coarse classification of a [`RuleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The assigned value has the wrong type for the field.
    Type,
    /// The assigned value has the right type but breaks a constraint.
    Value,
    /// The field does not exist or holds nothing yet.
    Lookup,
    /// A rule or schema was declared incorrectly.
    Definition,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    /// Value is not of the type the rule accepts
    #[error("Quantity should be {expected}.")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Integer outside of the inclusive range
    #[error("Quantity should not be less than {min} and greater than {max}.")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Value is not one of the declared choices
    #[error("Expected {value} to be one of {options}.")]
    NotAnOption { value: String, options: String },

    /// A rule rejected the value assigned to a field
    #[error("Invalid value for field '{field}': {source}")]
    InvalidField {
        field: String,
        #[source]
        source: Box<RuleError>,
    },

    #[error("Field '{field}' is not declared on {record}")]
    UnknownField { record: String, field: String },

    #[error("Field '{0}' has not been set")]
    UnsetField(String),

    #[error("Field '{field}' is declared twice on {record}")]
    DuplicateField { record: String, field: String },

    /// Rule parameters that can never be satisfied
    #[error("Invalid rule definition: {0}")]
    InvalidRule(String),
}

impl RuleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuleError::TypeMismatch { .. } => ErrorKind::Type,
            RuleError::OutOfRange { .. } | RuleError::NotAnOption { .. } => ErrorKind::Value,
            RuleError::InvalidField { source, .. } => source.kind(),
            RuleError::UnknownField { .. } | RuleError::UnsetField(_) => ErrorKind::Lookup,
            RuleError::DuplicateField { .. } | RuleError::InvalidRule(_) => ErrorKind::Definition,
        }
    }

    /// The error raised by the rule itself, without the field wrapper.
    pub fn root(&self) -> &RuleError {
        match self {
            RuleError::InvalidField { source, .. } => source.root(),
            other => other,
        }
    }
}
