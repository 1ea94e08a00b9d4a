use std::collections::HashSet;

use crate::{errors::RuleError, rules::FieldRule, utils::hasher::Xxh3Builder, value::Value};

/// Enumerated choices.
#[derive(Debug, Clone)]
pub struct OneOf {
    options: Vec<Value>,
    members: HashSet<Value, Xxh3Builder>,
}

impl OneOf {
    pub fn new<I, V>(options: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut ordered = Vec::new();
        let mut members = HashSet::with_hasher(Xxh3Builder);
        options.into_iter().for_each(|o| {
            let value = o.into();
            if members.insert(value.clone()) {
                ordered.push(value);
            }
        });
        if ordered.is_empty() {
            return Err(RuleError::InvalidRule(
                "OneOf needs at least one option".to_string(),
            ));
        }
        Ok(Self {
            options: ordered,
            members,
        })
    }

    /// Options in declaration order.
    pub fn options(&self) -> &[Value] {
        &self.options
    }

    /// Options rendered as a tuple literal: `('ketchup', 'mayo')`, `('mayo',)`.
    fn rendered(&self) -> String {
        let items: Vec<String> = self.options.iter().map(Value::repr).collect();
        match items.as_slice() {
            [single] => format!("({},)", single),
            _ => format!("({})", items.join(", ")),
        }
    }
}

impl FieldRule for OneOf {
    fn name(&self) -> &'static str {
        "OneOf"
    }

    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        if self.members.contains(value) {
            Ok(())
        } else {
            Err(RuleError::NotAnOption {
                value: value.to_string(),
                options: self.rendered(),
            })
        }
    }

    fn describe(&self) -> String {
        format!("one of {}", self.rendered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_accepted() {
        let rule = OneOf::new(["ketchup", "mayo", "burger"]).unwrap();
        assert!(rule.validate(&Value::from("mayo")).is_ok());
    }

    #[test]
    fn test_non_member_message() {
        let rule = OneOf::new(["ketchup", "mayo", "burger"]).unwrap();
        let err = rule.validate(&Value::from("bbq")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected bbq to be one of ('ketchup', 'mayo', 'burger')."
        );
    }

    #[test]
    fn test_case_sensitive() {
        let rule = OneOf::new(["mayo"]).unwrap();
        assert!(rule.validate(&Value::from("Mayo")).is_err());
    }

    #[test]
    fn test_integer_never_matches_text() {
        let rule = OneOf::new(["1", "2"]).unwrap();
        assert!(rule.validate(&Value::from(1)).is_err());
        assert!(rule.validate(&Value::from("1")).is_ok());
    }

    #[test]
    fn test_duplicates_collapsed() {
        let rule = OneOf::new(["mayo", "mayo", "ketchup"]).unwrap();
        assert_eq!(rule.options().len(), 2);
        assert_eq!(rule.describe(), "one of ('mayo', 'ketchup')");
    }

    #[test]
    fn test_empty_options_rejected() {
        let err = OneOf::new(Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, RuleError::InvalidRule(_)));
    }

    #[test]
    fn test_integer_options() {
        let rule = OneOf::new([1, 2, 4]).unwrap();
        assert!(rule.validate(&Value::from(4)).is_ok());
        let err = rule.validate(&Value::from(3)).unwrap_err();
        assert_eq!(err.to_string(), "Expected 3 to be one of (1, 2, 4).");
    }

    #[test]
    fn test_single_option_rendering() {
        let rule = OneOf::new(["mayo"]).unwrap();
        let err = rule.validate(&Value::from("ketchup")).unwrap_err();
        assert_eq!(err.to_string(), "Expected ketchup to be one of ('mayo',).");
    }
}
