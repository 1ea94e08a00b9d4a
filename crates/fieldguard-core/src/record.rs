use crate::{errors::RuleError, field::Slots, schema::Schema, value::Value};

/// A plain data object whose attribute assignments go through a [`Schema`].
///
/// The schema is per type: all instances share the same rule objects.
pub trait Record {
    fn schema() -> &'static Schema;

    fn slots(&self) -> &Slots;

    fn slots_mut(&mut self) -> &mut Slots;

    /// Assigns `value` to the field `name` if its rule accepts it.
    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RuleError> {
        Self::schema().field(name)?.set(self.slots_mut(), value.into())
    }

    fn get(&self, name: &str) -> Result<&Value, RuleError> {
        Self::schema().field(name)?.get(self.slots())
    }

    fn is_set(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaBuilder;
    use once_cell::sync::Lazy;

    static GAUGE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
        SchemaBuilder::new("Gauge")
            .number("level", 0, 10)
            .build()
            .unwrap()
    });

    #[derive(Default)]
    struct Gauge {
        slots: Slots,
    }

    impl Record for Gauge {
        fn schema() -> &'static Schema {
            &GAUGE_SCHEMA
        }

        fn slots(&self) -> &Slots {
            &self.slots
        }

        fn slots_mut(&mut self) -> &mut Slots {
            &mut self.slots
        }
    }

    #[test]
    fn test_set_and_get_through_schema() {
        let mut gauge = Gauge::default();
        assert!(!gauge.is_set("level"));
        gauge.set("level", 7).unwrap();
        assert_eq!(gauge.get("level").unwrap(), &Value::from(7));
        assert!(gauge.is_set("level"));
    }

    #[test]
    fn test_unknown_field() {
        let mut gauge = Gauge::default();
        let err = gauge.set("pressure", 1).unwrap_err();
        assert!(matches!(err, RuleError::UnknownField { .. }));
        assert!(gauge.slots().is_empty());
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = Gauge::default();
        let mut b = Gauge::default();
        a.set("level", 1).unwrap();
        b.set("level", 9).unwrap();
        assert_eq!(a.get("level").unwrap(), &Value::from(1));
        assert_eq!(b.get("level").unwrap(), &Value::from(9));
    }
}
