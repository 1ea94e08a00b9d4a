//! `BurgerRecipe`, a record whose six fields each declare a rule.

use std::fmt;

use once_cell::sync::Lazy;

use crate::{
    errors::RuleError,
    field::Slots,
    record::Record,
    schema::{Schema, SchemaBuilder},
    value::Value,
};

pub const SAUCES: [&str; 3] = ["ketchup", "mayo", "burger"];

static BURGER_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    SchemaBuilder::new("BurgerRecipe")
        .number("buns", 2, 3)
        .number("cheese", 0, 2)
        .number("tomatoes", 0, 3)
        .number("cutlets", 1, 3)
        .number("eggs", 0, 2)
        .one_of("sauce", SAUCES)
        .build()
        // Every bound above is ordered and the option list is not empty
        .expect("BurgerRecipe schema is well formed")
});

#[derive(Debug, Clone, PartialEq)]
pub struct BurgerRecipe {
    slots: Slots,
}

impl BurgerRecipe {
    /// Builds a recipe, assigning fields in declaration order.
    ///
    /// The first rejected value aborts construction.
    pub fn new(
        buns: impl Into<Value>,
        cheese: impl Into<Value>,
        tomatoes: impl Into<Value>,
        cutlets: impl Into<Value>,
        eggs: impl Into<Value>,
        sauce: impl Into<Value>,
    ) -> Result<Self, RuleError> {
        let mut recipe = Self {
            slots: Slots::new(),
        };
        recipe.set_buns(buns)?;
        recipe.set_cheese(cheese)?;
        recipe.set_tomatoes(tomatoes)?;
        recipe.set_cutlets(cutlets)?;
        recipe.set_eggs(eggs)?;
        recipe.set_sauce(sauce)?;
        Ok(recipe)
    }

    pub fn buns(&self) -> Option<i64> {
        self.quantity("buns")
    }

    pub fn cheese(&self) -> Option<i64> {
        self.quantity("cheese")
    }

    pub fn tomatoes(&self) -> Option<i64> {
        self.quantity("tomatoes")
    }

    pub fn cutlets(&self) -> Option<i64> {
        self.quantity("cutlets")
    }

    pub fn eggs(&self) -> Option<i64> {
        self.quantity("eggs")
    }

    pub fn sauce(&self) -> Option<&str> {
        self.get("sauce").ok().and_then(Value::as_text)
    }

    pub fn set_buns(&mut self, value: impl Into<Value>) -> Result<(), RuleError> {
        self.set("buns", value)
    }

    pub fn set_cheese(&mut self, value: impl Into<Value>) -> Result<(), RuleError> {
        self.set("cheese", value)
    }

    pub fn set_tomatoes(&mut self, value: impl Into<Value>) -> Result<(), RuleError> {
        self.set("tomatoes", value)
    }

    pub fn set_cutlets(&mut self, value: impl Into<Value>) -> Result<(), RuleError> {
        self.set("cutlets", value)
    }

    pub fn set_eggs(&mut self, value: impl Into<Value>) -> Result<(), RuleError> {
        self.set("eggs", value)
    }

    pub fn set_sauce(&mut self, value: impl Into<Value>) -> Result<(), RuleError> {
        self.set("sauce", value)
    }

    fn quantity(&self, name: &str) -> Option<i64> {
        self.get(name).ok().and_then(Value::as_number)
    }
}

impl Record for BurgerRecipe {
    fn schema() -> &'static Schema {
        &BURGER_SCHEMA
    }

    fn slots(&self) -> &Slots {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut Slots {
        &mut self.slots
    }
}

impl fmt::Display for BurgerRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schema = Self::schema();
        write!(f, "{}(", schema.record_name())?;
        for (i, field) in schema.fields().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match field.get(&self.slots) {
                Ok(value) => write!(f, "{}={}", field.public_name(), value)?,
                Err(_) => write!(f, "{}=<unset>", field.public_name())?,
            }
        }
        write!(f, ")")
    }
}
