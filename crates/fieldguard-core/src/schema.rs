//! Schema declaration and compilation.
//!
//! A [`SchemaBuilder`] collects field declarations; [`SchemaBuilder::build`]
//! turns them into bound [`Field`]s with executable rules, rejecting rules that
//! can never be satisfied and names declared twice.

use std::{collections::HashMap, sync::Arc};

use tracing::trace;

use crate::{
    errors::RuleError,
    field::Field,
    rules::{FieldRule, Number, OneOf},
    value::Value,
};

/// A field declaration, before its rule is compiled.
#[derive(Debug, Clone)]
pub enum FieldDecl {
    Number {
        name: String,
        min: i64,
        max: i64,
    },
    OneOf {
        name: String,
        options: Vec<Value>,
    },
    /// An already built rule, possibly shared with other fields.
    Shared {
        name: String,
        rule: Arc<dyn FieldRule>,
    },
}

impl FieldDecl {
    fn name(&self) -> &str {
        match self {
            FieldDecl::Number { name, .. }
            | FieldDecl::OneOf { name, .. }
            | FieldDecl::Shared { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    record_name: String,
    decls: Vec<FieldDecl>,
}

impl SchemaBuilder {
    pub fn new(record_name: impl Into<String>) -> Self {
        Self {
            record_name: record_name.into(),
            decls: Vec::new(),
        }
    }

    /// Declare an integer field accepting `min..=max`.
    pub fn number(&mut self, name: impl Into<String>, min: i64, max: i64) -> &mut Self {
        self.decls.push(FieldDecl::Number {
            name: name.into(),
            min,
            max,
        });
        self
    }

    /// Declare a field restricted to a fixed set of values.
    pub fn one_of<I, V>(&mut self, name: impl Into<String>, options: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.decls.push(FieldDecl::OneOf {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Declare a field guarded by an existing rule instance.
    pub fn field(&mut self, name: impl Into<String>, rule: Arc<dyn FieldRule>) -> &mut Self {
        self.decls.push(FieldDecl::Shared {
            name: name.into(),
            rule,
        });
        self
    }

    pub fn build(&self) -> Result<Schema, RuleError> {
        let mut fields = Vec::with_capacity(self.decls.len());
        let mut index = HashMap::with_capacity(self.decls.len());

        for decl in &self.decls {
            let name = decl.name();
            if index.contains_key(name) {
                return Err(RuleError::DuplicateField {
                    record: self.record_name.clone(),
                    field: name.to_string(),
                });
            }
            let rule = compile_rule(decl)?;
            trace!(record = %self.record_name, field = name, rule = rule.name(), "field compiled");
            index.insert(name.to_string(), fields.len());
            fields.push(Field::bind(name, rule));
        }

        Ok(Schema {
            record_name: self.record_name.clone(),
            fields,
            index,
        })
    }
}

fn compile_rule(decl: &FieldDecl) -> Result<Arc<dyn FieldRule>, RuleError> {
    let rule: Arc<dyn FieldRule> = match decl {
        FieldDecl::Number { min, max, .. } => Arc::new(Number::new(*min, *max)?),
        FieldDecl::OneOf { options, .. } => Arc::new(OneOf::new(options.iter().cloned())?),
        FieldDecl::Shared { rule, .. } => Arc::clone(rule),
    };
    Ok(rule)
}

/// The compiled fields of a record type, in declaration order.
#[derive(Debug, Clone)]
pub struct Schema {
    record_name: String,
    fields: Vec<Field>,
    index: HashMap<String, usize>,
}

impl Schema {
    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    pub fn field(&self, name: &str) -> Result<&Field, RuleError> {
        self.index
            .get(name)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| RuleError::UnknownField {
                record: self.record_name.clone(),
                field: name.to_string(),
            })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
