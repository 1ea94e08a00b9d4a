pub mod burger;
pub mod errors;
pub mod field;
pub mod record;
pub mod rules;
pub mod schema;
pub mod utils;
pub mod value;

pub use burger::BurgerRecipe;
pub use errors::{ErrorKind, RuleError};
pub use field::{Field, Slots};
pub use record::Record;
pub use rules::{FieldRule, Number, OneOf};
pub use schema::{Schema, SchemaBuilder};
pub use value::Value;
