use anyhow::Result;
use fieldguard_core::{BurgerRecipe, Record};
use tracing::info;

use crate::{errors::CliError, RecipeArgs};

/// Builds the recipe and prints it. `Ok(false)` when a field was rejected.
pub fn build(args: RecipeArgs) -> Result<bool> {
    let record = BurgerRecipe::schema().record_name().to_string();
    match BurgerRecipe::new(
        args.buns,
        args.cheese,
        args.tomatoes,
        args.cutlets,
        args.eggs,
        args.sauce,
    ) {
        Ok(recipe) => {
            info!(%recipe, "recipe accepted");
            println!("{}", recipe);
            Ok(true)
        }
        Err(e) => {
            println!("{}", CliError::Rejected { record, source: e });
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldguard_core::Value;

    fn args(buns: &str, sauce: &str) -> RecipeArgs {
        RecipeArgs {
            buns: buns.parse().unwrap(),
            cheese: Value::from(1),
            tomatoes: Value::from(0),
            cutlets: Value::from(1),
            eggs: Value::from(0),
            sauce: sauce.parse().unwrap(),
        }
    }

    #[test]
    fn test_build_valid() {
        assert!(build(args("2", "mayo")).unwrap());
    }

    #[test]
    fn test_build_rejected() {
        assert!(!build(args("two", "mayo")).unwrap());
        assert!(!build(args("2", "bbq")).unwrap());
    }
}
