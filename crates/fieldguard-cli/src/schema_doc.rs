use fieldguard_core::{BurgerRecipe, Record, Schema};

pub fn print_schema_documentation() {
    println!("{}", schema_documentation(BurgerRecipe::schema()));
}

fn schema_documentation(schema: &Schema) -> String {
    let width = schema
        .fields()
        .iter()
        .map(|f| f.public_name().len())
        .max()
        .unwrap_or(0);

    let mut out = format!("{} ({} fields)\n", schema.record_name(), schema.len());
    for field in schema.fields() {
        let rule = field.rule();
        out.push_str(&format!(
            "  {:<width$}  {:<6}  {}\n",
            field.public_name(),
            rule.name(),
            rule.describe(),
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_field() {
        let doc = schema_documentation(BurgerRecipe::schema());
        assert!(doc.starts_with("BurgerRecipe (6 fields)\n"));
        assert!(doc.contains("  buns      Number  integer between 2 and 3\n"));
        assert!(doc.contains("  sauce     OneOf   one of ('ketchup', 'mayo', 'burger')\n"));
        assert_eq!(doc.lines().count(), 7);
    }
}
