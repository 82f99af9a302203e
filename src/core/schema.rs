use crate::domain::model::{Table, REQUIRED_COLUMNS};
use crate::utils::error::{GeneratorError, Result};

/// Fails with every missing required column, in required-column order.
pub fn validate_columns(table: &Table) -> Result<()> {
    validate_required(table, &REQUIRED_COLUMNS)
}

pub fn validate_required(table: &Table, required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        tracing::warn!("⚠️ Upload rejected, missing columns: {:?}", missing);
        Err(GeneratorError::SchemaError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(columns: &[&str]) -> Table {
        Table::new(columns.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_all_required_columns_present() {
        let mut columns = REQUIRED_COLUMNS.to_vec();
        columns.push("linkedin_url");
        assert!(validate_columns(&table_with(&columns)).is_ok());
    }

    #[test]
    fn test_lists_every_missing_column() {
        let table = table_with(&["first_name", "email", "company", "notes", "phone"]);
        match validate_columns(&table) {
            Err(GeneratorError::SchemaError { missing }) => {
                assert_eq!(
                    missing,
                    vec!["last_name", "role_need", "industry", "country"]
                );
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_column_match_is_case_sensitive() {
        let mut columns = REQUIRED_COLUMNS.to_vec();
        columns.retain(|c| *c != "email");
        columns.push("Email");
        let err = validate_columns(&table_with(&columns)).unwrap_err();
        assert_eq!(err.to_string(), r#"Missing columns: ["email"]"#);
    }
}
