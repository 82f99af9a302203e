use crate::domain::model::{NormalizedKey, Table};
use std::collections::HashSet;

/// 以正規化後的 (email, company) 去重，保留第一次出現的列並維持原順序
pub fn dedupe_contacts(mut table: Table) -> Table {
    let email_idx = table.column_index("email");
    let company_idx = table.column_index("company");

    let cell = |row: &[String], idx: Option<usize>| -> String {
        idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
    };

    let original_count = table.len();
    let mut seen = HashSet::new();
    table.retain_rows(|row| {
        let key = NormalizedKey::new(&cell(row, email_idx), &cell(row, company_idx));
        seen.insert(key)
    });

    tracing::info!(
        "🔄 Deduplicated {} -> {} records",
        original_count,
        table.len()
    );
    table
}
