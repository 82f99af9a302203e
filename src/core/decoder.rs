use crate::domain::model::Table;
use crate::utils::error::{GeneratorError, Result};
use std::collections::HashMap;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 將上傳的 CSV 位元組解析成表格，欄位名稱取自第一列
pub fn decode_table(input: &[u8]) -> Result<Table> {
    let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);

    // csv reader 會把未閉合的引號吞到檔尾，先自行檢查
    if let Some(line) = unclosed_quote_line(input) {
        return Err(GeneratorError::decode(format!(
            "Error tokenizing data. EOF inside string starting at line {}",
            line
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| GeneratorError::decode(e.to_string()))?
        .clone();

    if headers.is_empty() {
        return Err(GeneratorError::decode("No columns to parse from file"));
    }

    let mut table = Table::new(unique_column_names(&headers));
    let expected = table.columns().len();

    for result in reader.records() {
        let record = result.map_err(|e| GeneratorError::decode(e.to_string()))?;

        // 欄位過多無法對應到任何欄名，視為格式錯誤；過少則補空值
        if record.len() > expected {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(GeneratorError::decode(format!(
                "Error tokenizing data. Expected {} fields in line {}, saw {}",
                expected,
                line,
                record.len()
            )));
        }

        table.push_row(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(
        "Decoded table with {} columns and {} rows",
        table.columns().len(),
        table.len()
    );
    Ok(table)
}

/// Line where a quoted field opens without ever closing, if any.
///
/// A quote only opens a quoted field at the start of a field; inside one, `""`
/// is an escaped quote.
fn unclosed_quote_line(input: &[u8]) -> Option<usize> {
    let mut line = 1;
    let mut at_field_start = true;
    let mut open_at: Option<usize> = None;
    let mut bytes = input.iter().peekable();

    while let Some(&b) = bytes.next() {
        if open_at.is_some() {
            match b {
                b'"' if bytes.peek() == Some(&&b'"') => {
                    bytes.next();
                }
                b'"' => open_at = None,
                b'\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' if at_field_start => {
                open_at = Some(line);
                at_field_start = false;
            }
            b',' | b'\r' => at_field_start = true,
            b'\n' => {
                line += 1;
                at_field_start = true;
            }
            _ => at_field_start = false,
        }
    }

    open_at
}

/// Repeated header names get a `.1`, `.2`, … suffix.
fn unique_column_names(headers: &csv::StringRecord) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    headers
        .iter()
        .map(|name| {
            let count = seen.entry(name).or_insert(0);
            let column = if *count == 0 {
                name.to_string()
            } else {
                format!("{}.{}", name, count)
            };
            *count += 1;
            column
        })
        .collect()
}
