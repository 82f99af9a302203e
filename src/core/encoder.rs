use crate::domain::model::OutputTable;
use crate::utils::error::{GeneratorError, Result};
use rust_xlsxwriter::{Format, Workbook};

/// Comma separated, quoting only where a field needs it.
pub fn encode_csv(table: &OutputTable) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in &table.rows {
        writer.write_record(row.cells())?;
    }

    let data = writer.into_inner().map_err(|e| e.into_error())?;
    tracing::debug!("Encoded CSV ({} bytes)", data.len());
    Ok(data)
}

/// Excel's per-cell text limit, counted in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// 任何儲存格超過 Excel 上限就整份拒絕，兩種格式保持一致
pub fn check_cell_lengths(table: &OutputTable) -> Result<()> {
    for (idx, row) in table.rows.iter().enumerate() {
        for (col, value) in row.cells().into_iter().enumerate() {
            let length = value.chars().count();
            if length > MAX_CELL_CHARS {
                return Err(GeneratorError::CellTooLongError {
                    column: table.columns()[col].to_string(),
                    row: idx + 1,
                    length,
                    limit: MAX_CELL_CHARS,
                });
            }
        }
    }
    Ok(())
}

/// Single sheet, bold header, every cell written as text.
pub fn encode_xlsx(table: &OutputTable) -> Result<Vec<u8>> {
    check_cell_lengths(table)?;

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = (idx + 1) as u32;
        for (col, value) in row.cells().into_iter().enumerate() {
            // 空字串不寫入，留白儲存格
            if !value.is_empty() {
                worksheet.write_string(row_num, col as u16, value)?;
            }
        }
    }

    let data = workbook.save_to_buffer()?;
    tracing::debug!("Encoded XLSX ({} bytes)", data.len());
    Ok(data)
}
