use crate::batch::BatchResult;
use crate::error::Result;
use crate::model::record::IDENTITY_FIELDS;
use crate::model::StatValue;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Write batch records to an Excel file, one row per player
pub fn write_records_to_xlsx(result: &BatchResult, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    write_players_sheet(worksheet, result)?;

    workbook.save(path)?;
    Ok(())
}

fn write_players_sheet(sheet: &mut Worksheet, result: &BatchResult) -> Result<()> {
    let columns = result.columns();

    // Identity columns are wider than stat columns
    for (col, name) in columns.iter().enumerate() {
        let width = if IDENTITY_FIELDS.contains(&name.as_str()) { 22 } else { 12 };
        sheet.set_column_width(col as u16, width)?;
    }

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin);

    for (col, header) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }

    let number_format = Format::new().set_align(FormatAlign::Right);
    let text_format = Format::new().set_align(FormatAlign::Left);

    for (row_idx, record) in result.records.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        for (col, name) in columns.iter().enumerate() {
            let col = col as u16;
            match record.get(name) {
                Some(StatValue::Int(i)) => {
                    sheet.write_number_with_format(row, col, *i as f64, &number_format)?;
                }
                Some(StatValue::Float(f)) => {
                    sheet.write_number_with_format(row, col, *f, &number_format)?;
                }
                Some(StatValue::Text(s)) => {
                    sheet.write_string_with_format(row, col, s, &text_format)?;
                }
                Some(StatValue::Missing) | None => {}
            }
        }
    }

    sheet.set_freeze_panes(1, 0)?;
    sheet.set_name("Players")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlayerRecord;

    #[test]
    fn test_write_records_to_xlsx() {
        let mut record = PlayerRecord::new();
        record.insert_if_absent("player_name", StatValue::from("Pedri"));
        record.insert_if_absent("goals", StatValue::Int(4));
        record.insert_if_absent("expected_goals", StatValue::Float(2.9));
        record.insert_if_absent("nationality", StatValue::Missing);

        let result = BatchResult {
            records: vec![record],
            omitted: Vec::new(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.xlsx");
        write_records_to_xlsx(&result, &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
