use crate::ingest::RawRow;
use crate::types::{Result, TrainerError};
use std::io::Cursor;
use std::path::Path;

/// Tabular encodings a word list can arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Xlsx,
    Csv,
}

impl SheetFormat {
    /// Picks the format from a file name, defaulting to xlsx.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => SheetFormat::Csv,
            _ => SheetFormat::Xlsx,
        }
    }
}

/// Decodes raw bytes into rows of cell strings, header row included.
pub fn decode_rows(format: SheetFormat, bytes: &[u8]) -> Result<Vec<RawRow>> {
    match format {
        SheetFormat::Xlsx => decode_xlsx(bytes),
        SheetFormat::Csv => decode_csv(bytes),
    }
}

fn decode_xlsx(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true)
        .map_err(|e| TrainerError::Parse(format!("invalid xlsx: {e}")))?;
    let sheet = book
        .get_sheet(&0)
        .ok_or_else(|| TrainerError::Parse("workbook has no worksheets".to_string()))?;

    let (max_col, max_row) = sheet.get_highest_column_and_row();
    let rows = (1..=max_row)
        .map(|row| {
            (1..=max_col)
                .map(|col| sheet.get_value((col, row)))
                .collect()
        })
        .collect();

    Ok(rows)
}

fn decode_csv(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
