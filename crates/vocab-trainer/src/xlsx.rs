use crate::types::Result;
use rust_xlsxwriter::Workbook;

/// Serializes a single-sheet workbook with a header row followed by `rows`.
pub fn write_table(sheet_name: &str, header: [&str; 2], rows: &[[&str; 2]]) -> Result<Vec<u8>> {
    let table: Vec<&[&str]> = std::iter::once(&header[..])
        .chain(rows.iter().map(|row| &row[..]))
        .collect();
    write_rows::<_, &str>(sheet_name, &table)
}

/// Serializes rows verbatim into a single-sheet workbook. Rows may differ in
/// length; empty cells are left blank.
pub fn write_rows<R, S>(sheet_name: &str, rows: &[R]) -> Result<Vec<u8>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.as_ref().iter().enumerate() {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            worksheet.write_string(r as u32, col as u16, value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
