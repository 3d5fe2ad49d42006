use crate::types::{WordList, WordPair};

/// One spreadsheet row as rendered cell strings. Missing trailing cells are
/// simply absent.
pub type RawRow = Vec<String>;

/// Builds a word list from raw rows.
///
/// The first row is a header and is always skipped. Column 0 is the English
/// term, column 1 the Bangla translation; rows missing either are dropped
/// without being reported.
pub fn ingest(rows: impl IntoIterator<Item = RawRow>) -> WordList {
    rows.into_iter()
        .skip(1)
        .filter_map(|row| {
            let mut cells = row.into_iter();
            let primary = cells.next()?;
            let translation = cells.next()?;
            WordPair::new(primary, translation)
        })
        .collect()
}
