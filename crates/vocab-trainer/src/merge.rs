use crate::config::{WORD_LIST_HEADER, WORD_LIST_SHEET_NAME};
use crate::decode::{SheetFormat, decode_rows};
use crate::ingest::RawRow;
use crate::source::{FetchSource, SpreadsheetSource};
use crate::types::{Result, TrainerError, WordList};
use crate::xlsx::write_rows;
use std::collections::HashSet;
use std::path::Path;

/// Result of folding an additions sheet into a base sheet. Both tables keep
/// their header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Every base row untouched, followed by the additions that introduced a
    /// new English term.
    pub merged: Vec<RawRow>,
    /// Additions whose term was not newly added.
    pub remaining: Vec<RawRow>,
    /// Number of rows appended to the base.
    pub added: usize,
}

impl MergeOutcome {
    /// Data rows left in the additions sheet, header excluded.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len().saturating_sub(1)
    }
}

fn term(row: &RawRow) -> &str {
    row.first().map(String::as_str).unwrap_or_default()
}

/// Merges two decoded sheets on their first column. The base is kept as-is;
/// an addition is appended when its term is non-empty and appears neither in
/// the base nor earlier in the additions.
pub fn merge_sheets(base: Vec<RawRow>, additions: Vec<RawRow>) -> MergeOutcome {
    let base_terms: HashSet<String> = base.iter().skip(1).map(|row| term(row).to_string()).collect();

    let mut additions = additions.into_iter();
    let header = additions.next();
    let rows: Vec<RawRow> = additions.collect();

    let mut merged = base;
    if merged.is_empty() {
        merged.extend(header.clone());
    }

    let mut added_terms = HashSet::new();
    for row in &rows {
        let key = term(row);
        if !key.is_empty() && !base_terms.contains(key) && added_terms.insert(key.to_string()) {
            merged.push(row.clone());
        }
    }

    let remaining = header
        .into_iter()
        .chain(rows.into_iter().filter(|row| !added_terms.contains(term(row))))
        .collect();

    MergeOutcome {
        merged,
        remaining,
        added: added_terms.len(),
    }
}

/// Serializes rows verbatim, header included.
pub fn sheet_bytes(rows: &[RawRow], format: SheetFormat) -> Result<Vec<u8>> {
    match format {
        SheetFormat::Xlsx => write_rows::<_, String>(WORD_LIST_SHEET_NAME, rows),
        SheetFormat::Csv => {
            let export_err = |e: csv::Error| TrainerError::Export(e.to_string());
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(Vec::new());
            for row in rows {
                writer.write_record(row).map_err(export_err)?;
            }
            writer
                .into_inner()
                .map_err(|e| TrainerError::Export(e.to_string()))
        }
    }
}

/// Serializes a word list with the standard English/Bangla header.
pub fn word_list_bytes(words: &WordList, format: SheetFormat) -> Result<Vec<u8>> {
    let rows: Vec<RawRow> = std::iter::once(WORD_LIST_HEADER.map(str::to_string).to_vec())
        .chain(
            words
                .iter()
                .map(|pair| vec![pair.primary().to_string(), pair.translation().to_string()]),
        )
        .collect();
    sheet_bytes(&rows, format)
}

pub async fn save_word_list(words: &WordList, output_path: impl AsRef<Path>) -> Result<()> {
    let words = words.clone();
    let output_path = output_path.as_ref().to_owned();
    let format = SheetFormat::from_path(&output_path);

    let bytes = tokio::task::spawn_blocking(move || word_list_bytes(&words, format)).await??;
    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

async fn read_sheet(path: &Path) -> Result<Vec<RawRow>> {
    let source = FetchSource::new(path);
    let rows = tokio::task::spawn_blocking(move || {
        let data = source.read()?;
        decode_rows(data.format, &data.bytes)
    })
    .await??;
    Ok(rows)
}

async fn write_sheet(rows: Vec<RawRow>, path: &Path) -> Result<()> {
    let format = SheetFormat::from_path(path);
    let bytes = tokio::task::spawn_blocking(move || sheet_bytes(&rows, format)).await??;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Merges the additions file into the base file and rewrites both: the base
/// gets the merged rows, the additions file keeps only what was not merged.
pub async fn merge_files(
    base_path: impl AsRef<Path>,
    additions_path: impl AsRef<Path>,
) -> Result<MergeOutcome> {
    let base_path = base_path.as_ref();
    let additions_path = additions_path.as_ref();

    let base = read_sheet(base_path).await?;
    let additions = read_sheet(additions_path).await?;

    let outcome = merge_sheets(base, additions);
    log::info!(
        "Merged {} new words into {}",
        outcome.added,
        base_path.display()
    );

    write_sheet(outcome.merged.clone(), base_path).await?;
    write_sheet(outcome.remaining.clone(), additions_path).await?;

    Ok(outcome)
}
