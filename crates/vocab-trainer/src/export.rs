use crate::config::{MISSED_HEADER, MISSED_SHEET_NAME};
use crate::types::{MissedEntry, Result};
use crate::xlsx::write_table;
use std::path::Path;

/// Serializes missed words, in encounter order, into xlsx bytes.
pub fn missed_words_bytes(entries: &[MissedEntry]) -> Result<Vec<u8>> {
    let rows: Vec<[&str; 2]> = entries
        .iter()
        .map(|e| [e.word.as_str(), e.translation.as_str()])
        .collect();
    write_table(MISSED_SHEET_NAME, MISSED_HEADER, &rows)
}

pub async fn export_missed(entries: &[MissedEntry], output_path: impl AsRef<Path>) -> Result<()> {
    let entries = entries.to_vec();
    let output_path = output_path.as_ref().to_owned();

    let bytes = tokio::task::spawn_blocking(move || missed_words_bytes(&entries)).await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Exported missed words to {}", output_path.display());

    Ok(())
}
