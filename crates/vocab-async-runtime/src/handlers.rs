use crate::{LoadId, TrainerUpdate};
use std::path::PathBuf;
use tokio::sync::mpsc;
use vocab_trainer::{MissedEntry, SpreadsheetSource};

pub async fn handle_load(
    id: LoadId,
    source: Box<dyn SpreadsheetSource>,
    update_tx: mpsc::UnboundedSender<TrainerUpdate>,
) {
    match vocab_trainer::load_word_list(source).await {
        Ok(words) => {
            let _ = update_tx.send(TrainerUpdate::WordsLoaded { id, words });
        }
        Err(e) => {
            let _ = update_tx.send(TrainerUpdate::LoadFailed {
                id,
                kind: e.load_kind(),
                message: e.to_string(),
            });
        }
    }
}

pub async fn handle_export(
    entries: Vec<MissedEntry>,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<TrainerUpdate>,
) {
    match vocab_trainer::export_missed(&entries, &output_path).await {
        Ok(()) => {
            let _ = update_tx.send(TrainerUpdate::ExportComplete {
                path: output_path,
                count: entries.len(),
            });
        }
        Err(e) => {
            let _ = update_tx.send(TrainerUpdate::Error {
                message: format!("Failed to export missed words: {e}"),
            });
        }
    }
}
