use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use vocab_trainer::SpreadsheetSource;

use crate::{LoadId, TrainerCommand, TrainerUpdate, handlers};

struct InFlightLoad {
    id: LoadId,
    handle: JoinHandle<()>,
}

impl InFlightLoad {
    /// Aborts the load if it has not finished yet and reports the
    /// cancellation.
    fn cancel(self, update_tx: &mpsc::UnboundedSender<TrainerUpdate>) {
        if !self.handle.is_finished() {
            log::debug!("Cancelling load {:?}", self.id);
            self.handle.abort();
            let _ = update_tx.send(TrainerUpdate::LoadCancelled { id: self.id });
        }
    }
}

/// Async worker task that processes trainer commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<TrainerCommand>,
    update_tx: mpsc::UnboundedSender<TrainerUpdate>,
) {
    let mut in_flight: Option<InFlightLoad> = None;

    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            TrainerCommand::Load { id, source } => {
                if let Some(previous) = in_flight.take() {
                    previous.cancel(&update_tx);
                }
                log::info!("Loading word list from {}", source.describe());
                let handle = tokio::spawn(handlers::handle_load(id, source, update_tx.clone()));
                in_flight = Some(InFlightLoad { id, handle });
            }
            TrainerCommand::CancelLoad => {
                if let Some(previous) = in_flight.take() {
                    previous.cancel(&update_tx);
                }
            }
            TrainerCommand::ExportMissed {
                entries,
                output_path,
            } => {
                handlers::handle_export(entries, output_path, &update_tx).await;
            }
        }
    }

    if let Some(previous) = in_flight.take() {
        previous.handle.abort();
    }
}
