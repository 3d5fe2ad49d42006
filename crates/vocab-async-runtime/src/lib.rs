use std::path::PathBuf;

mod handlers;
mod worker;

pub use worker::worker_task;

// Re-export types from library crates
pub use vocab_trainer::{LoadErrorKind, MissedEntry, SpreadsheetSource, WordList};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum TrainerCommand {
    /// Load a word list, aborting any load still in flight
    Load {
        id: LoadId,
        source: Box<dyn SpreadsheetSource>,
    },
    CancelLoad,
    ExportMissed {
        entries: Vec<MissedEntry>,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum TrainerUpdate {
    WordsLoaded {
        id: LoadId,
        words: WordList,
    },
    LoadFailed {
        id: LoadId,
        kind: LoadErrorKind,
        message: String,
    },
    LoadCancelled {
        id: LoadId,
    },
    ExportComplete {
        path: PathBuf,
        count: usize,
    },
    Error {
        message: String,
    },
}

/// Handle to one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadId(pub u64);

/// Hands out load ids on the UI side and tells stale replies apart from
/// the one the UI is still waiting for.
#[derive(Debug, Default)]
pub struct LoadTracker {
    next: u64,
    pending: Option<LoadId>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load, superseding any pending one.
    pub fn begin(&mut self) -> LoadId {
        let id = LoadId(self.next);
        self.next += 1;
        self.pending = Some(id);
        id
    }

    pub fn pending(&self) -> Option<LoadId> {
        self.pending
    }

    /// Accepts the reply for `id` if it is the pending load. Each id is
    /// accepted at most once.
    pub fn settle(&mut self, id: LoadId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            log::debug!("Ignoring reply for superseded load {:?}", id);
            false
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
