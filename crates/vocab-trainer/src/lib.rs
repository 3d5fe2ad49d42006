pub mod config;
mod decode;
mod export;
mod ingest;
mod merge;
mod session;
mod source;
mod theme;
mod types;
mod xlsx;

pub use decode::{SheetFormat, decode_rows};
pub use export::{export_missed, missed_words_bytes};
pub use ingest::{RawRow, ingest};
pub use merge::{
    MergeOutcome, merge_files, merge_sheets, save_word_list, sheet_bytes, word_list_bytes,
};
pub use session::{LoadFailure, LoadState, TrainerSession};
pub use source::{
    FetchSource, SourceData, SourceKind, SpreadsheetSource, UploadSource, load_word_list,
    read_word_list,
};
pub use theme::{PreferenceStore, ThemePreference};
pub use types::*;
