use crate::decode::{SheetFormat, decode_rows};
use crate::ingest::ingest;
use crate::types::{Result, TrainerError, WordList};
use std::fmt;
use std::path::PathBuf;

/// Which flavour of source fed the session. The two differ only in how an
/// empty word list is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Word list read from a well-known location; failures stay silent.
    Fixed,
    /// Word list chosen by the user; an empty list raises a notice.
    Upload,
}

impl SourceKind {
    pub fn notifies_on_empty(&self) -> bool {
        matches!(self, SourceKind::Upload)
    }
}

/// Raw spreadsheet bytes plus the encoding they are in.
#[derive(Debug, Clone)]
pub struct SourceData {
    pub format: SheetFormat,
    pub bytes: Vec<u8>,
}

/// Supplier of raw tabular data for one load.
///
/// `read` may block; callers run it off the UI thread.
pub trait SpreadsheetSource: fmt::Debug + Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Human-readable origin, used in logs and status lines.
    fn describe(&self) -> String;

    fn read(&self) -> Result<SourceData>;
}

/// Reads the word list from a fixed path.
#[derive(Debug, Clone)]
pub struct FetchSource {
    path: PathBuf,
}

impl FetchSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SpreadsheetSource for FetchSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Fixed
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<SourceData> {
        let bytes = std::fs::read(&self.path).map_err(|source| TrainerError::Fetch {
            path: self.path.clone(),
            source,
        })?;
        Ok(SourceData {
            format: SheetFormat::from_path(&self.path),
            bytes,
        })
    }
}

#[derive(Debug, Clone)]
enum UploadContents {
    Bytes(Vec<u8>),
    File(PathBuf),
}

/// A word list handed over by the user, either as bytes already in memory or
/// as a file picked in a dialog.
#[derive(Debug, Clone)]
pub struct UploadSource {
    name: String,
    contents: UploadContents,
}

impl UploadSource {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            contents: UploadContents::Bytes(bytes),
        }
    }

    pub fn from_picked_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            contents: UploadContents::File(path),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl SpreadsheetSource for UploadSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Upload
    }

    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> Result<SourceData> {
        let format = SheetFormat::from_path(&self.name);
        let bytes = match &self.contents {
            UploadContents::Bytes(bytes) => bytes.clone(),
            UploadContents::File(path) => {
                std::fs::read(path).map_err(|source| TrainerError::Fetch {
                    path: path.clone(),
                    source,
                })?
            }
        };
        Ok(SourceData { format, bytes })
    }
}

/// Reads, decodes and ingests one source into a word list.
pub fn read_word_list(source: &dyn SpreadsheetSource) -> Result<WordList> {
    let data = source.read()?;
    let rows = decode_rows(data.format, &data.bytes)?;
    Ok(ingest(rows))
}

/// Async wrapper around [`read_word_list`]; decoding is CPU-bound so it runs
/// on the blocking pool.
pub async fn load_word_list(source: Box<dyn SpreadsheetSource>) -> Result<WordList> {
    let description = source.describe();
    let words = tokio::task::spawn_blocking(move || read_word_list(source.as_ref())).await??;
    log::info!("Loaded {} words from {}", words.len(), description);
    Ok(words)
}
