use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("Failed to read {}: {source}", .path.display())]
    Fetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("The word list is empty")]
    EmptyList,
    #[error("Export error: {0}")]
    Export(String),
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl From<csv::Error> for TrainerError {
    fn from(e: csv::Error) -> Self {
        TrainerError::Parse(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for TrainerError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        TrainerError::Export(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrainerError>;

/// Coarse classification of a failed load, sent across the worker channel
/// where the full error cannot travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    Fetch,
    Parse,
    Other,
}

impl TrainerError {
    pub fn load_kind(&self) -> LoadErrorKind {
        match self {
            TrainerError::Fetch { .. } | TrainerError::Io(_) => LoadErrorKind::Fetch,
            TrainerError::Parse(_) => LoadErrorKind::Parse,
            _ => LoadErrorKind::Other,
        }
    }
}

/// One vocabulary entry: an English term and its Bangla translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPair {
    primary: String,
    translation: String,
}

impl WordPair {
    /// Returns `None` when either side is empty.
    pub fn new(primary: impl Into<String>, translation: impl Into<String>) -> Option<Self> {
        let primary = primary.into();
        let translation = translation.into();
        if primary.is_empty() || translation.is_empty() {
            return None;
        }
        Some(Self {
            primary,
            translation,
        })
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }
}

/// Ordered word list produced by one spreadsheet load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<WordPair>,
}

impl WordList {
    pub fn new(words: Vec<WordPair>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[WordPair] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordPair> {
        self.words.iter()
    }

    pub fn contains(&self, pair: &WordPair) -> bool {
        self.words.contains(pair)
    }
}

impl FromIterator<WordPair> for WordList {
    fn from_iter<I: IntoIterator<Item = WordPair>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a WordPair;
    type IntoIter = std::slice::Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// English shown, Bangla hidden
    #[default]
    Forward,
    /// Bangla shown, English hidden
    Reverse,
}

/// The word currently on screen and the translation it hides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub shown: String,
    pub hidden: String,
}

impl Selection {
    pub fn from_pair(pair: &WordPair, direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self {
                shown: pair.primary.clone(),
                hidden: pair.translation.clone(),
            },
            Direction::Reverse => Self {
                shown: pair.translation.clone(),
                hidden: pair.primary.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedEntry {
    pub word: String,
    pub translation: String,
}
