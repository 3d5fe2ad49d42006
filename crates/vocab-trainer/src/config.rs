use std::path::PathBuf;

pub const APP_NAME: &str = "vocab-trainer";
pub const DEFAULT_WORD_LIST: &str = "Database/bangla_words.xlsx";
pub const MISSED_FILE_NAME: &str = "missed_words.xlsx";
pub const MISSED_SHEET_NAME: &str = "Missed Words";
pub const MISSED_HEADER: [&str; 2] = ["word", "translation"];
pub const WORD_LIST_SHEET_NAME: &str = "Sheet1";
pub const WORD_LIST_HEADER: [&str; 2] = ["English", "Bangla"];
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Paths the front ends start from. Command-line flags override the
/// defaults field by field.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    pub word_list_path: PathBuf,
    pub missed_file_name: String,
    pub settings_path: PathBuf,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            word_list_path: PathBuf::from(DEFAULT_WORD_LIST),
            missed_file_name: MISSED_FILE_NAME.to_string(),
            settings_path: default_settings_path(),
        }
    }
}

impl TrainerConfig {
    pub fn with_word_list(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.word_list_path = path;
        }
        self
    }

    pub fn with_settings_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.settings_path = path;
        }
        self
    }
}

/// Per-user data directory for this app, falling back to the working
/// directory when the platform has none.
pub fn app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_settings_path() -> PathBuf {
    app_data_dir().join(SETTINGS_FILE_NAME)
}
