use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    pub fn flipped(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Next theme after a toggle. With nothing stored yet the toggle lands
    /// on the default.
    pub fn toggled(stored: Option<Self>) -> Self {
        match stored {
            Some(theme) => theme.flipped(),
            None => Self::default(),
        }
    }
}

/// Flat string key-value store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Opens the store; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let json = std::fs::read_to_string(&path)?;
            serde_json::from_str(&json)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Opens the store, starting empty if the file cannot be read.
    pub fn open_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                log::warn!(
                    "Failed to load preferences from {}: {e}. Using defaults.",
                    path.display()
                );
                Self {
                    path,
                    values: BTreeMap::new(),
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Stored theme, if any. Unrecognised values count as absent.
    pub fn stored_theme(&self) -> Option<ThemePreference> {
        self.get(THEME_KEY).and_then(ThemePreference::parse)
    }

    /// Theme to display: the stored one or the default.
    pub fn theme(&self) -> ThemePreference {
        self.stored_theme().unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: ThemePreference) -> Result<()> {
        self.set(THEME_KEY, theme.as_str())
    }

    /// Persists the default theme if none is stored yet.
    pub fn ensure_theme(&mut self) -> Result<ThemePreference> {
        match self.stored_theme() {
            Some(theme) => Ok(theme),
            None => {
                let theme = ThemePreference::default();
                self.set_theme(theme)?;
                Ok(theme)
            }
        }
    }

    pub fn toggle_theme(&mut self) -> Result<ThemePreference> {
        let theme = ThemePreference::toggled(self.stored_theme());
        self.set_theme(theme)?;
        Ok(theme)
    }
}
