use tempfile::TempDir;
use vocab_trainer::*;

#[test]
fn test_toggled_from_absent_is_dark() {
    assert_eq!(ThemePreference::toggled(None), ThemePreference::Dark);
    assert_eq!(
        ThemePreference::toggled(Some(ThemePreference::Dark)),
        ThemePreference::Light
    );
    assert_eq!(
        ThemePreference::toggled(Some(ThemePreference::Light)),
        ThemePreference::Dark
    );
}

#[test]
fn test_default_theme_is_dark() {
    let dir = TempDir::new().unwrap();
    let store = PreferenceStore::open(dir.path().join("settings.json")).unwrap();
    assert_eq!(store.stored_theme(), None);
    assert_eq!(store.theme(), ThemePreference::Dark);
}

#[test]
fn test_toggle_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = PreferenceStore::open(&path).unwrap();
    assert_eq!(store.toggle_theme().unwrap(), ThemePreference::Dark);
    assert_eq!(
        PreferenceStore::open(&path).unwrap().stored_theme(),
        Some(ThemePreference::Dark)
    );

    assert_eq!(store.toggle_theme().unwrap(), ThemePreference::Light);
    let reopened = PreferenceStore::open(&path).unwrap();
    assert_eq!(reopened.get("theme"), Some("light"));
}

#[test]
fn test_ensure_theme_materialises_default_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut store = PreferenceStore::open(&path).unwrap();
    assert_eq!(store.ensure_theme().unwrap(), ThemePreference::Dark);
    assert!(path.exists());

    store.set_theme(ThemePreference::Light).unwrap();
    assert_eq!(store.ensure_theme().unwrap(), ThemePreference::Light);
    // First toggle now flips visibly
    assert_eq!(store.toggle_theme().unwrap(), ThemePreference::Dark);
}

#[test]
fn test_unknown_theme_value_is_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"theme": "sepia", "other": "kept"}"#).unwrap();

    let mut store = PreferenceStore::open(&path).unwrap();
    assert_eq!(store.stored_theme(), None);
    assert_eq!(store.theme(), ThemePreference::Dark);

    store.set_theme(ThemePreference::Light).unwrap();
    let reopened = PreferenceStore::open(&path).unwrap();
    assert_eq!(reopened.get("other"), Some("kept"));
}

#[test]
fn test_corrupt_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        PreferenceStore::open(&path),
        Err(TrainerError::Settings(_))
    ));
    let store = PreferenceStore::open_or_default(&path);
    assert_eq!(store.theme(), ThemePreference::Dark);
}
