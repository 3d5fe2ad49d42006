use tempfile::TempDir;
use vocab_trainer::*;

fn missed(word: &str, translation: &str) -> MissedEntry {
    MissedEntry {
        word: word.into(),
        translation: translation.into(),
    }
}

#[test]
fn test_missed_words_sheet_layout() {
    let entries = vec![missed("cat", "বিড়াল"), missed("কুকুর", "dog"), missed("cat", "বিড়াল")];
    let bytes = missed_words_bytes(&entries).unwrap();

    let rows = decode_rows(SheetFormat::Xlsx, &bytes).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], ["word", "translation"]);
    assert_eq!(rows[1], ["cat", "বিড়াল"]);
    assert_eq!(rows[2], ["কুকুর", "dog"]);
    assert_eq!(rows[3], ["cat", "বিড়াল"]);
}

#[test]
fn test_empty_export_has_header_only() {
    let bytes = missed_words_bytes(&[]).unwrap();
    let rows = decode_rows(SheetFormat::Xlsx, &bytes).unwrap();
    assert_eq!(rows, vec![vec!["word".to_string(), "translation".to_string()]]);
}

#[tokio::test]
async fn test_export_missed_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(config::MISSED_FILE_NAME);

    export_missed(&[missed("dog", "কুকুর")], &path).await.unwrap();

    let words = load_word_list(Box::new(FetchSource::new(&path))).await.unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words.as_slice()[0].primary(), "dog");
    assert_eq!(words.as_slice()[0].translation(), "কুকুর");
}

#[tokio::test]
async fn test_export_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("missed.xlsx");
    let err = export_missed(&[missed("a", "b")], &path).await.unwrap_err();
    assert!(matches!(err, TrainerError::Io(_)));
}
