use tempfile::TempDir;
use vocab_trainer::*;

fn sheet(rows: &[&[&str]]) -> Vec<RawRow> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn terms(rows: &[RawRow]) -> Vec<&str> {
    rows.iter().map(|row| row[0].as_str()).collect()
}

fn list(pairs: &[(&str, &str)]) -> WordList {
    pairs
        .iter()
        .map(|(en, bn)| WordPair::new(*en, *bn).unwrap())
        .collect()
}

#[test]
fn test_merge_appends_new_terms() {
    let base = sheet(&[&["English", "Bangla"], &["cat", "বিড়াল"], &["dog", "কুকুর"]]);
    let additions = sheet(&[&["English", "Bangla"], &["sun", "সূর্য"], &["cat", "মার্জার"]]);

    let outcome = merge_sheets(base, additions);

    assert_eq!(terms(&outcome.merged), ["English", "cat", "dog", "sun"]);
    // First occurrence wins
    assert_eq!(outcome.merged[1][1], "বিড়াল");
    // Duplicate of a base term stays behind
    assert_eq!(terms(&outcome.remaining), ["English", "cat"]);
    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.remaining_count(), 1);
}

#[test]
fn test_merge_deduplicates_within_additions() {
    let base = sheet(&[&["English", "Bangla"], &["cat", "বিড়াল"]]);
    let additions = sheet(&[&["English", "Bangla"], &["moon", "চাঁদ"], &["moon", "চন্দ্র"]]);

    let outcome = merge_sheets(base, additions);
    assert_eq!(terms(&outcome.merged), ["English", "cat", "moon"]);
    assert_eq!(outcome.merged[2][1], "চাঁদ");
    assert_eq!(outcome.remaining_count(), 0);
}

#[test]
fn test_merge_keeps_base_rows_and_columns() {
    let base = sheet(&[
        &["English", "Bangla", "Notes"],
        &["cat", "বিড়াল", "pet"],
        &["tree", "", "todo"],
    ]);
    let additions = sheet(&[&["English", "Bangla"], &["rain", "বৃষ্টি"]]);

    let outcome = merge_sheets(base.clone(), additions);

    assert_eq!(&outcome.merged[..3], &base[..]);
    assert_eq!(outcome.merged[3], ["rain", "বৃষ্টি"]);
}

#[test]
fn test_merge_leaves_rows_without_term_in_additions() {
    let base = sheet(&[&["English", "Bangla"], &["cat", "বিড়াল"]]);
    let additions = sheet(&[&["English", "Bangla"], &["", "খালি"]]);

    let outcome = merge_sheets(base, additions);
    assert_eq!(outcome.added, 0);
    assert_eq!(outcome.remaining[1], ["", "খালি"]);
}

#[tokio::test]
async fn test_merge_files_rewrites_both() {
    let dir = TempDir::new().unwrap();
    let base_path = dir.path().join("bangla_words.xlsx");
    let additions_path = dir.path().join("addWords.csv");

    save_word_list(&list(&[("cat", "বিড়াল")]), &base_path)
        .await
        .unwrap();
    std::fs::write(&additions_path, "English,Bangla\nrain,বৃষ্টি\ncat,মার্জার\n").unwrap();

    let outcome = merge_files(&base_path, &additions_path).await.unwrap();
    assert_eq!(outcome.added, 1);

    let base = read_word_list(&FetchSource::new(&base_path)).unwrap();
    let base_terms: Vec<&str> = base.iter().map(WordPair::primary).collect();
    assert_eq!(base_terms, ["cat", "rain"]);

    let additions = std::fs::read_to_string(&additions_path).unwrap();
    assert_eq!(additions, "English,Bangla\ncat,মার্জার\n");
}

#[tokio::test]
async fn test_merge_files_preserves_base_contents() {
    let dir = TempDir::new().unwrap();
    let base_path = dir.path().join("bangla_words.csv");
    let additions_path = dir.path().join("addWords.csv");

    std::fs::write(&base_path, "English,Bangla,Notes\ncat,বিড়াল,pet\ntree,,todo\n").unwrap();
    std::fs::write(&additions_path, "English,Bangla\nrain,বৃষ্টি\n").unwrap();

    merge_files(&base_path, &additions_path).await.unwrap();

    let base = std::fs::read_to_string(&base_path).unwrap();
    assert_eq!(
        base,
        "English,Bangla,Notes\ncat,বিড়াল,pet\ntree,,todo\nrain,বৃষ্টি\n"
    );
    let additions = std::fs::read_to_string(&additions_path).unwrap();
    assert_eq!(additions, "English,Bangla\n");
}

#[tokio::test]
async fn test_merge_files_preserves_xlsx_columns() {
    let dir = TempDir::new().unwrap();
    let base_path = dir.path().join("bangla_words.xlsx");
    let additions_path = dir.path().join("addWords.xlsx");

    let base_rows = sheet(&[
        &["English", "Bangla", "Notes"],
        &["cat", "বিড়াল", "pet"],
        &["tree", "", "todo"],
    ]);
    std::fs::write(&base_path, sheet_bytes(&base_rows, SheetFormat::Xlsx).unwrap()).unwrap();
    let additions_rows = sheet(&[&["English", "Bangla"], &["rain", "বৃষ্টি"]]);
    std::fs::write(
        &additions_path,
        sheet_bytes(&additions_rows, SheetFormat::Xlsx).unwrap(),
    )
    .unwrap();

    merge_files(&base_path, &additions_path).await.unwrap();

    let bytes = std::fs::read(&base_path).unwrap();
    let rows = decode_rows(SheetFormat::Xlsx, &bytes).unwrap();
    assert_eq!(rows[0], ["English", "Bangla", "Notes"]);
    assert_eq!(rows[2], ["tree", "", "todo"]);
    // Short rows come back padded to the widest column
    assert_eq!(rows[3], ["rain", "বৃষ্টি", ""]);
}
