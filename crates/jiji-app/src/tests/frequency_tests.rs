use std::fs;

use tempfile::TempDir;

use crate::frequency;

fn lexique_row(lemma: &str, films: &str, books: &str, is_lemma: &str) -> String {
    let mut columns = vec![""; 14];
    columns[2] = lemma;
    columns[6] = films;
    columns[7] = books;
    columns[13] = is_lemma;
    columns.join("\t")
}

#[test]
fn test_lexique_tags_skip_stopwords() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stopword.txt"), "le\nde\n").unwrap();

    let input = dir.path().join("lexique.tsv");
    let content = [
        "header".to_string(),
        lexique_row("le", "30000", "35000", "1"),
        lexique_row("maison", "100", "400", "1"),
        lexique_row("chat", "300", "", "1"),
    ]
    .join("\n");
    fs::write(&input, content).unwrap();

    let written = frequency::lexique_tags(&input, dir.path()).unwrap();

    assert_eq!(written, vec![dir.path().join("freq01.txt")]);
    let level = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(level, "chat\nmaison");
}

#[test]
fn test_missing_stopword_list_is_empty() {
    let dir = TempDir::new().unwrap();
    assert!(frequency::load_stopwords(dir.path()).unwrap().is_empty());
}

#[test]
fn test_bccwj_tags() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bccwj.tsv");
    fs::write(
        &input,
        "rank\tlForm\tlemma\n1\tノ\tの\n900\tショクジ\t食事\n",
    )
    .unwrap();
    let tags_dir = dir.path().join("tags");

    let written = frequency::bccwj_tags(&input, &tags_dir).unwrap();

    assert_eq!(written.len(), 2);
    assert_eq!(fs::read_to_string(tags_dir.join("freq01.txt")).unwrap(), "の");
    assert_eq!(fs::read_to_string(tags_dir.join("freq02.txt")).unwrap(), "食事");
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let result = frequency::bccwj_tags(&dir.path().join("none.tsv"), dir.path());
    assert!(result.is_err());
}
