//! End-to-end tests: directory on disk -> resources -> index -> ranking.

use std::fs;
use std::path::{Path, PathBuf};

use vsm_search::config::StopWordSource;
use vsm_search::{Config, Error, SearchIndex, StemmerKind, TermDocumentMatrix, Vocabulary};

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn plain_config(dir: &Path) -> Config {
    Config {
        corpus_dir: dir.to_path_buf(),
        stop_words: StopWordSource::Disabled,
        ..Config::default()
    }
}

fn names(index: &SearchIndex, query: &str) -> Vec<String> {
    index.search(query).into_iter().map(|hit| hit.name).collect()
}

#[test]
fn kucing_ikan_scenario_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "D1.txt", "kucing makan ikan");
    write(dir.path(), "D2.txt", "ikan makan kucing besar");

    let index = plain_config(dir.path()).load_index().unwrap();
    assert_eq!(index.vocabulary().terms(), ["besar", "ikan", "kucing", "makan"]);

    let hits = index.search("kucing ikan");
    assert_eq!(hits[0].name, "D1.txt");
    assert_eq!(hits[1].name, "D2.txt");
    assert_eq!(format!("{:.4}", hits[0].score), "0.8165");
    assert_eq!(format!("{:.4}", hits[1].score), "0.7071");
}

#[test]
fn vector_totals_match_word_counts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", "Ikan, ikan dan IKAN yang berenang di laut.");
    write(dir.path(), "b.txt", "Kucing yang lapar memakan ikan asin dari dapur");
    write(dir.path(), "c.txt", "");

    let config = Config {
        corpus_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let index = config.load_index().unwrap();
    for (doc, column) in index.documents().iter().zip(index.matrix().columns()) {
        assert_eq!(column.total(), doc.word_count() as u64, "{}", doc.name());
        assert_eq!(column.len(), index.vocabulary().len());
    }
    // bundled stop words removed "dan", "yang", "di", "dari"
    assert_eq!(index.documents()[0].stemmed(), ["ikan", "ikan", "ikan", "berenang", "laut"]);
}

#[test]
fn dictionary_and_stemmer_together() {
    let dir = tempfile::tempdir().unwrap();
    let docs = tempfile::tempdir().unwrap();
    let dictionary = write(dir.path(), "kata-dasar.txt", "connected linked\nbroken line with three\nsingle\n");
    write(docs.path(), "net.txt", "Connected networks, connecting nodes");
    write(docs.path(), "rail.txt", "linked rails");

    let config = Config {
        corpus_dir: docs.path().to_path_buf(),
        dictionary: Some(dictionary),
        stop_words: StopWordSource::Disabled,
        stemmer: StemmerKind::Porter,
        limit: None,
    };
    let index = config.load_index().unwrap();
    assert_eq!(index.documents()[0].stemmed(), ["linked", "network", "connect", "node"]);
    assert_eq!(index.documents()[1].stemmed(), ["link", "rail"]);
    assert!(index.vocabulary().contains("linked"));
    assert!(!index.vocabulary().contains("connected"));
}

#[test]
fn stop_word_query_keeps_input_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "1.txt", "kucing hitam");
    write(dir.path(), "2.txt", "ikan mas");
    write(dir.path(), "3.txt", "burung pipit");

    let config = Config {
        corpus_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let index = config.load_index().unwrap();
    let hits = index.search("yang dan di dari");
    assert!(hits.iter().all(|hit| hit.score == 0.0));
    assert_eq!(names(&index, "yang dan di dari"), ["1.txt", "2.txt", "3.txt"]);
}

#[test]
fn rerunning_the_pipeline_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "z.txt", "sungai mengalir ke laut biru");
    write(dir.path(), "m.txt", "laut biru dan langit biru");
    write(dir.path(), "a.txt", "gunung tinggi 3000 meter");
    write(dir.path(), "skip.csv", "a,b,c");

    let config = Config {
        corpus_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let first = config.load_index().unwrap();
    let second = config.load_index().unwrap();

    assert_eq!(first.vocabulary(), second.vocabulary());
    assert_eq!(first.documents(), second.documents());
    let first_vectors: Vec<_> = first.matrix().columns().collect();
    let second_vectors: Vec<_> = second.matrix().columns().collect();
    assert_eq!(first_vectors, second_vectors);
    assert_eq!(first.search("laut biru"), second.search("laut biru"));
    assert_eq!(first.skipped(), second.skipped());
    assert_eq!(first.stats().skipped, 1);
}

#[test]
fn vocabulary_ignores_document_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", "satu dua tiga");
    write(dir.path(), "b.txt", "tiga empat");
    let index = plain_config(dir.path()).load_index().unwrap();

    let mut reversed: Vec<_> = index.documents().to_vec();
    reversed.reverse();
    assert_eq!(&Vocabulary::from_documents(&reversed), index.vocabulary());

    let matrix = TermDocumentMatrix::build(&reversed, index.vocabulary());
    assert_eq!(matrix.column(0), index.matrix().column(1));
}

#[test]
fn missing_stop_words_abort_before_indexing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.txt", "ikan");
    let config = Config {
        corpus_dir: dir.path().to_path_buf(),
        stop_words: StopWordSource::File(dir.path().join("stopwords.txt")),
        ..Config::default()
    };
    match config.load_index() {
        Err(Error::MissingResource { path, .. }) => assert!(path.ends_with("stopwords.txt")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected a missing resource"),
    }
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = plain_config(&dir.path().join("nope")).load_index().err().unwrap();
    assert!(matches!(err, Error::MissingDirectory { .. }));
}
