mod common;

use clfbench_classifiers::data_handling::Dataset;
use clfbench_classifiers::io::{read_delimited_table, read_table_with_config, TableReaderConfig};
use clfbench_classifiers::ClassifierError;

use common::{render_rows, synthetic_rows, write_synthetic_table, write_table};

fn nine_columns() -> TableReaderConfig {
    TableReaderConfig {
        delimiter: b',',
        expected_columns: Some(9),
    }
}

// ---------------------------------------------------------------------------
// Well-formed input
// ---------------------------------------------------------------------------

#[test]
fn reads_every_row_and_column() {
    let (_dir, path) = write_synthetic_table(50, 1);
    let table = read_table_with_config(&path, &nine_columns()).unwrap();
    assert_eq!(table.shape(), (50, 9));

    let dataset = Dataset::from_table(&table).unwrap();
    assert_eq!(dataset.nrows(), 50);
    assert_eq!(dataset.n_features(), 8);
    assert!(dataset.y.iter().all(|&l| l == 0.0 || l == 1.0));
}

#[test]
fn values_keep_their_file_order() {
    let (_dir, path) = write_table("6,148,72,35,0,33.6,0.627,50,1\n1,85,66,29,0,26.6,0.351,31,0\n");
    let table = read_table_with_config(&path, &nine_columns()).unwrap();
    let dataset = Dataset::from_table(&table).unwrap();

    assert_eq!(dataset.x.row_slice(0)[1], 148.0);
    assert_eq!(dataset.x.row_slice(1)[6], 0.351);
    assert_eq!(dataset.y.to_vec(), vec![1.0, 0.0]);
}

#[test]
fn blank_lines_are_skipped() {
    let rows = synthetic_rows(4, 2);
    let text = format!("\n{}\n\n", render_rows(&rows, ','));
    let (_dir, path) = write_table(&text);
    let table = read_table_with_config(&path, &nine_columns()).unwrap();
    assert_eq!(table.nrows(), 4);
}

#[test]
fn other_delimiters_are_honoured() {
    let rows = synthetic_rows(5, 3);
    let (_dir, path) = write_table(&render_rows(&rows, '\t'));
    let table = read_delimited_table(&path, b'\t').unwrap();
    assert_eq!(table.shape(), (5, 9));
}

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[test]
fn short_row_is_a_parse_error() {
    let (_dir, path) = write_table("6,148,72,35,0,33.6,0.627,50,1\n1,85,66,29,0,26.6,0.351\n");
    let err = read_table_with_config(&path, &nine_columns()).unwrap_err();
    match err {
        ClassifierError::Parse(msg) => assert!(msg.contains("7 fields"), "message: {}", msg),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn ragged_rows_fail_without_expected_width() {
    let (_dir, path) = write_table("1,2,3\n4,5\n");
    let err = read_delimited_table(&path, b',').unwrap_err();
    assert!(matches!(err, ClassifierError::Parse(_)));
}

#[test]
fn non_numeric_field_is_a_parse_error() {
    let (_dir, path) = write_table("6,148,72,35,0,33.6,abc,50,1\n");
    let err = read_table_with_config(&path, &nine_columns()).unwrap_err();
    assert!(matches!(err, ClassifierError::Parse(_)));
}

#[test]
fn empty_file_is_a_parse_error() {
    let (_dir, path) = write_table("");
    let err = read_table_with_config(&path, &nine_columns()).unwrap_err();
    assert!(matches!(err, ClassifierError::Parse(_)));
}

#[test]
fn missing_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_delimited_table(dir.path().join("absent.csv"), b',').unwrap_err();
    assert!(matches!(err, ClassifierError::Parse(_)), "{:?}", err);
}
