use std::collections::HashSet;

use clfbench_classifiers::data_handling::{n_test_rows, split_indices, train_test_split};
use clfbench_classifiers::math::{Array1, Array2};
use clfbench_classifiers::ClassifierError;

fn indexed(n: usize) -> (Array2<f64>, Array1<f64>) {
    let x = Array2::from_shape_vec((n, 2), (0..2 * n).map(|v| v as f64).collect()).unwrap();
    let y = (0..n).map(|i| (i % 2) as f64).collect::<Array1<f64>>();
    (x, y)
}

#[test]
fn diabetes_sized_table_splits_514_254() {
    assert_eq!(n_test_rows(768, 0.33), 254);
    let (train, test) = split_indices(768, 0.33, 7).unwrap();
    assert_eq!(train.len(), 514);
    assert_eq!(test.len(), 254);
}

#[test]
fn partitions_are_disjoint_and_cover_every_row() {
    let (train, test) = split_indices(100, 0.25, 42).unwrap();
    let train_set: HashSet<usize> = train.iter().copied().collect();
    let test_set: HashSet<usize> = test.iter().copied().collect();

    assert!(train_set.is_disjoint(&test_set));
    assert_eq!(train_set.len() + test_set.len(), 100);
    assert!((0..100).all(|i| train_set.contains(&i) || test_set.contains(&i)));
}

#[test]
fn same_seed_same_partition() {
    let (x, y) = indexed(60);
    let a = train_test_split(&x, &y, 0.33, 7).unwrap();
    let b = train_test_split(&x, &y, 0.33, 7).unwrap();
    assert_eq!(a.train_indices, b.train_indices);
    assert_eq!(a.test_indices, b.test_indices);
    assert_eq!(a.x_test.as_slice(), b.x_test.as_slice());
}

#[test]
fn different_seeds_usually_differ() {
    let (a, _) = split_indices(200, 0.33, 1).unwrap();
    let (b, _) = split_indices(200, 0.33, 2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn rows_keep_their_labels() {
    let (x, y) = indexed(30);
    let split = train_test_split(&x, &y, 0.2, 9).unwrap();

    for (pos, &row) in split.test_indices.iter().enumerate() {
        assert_eq!(split.x_test.row_slice(pos), x.row_slice(row));
        assert_eq!(split.y_test[pos], y[row]);
    }
    for (pos, &row) in split.train_indices.iter().enumerate() {
        assert_eq!(split.x_train.row_slice(pos), x.row_slice(row));
        assert_eq!(split.y_train[pos], y[row]);
    }
}

#[test]
fn out_of_range_test_size_is_rejected() {
    for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
        let err = split_indices(10, bad, 0).unwrap_err();
        assert!(
            matches!(err, ClassifierError::InvalidArgument(_)),
            "test_size {} gave {:?}",
            bad,
            err
        );
    }
}

#[test]
fn tiny_tables_need_rows_on_both_sides() {
    assert!(split_indices(1, 0.5, 0).is_err());
    assert!(split_indices(2, 0.5, 0).is_ok());
}

#[test]
fn mismatched_labels_are_rejected() {
    let (x, _) = indexed(10);
    let y = Array1::from_vec(vec![0.0; 9]);
    assert!(matches!(
        train_test_split(&x, &y, 0.3, 0),
        Err(ClassifierError::InvalidArgument(_))
    ));
}
