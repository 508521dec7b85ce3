#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

/// Rows shaped like the diabetes table: eight numeric features and a 0/1 label
/// that mostly follows the second and sixth features. About a third of the rows
/// are positive, so class 0 is the majority.
pub fn synthetic_rows(n_rows: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_rows)
        .map(|_| {
            let pregnancies = rng.gen_range(0..12) as f64;
            let glucose = rng.gen_range(60.0..200.0_f64).round();
            let pressure = rng.gen_range(40.0..110.0_f64).round();
            let skin = rng.gen_range(0.0..50.0_f64).round();
            let insulin = rng.gen_range(0.0..300.0_f64).round();
            let bmi = (rng.gen_range(18.0..50.0_f64) * 10.0).round() / 10.0;
            let pedigree = (rng.gen_range(0.05..2.0_f64) * 1000.0).round() / 1000.0;
            let age = rng.gen_range(21..80) as f64;

            let risk = (glucose - 125.0) / 30.0 + (bmi - 32.0) / 8.0 + rng.gen_range(-0.8..0.8);
            let label = if risk > 1.0 { 1.0 } else { 0.0 };

            vec![
                pregnancies, glucose, pressure, skin, insulin, bmi, pedigree, age, label,
            ]
        })
        .collect()
}

pub fn render_rows(rows: &[Vec<f64>], delimiter: char) -> String {
    let mut text = String::new();
    for row in rows {
        let fields: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        text.push_str(&fields.join(&delimiter.to_string()));
        text.push('\n');
    }
    text
}

/// Write `contents` to a file inside a fresh temp dir; keep the dir alive for the test.
pub fn write_table(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("table.csv");
    let mut file = std::fs::File::create(&path).expect("create table");
    file.write_all(contents.as_bytes()).expect("write table");
    (dir, path)
}

pub fn write_synthetic_table(n_rows: usize, seed: u64) -> (TempDir, PathBuf) {
    write_table(&render_rows(&synthetic_rows(n_rows, seed), ','))
}
