use std::cmp::Ordering;

use crate::error::{ClassifierError, Result};

/// Round raw model outputs to the nearest class label.
///
/// Ties round away from zero (0.5 becomes 1). Values that round outside
/// {0, 1} are clamped into it; the second element counts how many were.
pub fn round_predictions(scores: &[f64]) -> (Vec<i32>, usize) {
    let mut clamped = 0;
    let labels = scores
        .iter()
        .map(|&s| {
            let r = s.round();
            if r < 0.0 || r > 1.0 || r.is_nan() {
                clamped += 1;
            }
            if r >= 1.0 {
                1
            } else {
                0
            }
        })
        .collect();
    (labels, clamped)
}

/// Fraction of positions where the predicted label equals the true label.
pub fn accuracy_score(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(ClassifierError::InvalidArgument(format!(
            "accuracy needs equal lengths, got {} labels and {} predictions",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(ClassifierError::InvalidArgument(
            "accuracy is undefined for zero samples".to_string(),
        ));
    }
    let correct = y_true.iter().zip(y_pred).filter(|(a, b)| a == b).count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Area under the ROC curve for binary labels (1 = positive, 0 = negative).
///
/// Computed from the Mann-Whitney U statistic, so it equals the probability
/// that a random positive is scored above a random negative. Tied scores
/// receive their average rank.
///
/// Fails when `y_true` holds a single class, since the curve is undefined.
pub fn roc_auc_score(y_true: &[i32], scores: &[f64]) -> Result<f64> {
    check_binary_inputs(y_true, scores)?;

    let n_pos = y_true.iter().filter(|&&y| y == 1).count();
    let n_neg = y_true.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(ClassifierError::InvalidArgument(
            "only one class present in y_true; ROC AUC is undefined".to_string(),
        ));
    }

    let ranks = average_ranks(scores);
    let pos_rank_sum: f64 = ranks
        .iter()
        .zip(y_true)
        .filter(|(_, &y)| y == 1)
        .map(|(r, _)| r)
        .sum();

    let n_pos_f = n_pos as f64;
    let u = pos_rank_sum - n_pos_f * (n_pos_f + 1.0) / 2.0;
    Ok(u / (n_pos_f * n_neg as f64))
}

/// ROC curve points `(false positive rate, true positive rate)`, one per distinct
/// threshold in decreasing score order, starting at `(0, 0)` and ending at `(1, 1)`.
pub fn roc_curve(y_true: &[i32], scores: &[f64]) -> Result<Vec<(f64, f64)>> {
    check_binary_inputs(y_true, scores)?;

    let n_pos = y_true.iter().filter(|&&y| y == 1).count() as f64;
    let n_neg = y_true.len() as f64 - n_pos;

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let mut points = vec![(0.0, 0.0)];
    let (mut tp, mut fp) = (0.0, 0.0);
    for (i, &idx) in order.iter().enumerate() {
        if y_true[idx] == 1 {
            tp += 1.0;
        } else {
            fp += 1.0;
        }
        let last_of_threshold = order
            .get(i + 1)
            .map_or(true, |&next| scores[next] != scores[idx]);
        if last_of_threshold {
            let fpr = if n_neg > 0.0 { fp / n_neg } else { 0.0 };
            let tpr = if n_pos > 0.0 { tp / n_pos } else { 0.0 };
            points.push((fpr, tpr));
        }
    }
    Ok(points)
}

fn check_binary_inputs(y_true: &[i32], scores: &[f64]) -> Result<()> {
    if y_true.len() != scores.len() {
        return Err(ClassifierError::InvalidArgument(format!(
            "scores and labels must have equal lengths, got {} and {}",
            scores.len(),
            y_true.len()
        )));
    }
    if y_true.iter().any(|&y| y != 0 && y != 1) {
        return Err(ClassifierError::InvalidArgument(
            "labels must be 0 or 1".to_string(),
        ));
    }
    if let Some(pos) = scores.iter().position(|s| s.is_nan()) {
        return Err(ClassifierError::InvalidArgument(format!(
            "score at position {} is NaN",
            pos
        )));
    }
    Ok(())
}

/// 1-based ranks of `values` in ascending order, ties sharing their mean rank.
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // positions start..end (0-based) share ranks start+1..=end
        let rank = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = rank;
        }
        start = end;
    }
    ranks
}
