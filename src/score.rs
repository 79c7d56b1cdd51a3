//! Diversity scoring.
//!
//! The diversity of a group on one attribute is the mean pairwise
//! Euclidean distance between its members' indicator vectors. A group's
//! score squares that mean per attribute and sums over attributes; a
//! partition's score sums its groups. Higher is more diverse.

use crate::data::{ColumnGroup, Dataset};
use crate::partition::Partition;

/// Euclidean distance between two equal-length vectors.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Mean of the pairwise distances among `records` on one column group.
///
/// Fewer than two records have no pairs; the mean is defined as `0.0`.
pub fn mean_pairwise_distance(column: &ColumnGroup, records: &[usize]) -> f64 {
    if records.len() < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, &a) in records.iter().enumerate() {
        let row_a = column.row(a);
        for &b in &records[i + 1..] {
            total += euclidean(row_a, column.row(b));
            pairs += 1;
        }
    }
    total / pairs as f64
}

/// Score of one group: sum over column groups of the squared mean
/// pairwise distance.
pub fn group_score(data: &Dataset, group: &[usize]) -> f64 {
    data.columns()
        .iter()
        .map(|column| {
            let mean = mean_pairwise_distance(column, group);
            mean * mean
        })
        .sum()
}

/// Score of every group of `partition`, in group order.
pub fn group_scores(data: &Dataset, partition: &Partition) -> Vec<f64> {
    partition
        .groups()
        .iter()
        .map(|group| group_score(data, group))
        .collect()
}

/// Aggregate score of a partition.
pub fn partition_score(data: &Dataset, partition: &Partition) -> f64 {
    partition
        .groups()
        .iter()
        .map(|group| group_score(data, group))
        .sum()
}
