//! Immutable feature space shared by a grouping run.

use super::column::ColumnGroup;
use crate::error::{GroupingError, Result};

/// The target attributes of a record universe, in indicator form.
///
/// Record indices run from `0` to `n_records() - 1`. A dataset is never
/// mutated by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    n_records: usize,
    columns: Vec<ColumnGroup>,
}

impl Dataset {
    /// Builds a dataset from one column group per target attribute.
    ///
    /// All column groups must describe the same number of records.
    pub fn new(columns: Vec<ColumnGroup>) -> Result<Self> {
        let first = columns.first().ok_or_else(|| {
            GroupingError::PreconditionViolation("at least one target attribute is required".into())
        })?;
        let n_records = first.n_records();

        if let Some(bad) = columns.iter().find(|c| c.n_records() != n_records) {
            return Err(GroupingError::PreconditionViolation(format!(
                "column '{}' covers {} records, expected {n_records}",
                bad.name(),
                bad.n_records()
            )));
        }

        Ok(Self { n_records, columns })
    }

    /// Size of the record universe.
    pub fn n_records(&self) -> usize {
        self.n_records
    }

    /// Column groups in insertion order.
    pub fn columns(&self) -> &[ColumnGroup] {
        &self.columns
    }
}
