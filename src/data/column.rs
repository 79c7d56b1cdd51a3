//! Indicator column groups.

use std::collections::HashMap;

use crate::error::{GroupingError, Result};

/// The indicator (one-hot) sub-columns derived from one target attribute.
///
/// Stored as a dense row-major matrix of `n_records x width` values, so a
/// record's feature vector for this attribute is a contiguous slice.
///
/// # Examples
///
/// ```
/// use u_grouping::data::ColumnGroup;
///
/// let cells = [Some("red"), Some("blue"), Some("red")];
/// let color = ColumnGroup::one_hot("color", &cells).unwrap();
/// assert_eq!(color.width(), 2);
/// assert_eq!(color.row(1), &[0.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGroup {
    name: String,
    labels: Vec<String>,
    n_records: usize,
    values: Vec<f64>,
}

impl ColumnGroup {
    /// Encodes a categorical column into indicator form.
    ///
    /// Categories become sub-columns in order of first appearance. A
    /// missing cell (`None`) is rejected rather than imputed.
    pub fn one_hot<S: AsRef<str>>(name: impl Into<String>, cells: &[Option<S>]) -> Result<Self> {
        let name = name.into();
        let mut labels: Vec<String> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut codes = Vec::with_capacity(cells.len());

        for (record, cell) in cells.iter().enumerate() {
            let value: &str = match cell {
                Some(v) => v.as_ref(),
                None => {
                    return Err(GroupingError::PreconditionViolation(format!(
                        "column '{name}' is missing a value for record {record}"
                    )))
                }
            };
            let code = *index.entry(value).or_insert_with(|| {
                labels.push(value.to_owned());
                labels.len() - 1
            });
            codes.push(code);
        }

        let width = labels.len();
        let mut values = vec![0.0; cells.len() * width];
        for (record, code) in codes.into_iter().enumerate() {
            values[record * width + code] = 1.0;
        }

        Ok(Self {
            name,
            labels,
            n_records: cells.len(),
            values,
        })
    }

    /// Wraps indicator rows that were encoded elsewhere.
    ///
    /// Every row must have the same width and contain only finite values;
    /// NaN is treated as a missing cell.
    pub fn from_rows(name: impl Into<String>, rows: &[Vec<f64>]) -> Result<Self> {
        let name = name.into();
        let width = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * width);

        for (record, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GroupingError::PreconditionViolation(format!(
                    "column '{name}' record {record} has {} indicator values, expected {width}",
                    row.len()
                )));
            }
            if let Some(pos) = row.iter().position(|v| !v.is_finite()) {
                return Err(GroupingError::PreconditionViolation(format!(
                    "column '{name}' record {record} has a missing value in sub-column {pos}"
                )));
            }
            values.extend_from_slice(row);
        }

        let labels = (0..width).map(|c| format!("{name}_{c}")).collect();
        Ok(Self {
            name,
            labels,
            n_records: rows.len(),
            values,
        })
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sub-column labels, one per category.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of indicator sub-columns.
    pub fn width(&self) -> usize {
        self.labels.len()
    }

    /// Number of records covered.
    pub fn n_records(&self) -> usize {
        self.n_records
    }

    /// Indicator vector of one record.
    ///
    /// # Panics
    ///
    /// Panics if `record >= self.n_records()`.
    pub fn row(&self, record: usize) -> &[f64] {
        let width = self.width();
        &self.values[record * width..(record + 1) * width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot_first_appearance_order() {
        let cells = [Some("b"), Some("a"), Some("b"), Some("c")];
        let col = ColumnGroup::one_hot("letter", &cells).unwrap();

        assert_eq!(col.labels(), &["b", "a", "c"]);
        assert_eq!(col.n_records(), 4);
        assert_eq!(col.row(0), &[1.0, 0.0, 0.0]);
        assert_eq!(col.row(1), &[0.0, 1.0, 0.0]);
        assert_eq!(col.row(2), &[1.0, 0.0, 0.0]);
        assert_eq!(col.row(3), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_one_hot_rejects_missing() {
        let cells = [Some("x"), None, Some("y")];
        let err = ColumnGroup::one_hot("attr", &cells).unwrap_err();

        match err {
            GroupingError::PreconditionViolation(msg) => {
                assert!(msg.contains("attr"), "message should name the column: {msg}");
                assert!(msg.contains("record 1"), "message should name the record: {msg}");
            }
            other => panic!("expected precondition violation, got {other:?}"),
        }
    }

    #[test]
    fn test_from_rows_accepts_indicators() {
        let rows = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let col = ColumnGroup::from_rows("flag", &rows).unwrap();
        assert_eq!(col.width(), 2);
        assert_eq!(col.labels(), &["flag_0", "flag_1"]);
        assert_eq!(col.row(1), &[0.0, 1.0]);
    }

    #[test]
    fn test_from_rows_rejects_nan() {
        let rows = vec![vec![1.0, 0.0], vec![f64::NAN, 1.0]];
        assert!(matches!(
            ColumnGroup::from_rows("flag", &rows),
            Err(GroupingError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![1.0, 0.0], vec![1.0]];
        assert!(ColumnGroup::from_rows("flag", &rows).is_err());
    }
}
