//! Comparison Matrix - Validated pairwise judgments for one decision level.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::{SaatyScale, ValidationError};

/// Default allowed deviation of `a(i,j) * a(j,i)` from 1.
///
/// Loose enough for hand-typed fractions such as 0.333 for 1/3.
pub const DEFAULT_RECIPROCAL_TOLERANCE: f64 = 0.01;

/// Allowed float error on a stored diagonal entry.
const DIAGONAL_EPSILON: f64 = 1e-9;

/// An n×n reciprocal matrix of pairwise judgments.
///
/// Entry (i, j) states how many times more important item i is than item j.
/// Once built the matrix is guaranteed to be non-empty, strictly positive,
/// to have a unit diagonal and to be reciprocal within tolerance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    items: Vec<String>,
    /// Row-major entries.
    entries: Vec<f64>,
}

impl ComparisonMatrix {
    /// Creates a builder for constructing a matrix from pairwise judgments.
    pub fn builder() -> ComparisonMatrixBuilder {
        ComparisonMatrixBuilder::new()
    }

    /// Creates a matrix where every item is judged equal to every other.
    pub fn equal(items: Vec<impl Into<String>>) -> Result<Self, ValidationError> {
        Self::builder().items(items).fill_missing_with_equal().build()
    }

    /// Creates a matrix from explicit rows, one per item.
    ///
    /// # Errors
    ///
    /// Fails when the rows are not n×n for n items, or when the entries break
    /// positivity, the unit diagonal or reciprocity.
    pub fn from_rows(
        items: Vec<impl Into<String>>,
        rows: Vec<Vec<f64>>,
        tolerance: f64,
    ) -> Result<Self, ValidationError> {
        let items: Vec<String> = items.into_iter().map(|s| s.into()).collect();
        let n = items.len();

        if rows.len() != n {
            return Err(ValidationError::NotSquare {
                rows: rows.len(),
                columns: n,
            });
        }
        if let Some(ragged) = rows.iter().find(|row| row.len() != n) {
            return Err(ValidationError::NotSquare {
                rows: n,
                columns: ragged.len(),
            });
        }

        let matrix = Self {
            items,
            entries: rows.into_iter().flatten().collect(),
        };
        matrix.validate(tolerance)?;
        Ok(matrix)
    }

    /// Re-checks every structural invariant of the matrix.
    pub fn validate(&self, tolerance: f64) -> Result<(), ValidationError> {
        let n = self.dimension();
        if n == 0 {
            return Err(ValidationError::EmptyMatrix);
        }
        check_unique(&self.items)?;

        for i in 0..n {
            for j in 0..n {
                check_positive(&self.items[i], &self.items[j], self.at(i, j))?;
            }
            let diagonal = self.at(i, i);
            if (diagonal - 1.0).abs() > DIAGONAL_EPSILON {
                return Err(ValidationError::DiagonalNotUnity {
                    item: self.items[i].clone(),
                    value: diagonal,
                });
            }
            for j in (i + 1)..n {
                let (forward, backward) = (self.at(i, j), self.at(j, i));
                if !is_reciprocal(forward, backward, tolerance) {
                    return Err(ValidationError::ReciprocalMismatch {
                        row: self.items[i].clone(),
                        column: self.items[j].clone(),
                        forward,
                        backward,
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns n, the number of compared items.
    pub fn dimension(&self) -> usize {
        self.items.len()
    }

    /// Returns the item labels in row order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the row index of an item.
    pub fn index_of(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    /// Returns entry (i, j), or `None` when out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        let n = self.dimension();
        if row < n && column < n {
            Some(self.at(row, column))
        } else {
            None
        }
    }

    /// Returns the judgment of `row` over `column` by item label.
    pub fn entry(&self, row: &str, column: &str) -> Option<f64> {
        self.get(self.index_of(row)?, self.index_of(column)?)
    }

    /// Returns one row of the matrix.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let n = self.dimension();
        (row < n).then(|| &self.entries[row * n..(row + 1) * n])
    }

    /// Returns all rows as owned vectors.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.entries
            .chunks(self.dimension().max(1))
            .map(|row| row.to_vec())
            .collect()
    }

    /// Computes M·v. `v` must have n entries; missing entries count as 0.
    pub fn multiply(&self, v: &[f64]) -> Vec<f64> {
        let n = self.dimension();
        (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| self.at(i, j) * v.get(j).copied().unwrap_or(0.0))
                    .sum()
            })
            .collect()
    }

    fn at(&self, row: usize, column: usize) -> f64 {
        self.entries[row * self.dimension() + column]
    }
}

/// Builder for ComparisonMatrix instances.
///
/// Judgments may be supplied for either direction of a pair; the other
/// direction is filled with the reciprocal. Item order is taken from
/// [`items`](Self::items) when given, otherwise from first appearance.
#[derive(Debug, Clone, Default)]
pub struct ComparisonMatrixBuilder {
    items: Vec<String>,
    judgments: Vec<(String, String, f64)>,
    tolerance: Option<f64>,
    fill_equal: bool,
}

impl ComparisonMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compared items, fixing row order.
    pub fn items(mut self, ids: Vec<impl Into<String>>) -> Self {
        self.items = ids.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Records how much more important `row` is than `column`.
    pub fn judge(mut self, row: impl Into<String>, column: impl Into<String>, value: f64) -> Self {
        self.judgments.push((row.into(), column.into(), value));
        self
    }

    /// Records a judgment on the Saaty scale.
    pub fn judge_scale(
        self,
        row: impl Into<String>,
        column: impl Into<String>,
        intensity: SaatyScale,
    ) -> Self {
        self.judge(row, column, intensity.value())
    }

    /// Records several judgments at once.
    pub fn judgments<I, S>(mut self, judgments: I) -> Self
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<String>,
    {
        self.judgments.extend(
            judgments
                .into_iter()
                .map(|(row, column, value)| (row.into(), column.into(), value)),
        );
        self
    }

    /// Sets the reciprocal tolerance (defaults to [`DEFAULT_RECIPROCAL_TOLERANCE`]).
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Treats pairs without a judgment as equally important instead of failing.
    pub fn fill_missing_with_equal(mut self) -> Self {
        self.fill_equal = true;
        self
    }

    /// Builds and validates the matrix.
    pub fn build(self) -> Result<ComparisonMatrix, ValidationError> {
        let tolerance = self.tolerance.unwrap_or(DEFAULT_RECIPROCAL_TOLERANCE);

        let mut items = self.items;
        if items.is_empty() {
            for (row, column, _) in &self.judgments {
                for id in [row, column] {
                    if !items.contains(id) {
                        items.push(id.clone());
                    }
                }
            }
        }
        if items.is_empty() {
            return Err(ValidationError::EmptyMatrix);
        }
        check_unique(&items)?;

        let n = items.len();
        let mut given: Vec<Option<f64>> = vec![None; n * n];
        {
            let index: HashMap<&str, usize> = items
                .iter()
                .enumerate()
                .map(|(i, id)| (id.as_str(), i))
                .collect();
            let position = |id: &str| {
                index
                    .get(id)
                    .copied()
                    .ok_or_else(|| ValidationError::UnknownItem {
                        item: id.to_string(),
                    })
            };

            for (row, column, value) in &self.judgments {
                let i = position(row)?;
                let j = position(column)?;
                check_positive(row, column, *value)?;
                if let Some(first) = given[i * n + j] {
                    if !is_reciprocal(first, 1.0 / *value, tolerance) {
                        return Err(ValidationError::ConflictingJudgment {
                            row: row.clone(),
                            column: column.clone(),
                            first,
                            second: *value,
                        });
                    }
                }
                given[i * n + j] = Some(*value);
            }
        }

        let mut entries = vec![1.0; n * n];
        for i in 0..n {
            if let Some(value) = given[i * n + i] {
                if (value - 1.0).abs() > tolerance {
                    return Err(ValidationError::DiagonalNotUnity {
                        item: items[i].clone(),
                        value,
                    });
                }
            }
            for j in (i + 1)..n {
                let (forward, backward) = match (given[i * n + j], given[j * n + i]) {
                    (Some(forward), Some(backward)) => {
                        if !is_reciprocal(forward, backward, tolerance) {
                            return Err(ValidationError::ReciprocalMismatch {
                                row: items[i].clone(),
                                column: items[j].clone(),
                                forward,
                                backward,
                            });
                        }
                        (forward, backward)
                    }
                    (Some(forward), None) => (forward, 1.0 / forward),
                    (None, Some(backward)) => (1.0 / backward, backward),
                    (None, None) if self.fill_equal => (1.0, 1.0),
                    (None, None) => {
                        return Err(ValidationError::MissingJudgment {
                            row: items[i].clone(),
                            column: items[j].clone(),
                        })
                    }
                };
                entries[i * n + j] = forward;
                entries[j * n + i] = backward;
            }
        }

        Ok(ComparisonMatrix { items, entries })
    }
}

fn check_positive(row: &str, column: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveEntry {
            row: row.to_string(),
            column: column.to_string(),
            value,
        })
    }
}

fn check_unique(items: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.as_str()) {
            return Err(ValidationError::DuplicateItem { item: item.clone() });
        }
    }
    Ok(())
}

fn is_reciprocal(forward: f64, backward: f64, tolerance: f64) -> bool {
    (forward * backward - 1.0).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_three() -> ComparisonMatrix {
        ComparisonMatrix::builder()
            .items(vec!["A", "B", "C"])
            .judge("A", "B", 3.0)
            .judge("A", "C", 5.0)
            .judge("B", "C", 2.0)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_fills_reciprocals() {
        let m = three_by_three();
        assert_eq!(m.dimension(), 3);
        assert_eq!(m.entry("A", "B"), Some(3.0));
        assert!((m.entry("B", "A").unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert!((m.entry("C", "B").unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(m.get(1, 1), Some(1.0));
    }

    #[test]
    fn builder_infers_item_order_from_judgments() {
        let m = ComparisonMatrix::builder()
            .judge("Cost", "Speed", 2.0)
            .build()
            .unwrap();
        assert_eq!(m.items(), &["Cost".to_string(), "Speed".to_string()]);
    }

    #[test]
    fn builder_accepts_both_directions_when_reciprocal() {
        let m = ComparisonMatrix::builder()
            .items(vec!["A", "B"])
            .judge("A", "B", 3.0)
            .judge("B", "A", 0.333)
            .build()
            .unwrap();
        assert_eq!(m.entry("B", "A"), Some(0.333));
    }

    #[test]
    fn builder_rejects_non_reciprocal_pair() {
        let result = ComparisonMatrix::builder()
            .items(vec!["A", "B"])
            .judge("A", "B", 3.0)
            .judge("B", "A", 0.5)
            .build();
        assert!(matches!(
            result,
            Err(ValidationError::ReciprocalMismatch { .. })
        ));
    }

    #[test]
    fn builder_rejects_non_positive_values() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = ComparisonMatrix::builder()
                .items(vec!["A", "B"])
                .judge("A", "B", bad)
                .build();
            assert!(
                matches!(result, Err(ValidationError::NonPositiveEntry { .. })),
                "value {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn builder_rejects_unknown_item() {
        let result = ComparisonMatrix::builder()
            .items(vec!["A", "B"])
            .judge("A", "Z", 2.0)
            .build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::UnknownItem {
                item: "Z".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_missing_pair() {
        let result = ComparisonMatrix::builder()
            .items(vec!["A", "B", "C"])
            .judge("A", "B", 2.0)
            .judge("A", "C", 2.0)
            .build();
        assert!(matches!(
            result,
            Err(ValidationError::MissingJudgment { .. })
        ));
    }

    #[test]
    fn builder_rejects_non_unit_diagonal() {
        let result = ComparisonMatrix::builder()
            .items(vec!["A", "B"])
            .judge("A", "A", 2.0)
            .judge("A", "B", 2.0)
            .build();
        assert!(matches!(
            result,
            Err(ValidationError::DiagonalNotUnity { .. })
        ));
    }

    #[test]
    fn builder_rejects_same_pair_judged_twice_differently() {
        let result = ComparisonMatrix::builder()
            .items(vec!["A", "B"])
            .judge("A", "B", 3.0)
            .judge("A", "B", 9.0)
            .build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::ConflictingJudgment {
                row: "A".to_string(),
                column: "B".to_string(),
                first: 3.0,
                second: 9.0,
            }
        );
    }

    #[test]
    fn builder_accepts_repeated_identical_judgment() {
        let m = ComparisonMatrix::builder()
            .items(vec!["A", "B"])
            .judge("A", "B", 3.0)
            .judge("A", "B", 3.0)
            .build()
            .unwrap();
        assert_eq!(m.entry("A", "B"), Some(3.0));
    }

    #[test]
    fn builder_rejects_duplicates_and_empty() {
        assert_eq!(
            ComparisonMatrix::builder().build().unwrap_err(),
            ValidationError::EmptyMatrix
        );
        assert!(matches!(
            ComparisonMatrix::builder().items(vec!["A", "A"]).build(),
            Err(ValidationError::DuplicateItem { .. })
        ));
    }

    #[test]
    fn single_item_matrix_needs_no_judgments() {
        let m = ComparisonMatrix::builder().items(vec!["Only"]).build().unwrap();
        assert_eq!(m.dimension(), 1);
        assert_eq!(m.get(0, 0), Some(1.0));
    }

    #[test]
    fn equal_matrix_is_all_ones() {
        let m = ComparisonMatrix::equal(vec!["A", "B", "C"]).unwrap();
        assert!(m.rows().iter().flatten().all(|&v| v == 1.0));
    }

    #[test]
    fn judge_scale_uses_saaty_value() {
        let m = ComparisonMatrix::builder()
            .judge_scale("A", "B", SaatyScale::VeryStrong)
            .build()
            .unwrap();
        assert_eq!(m.entry("A", "B"), Some(7.0));
    }

    #[test]
    fn from_rows_accepts_reciprocal_rows() {
        let m = ComparisonMatrix::from_rows(
            vec!["A", "B"],
            vec![vec![1.0, 4.0], vec![0.25, 1.0]],
            DEFAULT_RECIPROCAL_TOLERANCE,
        )
        .unwrap();
        assert_eq!(m.rows(), vec![vec![1.0, 4.0], vec![0.25, 1.0]]);
    }

    #[test]
    fn from_rows_rejects_non_square() {
        let ragged = ComparisonMatrix::from_rows(
            vec!["A", "B"],
            vec![vec![1.0, 4.0], vec![0.25]],
            DEFAULT_RECIPROCAL_TOLERANCE,
        );
        assert_eq!(
            ragged.unwrap_err(),
            ValidationError::NotSquare { rows: 2, columns: 1 }
        );

        let short = ComparisonMatrix::from_rows(
            vec!["A", "B"],
            vec![vec![1.0, 4.0]],
            DEFAULT_RECIPROCAL_TOLERANCE,
        );
        assert_eq!(
            short.unwrap_err(),
            ValidationError::NotSquare { rows: 1, columns: 2 }
        );
    }

    #[test]
    fn from_rows_rejects_broken_reciprocity() {
        let result = ComparisonMatrix::from_rows(
            vec!["A", "B"],
            vec![vec![1.0, 4.0], vec![0.5, 1.0]],
            DEFAULT_RECIPROCAL_TOLERANCE,
        );
        assert!(matches!(
            result,
            Err(ValidationError::ReciprocalMismatch { .. })
        ));
    }

    #[test]
    fn from_rows_rejects_near_unit_diagonal() {
        let result = ComparisonMatrix::from_rows(
            vec!["A", "B", "C"],
            vec![
                vec![1.009, 2.0, 4.0],
                vec![0.5, 1.0, 2.0],
                vec![0.25, 0.5, 1.0],
            ],
            DEFAULT_RECIPROCAL_TOLERANCE,
        );
        assert_eq!(
            result.unwrap_err(),
            ValidationError::DiagonalNotUnity {
                item: "A".to_string(),
                value: 1.009,
            }
        );
    }

    #[test]
    fn multiply_applies_rows() {
        let m = three_by_three();
        let product = m.multiply(&[1.0, 1.0, 1.0]);
        assert!((product[0] - 9.0).abs() < 1e-12);
        assert!((product[2] - 1.7).abs() < 1e-12);
    }

    #[test]
    fn accessors_return_none_out_of_bounds() {
        let m = three_by_three();
        assert!(m.get(3, 0).is_none());
        assert!(m.row(5).is_none());
        assert!(m.entry("A", "Z").is_none());
        assert_eq!(m.row(0), Some(&[1.0, 3.0, 5.0][..]));
    }
}
