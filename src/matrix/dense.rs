// Dense row-major matrix storage
//
// Owned, always-rectangular storage used as the crate's canonical matrix
// type. Constructors validate shape up front so a `DenseMatrix` can be
// rendered without re-checking rectangularity.

use super::MatrixView;
use crate::error::{Error, Result, ShapeError};

/// Owned, row-major, rectangular matrix of `f64` values.
///
/// Unlike nested vectors, a `DenseMatrix` is rectangular by construction:
/// its constructors reject empty and ragged input, so every instance
/// satisfies the shape invariant the renderer relies on.
///
/// # Examples
///
/// ```rust
/// use longan::DenseMatrix;
///
/// let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(1, 0), 3.0);
/// # Ok::<(), longan::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    /// Element storage in row-major order, length `rows * cols`
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl DenseMatrix {
    /// Build a matrix from nested rows.
    ///
    /// Fails with [`ShapeError`] if there are no rows, no columns, or any
    /// row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let (row_count, col_count) = super::validate_shape(&rows)?;

        let mut data = Vec::with_capacity(row_count * col_count);
        for row in &rows {
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: row_count,
            cols: col_count,
        })
    }

    /// Build a matrix from a flat row-major buffer and an explicit shape.
    ///
    /// Fails with [`ShapeError`] if either dimension is zero or the buffer
    /// length does not equal `rows * cols`.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(Error::Shape(ShapeError::ZeroRows));
        }
        if cols == 0 {
            return Err(Error::Shape(ShapeError::ZeroColumns));
        }
        if data.len() != rows * cols {
            // The flat buffer cannot fill the last declared row
            return Err(Error::Shape(ShapeError::Ragged {
                row: data.len() / cols,
                expected: cols,
                got: data.len() - (data.len() / cols) * cols,
            }));
        }

        Ok(Self { data, rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The `(rows, cols)` shape.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// One row as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.rows()`.
    #[inline]
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.cols;
        &self.data[start..start + self.cols]
    }

    /// The full row-major element buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl MatrixView for DenseMatrix {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn row(&self, index: usize) -> &[f64] {
        DenseMatrix::row(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_copies_row_major() {
        let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::Shape(ShapeError::Ragged {
                row: 1,
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(matches!(
            DenseMatrix::from_rows(vec![]).unwrap_err(),
            Error::Shape(ShapeError::ZeroRows)
        ));
        assert!(matches!(
            DenseMatrix::from_rows(vec![vec![]]).unwrap_err(),
            Error::Shape(ShapeError::ZeroColumns)
        ));
    }

    #[test]
    fn test_from_vec_checks_length() {
        let m = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);

        assert!(matches!(
            DenseMatrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2).unwrap_err(),
            Error::Shape(ShapeError::Ragged { .. })
        ));
        assert!(matches!(
            DenseMatrix::from_vec(vec![], 0, 3).unwrap_err(),
            Error::Shape(ShapeError::ZeroRows)
        ));
    }

    #[test]
    fn test_dense_matrix_is_a_view() {
        let m = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(crate::matrix::validate_shape(&m), Ok((2, 2)));
    }
}
