//! Unified error types for the Longan library.
//!
//! This module provides a unified error type that encompasses shape
//! validation, value validation, and sink I/O failures, presenting a
//! consistent API to users.
use thiserror::Error;

/// Shape violations detected when validating a matrix view.
///
/// A matrix must have at least one row, at least one column, and every row
/// must carry the same number of columns.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The matrix has no rows
    #[error("matrix has zero rows")]
    ZeroRows,

    /// The matrix has rows but no columns
    #[error("matrix has zero columns")]
    ZeroColumns,

    /// A row's length differs from the column count of the first row
    #[error("ragged matrix: row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The input matrix is empty or not rectangular
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// An element cannot be rounded or rendered as a plain decimal
    #[error("element at ({row}, {col}) is not a finite number: {value}")]
    NonFinite { row: usize, col: usize, value: f64 },

    /// Writing into the output buffer failed
    #[error("format error: {0}")]
    Format(String),

    /// A display sink failed to accept the rendered fragment
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_display() {
        assert_eq!(ShapeError::ZeroRows.to_string(), "matrix has zero rows");
        assert_eq!(
            ShapeError::Ragged {
                row: 1,
                expected: 3,
                got: 2
            }
            .to_string(),
            "ragged matrix: row 1 has 2 columns, expected 3"
        );
    }

    #[test]
    fn test_shape_error_converts_into_error() {
        let err: Error = ShapeError::ZeroColumns.into();
        assert!(matches!(err, Error::Shape(ShapeError::ZeroColumns)));
    }

    #[test]
    fn test_non_finite_display_names_position() {
        let err = Error::NonFinite {
            row: 0,
            col: 2,
            value: f64::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("(0, 2)"));
        assert!(msg.contains("NaN"));
    }
}
