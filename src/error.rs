//! Dimension-mismatch errors.

use thiserror::Error;

/// The error returned by the checked (`try_*`) operations.
///
/// Dimension mismatch is the only failure class in this library. Each variant
/// names one site where operand shapes can be incompatible and carries the
/// offending dimensions.
///
/// # Examples
///
/// ```
/// use linalite::{DimensionError, Vector};
///
/// let u = Vector::from_slice(&[1.0, 2.0]);
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(u.try_dot(&v), Err(DimensionError::VectorLength { lhs: 2, rhs: 3 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// Vector operands of an element-wise operation have different lengths.
    #[error("vector dimensions do not match: {lhs} vs {rhs}")]
    VectorLength { lhs: usize, rhs: usize },

    /// Matrix operands of an element-wise operation have different shapes.
    #[error("matrix dimensions do not match: {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    MatrixShape {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// Column count of the left matrix does not equal the row count of the right.
    #[error("cannot multiply {lhs_rows}x{lhs_cols} by {rhs_rows}x{rhs_cols}")]
    MatrixProduct {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// Matrix column count does not equal the vector's length.
    #[error("cannot multiply {rows}x{cols} matrix by {dimensions}-dimensional vector")]
    MatrixVectorProduct {
        rows: usize,
        cols: usize,
        dimensions: usize,
    },

    /// Raw element count does not match the requested matrix shape.
    #[error("matrix data length {actual} does not match shape {rows}x{cols}")]
    ElementCount {
        rows: usize,
        cols: usize,
        actual: usize,
    },
}

/// Convenience alias for `Result<T, DimensionError>`.
pub type Result<T> = std::result::Result<T, DimensionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = DimensionError::VectorLength { lhs: 2, rhs: 3 };
        assert_eq!(err.to_string(), "vector dimensions do not match: 2 vs 3");

        let err = DimensionError::MatrixProduct {
            lhs_rows: 2,
            lhs_cols: 3,
            rhs_rows: 2,
            rhs_cols: 3,
        };
        assert_eq!(err.to_string(), "cannot multiply 2x3 by 2x3");

        let err = DimensionError::MatrixVectorProduct {
            rows: 2,
            cols: 2,
            dimensions: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot multiply 2x2 matrix by 3-dimensional vector"
        );
    }
}
