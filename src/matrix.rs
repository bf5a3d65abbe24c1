use std::fmt;

use crate::{DimensionError, Result, Vector};

mod ops;

/// The fill pattern understood by [`Matrix::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    /// Every element is 0.
    Zero,
    /// 1 on the main diagonal, 0 everywhere else.
    ///
    /// For non-square dimensions, only the diagonal cells that lie inside
    /// both bounds receive a 1.
    Identity,
}

/// A dynamically-sized matrix with [`f32`] elements.
///
/// Elements are stored in a single contiguous, row-major buffer of
/// `rows * cols` values. The 0×0 *empty* matrix has no backing storage; it is
/// also what [`Matrix::multiply`] returns when the operand shapes are
/// incompatible.
///
/// # Construction
///
/// - [`Matrix::empty`] creates the 0×0 matrix.
/// - [`Matrix::new`] creates a matrix of the given shape filled according to
///   a [`MatrixKind`]; [`Matrix::zeros`] and [`Matrix::identity`] are
///   conveniences for the two kinds.
/// - [`Matrix::from_rows`] copies a 2-D array literal.
/// - [`Matrix::from_vec`] takes a row-major element buffer and checks it
///   against the requested shape.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(usize, usize)`
/// tuples. The first element of the tuple is the *row*, the second is the
/// *column*, matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use linalite::*;
/// let mut mat = Matrix::from_rows([[0.0, 1.0]]);
/// mat[(0, 0)] = 4.0;
/// assert_eq!(mat[(0, 0)], 4.0);
/// assert_eq!(mat[(0, 1)], 1.0);
/// ```
///
/// Indexing out of bounds panics, just like it does for slices;
/// [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s instead.
///
/// # Arithmetic
///
/// Like [`Vector`], every operation is pure and the methods combining two
/// values come in a lenient and a checked flavor. The lenient methods are
/// total and degrade on mismatched shapes — but *not* uniformly:
///
/// - [`add`] and [`sub`] truncate to the overlapping region,
/// - [`multiply`] and [`mul_vector`] have no meaningful partial result, so
///   they return the canonical empty value instead.
///
/// Both policies report the mismatch through [`log::error!`]. The `try_*`
/// variants reject mismatches with a [`DimensionError`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`add`]: Matrix::add
/// [`sub`]: Matrix::sub
/// [`multiply`]: Matrix::multiply
/// [`mul_vector`]: Matrix::mul_vector
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Creates the empty 0×0 matrix.
    ///
    /// This does not allocate.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Creates a `rows`×`cols` matrix filled according to `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let id = Matrix::new(2, 2, MatrixKind::Identity);
    /// assert_eq!(id, Matrix::from_rows([
    ///     [1.0, 0.0],
    ///     [0.0, 1.0],
    /// ]));
    /// ```
    pub fn new(rows: usize, cols: usize, kind: MatrixKind) -> Self {
        let mut data = vec![0.0; rows * cols];
        if kind == MatrixKind::Identity {
            for i in 0..rows.min(cols) {
                data[i * cols + i] = 1.0;
            }
        }
        Self { rows, cols, data }
    }

    /// Creates a `rows`×`cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, MatrixKind::Zero)
    }

    /// Creates the `n`×`n` identity matrix.
    ///
    /// Multiplying any matrix or vector with it returns the operand
    /// unchanged.
    pub fn identity(n: usize) -> Self {
        Self::new(n, n, MatrixKind::Identity)
    }

    /// Creates a matrix by copying an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    /// ]);
    /// assert_eq!(mat.shape(), (2, 3));
    /// assert_eq!(mat[(1, 2)], 6.0);
    /// ```
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f32; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Creates a matrix from a row-major element buffer.
    ///
    /// Errors when `data.len()` does not equal `rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let mat = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(mat[(1, 0)], 3.0);
    ///
    /// assert!(Matrix::from_vec(2, 2, vec![1.0]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(DimensionError::ElementCount {
                rows,
                cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as a `(rows, cols)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns `true` if this matrix has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out
    /// of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&f32> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f32> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns the elements as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Copies row `row` into a [`Vector`] of length `self.cols()`.
    ///
    /// # Panics
    ///
    /// Panics when `row >= self.rows()`.
    pub fn row(&self, row: usize) -> Vector {
        Vector::from_slice(self.row_slice(row))
    }

    /// Copies column `col` into a [`Vector`] of length `self.rows()`.
    ///
    /// # Panics
    ///
    /// Panics when `col >= self.cols()`.
    pub fn column(&self, col: usize) -> Vector {
        assert!(col < self.cols, "column index {col} out of bounds");
        (0..self.rows).map(|row| self.data[row * self.cols + col]).collect()
    }

    /// Element-wise sum of `self` and `other`.
    ///
    /// The result has shape `(min(rows), min(cols))`. When the shapes
    /// disagree, the mismatch is reported through [`log::error!`] and only
    /// the overlapping region is summed. Use [`Matrix::try_add`] to reject
    /// mismatched shapes instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::from_rows([[0.5, 0.5], [0.5, 0.5]]);
    /// assert_eq!(a.add(&b), Matrix::from_rows([[1.5, 2.5], [3.5, 4.5]]));
    /// ```
    pub fn add(&self, other: &Matrix) -> Matrix {
        self.zip_with(other, |lhs, rhs| lhs + rhs)
    }

    /// Element-wise difference of `self` and `other`.
    ///
    /// Mismatched shapes are handled exactly like in [`Matrix::add`].
    pub fn sub(&self, other: &Matrix) -> Matrix {
        self.zip_with(other, |lhs, rhs| lhs - rhs)
    }

    fn zip_with(&self, other: &Matrix, op: impl Fn(f32, f32) -> f32) -> Matrix {
        let rows = self.rows.min(other.rows);
        let cols = self.cols.min(other.cols);
        if self.shape() != other.shape() {
            log::error!(
                "matrix dimensions do not match ({}x{} vs {}x{}); result will be {}x{}",
                self.rows,
                self.cols,
                other.rows,
                other.cols,
                rows,
                cols,
            );
        }

        let mut out = Matrix::zeros(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                out.data[r * cols + c] =
                    op(self.data[r * self.cols + c], other.data[r * other.cols + c]);
            }
        }
        out
    }

    /// Standard matrix product of `self` and `other`.
    ///
    /// Requires `self.cols() == other.rows()`; the result has shape
    /// `(self.rows(), other.cols())`. A mismatch is reported through
    /// [`log::error!`] and yields the [empty] matrix — there is no meaningful
    /// partial product, so unlike [`Matrix::add`] this does not truncate. Use
    /// [`Matrix::try_multiply`] to reject mismatches instead.
    ///
    /// [empty]: Matrix::empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let a = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(Matrix::identity(2).multiply(&a), a);
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        if self.cols != other.rows {
            log::error!(
                "cannot multiply {}x{} by {}x{}; returning an empty matrix",
                self.rows,
                self.cols,
                other.rows,
                other.cols,
            );
            return Matrix::empty();
        }

        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * out.cols + j] = acc;
            }
        }
        out
    }

    /// Matrix-Vector product of `self` and `vector`.
    ///
    /// Requires `self.cols() == vector.dimensions()`; the result has
    /// `self.rows()` elements, where `result[i]` is the dot product of row
    /// `i` with `vector`. A mismatch is reported through [`log::error!`] and
    /// yields the [empty] vector. Use [`Matrix::try_mul_vector`] to reject
    /// mismatches instead.
    ///
    /// [empty]: Vector::empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// let v = Vector::from_slice(&[1.0, 0.0]);
    /// assert_eq!(mat.mul_vector(&v), [1.0, 3.0]);
    /// ```
    pub fn mul_vector(&self, vector: &Vector) -> Vector {
        if self.cols != vector.dimensions() {
            log::error!(
                "cannot multiply {}x{} matrix by {}-dimensional vector; returning an empty vector",
                self.rows,
                self.cols,
                vector.dimensions(),
            );
            return Vector::empty();
        }

        (0..self.rows)
            .map(|row| {
                self.row_slice(row)
                    .iter()
                    .zip(vector.as_slice())
                    .fold(0.0, |acc, (lhs, rhs)| acc + lhs * rhs)
            })
            .collect()
    }

    /// Checked element-wise sum; errors when the shapes disagree.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_shape(other)?;
        Ok(self.add(other))
    }

    /// Checked element-wise difference; errors when the shapes disagree.
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix> {
        self.check_shape(other)?;
        Ok(self.sub(other))
    }

    /// Checked matrix product; errors when `self.cols() != other.rows()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let a = Matrix::zeros(2, 3);
    /// assert!(a.try_multiply(&Matrix::zeros(3, 1)).is_ok());
    /// assert!(a.try_multiply(&a).is_err());
    /// ```
    pub fn try_multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(DimensionError::MatrixProduct {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        Ok(self.multiply(other))
    }

    /// Checked matrix-vector product; errors when
    /// `self.cols() != vector.dimensions()`.
    pub fn try_mul_vector(&self, vector: &Vector) -> Result<Vector> {
        if self.cols != vector.dimensions() {
            return Err(DimensionError::MatrixVectorProduct {
                rows: self.rows,
                cols: self.cols,
                dimensions: vector.dimensions(),
            });
        }
        Ok(self.mul_vector(vector))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let mat = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1.0, 4.0],
    ///     [2.0, 5.0],
    ///     [3.0, 6.0],
    /// ]));
    /// ```
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.data[c * out.cols + r] = self.data[r * self.cols + c];
            }
        }
        out
    }

    /// Multiplies every element by `scalar`.
    pub fn scale(&self, scalar: f32) -> Matrix {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|elem| elem * scalar).collect(),
        }
    }

    fn row_slice(&self, row: usize) -> &[f32] {
        assert!(row < self.rows, "row index {row} out of bounds");
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    fn check_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(DimensionError::MatrixShape {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        Ok(())
    }
}

impl Clone for Matrix {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.clone(),
        }
    }

    /// Reuses `self`'s existing allocation when it can hold `source`.
    fn clone_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.cols = source.cols;
        self.data.clone_from(&source.data);
    }
}

/// Equivalent to [`Matrix::empty`].
impl Default for Matrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a>(&'a Matrix, usize);
        impl fmt::Debug for FormatRow<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..self.0.cols {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..self.rows {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let zero = Matrix::new(2, 2, MatrixKind::Zero);
        assert!(zero.as_slice().iter().all(|&elem| elem == 0.0));

        let id = Matrix::identity(3);
        assert_eq!(id, Matrix::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]));
    }

    #[test]
    fn non_square_identity() {
        // Only diagonal cells inside both bounds receive a 1.
        let id = Matrix::new(2, 3, MatrixKind::Identity);
        assert_eq!(id, Matrix::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ]));

        let id = Matrix::new(3, 2, MatrixKind::Identity);
        assert_eq!(id, Matrix::from_rows([
            [1.0, 0.0],
            [0.0, 1.0],
            [0.0, 0.0],
        ]));
    }

    #[test]
    fn from_vec_checks_length() {
        let mat = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(mat.shape(), (2, 3));
        assert_eq!(mat[(1, 0)], 4.0);

        assert_eq!(
            Matrix::from_vec(2, 3, vec![1.0, 2.0]),
            Err(DimensionError::ElementCount {
                rows: 2,
                cols: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn accessors() {
        let mut mat = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.cols(), 2);
        assert_eq!(mat.get(1, 1), Some(&4.0));
        assert_eq!(mat.get(2, 0), None);
        assert_eq!(mat.get(0, 2), None);

        *mat.get_mut(0, 1).unwrap() = 9.0;
        assert_eq!(mat.row(0), [1.0, 9.0]);
        assert_eq!(mat.column(0), [1.0, 3.0]);
    }

    #[test]
    fn multiply_known_values() {
        let a = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);
        let b = Matrix::from_rows([
            [7.0, 8.0],
            [9.0, 10.0],
            [11.0, 12.0],
        ]);
        assert_eq!(a.multiply(&b), Matrix::from_rows([
            [58.0, 64.0],
            [139.0, 154.0],
        ]));
    }

    #[test]
    fn multiply_mismatch_degrades_to_empty() {
        let a = Matrix::new(2, 3, MatrixKind::Zero);
        let degraded = a.multiply(&a);
        assert_eq!(degraded.shape(), (0, 0));
        assert!(degraded.is_empty());

        assert_eq!(
            a.try_multiply(&a),
            Err(DimensionError::MatrixProduct {
                lhs_rows: 2,
                lhs_cols: 3,
                rhs_rows: 2,
                rhs_cols: 3,
            })
        );
    }

    #[test]
    fn mul_vector_known_values() {
        let mat = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let v = Vector::from_slice(&[1.0, 0.0]);
        assert_eq!(mat.mul_vector(&v), [1.0, 3.0]);
        assert_eq!(mat.try_mul_vector(&v).unwrap(), [1.0, 3.0]);
    }

    #[test]
    fn mul_vector_mismatch_degrades_to_empty() {
        let mat = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert!(mat.mul_vector(&v).is_empty());
        assert_eq!(
            mat.try_mul_vector(&v),
            Err(DimensionError::MatrixVectorProduct {
                rows: 2,
                cols: 2,
                dimensions: 3,
            })
        );
    }

    #[test]
    fn mismatched_add_truncates() {
        let a = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);
        let b = Matrix::from_rows([
            [10.0, 20.0],
            [30.0, 40.0],
            [50.0, 60.0],
        ]);
        assert_eq!(a.add(&b), Matrix::from_rows([
            [11.0, 22.0],
            [34.0, 45.0],
        ]));
        assert_eq!(b.sub(&a), Matrix::from_rows([
            [9.0, 18.0],
            [26.0, 35.0],
        ]));

        assert_eq!(
            a.try_add(&b),
            Err(DimensionError::MatrixShape {
                lhs_rows: 2,
                lhs_cols: 3,
                rhs_rows: 3,
                rhs_cols: 2,
            })
        );
    }

    #[test]
    fn transpose_round_trip() {
        let mat = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);
        assert_eq!(mat.transpose().shape(), (3, 2));
        assert_eq!(mat.transpose().transpose(), mat);
    }

    #[test]
    fn scale() {
        let mat = Matrix::from_rows([[1.0, -2.0]]);
        assert_eq!(mat.scale(2.0), Matrix::from_rows([[2.0, -4.0]]));
    }

    #[test]
    fn clone_reuses_allocation() {
        let source = Matrix::from_rows([[1.0, 2.0]]);
        let mut dest = Matrix::zeros(2, 4);
        let ptr = dest.as_slice().as_ptr();

        dest.clone_from(&source);
        assert_eq!(dest, source);
        assert_eq!(dest.as_slice().as_ptr(), ptr);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0.0, 1.0], [2.0, 3.0]]");

        // `#` modifier prints each row on its own line, but not each
        // individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0.0, 1.0],
    [2.0, 3.0],
]
"
            .trim()
        );

        assert_eq!(format!("{:?}", Matrix::empty()), "[]");
    }
}
