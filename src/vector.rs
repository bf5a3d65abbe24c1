use std::{fmt, slice};

use crate::{DimensionError, Result};

mod ops;

/// A dynamically-sized column vector with [`f32`] elements.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - [`Vector::empty`] creates a vector with no elements (and no backing
///   allocation).
/// - [`Vector::zeros`] creates a vector of the given length with every
///   element set to 0.
/// - [`Vector::from_slice`] copies a slice, and the [`From`] impls convert
///   from arrays and `Vec<f32>` without copying in the latter case.
/// - [`Vector`] also implements [`FromIterator`], so iterators of `f32` can
///   be `collect`ed into it.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on slices,
///   and panic when out of bounds. [`Vector::get`] and [`Vector::get_mut`]
///   return [`Option`]s instead.
/// - [`Vector::as_slice`] and [`Vector::as_mut_slice`] expose the elements
///   as a plain slice.
///
/// # Arithmetic
///
/// All arithmetic methods are pure: the operands are read but never
/// modified, and the result is a newly constructed value. The methods taking
/// another [`Vector`] come in two flavors:
///
/// - The plain methods ([`add`], [`sub`], [`dot`]) are *total*. When operand
///   lengths disagree they report the mismatch through [`log::error!`] and
///   produce a best-effort result (see each method for the exact policy).
/// - The checked methods ([`try_add`], [`try_sub`], [`try_dot`]) reject
///   mismatched lengths with a [`DimensionError`] and perform the same math
///   otherwise.
///
/// The `+`, `-`, `*` operators are thin bindings to the plain methods.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`add`]: Vector::add
/// [`sub`]: Vector::sub
/// [`dot`]: Vector::dot
/// [`try_add`]: Vector::try_add
/// [`try_sub`]: Vector::try_sub
/// [`try_dot`]: Vector::try_dot
pub struct Vector(Vec<f32>);

impl Vector {
    /// Creates a vector with no elements.
    ///
    /// This does not allocate. It is also what [`Matrix::mul_vector`] returns
    /// when the operand dimensions are incompatible.
    ///
    /// [`Matrix::mul_vector`]: crate::Matrix::mul_vector
    #[inline]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates a vector of length `dimensions` with every element set to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let v = Vector::zeros(3);
    /// assert_eq!(v, [0.0, 0.0, 0.0]);
    /// ```
    pub fn zeros(dimensions: usize) -> Self {
        Self(vec![0.0; dimensions])
    }

    /// Creates a vector by copying the elements of a slice.
    pub fn from_slice(elems: &[f32]) -> Self {
        Self(elems.to_vec())
    }

    /// Returns the number of elements.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of
    /// bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&f32> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if
    /// out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut f32> {
        self.0.get_mut(index)
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, f32> {
        self.0.iter()
    }

    /// Element-wise sum of `self` and `other`.
    ///
    /// The result always has `self.dimensions()` elements. When `other` has a
    /// different length, the mismatch is reported through [`log::error!`] and
    /// only the overlapping elements are summed; positions past the end of
    /// `other` carry `self`'s elements unchanged. Use [`Vector::try_add`] to
    /// reject mismatched lengths instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let v = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(u.add(&v), [5.0, 7.0, 9.0]);
    /// ```
    pub fn add(&self, other: &Vector) -> Vector {
        if self.dimensions() != other.dimensions() {
            log::error!(
                "vector dimensions do not match ({} vs {}); result will have {} elements",
                self.dimensions(),
                other.dimensions(),
                self.dimensions(),
            );
        }

        let mut out = self.clone();
        for (lhs, rhs) in out.0.iter_mut().zip(&other.0) {
            *lhs += rhs;
        }
        out
    }

    /// Element-wise difference of `self` and `other`.
    ///
    /// Mismatched lengths are handled exactly like in [`Vector::add`].
    pub fn sub(&self, other: &Vector) -> Vector {
        if self.dimensions() != other.dimensions() {
            log::error!(
                "vector dimensions do not match ({} vs {}); result will have {} elements",
                self.dimensions(),
                other.dimensions(),
                self.dimensions(),
            );
        }

        let mut out = self.clone();
        for (lhs, rhs) in out.0.iter_mut().zip(&other.0) {
            *lhs -= rhs;
        }
        out
    }

    /// Adds `scalar` to every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let v = Vector::from_slice(&[1.0, 2.0]);
    /// assert_eq!(v.add_scalar(1.0), [2.0, 3.0]);
    /// ```
    pub fn add_scalar(&self, scalar: f32) -> Vector {
        Self(self.0.iter().map(|elem| elem + scalar).collect())
    }

    /// Subtracts `scalar` from every element.
    pub fn sub_scalar(&self, scalar: f32) -> Vector {
        Self(self.0.iter().map(|elem| elem - scalar).collect())
    }

    /// Element-wise sign inversion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let v = Vector::from_slice(&[1.0, -2.0]);
    /// assert_eq!(v.negate(), [-1.0, 2.0]);
    /// ```
    pub fn negate(&self) -> Vector {
        Self(self.0.iter().map(|elem| -elem).collect())
    }

    /// Multiplies every element by `scalar`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let v = Vector::from_slice(&[1.0, 2.0]);
    /// assert_eq!(v.scale(2.0), [2.0, 4.0]);
    /// ```
    pub fn scale(&self, scalar: f32) -> Vector {
        Self(self.0.iter().map(|elem| elem * scalar).collect())
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// When the lengths disagree, the mismatch is reported through
    /// [`log::error!`] and the computation is truncated to the shorter
    /// operand. Use [`Vector::try_dot`] to reject mismatched lengths instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let v = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(u.dot(&v), 32.0);
    /// ```
    pub fn dot(&self, other: &Vector) -> f32 {
        if self.dimensions() != other.dimensions() {
            log::error!(
                "vector dimensions do not match ({} vs {}); truncating dot product to {} elements",
                self.dimensions(),
                other.dimensions(),
                self.dimensions().min(other.dimensions()),
            );
        }

        self.0
            .iter()
            .zip(&other.0)
            .fold(0.0, |acc, (lhs, rhs)| acc + lhs * rhs)
    }

    /// Checked element-wise sum; errors when the lengths disagree.
    pub fn try_add(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(self.add(other))
    }

    /// Checked element-wise difference; errors when the lengths disagree.
    pub fn try_sub(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(self.sub(other))
    }

    /// Checked dot product; errors when the lengths disagree.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(u.try_dot(&u), Ok(14.0));
    /// assert!(u.try_dot(&Vector::zeros(2)).is_err());
    /// ```
    pub fn try_dot(&self, other: &Vector) -> Result<f32> {
        self.check_len(other)?;
        Ok(self.dot(other))
    }

    /// Returns the squared length of this vector.
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linalite::*;
    /// let v = Vector::from_slice(&[3.0, 4.0]);
    /// assert_eq!(v.norm(), 5.0);
    /// ```
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(DimensionError::VectorLength {
                lhs: self.dimensions(),
                rhs: other.dimensions(),
            });
        }
        Ok(())
    }
}

impl Clone for Vector {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    /// Reuses `self`'s existing allocation when it can hold `source`.
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}

/// Equivalent to [`Vector::empty`].
impl Default for Vector {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<f32>> for Vector {
    #[inline]
    fn from(elems: Vec<f32>) -> Self {
        Self(elems)
    }
}

impl From<&[f32]> for Vector {
    fn from(elems: &[f32]) -> Self {
        Self::from_slice(elems)
    }
}

impl<const N: usize> From<[f32; N]> for Vector {
    fn from(elems: [f32; N]) -> Self {
        Self(elems.to_vec())
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f32;
    type IntoIter = slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
