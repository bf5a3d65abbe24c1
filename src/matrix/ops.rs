//! Implementations of `std::ops` and comparison traits.
//!
//! Like for [`Vector`], the arithmetic semantics live in the named methods on
//! [`Matrix`]; the operator impls are thin bindings.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Vector};

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.get(row, col) {
            Some(elem) => elem,
            None => panic!(
                "index ({}, {}) out of bounds for {}x{} matrix",
                row,
                col,
                self.rows(),
                self.cols(),
            ),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let (rows, cols) = self.shape();
        match self.get_mut(row, col) {
            Some(elem) => elem,
            None => panic!("index ({row}, {col}) out of bounds for {rows}x{cols} matrix"),
        }
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.shape() == other.shape() && self.as_slice() == other.as_slice()
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.shape() == other.shape() && self.as_slice().abs_diff_eq(other.as_slice(), epsilon)
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.shape() == other.shape()
            && self.as_slice().relative_eq(other.as_slice(), epsilon, max_relative)
    }
}

impl UlpsEq for Matrix {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self.as_slice().ulps_eq(other.as_slice(), epsilon, max_ulps)
    }
}

/// Element-wise addition.
impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        Matrix::add(self, rhs)
    }
}

/// Element-wise addition.
impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        Matrix::add(&self, &rhs)
    }
}

/// Element-wise subtraction.
impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        Matrix::sub(self, rhs)
    }
}

/// Element-wise subtraction.
impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Matrix {
        Matrix::sub(&self, &rhs)
    }
}

/// Matrix * Matrix.
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        self.multiply(rhs)
    }
}

/// Matrix * Matrix.
impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}

/// Matrix * Column Vector.
impl Mul<&Vector> for &Matrix {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        self.mul_vector(rhs)
    }
}

/// Matrix * Column Vector.
impl Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        self.mul_vector(&rhs)
    }
}

/// Matrix * Scalar.
impl Mul<f32> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f32) -> Matrix {
        self.scale(rhs)
    }
}

/// Matrix * Scalar.
impl Mul<f32> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f32) -> Matrix {
        self.scale(rhs)
    }
}
