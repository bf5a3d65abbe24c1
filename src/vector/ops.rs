//! Implementations of `std::ops` and comparison traits.
//!
//! The arithmetic semantics live in the named methods on [`Vector`]; the
//! operator impls here are thin bindings and add nothing of their own.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl Index<usize> for Vector {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        self.0 == other.0
    }
}

impl<const N: usize> PartialEq<[f32; N]> for Vector {
    fn eq(&self, other: &[f32; N]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<Vector> for [f32; N] {
    fn eq(&self, other: &Vector) -> bool {
        *self == *other.0
    }
}

impl PartialEq<[f32]> for Vector {
    fn eq(&self, other: &[f32]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[f32]> for Vector {
    fn eq(&self, other: &&[f32]) -> bool {
        self.0 == *other
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.as_slice().relative_eq(other.as_slice(), epsilon, max_relative)
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.as_slice().ulps_eq(other.as_slice(), epsilon, max_ulps)
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

/// Element-wise addition.
impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

/// Element-wise addition.
impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(&self, &rhs)
    }
}

/// Vector-Scalar addition.
impl Add<f32> for &Vector {
    type Output = Vector;

    fn add(self, rhs: f32) -> Vector {
        self.add_scalar(rhs)
    }
}

/// Vector-Scalar addition.
impl Add<f32> for Vector {
    type Output = Vector;

    fn add(self, rhs: f32) -> Vector {
        self.add_scalar(rhs)
    }
}

/// Element-wise subtraction.
impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        Vector::sub(self, rhs)
    }
}

/// Element-wise subtraction.
impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::sub(&self, &rhs)
    }
}

/// Vector-Scalar subtraction.
impl Sub<f32> for &Vector {
    type Output = Vector;

    fn sub(self, rhs: f32) -> Vector {
        self.sub_scalar(rhs)
    }
}

/// Vector-Scalar subtraction.
impl Sub<f32> for Vector {
    type Output = Vector;

    fn sub(self, rhs: f32) -> Vector {
        self.sub_scalar(rhs)
    }
}

/// Dot product.
impl Mul for &Vector {
    type Output = f32;

    fn mul(self, rhs: &Vector) -> f32 {
        self.dot(rhs)
    }
}

/// Dot product.
impl Mul for Vector {
    type Output = f32;

    fn mul(self, rhs: Vector) -> f32 {
        self.dot(&rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f32> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        self.scale(rhs)
    }
}

// NB: no `AddAssign`/`SubAssign`/`MulAssign` impls. The only in-place
// operation this library supports is `clone_from`, which replaces the
// destination wholesale.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn operators_match_methods() {
        let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let v = Vector::from_slice(&[4.0, 5.0, 6.0]);

        assert_eq!(&u + &v, Vector::add(&u, &v));
        assert_eq!(&u - &v, Vector::sub(&u, &v));
        assert_eq!(&u * &v, u.dot(&v));
        assert_eq!(-&u, u.negate());
        assert_eq!(&u * 2.0, u.scale(2.0));
        assert_eq!(&u + 1.0, u.add_scalar(1.0));
        assert_eq!(&u - 1.0, u.sub_scalar(1.0));
    }

    #[test]
    fn slice_comparisons() {
        let v = Vector::from_slice(&[1.0, 2.0]);
        assert_eq!(v, [1.0, 2.0]);
        assert_eq!([1.0, 2.0], v);
        assert_eq!(v, *[1.0, 2.0].as_slice());
        assert_ne!(v, [1.0]);
        assert_ne!(v, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn approx_comparisons() {
        let v = Vector::from_slice(&[1.0, 2.0]);
        let w = Vector::from_slice(&[1.0 + 1e-7, 2.0]);
        assert_relative_eq!(v, w, max_relative = 1e-5);

        // Differing lengths never compare approximately equal.
        assert!(!v.relative_eq(&Vector::zeros(3), f32::EPSILON, 1e-5));
    }
}
