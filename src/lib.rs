//! A minimal linear algebra library for small, runtime-sized problems.
//!
//! # Motivation
//!
//! Applications sometimes need to pass a handful of dense vectors and matrices
//! around their public APIs without committing to a full linear algebra stack.
//! This library was created to accommodate that use case.
//!
//! Existing Rust libraries have properties that make them unsuitable for it:
//!
//! - Some of them aim for maximum flexibility, and pay the complexity cost
//!   associated with that. Exposing such types in a small application's API
//!   makes the application unnecessarily difficult to use.
//! - Many libraries still see frequent breaking changes, which causes churn
//!   for every dependant that exposes their types.
//! - Libraries built for computer graphics fix vector and matrix sizes at
//!   compile time, which does not fit workloads whose dimensions are only
//!   known at runtime.
//!
//! # Goals & Non-Goals
//!
//! - Support *dynamically-sized* vectors and matrices with [`f32`] elements,
//!   and nothing else. Not being generic over element type or size keeps the
//!   API surface small.
//! - Pure value semantics: every operation returns a newly constructed value
//!   and never mutates its operands. Copies are always deep.
//! - Operations never fail. The legacy-compatible methods ([`Vector::add`],
//!   [`Matrix::multiply`], …) handle dimension mismatches by degrading (and
//!   reporting the mismatch through [`log`]); the `try_*` variants return a
//!   [`DimensionError`] instead for callers that want strict rejection.
//! - No sparse storage, no decompositions, no SIMD, no parallelism.

mod error;
mod matrix;
mod vector;

pub use error::*;
pub use matrix::*;
pub use vector::*;
