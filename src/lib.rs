//! Evaluation of X-spline basis functions: B-spline bases over a strictly
//! increasing knot sequence whose boundary bases may be extrapolated past
//! the knot span, and which may be finished by linear tails at either end.
//! Values, derivatives of any order and repeated integrals are available,
//! both as free functions over raw knots and through [Spline].
//!
//! # Example
//! ```
//! use xspline::{BasisIndex, Extrapolation, LinearTails, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let spline = Spline::new(vec![0.0, 1.0, 2.0, 3.0], 1, LinearTails::NONE).unwrap();
//!
//! assert_approx_eq!(spline.basis(0.5, BasisIndex::Nth(1), Extrapolation::NONE), 0.5, 1e-12);
//! assert_approx_eq!(spline.derivative(1.5, 1, BasisIndex::Nth(1), Extrapolation::NONE), -1.0, 1e-12);
//! assert_approx_eq!(spline.integral(0.0, 2.0, 1, BasisIndex::Nth(1), Extrapolation::NONE), 1.0, 1e-12);
//! ```

mod basis;
mod derivative;
mod domain;
mod error;
mod integral;
mod knots;
pub mod primitives;
mod spline;

pub use basis::{basis, batch_basis};
pub use derivative::{batch_derivative, derivative};
pub use domain::{domain, num_spline_bases, BasisIndex, Extrapolation, Support};
pub use error::SplineError;
pub use integral::{batch_integral, integral, LowerBound};
pub use knots::Knots;
pub use spline::{Evaluation, LinearTails, Spline};
