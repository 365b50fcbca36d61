use nalgebra::DVector;

use crate::basis::value;
use crate::domain::{num_spline_bases, support_of, BasisIndex, Extrapolation};
use crate::primitives::indicator_integral;

/// Lower integration bound, either shared by every point or given per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LowerBound<'a> {
    Fixed(f64),
    PerPoint(&'a [f64]),
}

impl LowerBound<'_> {
    fn at(&self, i: usize) -> f64 {
        match self {
            LowerBound::Fixed(a) => *a,
            LowerBound::PerPoint(a) => a[i],
        }
    }
}

impl From<f64> for LowerBound<'_> {
    fn from(a: f64) -> Self {
        LowerBound::Fixed(a)
    }
}

impl<'a> From<&'a [f64]> for LowerBound<'a> {
    fn from(a: &'a [f64]) -> Self {
        LowerBound::PerPoint(a)
    }
}

/// `order`-fold repeated integral from `a` to `x` of one basis function.
/// # Example
/// ```
/// use xspline::{integral, BasisIndex, Extrapolation};
/// use assert_approx_eq::assert_approx_eq;
///
/// let knots = [0.0, 1.0, 2.0, 3.0];
///
/// // area under the hat function supported on [0, 2]
/// assert_approx_eq!(integral(0.0, 3.0, &knots, 1, 1, BasisIndex::Nth(1), Extrapolation::NONE), 1.0, 1e-12);
/// ```
pub fn integral(
    a: f64,
    x: f64,
    knots: &[f64],
    degree: usize,
    order: usize,
    idx: impl Into<BasisIndex>,
    extrapolation: Extrapolation,
) -> f64 {
    batch_integral(a, &[x], knots, degree, order, idx, extrapolation)[0]
}

/// `order`-fold repeated integral of basis `idx` from the lower bound to
/// every point of `x`. Order zero gives the basis values at `x`.
///
/// # Panics
/// When `a` is [LowerBound::PerPoint] and shorter than `x`.
pub fn batch_integral<'a>(
    a: impl Into<LowerBound<'a>>,
    x: &[f64],
    knots: &[f64],
    degree: usize,
    order: usize,
    idx: impl Into<BasisIndex>,
    extrapolation: Extrapolation,
) -> DVector<f64> {
    let a = a.into();
    let idx = idx.into().resolve(num_spline_bases(knots, degree));
    DVector::from_iterator(
        x.len(),
        x.iter().enumerate().map(|(i, &x)| {
            integral_value(a.at(i), x, knots, degree, order, idx, extrapolation)
        }),
    )
}

pub(crate) fn integral_value(
    a: f64,
    x: f64,
    knots: &[f64],
    degree: usize,
    order: usize,
    idx: usize,
    extrapolation: Extrapolation,
) -> f64 {
    if order == 0 {
        return value(x, knots, degree, idx, extrapolation);
    }
    if degree == 0 {
        return indicator_integral(a, x, order, support_of(knots, 0, idx, extrapolation));
    }

    let last = num_spline_bases(knots, degree) - 1;
    let k = order as f64;

    let rising = if idx == 0 {
        0.0
    } else {
        let b = support_of(knots, degree - 1, idx - 1, Extrapolation::NONE);
        let slope = 1.0 / (b.ub - b.lb);
        slope * (x - b.lb) * integral_value(a, x, knots, degree - 1, order, idx - 1, extrapolation)
            - k * slope * integral_value(a, x, knots, degree - 1, order + 1, idx - 1, extrapolation)
    };

    let falling = if idx == last {
        0.0
    } else {
        let b = support_of(knots, degree - 1, idx, Extrapolation::NONE);
        let slope = 1.0 / (b.lb - b.ub);
        slope * (x - b.ub) * integral_value(a, x, knots, degree - 1, order, idx, extrapolation)
            - k * slope * integral_value(a, x, knots, degree - 1, order + 1, idx, extrapolation)
    };

    rising + falling
}
