use nalgebra::DVector;

use crate::basis::value;
use crate::domain::{num_spline_bases, support_of, BasisIndex, Extrapolation};

/// `order`-th derivative of one basis function at a single point.
pub fn derivative(
    x: f64,
    knots: &[f64],
    degree: usize,
    order: usize,
    idx: impl Into<BasisIndex>,
    extrapolation: Extrapolation,
) -> f64 {
    batch_derivative(&[x], knots, degree, order, idx, extrapolation)[0]
}

/// `order`-th derivative of basis `idx` at every point of `x`.
///
/// Order zero gives the basis values and any order above `degree` gives
/// zeros. At knots the derivative is one-sided, following the same
/// half-open convention as the degree zero bases.
pub fn batch_derivative(
    x: &[f64],
    knots: &[f64],
    degree: usize,
    order: usize,
    idx: impl Into<BasisIndex>,
    extrapolation: Extrapolation,
) -> DVector<f64> {
    let idx = idx.into().resolve(num_spline_bases(knots, degree));
    DVector::from_iterator(
        x.len(),
        x.iter()
            .map(|&x| derivative_value(x, knots, degree, order, idx, extrapolation)),
    )
}

pub(crate) fn derivative_value(
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
    if order > degree {
        return 0.0;
    }

    let last = num_spline_bases(knots, degree) - 1;
    let k = order as f64;

    let rising = if idx == 0 {
        0.0
    } else {
        let b = support_of(knots, degree - 1, idx - 1, Extrapolation::NONE);
        let slope = 1.0 / (b.ub - b.lb);
        slope * (x - b.lb) * derivative_value(x, knots, degree - 1, order, idx - 1, extrapolation)
            + k * slope * derivative_value(x, knots, degree - 1, order - 1, idx - 1, extrapolation)
    };

    let falling = if idx == last {
        0.0
    } else {
        let b = support_of(knots, degree - 1, idx, Extrapolation::NONE);
        let slope = 1.0 / (b.lb - b.ub);
        slope * (x - b.ub) * derivative_value(x, knots, degree - 1, order, idx, extrapolation)
            + k * slope * derivative_value(x, knots, degree - 1, order - 1, idx, extrapolation)
    };

    rising + falling
}
