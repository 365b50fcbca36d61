use nalgebra::DVector;

use crate::domain::{num_spline_bases, support_of, BasisIndex, Extrapolation};
use crate::primitives::{indicator, ramp_down, ramp_up};

/// Value of one basis function at a single point.
///
/// Thin wrapper around [batch_basis] for a one-element slice.
/// # Example
/// ```
/// use xspline::{basis, BasisIndex, Extrapolation};
/// use assert_approx_eq::assert_approx_eq;
///
/// let knots = [0.0, 1.0, 2.0, 3.0];
///
/// assert_approx_eq!(basis(0.5, &knots, 1, BasisIndex::Nth(1), Extrapolation::NONE), 0.5, 1e-12);
/// assert_approx_eq!(basis(1.0, &knots, 1, BasisIndex::Nth(1), Extrapolation::NONE), 1.0, 1e-12);
/// ```
pub fn basis(
    x: f64,
    knots: &[f64],
    degree: usize,
    idx: impl Into<BasisIndex>,
    extrapolation: Extrapolation,
) -> f64 {
    batch_basis(&[x], knots, degree, idx, extrapolation)[0]
}

/// Values of basis function `idx` of degree `degree` at every point of `x`.
///
/// The first and last bases of each family are the closed-form boundary
/// bases `ramp^degree`; every other basis blends two bases of degree
/// `degree - 1`. With extrapolation, the boundary bases keep their
/// polynomial form past the knot span and may leave `[0, 1]`.
pub fn batch_basis(
    x: &[f64],
    knots: &[f64],
    degree: usize,
    idx: impl Into<BasisIndex>,
    extrapolation: Extrapolation,
) -> DVector<f64> {
    let idx = idx.into().resolve(num_spline_bases(knots, degree));
    DVector::from_iterator(
        x.len(),
        x.iter().map(|&x| value(x, knots, degree, idx, extrapolation)),
    )
}

pub(crate) fn value(
    x: f64,
    knots: &[f64],
    degree: usize,
    idx: usize,
    extrapolation: Extrapolation,
) -> f64 {
    let last = num_spline_bases(knots, degree) - 1;
    let support = support_of(knots, degree, idx, extrapolation);

    if degree == 0 {
        return indicator(x, support, true, idx == last);
    }

    if idx == 0 {
        let effective = support_of(knots, degree, idx, Extrapolation::NONE);
        return indicator(x, support, true, false) * ramp_down(x, effective).powi(degree as i32);
    }

    if idx == last {
        let effective = support_of(knots, degree, idx, Extrapolation::NONE);
        return indicator(x, support, true, true) * ramp_up(x, effective).powi(degree as i32);
    }

    let rising = value(x, knots, degree - 1, idx - 1, extrapolation)
        * ramp_up(x, support_of(knots, degree - 1, idx - 1, Extrapolation::NONE));
    let falling = value(x, knots, degree - 1, idx, extrapolation)
        * ramp_down(x, support_of(knots, degree - 1, idx, Extrapolation::NONE));

    rising + falling
}

#[cfg(test)]
pub(crate) mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::domain::domain;

    /// Strictly increasing, unevenly spaced knots.
    pub(crate) const KNOTS: [f64; 6] = [-1.0, 0.0, 0.5, 2.0, 2.25, 4.0];

    /// Random points strictly inside the knot span and away from the knots.
    pub(crate) fn sample_points(knots: &[f64], count: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let (lb, ub) = (knots[0], knots[knots.len() - 1]);
        (0..count)
            .map(|_| rng.gen_range(lb..ub))
            .filter(|x| knots.iter().all(|k| (x - k).abs() > 1e-6))
            .collect()
    }

    /// Classical Cox-de Boor recursion over the clamped knot vector, with
    /// `0/0 = 0` and a right-closed final interval.
    fn clamped_reference(x: f64, knots: &[f64], degree: usize, idx: usize) -> f64 {
        let mut t = vec![knots[0]; degree];
        t.extend_from_slice(knots);
        t.extend(std::iter::repeat(knots[knots.len() - 1]).take(degree));
        cox_de_boor(x, &t, degree, idx)
    }

    fn cox_de_boor(x: f64, t: &[f64], degree: usize, j: usize) -> f64 {
        if degree == 0 {
            let last_interval = t[j + 1] == t[t.len() - 1] && t[j] < t[j + 1];
            return if (t[j] <= x && x < t[j + 1]) || (last_interval && x == t[j + 1]) {
                1.0
            } else {
                0.0
            };
        }

        let mut result = 0.0;
        let den = t[j + degree] - t[j];
        if den > 0.0 {
            result += (x - t[j]) / den * cox_de_boor(x, t, degree - 1, j);
        }
        let den = t[j + degree + 1] - t[j + 1];
        if den > 0.0 {
            result += (t[j + degree + 1] - x) / den * cox_de_boor(x, t, degree - 1, j + 1);
        }
        result
    }

    #[test]
    fn linear_hat_on_unit_knots() {
        let eps = 1e-12;
        let knots = [0.0, 1.0, 2.0, 3.0];
        let idx = BasisIndex::Nth(1);

        assert_approx_eq!(basis(1.0, &knots, 1, idx, Extrapolation::NONE), 1.0, eps);
        assert_approx_eq!(basis(0.5, &knots, 1, idx, Extrapolation::NONE), 0.5, eps);
        assert_approx_eq!(basis(1.5, &knots, 1, idx, Extrapolation::NONE), 0.5, eps);
        assert_approx_eq!(basis(2.5, &knots, 1, idx, Extrapolation::NONE), 0.0, eps);
        assert_approx_eq!(basis(-0.5, &knots, 1, idx, Extrapolation::NONE), 0.0, eps);
        assert_approx_eq!(basis(2.5, &knots, 1, BasisIndex::Nth(2), Extrapolation::NONE), 0.5, eps);
    }

    #[test]
    fn degree_zero_is_right_closed_only_on_last_basis() {
        let knots = [0.0, 1.0, 2.0];

        assert_eq!(basis(0.5, &knots, 0, BasisIndex::Nth(0), Extrapolation::NONE), 1.0);
        assert_eq!(basis(1.5, &knots, 0, BasisIndex::Nth(0), Extrapolation::NONE), 0.0);
        assert_eq!(basis(1.5, &knots, 0, BasisIndex::Nth(1), Extrapolation::NONE), 1.0);
        assert_eq!(basis(1.0, &knots, 0, BasisIndex::Nth(0), Extrapolation::NONE), 0.0);
        assert_eq!(basis(1.0, &knots, 0, BasisIndex::Nth(1), Extrapolation::NONE), 1.0);
        assert_eq!(basis(2.0, &knots, 0, BasisIndex::Last, Extrapolation::NONE), 1.0);
    }

    #[test]
    fn partition_of_unity() {
        let eps = 1e-10;
        let mut points = sample_points(&KNOTS, 200, 7);
        points.extend_from_slice(&KNOTS);

        for degree in 0..5 {
            let mut total = DVector::<f64>::zeros(points.len());
            for idx in 0..num_spline_bases(&KNOTS, degree) {
                total += batch_basis(&points, &KNOTS, degree, idx, Extrapolation::NONE);
            }
            for value in total.iter() {
                assert_approx_eq!(*value, 1.0, eps);
            }
        }
    }

    #[test]
    fn non_negative_and_zero_outside_support() {
        let mut points = sample_points(&KNOTS, 200, 11);
        points.extend_from_slice(&[-3.0, -1.5, 4.5, 10.0]);

        for degree in 0..5 {
            for idx in 0..num_spline_bases(&KNOTS, degree) {
                let support = domain(&KNOTS, degree, idx, Extrapolation::NONE);
                let values = batch_basis(&points, &KNOTS, degree, idx, Extrapolation::NONE);
                for (x, value) in points.iter().zip(values.iter()) {
                    assert!(*value >= 0.0);
                    if !support.contains(*x) {
                        assert_eq!(*value, 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn boundary_bases_are_powers_of_ramps() {
        let eps = 1e-12;
        let points = sample_points(&KNOTS, 100, 3);

        for degree in 1..5 {
            let first = domain(&KNOTS, degree, BasisIndex::Nth(0), Extrapolation::NONE);
            let last = domain(&KNOTS, degree, BasisIndex::Last, Extrapolation::NONE);
            for &x in points.iter() {
                let expected = if first.lb <= x && x < first.ub {
                    ramp_down(x, first).powi(degree as i32)
                } else {
                    0.0
                };
                assert_approx_eq!(
                    basis(x, &KNOTS, degree, BasisIndex::Nth(0), Extrapolation::NONE),
                    expected,
                    eps
                );

                let expected = if last.contains(x) {
                    ramp_up(x, last).powi(degree as i32)
                } else {
                    0.0
                };
                assert_approx_eq!(
                    basis(x, &KNOTS, degree, BasisIndex::Last, Extrapolation::NONE),
                    expected,
                    eps
                );
            }
        }
    }

    #[test]
    fn agrees_with_clamped_cox_de_boor() {
        let eps = 1e-10;
        let points = sample_points(&KNOTS, 150, 5);

        for degree in 0..5 {
            for idx in 0..num_spline_bases(&KNOTS, degree) {
                for &x in points.iter() {
                    assert_approx_eq!(
                        basis(x, &KNOTS, degree, idx, Extrapolation::NONE),
                        clamped_reference(x, &KNOTS, degree, idx),
                        eps
                    );
                }
            }
        }
    }

    #[test]
    fn extrapolated_boundary_bases_continue_polynomially() {
        let eps = 1e-12;
        let knots = [0.0, 1.0, 2.0, 3.0];
        let degree = 2;

        // (1 - x)^2 continued to the left, x in (-inf, 1)
        assert_approx_eq!(basis(-1.0, &knots, degree, BasisIndex::Nth(0), Extrapolation::LEFT), 4.0, eps);
        assert_eq!(basis(-1.0, &knots, degree, BasisIndex::Nth(0), Extrapolation::NONE), 0.0);

        // (x - 2)^2 continued to the right
        assert_approx_eq!(basis(4.0, &knots, degree, BasisIndex::Last, Extrapolation::RIGHT), 4.0, eps);
        assert_eq!(basis(4.0, &knots, degree, BasisIndex::Last, Extrapolation::LEFT), 0.0);
    }

    #[test]
    fn extrapolation_reaches_neighbours_of_boundary_bases() {
        let eps = 1e-12;
        let knots = [0.0, 1.0, 2.0, 3.0];

        // the polynomial piece on [0, 1] continued to the left
        let x = -1.0;
        let expected = (1.0 - x) * x + x * (2.0 - x) / 2.0;
        assert_approx_eq!(basis(x, &knots, 2, BasisIndex::Nth(1), Extrapolation::LEFT), expected, eps);
        assert_eq!(basis(x, &knots, 2, BasisIndex::Nth(1), Extrapolation::NONE), 0.0);
    }

    #[test]
    fn batch_matches_scalar() {
        let points = sample_points(&KNOTS, 20, 13);
        let values = batch_basis(&points, &KNOTS, 3, BasisIndex::Nth(2), Extrapolation::NONE);

        assert_eq!(values.len(), points.len());
        for (x, value) in points.iter().zip(values.iter()) {
            assert_eq!(*value, basis(*x, &KNOTS, 3, BasisIndex::Nth(2), Extrapolation::NONE));
        }
    }
}
