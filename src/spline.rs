use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::basis::value;
use crate::derivative::derivative_value;
use crate::domain::{num_spline_bases, support_of, BasisIndex, Extrapolation, Support};
use crate::error::SplineError;
use crate::integral::integral_value;
use crate::knots::Knots;
use crate::primitives::taylor_term;

/// Which ends of the spline are replaced by linear tails. The outermost
/// interval on an active side becomes the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearTails {
    pub left: bool,
    pub right: bool,
}

impl LinearTails {
    pub const NONE: LinearTails = LinearTails { left: false, right: false };
    pub const BOTH: LinearTails = LinearTails { left: true, right: true };

    pub fn new(left: bool, right: bool) -> Self {
        LinearTails { left, right }
    }

    fn count(&self) -> usize {
        usize::from(self.left) + usize::from(self.right)
    }
}

/// What to compute for a basis function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Value,
    Derivative(usize),
    Integral { order: usize, lower_bound: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    LeftTail,
    Interior,
    RightTail,
    Outside,
}

/// Family of X-spline basis functions over a fixed knot sequence.
///
/// With linear tails, each basis follows its first order Taylor expansion
/// from the inner boundary across the outermost knot interval.
#[derive(Debug, Clone)]
pub struct Spline {
    knots: Knots,
    inner_knots: Knots,
    degree: usize,
    tails: LinearTails,
}

impl Spline {
    pub fn new(knots: Vec<f64>, degree: usize, tails: LinearTails) -> Result<Self, SplineError> {
        let knots = Knots::new(knots)?;

        let required = 1 + tails.count();
        if knots.num_intervals() < required {
            return Err(SplineError::InsufficientIntervals {
                intervals: knots.num_intervals(),
                required,
            });
        }

        let inner_knots = knots.trimmed(tails.left, tails.right);
        debug!(
            "created spline of degree {} over {} knots ({} inner), linear tails {:?}",
            degree,
            knots.len(),
            inner_knots.len(),
            tails
        );

        Ok(Spline { knots, inner_knots, degree, tails })
    }

    pub fn knots(&self) -> &[f64] {
        self.knots.as_slice()
    }

    pub fn inner_knots(&self) -> &[f64] {
        self.inner_knots.as_slice()
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn linear_tails(&self) -> LinearTails {
        self.tails
    }

    /// Number of basis functions, counted over the inner knots.
    pub fn num_spline_bases(&self) -> usize {
        num_spline_bases(self.inner_knots(), self.degree)
    }

    /// Outer boundaries `[lb, ub]` of the knot span.
    pub fn bounds(&self) -> Support {
        Support::new(self.knots.lb(), self.knots.ub())
    }

    /// Boundaries of the region not covered by linear tails.
    pub fn inner_bounds(&self) -> Support {
        Support::new(self.inner_knots.lb(), self.inner_knots.ub())
    }

    /// Support of basis `idx`. Bases reaching an inner boundary extend to the
    /// corresponding outer boundary, since the tail carries them there.
    pub fn domain(&self, idx: impl Into<BasisIndex>, extrapolation: Extrapolation) -> Support {
        let idx = self.resolve(idx);
        let inner = support_of(self.inner_knots(), self.degree, idx, extrapolation);
        let inner_bounds = self.inner_bounds();

        Support::new(
            if inner.lb == inner_bounds.lb { self.knots.lb() } else { inner.lb },
            if inner.ub == inner_bounds.ub { self.knots.ub() } else { inner.ub },
        )
    }

    pub fn basis(&self, x: f64, idx: impl Into<BasisIndex>, extrapolation: Extrapolation) -> f64 {
        self.batch_basis(&[x], idx, extrapolation)[0]
    }

    pub fn batch_basis(
        &self,
        x: &[f64],
        idx: impl Into<BasisIndex>,
        extrapolation: Extrapolation,
    ) -> DVector<f64> {
        let idx = self.resolve(idx);
        DVector::from_iterator(
            x.len(),
            x.iter().map(|&x| self.value_at(x, idx, extrapolation)),
        )
    }

    pub fn derivative(
        &self,
        x: f64,
        order: usize,
        idx: impl Into<BasisIndex>,
        extrapolation: Extrapolation,
    ) -> f64 {
        self.batch_derivative(&[x], order, idx, extrapolation)[0]
    }

    /// `order`-th derivative of basis `idx`. Inside a linear tail the first
    /// derivative is the tail slope and higher orders vanish.
    pub fn batch_derivative(
        &self,
        x: &[f64],
        order: usize,
        idx: impl Into<BasisIndex>,
        extrapolation: Extrapolation,
    ) -> DVector<f64> {
        let idx = self.resolve(idx);
        DVector::from_iterator(
            x.len(),
            x.iter()
                .map(|&x| self.derivative_at(x, order, idx, extrapolation)),
        )
    }

    pub fn integral(
        &self,
        a: f64,
        x: f64,
        order: usize,
        idx: impl Into<BasisIndex>,
        extrapolation: Extrapolation,
    ) -> f64 {
        self.batch_integral(a, &[x], order, idx, extrapolation)[0]
    }

    /// `order`-fold repeated integral of basis `idx`, linear tails included,
    /// from `a` to every point of `x`.
    pub fn batch_integral(
        &self,
        a: f64,
        x: &[f64],
        order: usize,
        idx: impl Into<BasisIndex>,
        extrapolation: Extrapolation,
    ) -> DVector<f64> {
        let idx = self.resolve(idx);
        DVector::from_iterator(
            x.len(),
            x.iter()
                .map(|&x| self.integral_at(a, x, order, idx, extrapolation)),
        )
    }

    pub fn evaluate(
        &self,
        x: &[f64],
        idx: impl Into<BasisIndex>,
        evaluation: Evaluation,
        extrapolation: Extrapolation,
    ) -> DVector<f64> {
        match evaluation {
            Evaluation::Value => self.batch_basis(x, idx, extrapolation),
            Evaluation::Derivative(order) => self.batch_derivative(x, order, idx, extrapolation),
            Evaluation::Integral { order, lower_bound } => {
                self.batch_integral(lower_bound, x, order, idx, extrapolation)
            }
        }
    }

    /// Matrix with one row per point of `x` and one column per basis.
    /// # Example
    /// ```
    /// use xspline::{Evaluation, Extrapolation, LinearTails, Spline};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let spline = Spline::new(vec![0.0, 1.0, 2.0, 3.0], 2, LinearTails::NONE).unwrap();
    /// let matrix = spline.design_matrix(&[0.5, 1.5, 2.5], Evaluation::Value, Extrapolation::NONE);
    ///
    /// assert_eq!(matrix.shape(), (3, 5));
    /// for row in matrix.row_iter() {
    ///     assert_approx_eq!(row.sum(), 1.0, 1e-12);
    /// }
    /// ```
    pub fn design_matrix(
        &self,
        x: &[f64],
        evaluation: Evaluation,
        extrapolation: Extrapolation,
    ) -> DMatrix<f64> {
        let columns: Vec<DVector<f64>> = (0..self.num_spline_bases())
            .map(|idx| self.evaluate(x, idx, evaluation, extrapolation))
            .collect();
        DMatrix::from_columns(&columns)
    }

    fn resolve(&self, idx: impl Into<BasisIndex>) -> usize {
        idx.into().resolve(self.num_spline_bases())
    }

    fn region(&self, x: f64, extrapolation: Extrapolation) -> Region {
        if self.tails.left && x < self.inner_knots.lb() {
            if x >= self.knots.lb() || extrapolation.left {
                Region::LeftTail
            } else {
                Region::Outside
            }
        } else if self.tails.right && x > self.inner_knots.ub() {
            if x <= self.knots.ub() || extrapolation.right {
                Region::RightTail
            } else {
                Region::Outside
            }
        } else {
            Region::Interior
        }
    }

    /// Value and slope of the interior basis at `anchor`, seeding a tail.
    fn tail_anchor(&self, anchor: f64, idx: usize) -> (f64, f64) {
        let knots = self.inner_knots();
        (
            value(anchor, knots, self.degree, idx, Extrapolation::NONE),
            derivative_value(anchor, knots, self.degree, 1, idx, Extrapolation::NONE),
        )
    }

    fn tail_line(&self, region: Region) -> Option<f64> {
        match region {
            Region::LeftTail => Some(self.inner_knots.lb()),
            Region::RightTail => Some(self.inner_knots.ub()),
            Region::Interior | Region::Outside => None,
        }
    }

    fn value_at(&self, x: f64, idx: usize, extrapolation: Extrapolation) -> f64 {
        let region = self.region(x, extrapolation);
        match self.tail_line(region) {
            Some(anchor) => {
                let (level, slope) = self.tail_anchor(anchor, idx);
                level + slope * (x - anchor)
            }
            None if region == Region::Interior => {
                value(x, self.inner_knots(), self.degree, idx, extrapolation)
            }
            None => 0.0,
        }
    }

    fn derivative_at(&self, x: f64, order: usize, idx: usize, extrapolation: Extrapolation) -> f64 {
        if order == 0 {
            return self.value_at(x, idx, extrapolation);
        }

        let region = self.region(x, extrapolation);
        match self.tail_line(region) {
            Some(anchor) if order == 1 => self.tail_anchor(anchor, idx).1,
            Some(_) => 0.0,
            None if region == Region::Interior => {
                derivative_value(x, self.inner_knots(), self.degree, order, idx, extrapolation)
            }
            None => 0.0,
        }
    }

    fn integral_at(
        &self,
        a: f64,
        x: f64,
        order: usize,
        idx: usize,
        extrapolation: Extrapolation,
    ) -> f64 {
        if order == 0 {
            return self.value_at(x, idx, extrapolation);
        }
        let knots = self.inner_knots();
        if self.tails.count() == 0 {
            return integral_value(a, x, knots, self.degree, order, idx, extrapolation);
        }

        let (lo, hi, sign) = if a <= x { (a, x, 1.0) } else { (x, a, -1.0) };
        let inner = self.inner_bounds();
        let mut total = 0.0;

        if self.tails.left {
            let start = if extrapolation.left { f64::NEG_INFINITY } else { self.knots.lb() };
            let piece = Support::new(lo.max(start), hi.min(inner.lb));
            total += self.tail_integral(piece, x, order, inner.lb, idx);
        }

        let start = if self.tails.left { inner.lb } else { f64::NEG_INFINITY };
        let end = if self.tails.right { inner.ub } else { f64::INFINITY };
        let piece = Support::new(lo.max(start), hi.min(end));
        if piece.lb < piece.ub {
            total += integral_value(piece.lb, x, knots, self.degree, order, idx, extrapolation)
                - integral_value(piece.ub, x, knots, self.degree, order, idx, extrapolation);
        }

        if self.tails.right {
            let end = if extrapolation.right { f64::INFINITY } else { self.knots.ub() };
            let piece = Support::new(lo.max(inner.ub), hi.min(end));
            total += self.tail_integral(piece, x, order, inner.ub, idx);
        }

        sign * total
    }

    /// Cauchy repeated integral over `piece` of the tail line anchored at `anchor`.
    fn tail_integral(&self, piece: Support, x: f64, order: usize, anchor: f64, idx: usize) -> f64 {
        if piece.lb >= piece.ub {
            return 0.0;
        }

        let (level, slope) = self.tail_anchor(anchor, idx);
        let level_at_x = level + slope * (x - anchor);
        let span = |n: usize| taylor_term(x - piece.lb, n) - taylor_term(x - piece.ub, n);

        level_at_x * span(order) - slope * order as f64 * span(order + 1)
    }
}
