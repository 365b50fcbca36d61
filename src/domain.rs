/// Closed interval `[lb, ub]` on which a basis function may be non-zero.
/// Either end is infinite when the basis is extrapolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Support {
    pub lb: f64,
    pub ub: f64,
}

impl Support {
    pub fn new(lb: f64, ub: f64) -> Self {
        Support { lb, ub }
    }

    pub fn width(&self) -> f64 {
        self.ub - self.lb
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lb <= x && x <= self.ub
    }
}

/// Per-call extrapolation flags. `left` only affects the first basis of a
/// family and `right` only the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extrapolation {
    pub left: bool,
    pub right: bool,
}

impl Extrapolation {
    pub const NONE: Extrapolation = Extrapolation { left: false, right: false };
    pub const BOTH: Extrapolation = Extrapolation { left: true, right: true };
    pub const LEFT: Extrapolation = Extrapolation { left: true, right: false };
    pub const RIGHT: Extrapolation = Extrapolation { left: false, right: true };

    pub fn new(left: bool, right: bool) -> Self {
        Extrapolation { left, right }
    }
}

/// Selects one basis function of a family.
///
/// `Last` always names the final basis, whatever the size of the family.
/// # Example
/// ```
/// use xspline::BasisIndex;
///
/// assert_eq!(BasisIndex::Nth(2).resolve(5), 2);
/// assert_eq!(BasisIndex::from(2_usize), BasisIndex::Nth(2));
/// assert_eq!(BasisIndex::Last.resolve(5), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisIndex {
    Nth(usize),
    Last,
}

impl BasisIndex {
    pub fn resolve(self, num_spline_bases: usize) -> usize {
        match self {
            BasisIndex::Nth(idx) => idx,
            BasisIndex::Last => num_spline_bases - 1,
        }
    }
}

impl From<usize> for BasisIndex {
    fn from(idx: usize) -> Self {
        BasisIndex::Nth(idx)
    }
}

/// Number of basis functions of the given degree over `knots`.
pub fn num_spline_bases(knots: &[f64], degree: usize) -> usize {
    knots.len() - 1 + degree
}

/// Support of basis `idx` of degree `degree` over `knots`.
///
/// `knots` must be strictly increasing with at least two entries and the
/// resolved index must lie in `0..num_spline_bases(knots, degree)`.
/// # Example
/// ```
/// use xspline::{domain, BasisIndex, Extrapolation, Support};
///
/// let knots = [0.0, 1.0, 2.0, 3.0];
///
/// assert_eq!(domain(&knots, 2, BasisIndex::Nth(2), Extrapolation::NONE), Support::new(0.0, 3.0));
/// assert_eq!(domain(&knots, 2, BasisIndex::Last, Extrapolation::BOTH), Support::new(2.0, f64::INFINITY));
/// ```
pub fn domain(
    knots: &[f64],
    degree: usize,
    idx: impl Into<BasisIndex>,
    extrapolation: Extrapolation,
) -> Support {
    let idx = idx.into().resolve(num_spline_bases(knots, degree));
    support_of(knots, degree, idx, extrapolation)
}

pub(crate) fn support_of(
    knots: &[f64],
    degree: usize,
    idx: usize,
    extrapolation: Extrapolation,
) -> Support {
    let num_intervals = knots.len() - 1;
    let last = num_intervals + degree - 1;

    let mut support = Support::new(
        knots[idx.saturating_sub(degree)],
        knots[(idx + 1).min(num_intervals)],
    );

    if idx == 0 && extrapolation.left {
        support.lb = f64::NEG_INFINITY;
    }
    if idx == last && extrapolation.right {
        support.ub = f64::INFINITY;
    }
    support
}
