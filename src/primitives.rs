//! Elementary building blocks of the basis recursions: indicator functions,
//! linear ramps and the closed-form repeated integral of an indicator.

use crate::domain::Support;

/// Indicator of `support`, with each endpoint independently closed or open.
pub fn indicator(x: f64, support: Support, l_closed: bool, r_closed: bool) -> f64 {
    let above = if l_closed { x >= support.lb } else { x > support.lb };
    let below = if r_closed { x <= support.ub } else { x < support.ub };
    if above && below {
        1.0
    } else {
        0.0
    }
}

/// Linear function equal to 0 at `support.lb` and 1 at `support.ub`.
pub fn ramp_up(x: f64, support: Support) -> f64 {
    (x - support.lb) / support.width()
}

/// Linear function equal to 1 at `support.lb` and 0 at `support.ub`.
pub fn ramp_down(x: f64, support: Support) -> f64 {
    (support.ub - x) / support.width()
}

/// `h^n / n!`
pub fn taylor_term(h: f64, n: usize) -> f64 {
    (1..=n).fold(1.0, |term, i| term * h / i as f64)
}

/// `order`-fold repeated integral from `a` to `x` of the indicator of `support`.
///
/// Evaluated through the Cauchy formula for repeated integration, so `a > x`
/// and half-infinite supports are handled without special cases. An `order`
/// of zero returns the left-closed, right-open indicator at `x`.
pub fn indicator_integral(a: f64, x: f64, order: usize, support: Support) -> f64 {
    if order == 0 {
        return indicator(x, support, true, false);
    }

    let (lo, hi, sign) = if a <= x { (a, x, 1.0) } else { (x, a, -1.0) };
    let p = lo.max(support.lb);
    let q = hi.min(support.ub);
    if p >= q {
        return 0.0;
    }

    sign * (taylor_term(x - p, order) - taylor_term(x - q, order))
}
