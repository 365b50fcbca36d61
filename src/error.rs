use thiserror::Error;

/// Errors reported while constructing a [crate::Spline].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    #[error("Spline must have at least 2 distinct knots, but {provided} were provided")]
    TooFewKnots { provided: usize },

    #[error("Knots must be finite, found {0}")]
    NonFiniteKnot(f64),

    #[error(
        "Linear tails require at least {required} knot intervals, but the knots only span {intervals}"
    )]
    InsufficientIntervals { intervals: usize, required: usize },
}
