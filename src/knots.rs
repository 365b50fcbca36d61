use log::warn;

use crate::error::SplineError;

/// Strictly increasing sequence of finite knots, at least two long.
#[derive(Debug, Clone, PartialEq)]
pub struct Knots {
    values: Vec<f64>,
}

impl Knots {
    /// Sorts and deduplicates `values`.
    /// # Example
    /// ```
    /// use xspline::Knots;
    ///
    /// let knots = Knots::new(vec![2.0, 0.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(knots.as_slice(), &[0.0, 1.0, 2.0]);
    /// ```
    /// # Errors
    /// Error is returned when a knot is not finite or fewer than two distinct knots remain.
    /// ```
    /// use xspline::Knots;
    ///
    /// assert!(Knots::new(vec![1.0, 1.0]).is_err());
    /// assert!(Knots::new(vec![0.0, f64::NAN]).is_err());
    /// ```
    pub fn new(mut values: Vec<f64>) -> Result<Self, SplineError> {
        if let Some(knot) = values.iter().find(|knot| !knot.is_finite()) {
            return Err(SplineError::NonFiniteKnot(*knot));
        }

        let provided = values.len();
        values.sort_by(f64::total_cmp);
        values.dedup();

        if values.len() < 2 {
            return Err(SplineError::TooFewKnots { provided: values.len() });
        }
        if values.len() < provided {
            warn!(
                "dropped {} duplicate knots, {} distinct knots remain",
                provided - values.len(),
                values.len()
            );
        }

        Ok(Knots { values })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn num_intervals(&self) -> usize {
        self.values.len() - 1
    }

    pub fn lb(&self) -> f64 {
        self.values[0]
    }

    pub fn ub(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Knots with the first and/or last one dropped.
    pub(crate) fn trimmed(&self, left: bool, right: bool) -> Knots {
        let start = usize::from(left);
        let end = self.values.len() - usize::from(right);
        Knots { values: self.values[start..end].to_vec() }
    }
}
