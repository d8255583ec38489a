use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Accepts only values above zero.
///
/// ```
/// use aperture_models::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Length, length::millimeter};
///
/// let diameter = StrictlyPositive::new(Length::new::<millimeter>(2.5)).unwrap();
/// assert_eq!(diameter.get().get::<millimeter>(), 2.5);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Shorthand for `Constrained::<T, StrictlyPositive>::new`.
    ///
    /// # Errors
    ///
    /// Fails for zero, negative and NaN values.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> ConstraintResult<()> {
        match value.partial_cmp(&T::zero()).ok_or(ConstraintError::NotANumber)? {
            Ordering::Greater => Ok(()),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less => Err(ConstraintError::Negative),
        }
    }
}
