use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Accepts zero and anything above it.
///
/// ```
/// use aperture_models::support::constraint::NonNegative;
/// use uom::si::{f64::Pressure, pressure::pascal};
///
/// let dp = NonNegative::new(Pressure::new::<pascal>(0.0)).unwrap();
/// assert_eq!(dp.get().get::<pascal>(), 0.0);
///
/// assert!(NonNegative::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Shorthand for `Constrained::<T, NonNegative>::new`.
    ///
    /// # Errors
    ///
    /// Fails for negative and NaN values.
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> ConstraintResult<()> {
        let zero = T::zero();
        if *value >= zero {
            Ok(())
        } else if *value < zero {
            Err(ConstraintError::Negative)
        } else {
            Err(ConstraintError::NotANumber)
        }
    }
}
