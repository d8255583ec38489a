//! Validated numeric inputs.
//!
//! Plate geometry, hole counts and gas properties only make physical sense
//! within certain ranges. Wrapping a value in [`Constrained<T, C>`] performs the
//! range check once, at construction, so code that receives the wrapper can
//! rely on it.
//!
//! Two markers are available:
//!
//! - [`StrictlyPositive`] for lengths, counts, temperatures and targets.
//! - [`NonNegative`] for pressures, where zero is a valid operating point.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A range rule that a value of type `T` can be checked against.
pub trait Constraint<T> {
    /// Returns `Ok(())` if `value` satisfies the rule.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how the rule is broken.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// How a value broke a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("expected a value of zero or greater, got a negative one")]
    Negative,
    #[error("expected a nonzero value, got zero")]
    Zero,
    #[error("expected a number, got NaN")]
    NotANumber,
}

pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value checked against the constraint `C` when it was built.
///
/// ```
/// use aperture_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let holes = Constrained::<f64, StrictlyPositive>::new(2200.0).unwrap();
/// assert_eq!(holes.get(), 2200.0);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(-3.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    rule: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] reported by `C`.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value).map(|()| Self {
            value,
            rule: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the checked value.
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
