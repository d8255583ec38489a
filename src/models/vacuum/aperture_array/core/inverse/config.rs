use std::fmt;

use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, VolumeRate},
    length::{meter, millimeter},
    volume_rate::cubic_meter_per_second,
};

/// Errors from constructing a [`Bracket`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BracketError {
    #[error("bracket bounds must be strictly positive: low={low:?}")]
    NonPositive { low: Length },
    #[error("bracket low bound must be below the high bound: low={low:?}, high={high:?}")]
    Inverted { low: Length, high: Length },
}

/// Search interval for a plate dimension.
///
/// The default brackets reflect plausible manufacturing ranges. They are not
/// physical limits, so a target outside them is reported as unreachable
/// rather than impossible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: Length,
    high: Length,
}

impl Bracket {
    /// Creates a bracket with `0 < low < high`.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError`] if the bounds are not positive and ordered.
    pub fn new(low: Length, high: Length) -> Result<Self, BracketError> {
        if !(low.get::<meter>() > 0.0) {
            return Err(BracketError::NonPositive { low });
        }
        if !(low < high) {
            return Err(BracketError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    /// Default diameter search range, 0.01 mm to 50 mm.
    #[must_use]
    pub fn diameter() -> Self {
        Self {
            low: Length::new::<meter>(1e-5),
            high: Length::new::<meter>(0.05),
        }
    }

    /// Default thickness search range, 0.1 mm to 1000 mm.
    #[must_use]
    pub fn thickness() -> Self {
        Self {
            low: Length::new::<meter>(1e-4),
            high: Length::new::<meter>(1.0),
        }
    }

    #[must_use]
    pub fn low(&self) -> Length {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> Length {
        self.high
    }

    /// Returns `true` if `length` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, length: Length) -> bool {
        self.low <= length && length <= self.high
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} mm, {} mm]",
            self.low.get::<millimeter>(),
            self.high.get::<millimeter>()
        )
    }
}

/// Solver configuration for the diameter and thickness inverses.
#[derive(Debug, Clone, Copy)]
pub struct InverseConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the solved dimension.
    pub length_tol: Length,

    /// Absolute tolerance on the single-aperture conductance residual.
    pub conductance_tol: VolumeRate,

    /// Search range used when solving for the hole diameter.
    pub diameter_bracket: Bracket,

    /// Search range used when solving for the plate thickness.
    pub thickness_bracket: Bracket,
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            length_tol: Length::new::<meter>(1e-12),
            conductance_tol: VolumeRate::new::<cubic_meter_per_second>(1e-18),
            diameter_bracket: Bracket::diameter(),
            thickness_bracket: Bracket::thickness(),
        }
    }
}

impl InverseConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.length_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.conductance_tol.get::<cubic_meter_per_second>(),
        }
    }
}
