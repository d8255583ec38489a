//! Analytic hole-count inverse.
//!
//! Total conductance is linear in the hole count, so the required count is a
//! direct division rather than a root-finding problem.

use uom::{
    ConstZero,
    si::{f64::VolumeRate, ratio::ratio},
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    gas::GasState,
};

use super::{ApertureGeometry, HoleCount, InverseError, transport::conductance};

/// Hole count needed to reach a target conductance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleCountEstimate {
    /// Real-valued count, `target / single-aperture conductance`.
    pub exact: HoleCount,

    /// The exact count rounded to the nearest whole hole.
    pub rounded: u64,
}

/// Computes the number of apertures needed to reach `target` total conductance.
///
/// # Errors
///
/// Returns [`InverseError::DegenerateAperture`] if either aperture dimension
/// is not strictly positive, [`InverseError::NonConductive`] if the aperture
/// has zero conductance, which happens when the average pressure is zero, or
/// [`InverseError::InvalidCount`] if the quotient underflows to zero.
pub fn required_hole_count(
    aperture: &ApertureGeometry,
    target: Constrained<VolumeRate, StrictlyPositive>,
    gas: &GasState,
) -> Result<HoleCountEstimate, InverseError> {
    if aperture.is_degenerate() {
        return Err(InverseError::DegenerateAperture {
            aperture: *aperture,
        });
    }

    let single = conductance(aperture, gas);
    if single <= VolumeRate::ZERO {
        return Err(InverseError::NonConductive);
    }

    let exact = (target.into_inner() / single).get::<ratio>();
    tracing::debug!(exact, ?aperture, "required hole count");

    Ok(HoleCountEstimate {
        exact: HoleCount::new(exact)?,
        rounded: exact.round() as u64,
    })
}
