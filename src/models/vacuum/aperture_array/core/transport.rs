//! Transition-flow conductance of a single cylindrical aperture.
//!
//! The free-molecular and viscous conductances act as two resistances in
//! series, `1/C = 1/C_mol + 1/C_visc`, so whichever mechanism conducts less
//! dominates. Thin, wide holes at low pressure approach the molecular limit;
//! thick, narrow holes at higher pressure approach the Poiseuille limit.
//!
//! Both terms increase with diameter and decrease with thickness, so the
//! combined conductance is monotone in each dimension. The inverse solvers
//! rely on this.

use std::f64::consts::PI;

use uom::si::{
    f64::{Ratio, VolumeRate},
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

use crate::support::gas::GasState;

use super::{ApertureGeometry, ArrayGeometry};

/// Conductance returned for degenerate geometry, in m³/s.
///
/// A small positive value instead of an error keeps the conductance total,
/// so bracket probing during inverse solves never divides by zero.
pub const DEGENERATE_CONDUCTANCE: f64 = 1e-20;

/// Returns the transition-flow conductance of one aperture.
///
/// Degenerate geometry (see [`ApertureGeometry::is_degenerate`]) yields
/// [`DEGENERATE_CONDUCTANCE`].
///
/// The result is strictly positive for valid geometry while the average
/// pressure is positive. At zero average pressure the viscous path is closed
/// and the series conductance is exactly zero.
#[must_use]
pub fn conductance(aperture: &ApertureGeometry, gas: &GasState) -> VolumeRate {
    if aperture.is_degenerate() {
        tracing::trace!(?aperture, "degenerate aperture geometry");
        return VolumeRate::new::<cubic_meter_per_second>(DEGENERATE_CONDUCTANCE);
    }

    let c_mol = molecular_conductance(aperture, gas).get::<cubic_meter_per_second>();
    let c_visc = viscous_conductance(aperture, gas).get::<cubic_meter_per_second>();

    // Reciprocal sum keeps each rounding step monotone in L and D.
    // A zero viscous term (no average pressure) yields zero conductance.
    VolumeRate::new::<cubic_meter_per_second>(1.0 / (1.0 / c_mol + 1.0 / c_visc))
}

/// Returns the conductance of every hole in the plate combined.
#[must_use]
pub fn array_conductance(plate: &ArrayGeometry, gas: &GasState) -> VolumeRate {
    conductance(&plate.aperture, gas) * plate.count.get()
}

/// Clausing-type transmission probability `α = 1 / (1 + 3L/4D)`.
///
/// The caller must ensure the geometry is not degenerate.
#[must_use]
pub fn transmission_probability(aperture: &ApertureGeometry) -> Ratio {
    let aspect = (aperture.thickness() / aperture.diameter()).get::<ratio>();
    Ratio::new::<ratio>(1.0 / (1.0 + 0.75 * aspect))
}

/// Free-molecular conductance `C_mol = ¼·A·v̄·α`.
///
/// The caller must ensure the geometry is not degenerate.
#[must_use]
pub fn molecular_conductance(aperture: &ApertureGeometry, gas: &GasState) -> VolumeRate {
    let alpha = transmission_probability(aperture).get::<ratio>();
    aperture.cross_section() * gas.mean_speed() * (0.25 * alpha)
}

/// Poiseuille conductance `C_visc = π·D⁴·P̄ / (128·μ·L)`.
///
/// The caller must ensure the geometry is not degenerate.
#[must_use]
pub fn viscous_conductance(aperture: &ApertureGeometry, gas: &GasState) -> VolumeRate {
    let d = aperture.diameter();
    let l = aperture.thickness();
    d * d * d * d * gas.average_pressure() * (PI / 128.0) / (gas.viscosity() * l)
}
