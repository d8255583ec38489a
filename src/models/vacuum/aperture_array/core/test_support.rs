use uom::si::{
    f64::{Length, Pressure, ThermodynamicTemperature},
    length::millimeter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::gas::{Chlorine, GasState};

use super::ApertureGeometry;

/// Chlorine at 293 K, 1.1 Pa average and 1.0 Pa differential pressure.
pub(super) fn chlorine() -> GasState {
    GasState::for_species::<Chlorine>(
        ThermodynamicTemperature::new::<kelvin>(293.0),
        Pressure::new::<pascal>(1.1),
        Pressure::new::<pascal>(1.0),
    )
    .expect("chlorine test state should be valid")
}

pub(super) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

/// Unchecked aperture with dimensions in millimeters.
pub(super) fn aperture(thickness_mm: f64, diameter_mm: f64) -> ApertureGeometry {
    ApertureGeometry::new_unchecked(mm(thickness_mm), mm(diameter_mm))
}
