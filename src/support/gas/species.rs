use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MolarMass},
    molar_mass::gram_per_mole,
};

/// Constant gas properties needed to build a [`GasState`](super::GasState).
///
/// Viscosities are room-temperature (≈293 K) values. They are adequate for
/// process-chamber conditions near ambient wall temperature.
pub trait GasSpecies {
    /// Returns the molar mass of the gas.
    fn molar_mass() -> MolarMass;

    /// Returns the dynamic viscosity of the gas.
    fn viscosity() -> DynamicViscosity;
}

/// Molecular chlorine, Cl₂.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chlorine;

impl GasSpecies for Chlorine {
    fn molar_mass() -> MolarMass {
        MolarMass::new::<gram_per_mole>(70.9)
    }

    fn viscosity() -> DynamicViscosity {
        DynamicViscosity::new::<pascal_second>(1.32e-5)
    }
}

/// Molecular nitrogen, N₂.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nitrogen;

impl GasSpecies for Nitrogen {
    fn molar_mass() -> MolarMass {
        MolarMass::new::<gram_per_mole>(28.0134)
    }

    fn viscosity() -> DynamicViscosity {
        DynamicViscosity::new::<pascal_second>(1.76e-5)
    }
}

/// Argon, Ar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Argon;

impl GasSpecies for Argon {
    fn molar_mass() -> MolarMass {
        MolarMass::new::<gram_per_mole>(39.948)
    }

    fn viscosity() -> DynamicViscosity {
        DynamicViscosity::new::<pascal_second>(2.23e-5)
    }
}
