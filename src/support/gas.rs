//! Gas state for rarefied-flow conductance models.
//!
//! A [`GasState`] bundles the operating conditions that every aperture
//! conductance calculation shares: temperature, molar mass, dynamic viscosity,
//! and the average and differential pressures across the plate.
//!
//! The state is a value object. It derives the mean molecular thermal speed
//! once at construction, and any change to an input produces a new state
//! through [`GasState::new`] so the derived speed never goes stale.
//!
//! # Kinetic theory
//!
//! The mean thermal speed of a Maxwell-Boltzmann gas is
//! `v̄ = √(8·R·T / (π·M))`, see [`mean_thermal_speed`].

mod species;

use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MolarMass, Pressure, ThermodynamicTemperature, Velocity},
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive};

pub use species::{Argon, Chlorine, GasSpecies, Nitrogen};

/// Universal gas constant, J/(mol·K).
pub const MOLAR_GAS_CONSTANT: f64 = 8.314;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GasStateError {
    #[error("invalid temperature: {temperature:?}")]
    Temperature {
        temperature: ThermodynamicTemperature,
    },
    #[error("invalid molar mass: {molar_mass:?}")]
    MolarMass { molar_mass: MolarMass },
    #[error("invalid dynamic viscosity: {viscosity:?}")]
    Viscosity { viscosity: DynamicViscosity },
    #[error("invalid average pressure: {pressure:?}")]
    AveragePressure { pressure: Pressure },
    #[error("invalid differential pressure: {pressure:?}")]
    DifferentialPressure { pressure: Pressure },
}

/// Operating gas conditions shared by all apertures in a plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    temperature: ThermodynamicTemperature,
    molar_mass: MolarMass,
    viscosity: DynamicViscosity,
    average_pressure: Pressure,
    differential_pressure: Pressure,
    mean_speed: Velocity,
}

impl GasState {
    /// Creates a gas state and derives its mean thermal speed.
    ///
    /// # Errors
    ///
    /// Returns [`GasStateError`] if temperature, molar mass or viscosity is
    /// not strictly positive, or if either pressure is negative.
    pub fn new(
        temperature: ThermodynamicTemperature,
        molar_mass: MolarMass,
        viscosity: DynamicViscosity,
        average_pressure: Pressure,
        differential_pressure: Pressure,
    ) -> Result<Self, GasStateError> {
        if StrictlyPositive::check(&temperature.get::<kelvin>()).is_err() {
            return Err(GasStateError::Temperature { temperature });
        }

        if StrictlyPositive::check(&molar_mass.get::<kilogram_per_mole>()).is_err() {
            return Err(GasStateError::MolarMass { molar_mass });
        }

        if StrictlyPositive::check(&viscosity.get::<pascal_second>()).is_err() {
            return Err(GasStateError::Viscosity { viscosity });
        }

        if NonNegative::check(&average_pressure.get::<pascal>()).is_err() {
            return Err(GasStateError::AveragePressure {
                pressure: average_pressure,
            });
        }

        if NonNegative::check(&differential_pressure.get::<pascal>()).is_err() {
            return Err(GasStateError::DifferentialPressure {
                pressure: differential_pressure,
            });
        }

        Ok(Self {
            temperature,
            molar_mass,
            viscosity,
            average_pressure,
            differential_pressure,
            mean_speed: mean_thermal_speed(temperature, molar_mass),
        })
    }

    /// Creates a gas state using the molar mass and viscosity of `Species`.
    ///
    /// # Errors
    ///
    /// Returns [`GasStateError`] under the same conditions as [`GasState::new`].
    pub fn for_species<Species: GasSpecies>(
        temperature: ThermodynamicTemperature,
        average_pressure: Pressure,
        differential_pressure: Pressure,
    ) -> Result<Self, GasStateError> {
        Self::new(
            temperature,
            Species::molar_mass(),
            Species::viscosity(),
            average_pressure,
            differential_pressure,
        )
    }

    /// Returns a copy of this state at a different differential pressure.
    ///
    /// # Errors
    ///
    /// Returns [`GasStateError::DifferentialPressure`] if `pressure` is negative.
    pub fn with_differential_pressure(self, pressure: Pressure) -> Result<Self, GasStateError> {
        Self::new(
            self.temperature,
            self.molar_mass,
            self.viscosity,
            self.average_pressure,
            pressure,
        )
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        self.molar_mass
    }

    #[must_use]
    pub fn viscosity(&self) -> DynamicViscosity {
        self.viscosity
    }

    #[must_use]
    pub fn average_pressure(&self) -> Pressure {
        self.average_pressure
    }

    #[must_use]
    pub fn differential_pressure(&self) -> Pressure {
        self.differential_pressure
    }

    /// Mean molecular thermal speed `v̄`.
    #[must_use]
    pub fn mean_speed(&self) -> Velocity {
        self.mean_speed
    }
}

/// Computes the mean thermal speed `v̄ = √(8·R·T / (π·M))`.
#[must_use]
pub fn mean_thermal_speed(temperature: ThermodynamicTemperature, molar_mass: MolarMass) -> Velocity {
    let t = temperature.get::<kelvin>();
    let m = molar_mass.get::<kilogram_per_mole>();

    Velocity::new::<meter_per_second>((8.0 * MOLAR_GAS_CONSTANT * t / (PI * m)).sqrt())
}
