//! Problem formulation for solving a plate dimension.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Length, VolumeRate},
    length::meter,
    volume_rate::cubic_meter_per_second,
};

use crate::{
    models::vacuum::aperture_array::core::transport::conductance, support::gas::GasState,
};

use super::{ApertureSolution, Dimension};

/// Single-aperture model with one dimension held fixed.
///
/// Exposes the free dimension as the sole model input.
pub(super) struct FreeDimensionModel<'a> {
    gas: &'a GasState,
    free: Dimension,
    fixed: Length,
}

impl<'a> FreeDimensionModel<'a> {
    pub(super) fn new(gas: &'a GasState, free: Dimension, fixed: Length) -> Self {
        Self { gas, free, fixed }
    }

    /// Evaluates the aperture at `free_value`.
    pub(super) fn evaluate(&self, free_value: Length) -> ApertureSolution {
        let aperture = self.free.aperture(free_value, self.fixed);
        ApertureSolution {
            aperture,
            conductance: conductance(&aperture, self.gas),
        }
    }
}

impl Model for FreeDimensionModel<'_> {
    type Input = Length;
    type Output = ApertureSolution;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.evaluate(*input))
    }
}

/// Equation problem matching a target single-aperture conductance.
///
/// Computes the residual as `achieved - target`.
pub(super) struct TargetConductance {
    target: VolumeRate,
}

impl TargetConductance {
    pub(super) fn new(target: VolumeRate) -> Self {
        Self { target }
    }

    pub(super) fn residual(&self, output: &ApertureSolution) -> VolumeRate {
        output.conductance - self.target
    }
}

impl EquationProblem<1> for TargetConductance {
    type Input = Length;
    type Output = ApertureSolution;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.residual(output).get::<cubic_meter_per_second>()])
    }
}
