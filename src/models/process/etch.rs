//! Etch rate analysis from step-height measurements.
//!
//! A masked etch is measured three ways: the initial photoresist (PR)
//! thickness, the etched depth of the material, and the total step from the
//! PR top to the bottom of the etched feature. [`EtchAnalysis`] reduces those
//! readings to etch rates, selectivity and depth uniformity.

mod core;

pub use self::core::{EtchError, EtchMeasurement, EtchResult, analyze, parse_readings};

use std::convert::Infallible;

use twine_core::Model;

/// Etch measurement analysis model.
#[derive(Debug, Clone, Copy, Default)]
pub struct EtchAnalysis;

impl Model for EtchAnalysis {
    type Input = EtchMeasurement;
    type Output = EtchResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(analyze(input))
    }
}
