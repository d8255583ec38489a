use uom::si::{
    f64::{Length, Time},
    length::nanometer,
    time::second,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::EtchError;

/// Raw readings from one etched sample.
#[derive(Debug, Clone, PartialEq)]
pub struct EtchMeasurement {
    process_time: Time,
    initial_resist: Length,
    depths: Vec<Length>,
    steps: Vec<Length>,
}

impl EtchMeasurement {
    /// Creates a measurement from the etch time, the initial PR thickness,
    /// material depth readings and total step readings.
    ///
    /// # Errors
    ///
    /// Returns [`EtchError`] if the process time is not strictly positive or
    /// either reading list is empty.
    pub fn new(
        process_time: Time,
        initial_resist: Length,
        depths: Vec<Length>,
        steps: Vec<Length>,
    ) -> Result<Self, EtchError> {
        if StrictlyPositive::check(&process_time.get::<second>()).is_err() {
            return Err(EtchError::ProcessTime { time: process_time });
        }
        if depths.is_empty() {
            return Err(EtchError::NoDepthReadings);
        }
        if steps.is_empty() {
            return Err(EtchError::NoStepReadings);
        }

        Ok(Self {
            process_time,
            initial_resist,
            depths,
            steps,
        })
    }

    #[must_use]
    pub fn process_time(&self) -> Time {
        self.process_time
    }

    #[must_use]
    pub fn initial_resist(&self) -> Length {
        self.initial_resist
    }

    /// Material etch depth readings. Never empty.
    #[must_use]
    pub fn depths(&self) -> &[Length] {
        &self.depths
    }

    /// Total step (PR plus etched depth) readings. Never empty.
    #[must_use]
    pub fn steps(&self) -> &[Length] {
        &self.steps
    }
}

/// Parses whitespace-separated readings in nanometers.
///
/// # Errors
///
/// Returns [`EtchError::InvalidReading`] for the first token that is not a number.
///
/// # Example
///
/// ```
/// use aperture_models::models::process::etch::parse_readings;
/// use uom::si::length::nanometer;
///
/// let depths = parse_readings("500 510\t495\n505").unwrap();
/// assert_eq!(depths.len(), 4);
/// assert!((depths[1].get::<nanometer>() - 510.0).abs() < 1e-9);
/// ```
pub fn parse_readings(text: &str) -> Result<Vec<Length>, EtchError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map(Length::new::<nanometer>)
                .map_err(|_| EtchError::InvalidReading {
                    token: token.to_owned(),
                })
        })
        .collect()
}
