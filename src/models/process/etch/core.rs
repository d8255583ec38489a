//! Etch rate, selectivity and uniformity from averaged readings.

mod error;
mod measurement;

pub use error::EtchError;
pub use measurement::{EtchMeasurement, parse_readings};

use std::fmt;

use uom::{
    ConstZero,
    si::{
        f64::{Length, Ratio, Time, Velocity},
        length::nanometer,
        ratio::{percent, ratio},
        time::minute,
    },
};

/// Figures of merit for one etched sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EtchResult {
    pub mean_depth: Length,
    pub mean_step: Length,

    /// PR left on the sample, mean step minus mean depth.
    pub remaining_resist: Length,

    /// PR consumed during the etch, initial minus remaining.
    pub resist_loss: Length,

    pub material_rate: Velocity,
    pub resist_rate: Velocity,

    /// Material rate over PR rate.
    ///
    /// `None` when the PR did not thin, which makes selectivity unbounded.
    pub selectivity: Option<Ratio>,

    /// Depth non-uniformity, `(max - min) / (2 * mean)`.
    ///
    /// Zero when the mean depth is not positive.
    pub uniformity: Ratio,
}

/// Reduces a measurement to etch rates, selectivity and uniformity.
#[must_use]
pub fn analyze(measurement: &EtchMeasurement) -> EtchResult {
    let time = measurement.process_time();
    let depths = measurement.depths();

    let mean_depth = mean(depths);
    let mean_step = mean(measurement.steps());

    let remaining_resist = mean_step - mean_depth;
    let resist_loss = measurement.initial_resist() - remaining_resist;

    let material_rate: Velocity = mean_depth / time;
    let resist_rate: Velocity = resist_loss / time;

    let selectivity = (resist_rate > Velocity::ZERO).then(|| material_rate / resist_rate);

    let uniformity = if mean_depth > Length::ZERO {
        let max = depths.iter().copied().fold(depths[0], |a, b| a.max(b));
        let min = depths.iter().copied().fold(depths[0], |a, b| a.min(b));
        (max - min) / (mean_depth * 2.0)
    } else {
        Ratio::ZERO
    };

    EtchResult {
        mean_depth,
        mean_step,
        remaining_resist,
        resist_loss,
        material_rate,
        resist_rate,
        selectivity,
        uniformity,
    }
}

/// Mean of a non-empty slice of readings.
fn mean(readings: &[Length]) -> Length {
    let sum = readings.iter().fold(Length::ZERO, |acc, &x| acc + x);
    sum / readings.len() as f64
}

/// Converts an etch rate to nm/min.
fn nm_per_min(rate: Velocity) -> f64 {
    (rate * Time::new::<minute>(1.0)).get::<nanometer>()
}

impl fmt::Display for EtchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "material ER:    {:.2} nm/min",
            nm_per_min(self.material_rate)
        )?;
        writeln!(f, "PR ER:          {:.2} nm/min", nm_per_min(self.resist_rate))?;
        match self.selectivity {
            Some(s) => writeln!(f, "selectivity:    {:.2}", s.get::<ratio>())?,
            None => writeln!(f, "selectivity:    unbounded")?,
        }
        writeln!(
            f,
            "uniformity:     ± {:.2} %",
            self.uniformity.get::<percent>()
        )?;
        writeln!(
            f,
            "avg depth:      {:.1} nm",
            self.mean_depth.get::<nanometer>()
        )?;
        writeln!(
            f,
            "avg total step: {:.1} nm",
            self.mean_step.get::<nanometer>()
        )?;
        writeln!(
            f,
            "remaining PR:   {:.1} nm",
            self.remaining_resist.get::<nanometer>()
        )?;
        write!(
            f,
            "PR loss:        {:.1} nm",
            self.resist_loss.get::<nanometer>()
        )
    }
}
