//! Derived quantities for a fully specified perforated plate.

use std::fmt;

use uom::{
    ConstZero,
    si::{
        f64::{Length, Time, Volume, VolumeRate},
        length::millimeter,
        power::watt,
        time::millisecond,
        volume::cubic_meter,
        volume_rate::{cubic_meter_per_second, liter_per_second},
    },
};

use crate::support::{gas::GasState, units::GasThroughput};

use super::{ArrayGeometry, transport::conductance};

/// Snapshot of a plate design and its derived flow quantities.
///
/// Every solve mode resolves a concrete thickness, diameter and count and
/// produces one of these through [`build_report`], so the schema is the same
/// whichever parameter was solved for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRecord {
    pub thickness: Length,
    pub diameter: Length,

    /// Hole count, possibly non-integer when it was solved for.
    pub count: f64,

    /// Combined open volume of all holes.
    pub open_volume: Volume,

    /// Conductance of a single aperture.
    pub aperture_conductance: VolumeRate,

    /// Conductance of the whole plate.
    pub conductance: VolumeRate,

    /// Total conductance times the differential pressure.
    pub throughput: GasThroughput,

    /// Mean time gas spends in the open volume.
    ///
    /// Zero when there is no throughput.
    pub residence_time: Time,
}

/// Builds the report for a plate operating in `gas`.
#[must_use]
pub fn build_report(plate: &ArrayGeometry, gas: &GasState) -> ReportRecord {
    let aperture_conductance = conductance(&plate.aperture, gas);
    let total = aperture_conductance * plate.count.get();
    let open_volume = plate.open_volume();
    let throughput: GasThroughput = total * gas.differential_pressure();

    let residence_time = if throughput > GasThroughput::ZERO {
        gas.average_pressure() * open_volume / throughput
    } else {
        Time::ZERO
    };

    ReportRecord {
        thickness: plate.aperture.thickness(),
        diameter: plate.aperture.diameter(),
        count: plate.count.get(),
        open_volume,
        aperture_conductance,
        conductance: total,
        throughput,
        residence_time,
    }
}

impl fmt::Display for ReportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "thickness:            {:.4} mm",
            self.thickness.get::<millimeter>()
        )?;
        writeln!(
            f,
            "diameter:             {:.4} mm",
            self.diameter.get::<millimeter>()
        )?;
        writeln!(f, "hole count:           {:.1}", self.count)?;
        writeln!(
            f,
            "open volume:          {:.3e} m³",
            self.open_volume.get::<cubic_meter>()
        )?;
        writeln!(
            f,
            "aperture conductance: {:.3e} m³/s",
            self.aperture_conductance.get::<cubic_meter_per_second>()
        )?;
        writeln!(
            f,
            "total conductance:    {:.5} m³/s ({:.2} L/s)",
            self.conductance.get::<cubic_meter_per_second>(),
            self.conductance.get::<liter_per_second>()
        )?;
        // Pa·m³/s and W share SI dimension and scale.
        writeln!(
            f,
            "gas throughput:       {:.3e} Pa·m³/s",
            self.throughput.get::<watt>()
        )?;
        write!(
            f,
            "residence time:       {:.2} ms",
            self.residence_time.get::<millisecond>()
        )
    }
}
