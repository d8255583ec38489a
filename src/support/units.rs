//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, pressure,
//! volumetric flow). This module adds quantities that vacuum modeling needs
//! but [`uom`] does not name.
//!
//! ## Gas throughput
//!
//! Throughput is the pressure-volume flow through an aperture, conventionally
//! quoted in Pa·m³/s (or mbar·L/s). Dimensionally it is a power, so
//! [`GasThroughput`] shares its dimension with [`uom::si::f64::Power`] and the
//! SI value in watts is the value in Pa·m³/s:
//!
//! ```
//! use aperture_models::support::units::GasThroughput;
//! use uom::si::{
//!     f64::{Pressure, VolumeRate},
//!     power::watt,
//!     pressure::pascal,
//!     volume_rate::cubic_meter_per_second,
//! };
//!
//! let q: GasThroughput =
//!     VolumeRate::new::<cubic_meter_per_second>(0.02) * Pressure::new::<pascal>(2.0);
//! assert!((q.get::<watt>() - 0.04).abs() < 1e-15);
//! ```

mod quantities;

pub use quantities::GasThroughput;
