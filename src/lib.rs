//! # Aperture Models
//!
//! Gas conductance models for perforated plates in the transition-flow regime,
//! built as [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use aperture_models::models::vacuum::aperture_array::{
//!     ApertureArray, ApertureGeometry, ArrayGeometry, DesignRequest, HoleCount,
//! };
//! use aperture_models::support::gas::{Chlorine, GasState};
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, Pressure, ThermodynamicTemperature},
//!     length::millimeter,
//!     pressure::pascal,
//!     thermodynamic_temperature::kelvin,
//!     volume_rate::cubic_meter_per_second,
//! };
//!
//! let gas = GasState::for_species::<Chlorine>(
//!     ThermodynamicTemperature::new::<kelvin>(293.0),
//!     Pressure::new::<pascal>(1.1),
//!     Pressure::new::<pascal>(1.0),
//! )
//! .unwrap();
//!
//! let plate = ArrayGeometry::new(
//!     ApertureGeometry::new(
//!         Length::new::<millimeter>(10.0),
//!         Length::new::<millimeter>(2.5),
//!     )
//!     .unwrap(),
//!     HoleCount::new(2200.0).unwrap(),
//! );
//!
//! let design = ApertureArray::new(gas)
//!     .call(&DesignRequest::Conductance(plate))
//!     .unwrap();
//!
//! let total = design.report.conductance.get::<cubic_meter_per_second>();
//! assert!((total - 0.016_15).abs() < 1e-4);
//! ```
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Model-specific utility code stays inside each
//! model's private `core` module.

pub mod models;
pub mod support;
