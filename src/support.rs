//! Supporting utilities shared by models.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`gas`]: Gas state and kinetic-theory helpers.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod gas;
pub mod units;
