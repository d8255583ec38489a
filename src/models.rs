//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by domain:
//!
//! - [`vacuum`]: Gas flow through vacuum hardware.
//! - [`process`]: Plasma process characterization.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The [`twine_core::Model`]
//! implementation is a thin adapter that delegates to the core API.

pub mod process;
pub mod vacuum;
