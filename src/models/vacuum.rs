//! Vacuum hardware models.
//!
//! This module contains gas conductance models for chamber hardware such as
//! perforated baffles and showerhead plates.

pub mod aperture_array;
