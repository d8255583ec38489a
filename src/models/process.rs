//! Process characterization models.
//!
//! This module contains models that reduce raw process measurements to
//! figures of merit, such as etch rates and selectivity.

pub mod etch;
