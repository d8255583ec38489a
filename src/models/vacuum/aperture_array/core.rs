//! Transition-flow conductance of plates perforated by cylindrical holes.
//!
//! A plate is described by its thickness `L`, the hole diameter `D` and the
//! hole count `N`. The transport model ([`conductance`]) gives the conductance of one hole,
//! the plate conducts `N` times that, and [`build_report`] derives the volume,
//! throughput and residence time that follow from it.
//!
//! The inverse problems fix two of `{L, D, N}` and a target total conductance:
//!
//! - [`required_hole_count`] divides directly, since conductance is linear in `N`.
//! - [`solve_diameter`] and [`solve_thickness`] bisect over a configurable
//!   [`Bracket`], relying on conductance being monotone in `D` and `L`.

mod geometry;
mod hole_count;
mod inverse;
mod report;
mod transport;

#[cfg(test)]
mod test_support;

pub use geometry::{ApertureGeometry, ArrayGeometry, HoleCount};
pub use hole_count::{HoleCountEstimate, required_hole_count};
pub use inverse::{
    ApertureSolution, Bracket, BracketError, Dimension, InverseConfig, InverseError,
    solve_diameter, solve_thickness,
};
pub use report::{ReportRecord, build_report};
pub use transport::{
    DEGENERATE_CONDUCTANCE, array_conductance, conductance, molecular_conductance,
    transmission_probability, viscous_conductance,
};
