use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::VolumeRate;

use crate::support::constraint::ConstraintError;

use super::{ApertureGeometry, Bracket, Dimension};

/// Errors that can occur while solving for a plate parameter.
#[derive(Debug, Error)]
pub enum InverseError {
    /// The target conductance is not reachable within the search bracket.
    ///
    /// The residual (achieved minus target single-aperture conductance) has
    /// the same sign at both ends of the bracket. Widening the bracket may
    /// find a solution.
    #[error("no {dimension} in {bracket} reaches the target conductance")]
    NoSolutionInRange {
        /// The plate dimension being solved for.
        dimension: Dimension,

        /// The bracket that was searched.
        bracket: Bracket,

        /// Residuals at the low and high ends of the bracket.
        residuals: [VolumeRate; 2],
    },

    /// An aperture dimension is zero, negative or NaN.
    #[error("degenerate aperture: {aperture:?}")]
    DegenerateAperture {
        /// The offending aperture.
        aperture: ApertureGeometry,
    },

    /// The aperture conducts no gas, so no finite hole count reaches the target.
    #[error("aperture conductance is zero")]
    NonConductive,

    /// The computed hole count is not a valid count.
    #[error("invalid hole count")]
    InvalidCount(#[from] ConstraintError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best single-aperture conductance residual achieved.
        residual: VolumeRate,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
