//! Perforated plate conductance model.
//!
//! [`ApertureArray`] answers four design questions about a plate perforated by
//! identical cylindrical holes, all in the same operating [`GasState`]:
//!
//! - What is the total conductance of a given plate?
//! - How many holes reach a target conductance?
//! - What hole diameter reaches it?
//! - What plate thickness reaches it?
//!
//! Each question is a [`DesignRequest`] variant. Whatever is solved for, the
//! answer is a [`Design`] carrying the same [`ReportRecord`] schema.

mod core;

pub use self::core::{
    ApertureGeometry, ApertureSolution, ArrayGeometry, Bracket, BracketError,
    DEGENERATE_CONDUCTANCE, Dimension, HoleCount, HoleCountEstimate, InverseConfig, InverseError,
    ReportRecord, array_conductance, build_report, conductance, molecular_conductance,
    required_hole_count, solve_diameter, solve_thickness, transmission_probability,
    viscous_conductance,
};

use twine_core::Model;
use uom::si::f64::{Length, VolumeRate};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    gas::GasState,
};

/// A plate design question.
///
/// Fixed dimensions and targets are validated on construction, so a
/// malformed input never reaches an inverse solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignRequest {
    /// Evaluate a fully specified plate.
    Conductance(ArrayGeometry),

    /// Find the hole count for a given aperture.
    HoleCount {
        aperture: ApertureGeometry,
        target: Constrained<VolumeRate, StrictlyPositive>,
    },

    /// Find the hole diameter for a given thickness and count.
    Diameter {
        thickness: Constrained<Length, StrictlyPositive>,
        count: HoleCount,
        target: Constrained<VolumeRate, StrictlyPositive>,
    },

    /// Find the plate thickness for a given diameter and count.
    Thickness {
        diameter: Constrained<Length, StrictlyPositive>,
        count: HoleCount,
        target: Constrained<VolumeRate, StrictlyPositive>,
    },
}

/// The answer to a [`DesignRequest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Design {
    /// Report for the resolved plate.
    pub report: ReportRecord,

    /// Exact and rounded hole counts, for [`DesignRequest::HoleCount`] only.
    ///
    /// The report uses the exact count.
    pub hole_count: Option<HoleCountEstimate>,
}

/// Perforated plate model for a fixed operating gas state.
///
/// The model holds no mutable state, so one instance can serve any number of
/// requests, including from multiple threads.
#[derive(Debug, Clone, Copy)]
pub struct ApertureArray {
    gas: GasState,
    config: InverseConfig,
}

impl ApertureArray {
    /// Creates a model with the default inverse solver configuration.
    #[must_use]
    pub fn new(gas: GasState) -> Self {
        Self {
            gas,
            config: InverseConfig::default(),
        }
    }

    /// Replaces the inverse solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: InverseConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn gas(&self) -> &GasState {
        &self.gas
    }

    #[must_use]
    pub fn config(&self) -> &InverseConfig {
        &self.config
    }

    /// Resolves a design request to a concrete plate and reports on it.
    ///
    /// # Errors
    ///
    /// Returns an [`InverseError`] if the hole-count aperture is degenerate,
    /// or if an inverse solve has no solution in its bracket or fails to
    /// converge.
    pub fn design(&self, request: &DesignRequest) -> Result<Design, InverseError> {
        let (plate, hole_count) = match *request {
            DesignRequest::Conductance(plate) => (plate, None),
            DesignRequest::HoleCount { aperture, target } => {
                let estimate = required_hole_count(&aperture, target, &self.gas)?;
                (ArrayGeometry::new(aperture, estimate.exact), Some(estimate))
            }
            DesignRequest::Diameter {
                thickness,
                count,
                target,
            } => {
                let solution = solve_diameter(thickness, count, target, &self.gas, &self.config)?;
                (ArrayGeometry::new(solution.aperture, count), None)
            }
            DesignRequest::Thickness {
                diameter,
                count,
                target,
            } => {
                let solution = solve_thickness(diameter, count, target, &self.gas, &self.config)?;
                (ArrayGeometry::new(solution.aperture, count), None)
            }
        };

        Ok(Design {
            report: build_report(&plate, &self.gas),
            hole_count,
        })
    }
}

impl Model for ApertureArray {
    type Input = DesignRequest;
    type Output = Design;
    type Error = InverseError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.design(input)
    }
}
