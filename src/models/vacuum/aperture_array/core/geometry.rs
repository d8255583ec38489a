use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length, Volume},
    length::meter,
};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Geometry of a single cylindrical aperture through a plate.
///
/// The validated constructors guarantee positive dimensions.
/// [`ApertureGeometry::new_unchecked`] also admits zero or negative dimensions,
/// which the transport model treats as degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApertureGeometry {
    thickness: Length,
    diameter: Length,
}

impl ApertureGeometry {
    /// Constructs a validated aperture geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if either the plate thickness or the hole diameter is
    /// not strictly positive.
    pub fn new(thickness: Length, diameter: Length) -> ConstraintResult<Self> {
        let thickness = Constrained::<Length, StrictlyPositive>::new(thickness)?;
        let diameter = Constrained::<Length, StrictlyPositive>::new(diameter)?;
        Ok(Self::from_constrained(thickness, diameter))
    }

    /// Constructs an aperture geometry from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        thickness: Constrained<Length, StrictlyPositive>,
        diameter: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            thickness: thickness.into_inner(),
            diameter: diameter.into_inner(),
        }
    }

    /// Constructs an aperture geometry without validation.
    ///
    /// Non-positive dimensions are allowed and yield the degenerate conductance.
    #[must_use]
    pub fn new_unchecked(thickness: Length, diameter: Length) -> Self {
        Self {
            thickness,
            diameter,
        }
    }

    /// Returns the plate thickness, which is the channel length `L`.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }

    /// Returns the hole diameter `D`.
    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    /// Returns `true` if either dimension is not strictly positive.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        // Written as negations so NaN dimensions also count as degenerate.
        !(self.thickness.get::<meter>() > 0.0 && self.diameter.get::<meter>() > 0.0)
    }

    /// Returns the hole cross-section area `π·D²/4`.
    #[must_use]
    pub fn cross_section(&self) -> Area {
        self.diameter * self.diameter * (PI / 4.0)
    }

    /// Returns the open volume of the hole, `π·D²/4·L`.
    #[must_use]
    pub fn open_volume(&self) -> Volume {
        self.cross_section() * self.thickness
    }
}

/// Number of holes in a plate.
///
/// Counts are real-valued so the hole-count inverse can report its exact
/// (non-integer) result before rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoleCount(Constrained<f64, StrictlyPositive>);

impl HoleCount {
    /// Creates a hole count.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is not strictly positive.
    pub fn new(count: f64) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(count)?))
    }

    /// Returns the count as a plain number.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.0.get()
    }
}

/// A plate perforated by identical apertures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayGeometry {
    pub aperture: ApertureGeometry,
    pub count: HoleCount,
}

impl ArrayGeometry {
    #[must_use]
    pub fn new(aperture: ApertureGeometry, count: HoleCount) -> Self {
        Self { aperture, count }
    }

    /// Returns the combined open volume of all holes.
    #[must_use]
    pub fn open_volume(&self) -> Volume {
        self.aperture.open_volume() * self.count.get()
    }
}
