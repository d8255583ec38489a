//! Inverse solvers for plate diameter and thickness.
//!
//! Given a target total conductance, a hole count and one plate dimension,
//! these solvers find the other dimension by bisection over the transport
//! model. Conductance is monotone in both dimensions, so a sign change of the
//! residual across the search bracket guarantees exactly one root.

mod config;
mod error;
mod problem;

pub use config::{Bracket, BracketError, InverseConfig};
pub use error::InverseError;

use std::fmt;

use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Length, VolumeRate},
        length::meter,
        volume_rate::cubic_meter_per_second,
    },
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    gas::GasState,
};

use super::{ApertureGeometry, HoleCount};

use problem::{FreeDimensionModel, TargetConductance};

/// The plate dimension an inverse solve varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Diameter,
    Thickness,
}

impl Dimension {
    /// Builds an aperture with this dimension set to `free` and the other to `fixed`.
    fn aperture(self, free: Length, fixed: Length) -> ApertureGeometry {
        match self {
            Dimension::Diameter => ApertureGeometry::new_unchecked(fixed, free),
            Dimension::Thickness => ApertureGeometry::new_unchecked(free, fixed),
        }
    }

    /// Reads this dimension off an aperture.
    fn of(self, aperture: &ApertureGeometry) -> Length {
        match self {
            Dimension::Diameter => aperture.diameter(),
            Dimension::Thickness => aperture.thickness(),
        }
    }

    fn bracket(self, config: &InverseConfig) -> Bracket {
        match self {
            Dimension::Diameter => config.diameter_bracket,
            Dimension::Thickness => config.thickness_bracket,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Diameter => f.write_str("diameter"),
            Dimension::Thickness => f.write_str("thickness"),
        }
    }
}

/// A solved aperture and its single-aperture conductance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApertureSolution {
    pub aperture: ApertureGeometry,
    pub conductance: VolumeRate,
}

/// Solves for the hole diameter that gives `target` total conductance.
///
/// # Errors
///
/// Returns [`InverseError::NoSolutionInRange`] if the target is unreachable
/// within the configured diameter bracket, or another [`InverseError`] if the
/// solver fails to converge.
pub fn solve_diameter(
    thickness: Constrained<Length, StrictlyPositive>,
    count: HoleCount,
    target: Constrained<VolumeRate, StrictlyPositive>,
    gas: &GasState,
    config: &InverseConfig,
) -> Result<ApertureSolution, InverseError> {
    solve_dimension(Dimension::Diameter, thickness, count, target, gas, config)
}

/// Solves for the plate thickness that gives `target` total conductance.
///
/// # Errors
///
/// Returns [`InverseError::NoSolutionInRange`] if the target is unreachable
/// within the configured thickness bracket, or another [`InverseError`] if the
/// solver fails to converge.
pub fn solve_thickness(
    diameter: Constrained<Length, StrictlyPositive>,
    count: HoleCount,
    target: Constrained<VolumeRate, StrictlyPositive>,
    gas: &GasState,
    config: &InverseConfig,
) -> Result<ApertureSolution, InverseError> {
    solve_dimension(Dimension::Thickness, diameter, count, target, gas, config)
}

fn solve_dimension(
    free: Dimension,
    fixed: Constrained<Length, StrictlyPositive>,
    count: HoleCount,
    target: Constrained<VolumeRate, StrictlyPositive>,
    gas: &GasState,
    config: &InverseConfig,
) -> Result<ApertureSolution, InverseError> {
    let fixed = fixed.into_inner();
    let target_single = target.into_inner() / count.get();
    let bracket = free.bracket(config);

    let model = FreeDimensionModel::new(gas, free, fixed);
    let problem = TargetConductance::new(target_single);

    tracing::debug!(
        dimension = %free,
        fixed = ?fixed,
        target = ?target_single,
        %bracket,
        "solving aperture dimension"
    );

    let residuals = [
        problem.residual(&model.evaluate(bracket.low())),
        problem.residual(&model.evaluate(bracket.high())),
    ];
    let straddles_root = (residuals[0] <= VolumeRate::ZERO && residuals[1] >= VolumeRate::ZERO)
        || (residuals[0] >= VolumeRate::ZERO && residuals[1] <= VolumeRate::ZERO);

    if !straddles_root {
        tracing::warn!(dimension = %free, %bracket, "target conductance out of range");
        return Err(InverseError::NoSolutionInRange {
            dimension: free,
            bracket,
            residuals,
        });
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [bracket.low().get::<meter>(), bracket.high().get::<meter>()],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(InverseError::MaxIters {
            residual: VolumeRate::new::<cubic_meter_per_second>(solution.residual),
            iters: solution.iters,
        });
    }

    let solved = solution.snapshot.output;
    debug_assert!(bracket.contains(free.of(&solved.aperture)));

    tracing::debug!(
        dimension = %free,
        solved = ?solved.aperture,
        iters = solution.iters,
        "aperture dimension converged"
    );

    Ok(solved)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    use crate::{
        models::vacuum::aperture_array::core::{
            test_support::{chlorine, mm},
            transport::conductance,
        },
        support::constraint::ConstraintError,
    };

    fn target(m3_s: f64) -> Constrained<VolumeRate, StrictlyPositive> {
        StrictlyPositive::new(VolumeRate::new::<cubic_meter_per_second>(m3_s)).unwrap()
    }

    fn holes(n: f64) -> HoleCount {
        HoleCount::new(n).unwrap()
    }

    fn fixed(value_mm: f64) -> Constrained<Length, StrictlyPositive> {
        StrictlyPositive::new(mm(value_mm)).unwrap()
    }

    fn total(solution: &ApertureSolution, gas: &GasState, n: f64) -> f64 {
        conductance(&solution.aperture, gas).get::<cubic_meter_per_second>() * n
    }

    #[test]
    fn diameter_roundtrip() {
        let gas = chlorine();

        let solution = solve_diameter(
            fixed(10.0),
            holes(2200.0),
            target(0.0157),
            &gas,
            &InverseConfig::default(),
        )
        .expect("diameter solve should succeed");

        assert_relative_eq!(
            solution.aperture.diameter().get::<millimeter>(),
            2.481_766_086,
            max_relative = 1e-8
        );
        assert_relative_eq!(solution.aperture.thickness().get::<millimeter>(), 10.0);
        assert_relative_eq!(total(&solution, &gas, 2200.0), 0.0157, max_relative = 1e-5);
    }

    #[test]
    fn thickness_roundtrip() {
        let gas = chlorine();

        let solution = solve_thickness(
            fixed(2.5),
            holes(2200.0),
            target(0.0157),
            &gas,
            &InverseConfig::default(),
        )
        .expect("thickness solve should succeed");

        assert_relative_eq!(
            solution.aperture.thickness().get::<millimeter>(),
            10.295_533_977,
            max_relative = 1e-8
        );
        assert_relative_eq!(total(&solution, &gas, 2200.0), 0.0157, max_relative = 1e-5);
    }

    #[test]
    fn solution_conductance_matches_forward_model() {
        let gas = chlorine();

        let solution = solve_diameter(
            fixed(10.0),
            holes(1000.0),
            target(0.0157),
            &gas,
            &InverseConfig::default(),
        )
        .expect("diameter solve should succeed");

        assert_eq!(
            solution.conductance,
            conductance(&solution.aperture, &gas)
        );
        assert_relative_eq!(
            solution.aperture.diameter().get::<millimeter>(),
            3.040_142_543,
            max_relative = 1e-8
        );
    }

    #[test]
    fn unreachable_diameter_reports_no_solution() {
        let gas = chlorine();

        let err = solve_diameter(
            fixed(10.0),
            holes(2200.0),
            target(1000.0),
            &gas,
            &InverseConfig::default(),
        )
        .expect_err("no diameter up to 50 mm reaches 1000 m³/s");

        match err {
            InverseError::NoSolutionInRange {
                dimension,
                bracket,
                residuals,
            } => {
                assert_eq!(dimension, Dimension::Diameter);
                assert_eq!(bracket, Bracket::diameter());
                assert!(residuals[0] < VolumeRate::ZERO);
                assert!(residuals[1] < VolumeRate::ZERO);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unreachable_thickness_reports_no_solution() {
        let gas = chlorine();
        let config = InverseConfig::default();

        // Even the thinnest plate in range conducts less than this.
        let too_high = solve_thickness(fixed(2.5), holes(2200.0), target(10.0), &gas, &config);
        assert!(matches!(
            too_high,
            Err(InverseError::NoSolutionInRange {
                dimension: Dimension::Thickness,
                ..
            })
        ));

        // Even the thickest plate in range conducts more than this.
        let too_low = solve_thickness(fixed(2.5), holes(2200.0), target(1e-5), &gas, &config);
        assert!(matches!(
            too_low,
            Err(InverseError::NoSolutionInRange { .. })
        ));
    }

    #[test]
    fn widened_bracket_finds_solution() {
        let gas = chlorine();
        let config = InverseConfig {
            thickness_bracket: Bracket::new(mm(0.1), mm(100_000.0)).unwrap(),
            ..InverseConfig::default()
        };

        let solution = solve_thickness(fixed(2.5), holes(2200.0), target(1e-5), &gas, &config)
            .expect("wider bracket should contain the root");

        assert!(solution.aperture.thickness() > mm(1000.0));
        assert_relative_eq!(total(&solution, &gas, 2200.0), 1e-5, max_relative = 1e-5);
    }

    #[test]
    fn solved_dimension_lies_in_bracket() {
        let gas = chlorine();
        let config = InverseConfig::default();

        let diameter = solve_diameter(fixed(10.0), holes(2200.0), target(0.0157), &gas, &config)
            .expect("diameter solve should succeed");
        let thickness = solve_thickness(fixed(2.5), holes(2200.0), target(0.0157), &gas, &config)
            .expect("thickness solve should succeed");

        assert!(config.diameter_bracket.contains(diameter.aperture.diameter()));
        assert!(config.thickness_bracket.contains(thickness.aperture.thickness()));
        assert_eq!(Dimension::Diameter.of(&diameter.aperture), diameter.aperture.diameter());
        assert_eq!(Dimension::Thickness.of(&thickness.aperture), thickness.aperture.thickness());
    }

    #[test]
    fn non_positive_fixed_dimension_is_rejected_up_front() {
        assert_eq!(
            StrictlyPositive::new(mm(-10.0)).map(|_| ()),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::new(mm(0.0)).map(|_| ()),
            Err(ConstraintError::Zero)
        );
    }
}
