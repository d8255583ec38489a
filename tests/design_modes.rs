use aperture_models::{
    models::vacuum::aperture_array::{
        ApertureArray, ApertureGeometry, ArrayGeometry, Bracket, DesignRequest, Dimension,
        HoleCount, InverseConfig, InverseError,
    },
    support::{
        constraint::{Constrained, ConstraintError, StrictlyPositive},
        gas::{Chlorine, GasState},
    },
};
use approx::assert_relative_eq;
use twine_core::Model;
use uom::si::{
    f64::{Length, Pressure, ThermodynamicTemperature, VolumeRate},
    length::millimeter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    time::millisecond,
    volume_rate::cubic_meter_per_second,
};

fn model() -> ApertureArray {
    let gas = GasState::for_species::<Chlorine>(
        ThermodynamicTemperature::new::<kelvin>(293.0),
        Pressure::new::<pascal>(1.1),
        Pressure::new::<pascal>(1.0),
    )
    .unwrap();
    ApertureArray::new(gas)
}

fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

fn target(m3_s: f64) -> Constrained<VolumeRate, StrictlyPositive> {
    StrictlyPositive::new(VolumeRate::new::<cubic_meter_per_second>(m3_s)).unwrap()
}

fn holes(n: f64) -> HoleCount {
    HoleCount::new(n).unwrap()
}

fn fixed(value_mm: f64) -> Constrained<Length, StrictlyPositive> {
    StrictlyPositive::new(mm(value_mm)).unwrap()
}

#[test]
fn forward_conductance() {
    let plate = ArrayGeometry::new(ApertureGeometry::new(mm(10.0), mm(2.5)).unwrap(), holes(2200.0));

    let design = model().call(&DesignRequest::Conductance(plate)).unwrap();

    assert!(design.hole_count.is_none());
    assert_relative_eq!(
        design.report.conductance.get::<cubic_meter_per_second>(),
        0.016_154_602_247,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        design.report.residence_time.get::<millisecond>(),
        7.353_413_6,
        max_relative = 1e-8
    );
}

#[test]
fn hole_count_mode_reports_exact_and_rounded() {
    let request = DesignRequest::HoleCount {
        aperture: ApertureGeometry::new(mm(10.0), mm(3.0)).unwrap(),
        target: target(0.0157),
    };

    let design = model().call(&request).unwrap();
    let estimate = design.hole_count.expect("count mode reports an estimate");

    assert_eq!(estimate.rounded, 1053);
    assert_relative_eq!(design.report.count, estimate.exact.get());
    assert_relative_eq!(
        design.report.conductance.get::<cubic_meter_per_second>(),
        0.0157,
        max_relative = 1e-12
    );
}

#[test]
fn diameter_mode_roundtrips_through_forward_model() {
    let model = model();
    let request = DesignRequest::Diameter {
        thickness: fixed(10.0),
        count: holes(2200.0),
        target: target(0.0157),
    };

    let design = model.call(&request).unwrap();
    assert_relative_eq!(
        design.report.diameter.get::<millimeter>(),
        2.4818,
        epsilon = 5e-5
    );

    let plate = ArrayGeometry::new(
        ApertureGeometry::new(design.report.thickness, design.report.diameter).unwrap(),
        holes(2200.0),
    );
    let forward = model.call(&DesignRequest::Conductance(plate)).unwrap();
    assert_relative_eq!(
        forward.report.conductance.get::<cubic_meter_per_second>(),
        0.0157,
        max_relative = 1e-5
    );
    assert_eq!(forward.report, design.report);
}

#[test]
fn thickness_mode_roundtrips_through_forward_model() {
    let request = DesignRequest::Thickness {
        diameter: fixed(2.5),
        count: holes(2200.0),
        target: target(0.0157),
    };

    let design = model().call(&request).unwrap();

    assert_relative_eq!(
        design.report.thickness.get::<millimeter>(),
        10.2955,
        epsilon = 5e-5
    );
    assert_relative_eq!(
        design.report.conductance.get::<cubic_meter_per_second>(),
        0.0157,
        max_relative = 1e-5
    );
}

#[test]
fn unreachable_targets_are_errors() {
    let model = model();

    let diameter = model.call(&DesignRequest::Diameter {
        thickness: fixed(10.0),
        count: holes(2200.0),
        target: target(1000.0),
    });
    assert!(matches!(
        diameter,
        Err(InverseError::NoSolutionInRange {
            dimension: Dimension::Diameter,
            ..
        })
    ));

    let thickness = model.call(&DesignRequest::Thickness {
        diameter: fixed(2.5),
        count: holes(2200.0),
        target: target(10.0),
    });
    let err = thickness.expect_err("no thickness in range reaches 10 m³/s");
    assert!(err.to_string().contains("no thickness in"));
}

#[test]
fn custom_bracket_widens_diameter_search() {
    let config = InverseConfig {
        diameter_bracket: Bracket::new(mm(0.01), mm(500.0)).unwrap(),
        ..InverseConfig::default()
    };
    let model = model().with_config(config);

    let design = model
        .call(&DesignRequest::Diameter {
            thickness: fixed(10.0),
            count: holes(2200.0),
            target: target(1000.0),
        })
        .expect("wider bracket should reach the target");

    assert!(design.report.diameter > mm(50.0));
    assert_relative_eq!(
        design.report.conductance.get::<cubic_meter_per_second>(),
        1000.0,
        max_relative = 1e-5
    );
}

#[test]
fn every_mode_shares_the_report_schema() {
    let model = model();
    let requests = [
        DesignRequest::Conductance(ArrayGeometry::new(
            ApertureGeometry::new(mm(10.0), mm(2.5)).unwrap(),
            holes(2200.0),
        )),
        DesignRequest::HoleCount {
            aperture: ApertureGeometry::new(mm(10.0), mm(2.5)).unwrap(),
            target: target(0.0157),
        },
        DesignRequest::Diameter {
            thickness: fixed(10.0),
            count: holes(2200.0),
            target: target(0.0157),
        },
        DesignRequest::Thickness {
            diameter: fixed(2.5),
            count: holes(2200.0),
            target: target(0.0157),
        },
    ];

    for request in &requests {
        let text = model.call(request).unwrap().report.to_string();
        assert_eq!(text.lines().count(), 8);
        assert!(text.starts_with("thickness:"));
        assert!(text.contains("residence time:"));
    }
}

#[test]
fn malformed_fixed_dimension_never_reaches_the_solver() {
    assert_eq!(
        StrictlyPositive::new(mm(-10.0)).map(|_| ()),
        Err(ConstraintError::Negative)
    );
    assert_eq!(
        StrictlyPositive::new(mm(0.0)).map(|_| ()),
        Err(ConstraintError::Zero)
    );
}

#[test]
fn degenerate_hole_count_aperture_is_an_error() {
    let result = model().call(&DesignRequest::HoleCount {
        aperture: ApertureGeometry::new_unchecked(mm(0.0), mm(2.5)),
        target: target(0.0157),
    });

    assert!(matches!(
        result,
        Err(InverseError::DegenerateAperture { .. })
    ));
}
