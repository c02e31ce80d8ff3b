//! End-to-end pipe evaluations.

use mc_flow::{
    ColebrookConfig, CrossSection, FlowError, FlowRegime, FlowWarning, Fluid, MinorLosses,
    PipeSegment, PipeStage,
};

fn water_25c() -> Fluid {
    Fluid::new("water", 1000.0, 8.9e-4, 25.0).unwrap()
}

#[test]
fn small_bore_riser_is_transitional() {
    let fluid = water_25c();
    let mut pipe = PipeSegment::builder()
        .diameter(0.0125)
        .length(1.0)
        .roughness(0.0)
        .height_change(1.0)
        .build()
        .unwrap();

    // 1.4 L/min
    let flow_rate = 1.4 / 60_000.0;

    let v = pipe.set_velocity(flow_rate).unwrap();
    assert!((v - 0.1902).abs() < 1e-4, "velocity = {v}");

    let re = pipe.compute_reynolds(&fluid).unwrap();
    assert!((re - 2671.0).abs() < 1.0, "Re = {re}");

    let drops = pipe.compute_friction_and_pressure_drop(&fluid).unwrap();
    assert!((drops.height - 9810.0).abs() < 1e-6);
    assert_eq!(drops.minor, 0.0);
    assert!(drops.minor.is_sign_positive());
    assert!(drops.friction > 0.0);
    assert_eq!(drops.total, drops.friction + drops.height + drops.minor);

    let friction = pipe.friction().unwrap();
    assert_eq!(friction.regime, FlowRegime::Transitional);
    assert!(matches!(
        pipe.warning(),
        Some(FlowWarning::TransitionalFlow { .. })
    ));
    assert!(pipe.report().unwrap().warning.is_some());
}

#[test]
fn laminar_flow_matches_hagen_poiseuille() {
    // Oil-like fluid, well inside the laminar regime.
    let oil = Fluid::new("oil", 900.0, 0.1, 40.0).unwrap();
    let d = 0.02;
    let l = 3.0;
    let q = 1e-4;

    let mut pipe = PipeSegment::builder()
        .diameter(d)
        .length(l)
        .roughness(1e-3)
        .build()
        .unwrap();
    let report = pipe.solve(&oil, q).unwrap();

    assert_eq!(report.friction.regime, FlowRegime::Laminar);
    assert_eq!(report.friction.value, 64.0 / report.reynolds_number);
    assert!(report.warning.is_none());

    // Δp = 128·μ·L·Q/(π·d⁴)
    let expected = 128.0 * 0.1 * l * q / (std::f64::consts::PI * d.powi(4));
    let rel = (report.pressure_drops.friction - expected).abs() / expected;
    assert!(rel < 1e-12, "rel error {rel}");
}

#[test]
fn turbulent_water_main() {
    let fluid = Fluid::new("water", 998.2, 1.002e-3, 20.0).unwrap();
    let mut pipe = PipeSegment::new(CrossSection::circular(0.1).unwrap(), 100.0, 4.5e-5, 0.0)
        .unwrap()
        .with_minor_losses(MinorLosses::from_coefficients([0.3, 0.3, 10.0]).unwrap());

    let report = pipe.solve(&fluid, 0.02).unwrap();

    assert_eq!(report.friction.regime, FlowRegime::Turbulent);
    assert!(report.reynolds_number > 2.5e5);
    // Moody chart region for ε/D = 4.5e-4
    assert!(report.friction.value > 0.016 && report.friction.value < 0.020);
    assert!(report.pressure_drops.minor > 0.0);
    assert_eq!(
        report.pressure_drops.total,
        report.pressure_drops.friction + report.pressure_drops.height + report.pressure_drops.minor
    );
}

#[test]
fn rectangular_duct_uses_hydraulic_diameter() {
    let air = Fluid::new("air", 1.2, 1.81e-5, 20.0).unwrap();
    let mut duct = PipeSegment::builder()
        .width(0.4)
        .height(0.2)
        .length(20.0)
        .roughness(1.5e-4)
        .build()
        .unwrap();

    assert!((duct.hydraulic_diameter() - 4.0 * 0.08 / 1.2).abs() < 1e-12);
    let report = duct.solve(&air, 0.4).unwrap();
    let expected_re = 1.2 * duct.hydraulic_diameter() * 5.0 / 1.81e-5;
    assert!((report.reynolds_number - expected_re).abs() / expected_re < 1e-12);
}

#[test]
fn missing_cross_section_is_invalid_geometry() {
    let err = PipeSegment::builder()
        .length(1.0)
        .roughness(0.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, FlowError::InvalidGeometry { .. }));
}

#[test]
fn reynolds_before_velocity_is_precondition_violation() {
    let mut pipe = PipeSegment::builder()
        .diameter(0.0125)
        .length(1.0)
        .build()
        .unwrap();
    let err = pipe.compute_reynolds(&water_25c()).unwrap_err();
    assert!(matches!(err, FlowError::PreconditionViolated { .. }));
    assert_eq!(pipe.stage(), PipeStage::Constructed);
}

#[test]
fn pathological_guess_reports_non_convergence() {
    for guess in [0.0, -1.0] {
        let mut pipe = PipeSegment::builder()
            .diameter(0.05)
            .length(1.0)
            .solver(ColebrookConfig::default().with_initial_guess(guess))
            .build()
            .unwrap();
        let err = pipe.solve(&water_25c(), 0.005).unwrap_err();
        assert!(matches!(err, FlowError::SolverDidNotConverge { .. }));
    }
}

#[test]
fn one_fluid_many_segments() {
    let fluid = water_25c();
    let lengths = [1.0, 2.0, 4.0];
    let totals: Vec<f64> = lengths
        .iter()
        .map(|&l| {
            let mut p = PipeSegment::builder()
                .diameter(0.025)
                .length(l)
                .roughness(1.5e-6)
                .build()
                .unwrap();
            p.solve(&fluid, 5e-4).unwrap().pressure_drops.total
        })
        .collect();

    // Friction only, so drop scales with length.
    assert!((totals[1] / totals[0] - 2.0).abs() < 1e-12);
    assert!((totals[2] / totals[0] - 4.0).abs() < 1e-12);
}
