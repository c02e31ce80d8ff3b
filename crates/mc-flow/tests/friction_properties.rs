//! Property tests for the friction-factor policy.

use mc_flow::{
    FlowRegime, Fluid, LAMINAR_LIMIT, PipeSegment, TURBULENT_LIMIT, colebrook_residual,
    friction_factor,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn laminar_is_exactly_64_over_re(
        re in 1e-3_f64..=LAMINAR_LIMIT,
        roughness in 0.0_f64..1e-2,
        dh in 1e-3_f64..1.0,
    ) {
        let f = friction_factor(re, roughness, dh, 0.04).unwrap();
        prop_assert_eq!(f.value, 64.0 / re);
        prop_assert_eq!(f.regime, FlowRegime::Laminar);
    }

    #[test]
    fn turbulent_root_satisfies_colebrook(
        re in TURBULENT_LIMIT + 1.0..1e8_f64,
        roughness in 0.0_f64..5e-3,
        dh in 1e-1_f64..1.0,
    ) {
        let f = friction_factor(re, roughness, dh, 0.04).unwrap();
        prop_assert!(f.value > 0.0 && f.value <= 0.1);
        let r = colebrook_residual(f.value, re, roughness / dh);
        prop_assert!(r.abs() < 1e-8, "residual {} at Re={} rr={}", r, re, roughness / dh);
    }

    #[test]
    fn friction_decreases_with_reynolds(
        re in TURBULENT_LIMIT + 1.0..1e7_f64,
        factor in 1.01_f64..10.0,
        rr in 0.0_f64..1e-3,
    ) {
        let lo = friction_factor(re, rr, 1.0, 0.04).unwrap().value;
        let hi = friction_factor(re * factor, rr, 1.0, 0.04).unwrap().value;
        prop_assert!(hi < lo, "f({}) = {} not < f({}) = {}", re * factor, hi, re, lo);
    }

    #[test]
    fn total_is_sum_of_parts(
        d in 5e-3_f64..0.5,
        length in 0.1_f64..500.0,
        roughness in 0.0_f64..1e-3,
        dz in -50.0_f64..50.0,
        q in 1e-6_f64..0.1,
    ) {
        let fluid = Fluid::new("water", 998.0, 1e-3, 20.0).unwrap();
        let mut pipe = PipeSegment::builder()
            .diameter(d)
            .length(length)
            .roughness(roughness)
            .height_change(dz)
            .build()
            .unwrap();
        let report = pipe.solve(&fluid, q).unwrap();
        let dp = report.pressure_drops;
        prop_assert_eq!(dp.total, dp.friction + dp.height + dp.minor);
        prop_assert!(report.reynolds_number > 0.0 && report.reynolds_number.is_finite());
    }
}
