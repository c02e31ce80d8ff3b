//! Darcy friction factor with regime policy.
//!
//! Laminar flow uses 64/Re exactly. Transitional and turbulent flow both go
//! through the Colebrook-White solve; the transitional band additionally
//! carries a `FlowWarning`.

use crate::colebrook::{ColebrookConfig, solve_colebrook};
use crate::error::{FlowResult, non_negative_input, positive_dimension};
use crate::regime::{FlowRegime, FlowWarning};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Friction factor together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrictionFactor {
    /// Darcy friction factor
    pub value: f64,
    pub regime: FlowRegime,
    /// Colebrook iterations (0 for laminar)
    pub iterations: usize,
    /// Colebrook residual at `value` (0 for laminar)
    pub residual: f64,
    /// Reynolds number the factor was evaluated at
    pub reynolds: f64,
}

impl FrictionFactor {
    /// Advisory for results in the transitional band.
    pub fn warning(&self) -> Option<FlowWarning> {
        self.regime
            .is_uncertain()
            .then_some(FlowWarning::TransitionalFlow {
                reynolds: self.reynolds,
            })
    }
}

/// ε/D_h
pub fn relative_roughness(roughness: f64, hydraulic_diameter: f64) -> FlowResult<f64> {
    let d = positive_dimension(hydraulic_diameter, "hydraulic diameter must be > 0")?;
    non_negative_input(roughness, "roughness")?;
    Ok(roughness / d)
}

/// Darcy friction factor using the default solver settings and the given
/// initial guess (0.04 is customary).
pub fn friction_factor(
    reynolds: f64,
    roughness: f64,
    hydraulic_diameter: f64,
    initial_guess: f64,
) -> FlowResult<FrictionFactor> {
    let config = ColebrookConfig::default().with_initial_guess(initial_guess);
    friction_factor_with(reynolds, roughness, hydraulic_diameter, &config)
}

/// Darcy friction factor with explicit solver settings.
pub fn friction_factor_with(
    reynolds: f64,
    roughness: f64,
    hydraulic_diameter: f64,
    config: &ColebrookConfig,
) -> FlowResult<FrictionFactor> {
    let regime = FlowRegime::classify(reynolds)?;

    if regime == FlowRegime::Laminar {
        return Ok(FrictionFactor {
            value: 64.0 / reynolds,
            regime,
            iterations: 0,
            residual: 0.0,
            reynolds,
        });
    }

    if regime == FlowRegime::Transitional {
        warn!(
            reynolds,
            "transitional flow regime; friction factor is low-confidence"
        );
    }

    let rr = relative_roughness(roughness, hydraulic_diameter)?;
    let sol = solve_colebrook(reynolds, rr, config)?;

    debug!(
        reynolds,
        relative_roughness = rr,
        f = sol.friction_factor,
        iterations = sol.iterations,
        "colebrook converged"
    );

    Ok(FrictionFactor {
        value: sol.friction_factor,
        regime,
        iterations: sol.iterations,
        residual: sol.residual,
        reynolds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colebrook::colebrook_residual;
    use crate::error::FlowError;

    #[test]
    fn laminar_is_exact_and_ignores_roughness() {
        for re in [1.0, 100.0, 1000.0, 2300.0] {
            let a = friction_factor(re, 0.0, 0.01, 0.04).unwrap();
            let b = friction_factor(re, 5e-3, 0.01, 0.04).unwrap();
            assert_eq!(a.value, 64.0 / re);
            assert_eq!(b.value, 64.0 / re);
            assert_eq!(a.regime, FlowRegime::Laminar);
            assert_eq!(a.iterations, 0);
            assert!(a.warning().is_none());
        }
    }

    #[test]
    fn laminar_ignores_a_bad_guess() {
        let f = friction_factor(1000.0, 0.0, 0.01, -1.0).unwrap();
        assert_eq!(f.value, 0.064);
    }

    #[test]
    fn transitional_band_warns_but_solves() {
        let f = friction_factor(3000.0, 0.0, 0.0125, 0.04).unwrap();
        assert_eq!(f.regime, FlowRegime::Transitional);
        assert!(colebrook_residual(f.value, 3000.0, 0.0).abs() < 1e-8);
        assert_eq!(
            f.warning(),
            Some(FlowWarning::TransitionalFlow { reynolds: 3000.0 })
        );
    }

    #[test]
    fn turbulent_uses_relative_roughness() {
        let smooth = friction_factor(1e5, 0.0, 0.05, 0.04).unwrap();
        let rough = friction_factor(1e5, 5e-4, 0.05, 0.04).unwrap();
        assert_eq!(rough.regime, FlowRegime::Turbulent);
        assert!(rough.value > smooth.value);
        assert!(rough.warning().is_none());
        assert!(colebrook_residual(rough.value, 1e5, 0.01).abs() < 1e-8);
    }

    #[test]
    fn zero_reynolds_is_invalid_flow_state() {
        assert!(matches!(
            friction_factor(0.0, 0.0, 0.01, 0.04),
            Err(FlowError::InvalidFlowState { .. })
        ));
        assert!(matches!(
            friction_factor(-5.0, 0.0, 0.01, 0.04),
            Err(FlowError::InvalidFlowState { .. })
        ));
    }

    #[test]
    fn pathological_guess_in_turbulent_flow_fails() {
        for guess in [0.0, -0.5] {
            assert!(matches!(
                friction_factor(1e5, 0.0, 0.01, guess),
                Err(FlowError::SolverDidNotConverge { .. })
            ));
        }
    }

    #[test]
    fn turbulent_requires_valid_geometry() {
        assert!(matches!(
            friction_factor(1e5, 0.0, 0.0, 0.04),
            Err(FlowError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            friction_factor(1e5, -1e-5, 0.01, 0.04),
            Err(FlowError::InvalidInput { .. })
        ));
    }
}
