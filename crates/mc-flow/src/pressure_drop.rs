//! Velocity, Reynolds number and pressure-drop relations.
//!
//! Sign convention: a positive pressure drop is a loss from inlet to outlet.
//! Elevation gain (positive height change) is therefore a positive drop.

use crate::error::{FlowError, FlowResult, non_negative_input, positive_dimension};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean velocity, Q/A.
pub fn velocity(flow_rate: f64, area: f64) -> FlowResult<f64> {
    non_negative_input(flow_rate, "volumetric flow rate")?;
    let a = positive_dimension(area, "cross-sectional area must be > 0")?;
    Ok(flow_rate / a)
}

/// Reynolds number, ρ·D_h·v/μ.
pub fn reynolds(
    density: f64,
    hydraulic_diameter: f64,
    velocity: f64,
    viscosity: f64,
) -> FlowResult<f64> {
    if !(viscosity.is_finite() && viscosity > 0.0) {
        return Err(FlowError::InvalidFlowState {
            what: "dynamic viscosity must be > 0",
            value: viscosity,
        });
    }
    let re = density * hydraulic_diameter * velocity / viscosity;
    if !re.is_finite() {
        return Err(FlowError::InvalidFlowState {
            what: "Reynolds number",
            value: re,
        });
    }
    Ok(re)
}

/// Darcy-Weisbach frictional loss, L·f·ρ·v²/(2·D_h).
pub fn dp_friction(
    friction_factor: f64,
    density: f64,
    length: f64,
    hydraulic_diameter: f64,
    velocity: f64,
) -> f64 {
    length * friction_factor * density * velocity.powi(2) / (2.0 * hydraulic_diameter)
}

/// Hydrostatic loss, ρ·Δh·g.
pub fn dp_height(density: f64, height_change: f64, g: f64) -> f64 {
    density * height_change * g
}

/// Fittings loss, ΣK·ρ·v²/2.
pub fn dp_minor(sum_k: f64, density: f64, velocity: f64) -> f64 {
    sum_k * density * velocity.powi(2) / 2.0
}

pub fn dp_total(friction: f64, height: f64, minor: f64) -> f64 {
    friction + height + minor
}

/// Pressure-drop breakdown for one segment (Pa).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureDrops {
    pub friction: f64,
    pub height: f64,
    pub minor: f64,
    pub total: f64,
}

impl PressureDrops {
    pub fn new(friction: f64, height: f64, minor: f64) -> Self {
        Self {
            friction,
            height,
            minor,
            total: dp_total(friction, height, minor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::constants::G_MPS2;

    #[test]
    fn velocity_from_flow_rate() {
        let v = velocity(0.002, 0.01).unwrap();
        assert!((v - 0.2).abs() < 1e-15);
        assert_eq!(velocity(0.0, 0.01).unwrap(), 0.0);
    }

    #[test]
    fn negative_flow_rate_rejected() {
        assert!(matches!(
            velocity(-1e-3, 0.01),
            Err(FlowError::InvalidInput { .. })
        ));
        assert!(matches!(
            velocity(1e-3, 0.0),
            Err(FlowError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn reynolds_number() {
        let re = reynolds(1000.0, 0.05, 2.0, 1e-3).unwrap();
        assert!((re - 100_000.0).abs() < 1e-6);
    }

    #[test]
    fn reynolds_rejects_non_positive_viscosity() {
        for mu in [0.0, -1e-3, f64::NAN] {
            assert!(matches!(
                reynolds(1000.0, 0.05, 2.0, mu),
                Err(FlowError::InvalidFlowState { .. })
            ));
        }
    }

    #[test]
    fn darcy_weisbach() {
        // 10 m, f = 0.02, water at 2 m/s in 50 mm: 0.02 * 10/0.05 * 1000 * 4 / 2
        let dp = dp_friction(0.02, 1000.0, 10.0, 0.05, 2.0);
        assert!((dp - 8000.0).abs() < 1e-9);
    }

    #[test]
    fn hydrostatic_is_signed() {
        assert!((dp_height(1000.0, 1.0, G_MPS2) - 9810.0).abs() < 1e-9);
        assert!((dp_height(1000.0, -2.0, G_MPS2) + 19_620.0).abs() < 1e-9);
        assert_eq!(dp_height(1000.0, 0.0, G_MPS2), 0.0);
    }

    #[test]
    fn minor_losses() {
        assert!((dp_minor(2.0, 1000.0, 3.0) - 9000.0).abs() < 1e-9);
        assert_eq!(dp_minor(0.0, 1000.0, 3.0), 0.0);
    }

    #[test]
    fn breakdown_total_is_sum() {
        let drops = PressureDrops::new(120.5, -9810.0, 33.25);
        assert_eq!(drops.total, 120.5 - 9810.0 + 33.25);
    }
}
