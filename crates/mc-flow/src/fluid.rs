//! Fluid property record.

use crate::error::{FlowError, FlowResult, finite_input};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Constant-property fluid.
///
/// Immutable after construction; share it by reference across any number of
/// pipe calculations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFluid"))]
pub struct Fluid {
    name: String,
    /// Density (kg/m³)
    density: f64,
    /// Dynamic viscosity (Pa·s)
    dynamic_viscosity: f64,
    /// Temperature the properties were taken at (°C)
    temperature: f64,
}

impl Fluid {
    /// Create a fluid with validated properties.
    pub fn new(
        name: impl Into<String>,
        density: f64,
        dynamic_viscosity: f64,
        temperature: f64,
    ) -> FlowResult<Self> {
        positive(density, "density")?;
        positive(dynamic_viscosity, "dynamic viscosity")?;
        finite_input(temperature, "temperature")?;
        Ok(Self {
            name: name.into(),
            density,
            dynamic_viscosity,
            temperature,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn dynamic_viscosity(&self) -> f64 {
        self.dynamic_viscosity
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// ν = μ/ρ (m²/s)
    pub fn kinematic_viscosity(&self) -> f64 {
        self.dynamic_viscosity / self.density
    }
}

fn positive(v: f64, what: &'static str) -> FlowResult<f64> {
    mc_core::ensure_positive(v, what).map_err(|_| FlowError::InvalidInput { what, value: v })
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawFluid {
    name: String,
    density: f64,
    dynamic_viscosity: f64,
    temperature: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFluid> for Fluid {
    type Error = FlowError;

    fn try_from(raw: RawFluid) -> FlowResult<Self> {
        Fluid::new(raw.name, raw.density, raw.dynamic_viscosity, raw.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_properties() {
        let water = Fluid::new("water", 1000.0, 8.9e-4, 25.0).unwrap();
        assert_eq!(water.name(), "water");
        assert_eq!(water.density(), 1000.0);
        assert_eq!(water.dynamic_viscosity(), 8.9e-4);
        assert_eq!(water.temperature(), 25.0);
        assert!((water.kinematic_viscosity() - 8.9e-7).abs() < 1e-18);
    }

    #[test]
    fn rejects_non_physical_properties() {
        assert!(matches!(
            Fluid::new("x", 0.0, 1e-3, 20.0),
            Err(FlowError::InvalidInput {
                what: "density",
                ..
            })
        ));
        assert!(matches!(
            Fluid::new("x", 1000.0, -1e-3, 20.0),
            Err(FlowError::InvalidInput {
                what: "dynamic viscosity",
                ..
            })
        ));
        assert!(Fluid::new("x", 1000.0, 1e-3, f64::NAN).is_err());
    }

    #[test]
    fn negative_temperature_is_allowed() {
        let brine = Fluid::new("brine", 1200.0, 4e-3, -10.0).unwrap();
        assert_eq!(brine.temperature(), -10.0);
    }
}
