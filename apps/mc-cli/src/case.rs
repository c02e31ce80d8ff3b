//! YAML case files.
//!
//! Everything in a case file is SI except the flow rate, which carries its
//! own unit tag and is converted here before it reaches the library.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use mc_beam::{Beam, LoadCase};
use mc_flow::{ColebrookConfig, FlowResult, Fluid, MinorLosses, PipeSegment};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uom::si::f64::VolumeRate;
use uom::si::volume_rate::{
    cubic_meter_per_hour, cubic_meter_per_second, liter_per_minute, liter_per_second,
};

use crate::error::{CliError, CliResult};

/// Read and parse a YAML case file.
pub fn load<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::CaseFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| CliError::CaseFileParse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipeCase {
    pub fluid: Fluid,
    pub pipe: PipeSpec,
    pub flow_rate: FlowRate,
    #[serde(default)]
    pub solver: SolverSpec,
}

/// Pipe geometry as written in a case file: a diameter, or a width and height.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipeSpec {
    pub diameter: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: f64,
    #[serde(default)]
    pub roughness: f64,
    #[serde(default)]
    pub height_change: f64,
    #[serde(default)]
    pub minor_losses: Vec<f64>,
    pub gravity: Option<f64>,
}

impl PipeSpec {
    pub fn build(&self, solver: ColebrookConfig) -> FlowResult<PipeSegment> {
        let mut builder = PipeSegment::builder()
            .length(self.length)
            .roughness(self.roughness)
            .height_change(self.height_change)
            .minor_losses(MinorLosses::from_coefficients(
                self.minor_losses.iter().copied(),
            )?)
            .solver(solver);
        if let Some(d) = self.diameter {
            builder = builder.diameter(d);
        }
        if let Some(w) = self.width {
            builder = builder.width(w);
        }
        if let Some(h) = self.height {
            builder = builder.height(h);
        }
        if let Some(g) = self.gravity {
            builder = builder.gravity(g);
        }
        builder.build()
    }
}

/// Volumetric flow rate with its unit.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FlowRate {
    pub value: f64,
    pub unit: FlowRateUnit,
}

impl FlowRate {
    /// Flow rate in m³/s.
    pub fn to_si(self) -> f64 {
        let q = match self.unit {
            FlowRateUnit::CubicMeterPerSecond => {
                VolumeRate::new::<cubic_meter_per_second>(self.value)
            }
            FlowRateUnit::LiterPerMinute => VolumeRate::new::<liter_per_minute>(self.value),
            FlowRateUnit::LiterPerSecond => VolumeRate::new::<liter_per_second>(self.value),
            FlowRateUnit::CubicMeterPerHour => VolumeRate::new::<cubic_meter_per_hour>(self.value),
        };
        q.get::<cubic_meter_per_second>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FlowRateUnit {
    #[serde(rename = "m3/s")]
    CubicMeterPerSecond,
    #[serde(rename = "L/min")]
    LiterPerMinute,
    #[serde(rename = "L/s")]
    LiterPerSecond,
    #[serde(rename = "m3/h")]
    CubicMeterPerHour,
}

impl FlowRateUnit {
    fn tag(self) -> &'static str {
        match self {
            Self::CubicMeterPerSecond => "m3/s",
            Self::LiterPerMinute => "L/min",
            Self::LiterPerSecond => "L/s",
            Self::CubicMeterPerHour => "m3/h",
        }
    }
}

impl fmt::Display for FlowRateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FlowRateUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m3/s" => Ok(Self::CubicMeterPerSecond),
            "L/min" | "l/min" => Ok(Self::LiterPerMinute),
            "L/s" | "l/s" => Ok(Self::LiterPerSecond),
            "m3/h" => Ok(Self::CubicMeterPerHour),
            other => Err(format!(
                "unknown flow rate unit '{other}' (expected m3/s, L/min, L/s or m3/h)"
            )),
        }
    }
}

/// Overrides for the Colebrook solver; missing fields keep their defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverSpec {
    pub initial_guess: Option<f64>,
    pub max_iterations: Option<usize>,
}

impl SolverSpec {
    pub fn config(self) -> ColebrookConfig {
        let defaults = ColebrookConfig::default();
        ColebrookConfig {
            initial_guess: self.initial_guess.unwrap_or(defaults.initial_guess),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            ..defaults
        }
    }
}

/// Beam case: evaluated at `at` if given, otherwise sampled at `points`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeamCase {
    pub beam: Beam,
    pub load: LoadCase,
    pub at: Option<f64>,
    pub points: Option<usize>,
}

impl BeamCase {
    pub const DEFAULT_POINTS: usize = 11;

    pub fn validate(&self) -> CliResult<()> {
        if self.at.is_some() && self.points.is_some() {
            return Err(CliError::InvalidCase(
                "give either 'at' or 'points', not both".to_string(),
            ));
        }
        Ok(())
    }
}
