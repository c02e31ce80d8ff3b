use crate::error::{BeamError, BeamResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Prismatic beam.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBeam"))]
pub struct Beam {
    /// Span length (m); for an overhanging case, the distance between supports
    length: f64,
    /// Young's modulus (Pa)
    elastic_modulus: f64,
    /// Second moment of area (m⁴)
    moment_of_inertia: f64,
}

impl Beam {
    pub fn new(length: f64, elastic_modulus: f64, moment_of_inertia: f64) -> BeamResult<Self> {
        positive(length, "beam length must be > 0")?;
        positive(elastic_modulus, "elastic modulus must be > 0")?;
        positive(moment_of_inertia, "moment of inertia must be > 0")?;
        Ok(Self {
            length,
            elastic_modulus,
            moment_of_inertia,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn elastic_modulus(&self) -> f64 {
        self.elastic_modulus
    }

    pub fn moment_of_inertia(&self) -> f64 {
        self.moment_of_inertia
    }

    /// EI
    pub fn flexural_rigidity(&self) -> f64 {
        self.elastic_modulus * self.moment_of_inertia
    }
}

fn positive(v: f64, what: &'static str) -> BeamResult<f64> {
    mc_core::ensure_positive(v, what).map_err(|_| BeamError::InvalidGeometry { what })
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBeam {
    length: f64,
    elastic_modulus: f64,
    moment_of_inertia: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBeam> for Beam {
    type Error = BeamError;

    fn try_from(raw: RawBeam) -> BeamResult<Self> {
        Beam::new(raw.length, raw.elastic_modulus, raw.moment_of_inertia)
    }
}
