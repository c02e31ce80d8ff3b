//! Load cases and their parameter ranges.

use crate::beam::Beam;
use crate::error::{BeamError, BeamResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boundary conditions of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// Fixed at x = 0, free at x = L
    Cantilever,
    /// Pin at x = 0, roller at x = L
    SimplySupported,
}

/// Standard single-span load cases.
///
/// `a` is measured from the left end unless noted otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "case", rename_all = "snake_case"))]
pub enum LoadCase {
    /// Point load at the free end.
    CantileverEndLoad { force: f64 },
    /// Point load at `a`.
    CantileverIntermediateLoad { force: f64, a: f64 },
    /// Uniform load `w` (N/m) over the full length.
    CantileverUniformLoad { w: f64 },
    /// Couple applied at the free end.
    CantileverMomentLoad { moment: f64 },
    /// Point load at midspan.
    SimpleCenterLoad { force: f64 },
    /// Point load at `a`.
    SimpleIntermediateLoad { force: f64, a: f64 },
    /// Uniform load `w` (N/m) over the span.
    SimpleUniformLoad { w: f64 },
    /// Couple applied at `a`.
    SimpleMomentLoad { moment: f64, a: f64 },
    /// Two equal point loads, each `a` in from its nearest support.
    SimpleTwinLoad { force: f64, a: f64 },
    /// Point load on an overhang, `a` beyond the right support.
    SimpleOverhangingLoad { force: f64, a: f64 },
}

impl LoadCase {
    pub fn support(&self) -> Support {
        match self {
            Self::CantileverEndLoad { .. }
            | Self::CantileverIntermediateLoad { .. }
            | Self::CantileverUniformLoad { .. }
            | Self::CantileverMomentLoad { .. } => Support::Cantilever,
            _ => Support::SimplySupported,
        }
    }

    /// Total length of the member, including any overhang.
    pub fn extent(&self, beam: &Beam) -> f64 {
        match *self {
            Self::SimpleOverhangingLoad { a, .. } => beam.length() + a,
            _ => beam.length(),
        }
    }

    /// Check load magnitudes and offsets against the beam.
    pub fn validate(&self, beam: &Beam) -> BeamResult<()> {
        let l = beam.length();
        match *self {
            Self::CantileverEndLoad { force } | Self::SimpleCenterLoad { force } => {
                finite(force, "force")
            }
            Self::CantileverUniformLoad { w } | Self::SimpleUniformLoad { w } => {
                finite(w, "distributed load")
            }
            Self::CantileverMomentLoad { moment } => finite(moment, "moment"),
            Self::CantileverIntermediateLoad { force, a }
            | Self::SimpleIntermediateLoad { force, a } => {
                finite(force, "force")?;
                within(a, 0.0, l, "load position a")
            }
            Self::SimpleMomentLoad { moment, a } => {
                finite(moment, "moment")?;
                within(a, 0.0, l, "load position a")
            }
            Self::SimpleTwinLoad { force, a } => {
                finite(force, "force")?;
                within(a, 0.0, 0.5 * l, "twin load offset a")
            }
            Self::SimpleOverhangingLoad { force, a } => {
                finite(force, "force")?;
                within(a, 0.0, f64::INFINITY, "overhang length a")
            }
        }
    }
}

fn finite(v: f64, what: &'static str) -> BeamResult<()> {
    mc_core::ensure_finite(v, what)
        .map(|_| ())
        .map_err(|_| BeamError::InvalidInput { what, value: v })
}

pub(crate) fn within(v: f64, lo: f64, hi: f64, what: &'static str) -> BeamResult<()> {
    if v.is_finite() && v >= lo && v <= hi {
        Ok(())
    } else {
        Err(BeamError::InvalidInput { what, value: v })
    }
}
