//! Minor-loss coefficients for fittings, valves and bends.

use crate::error::{FlowResult, non_negative_input};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Collection of loss coefficients (K factors) on a segment.
///
/// Empty by default, which makes the minor-loss pressure drop zero.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MinorLosses {
    coefficients: Vec<f64>,
}

impl MinorLosses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_coefficients(coefficients: impl IntoIterator<Item = f64>) -> FlowResult<Self> {
        let mut losses = Self::new();
        for k in coefficients {
            losses.push(k)?;
        }
        Ok(losses)
    }

    /// Add one K factor. Negative or non-finite values are rejected.
    pub fn push(&mut self, k: f64) -> FlowResult<()> {
        non_negative_input(k, "minor loss coefficient")?;
        self.coefficients.push(k);
        Ok(())
    }

    /// ΣK; exactly +0.0 when there are no fittings.
    pub fn sum(&self) -> f64 {
        // `Iterator::sum` on floats starts from -0.0.
        self.coefficients.iter().fold(0.0, |acc, k| acc + k)
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coefficients.iter().copied()
    }
}
