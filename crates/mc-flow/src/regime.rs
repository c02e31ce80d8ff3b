//! Flow-regime classification by Reynolds number.

use crate::error::{FlowError, FlowResult};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper Reynolds number (inclusive) of the laminar regime.
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// Upper Reynolds number (inclusive) of the transitional band.
pub const TURBULENT_LIMIT: f64 = 4000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlowRegime {
    /// Re ≤ 2300
    Laminar,
    /// 2300 < Re ≤ 4000
    Transitional,
    /// Re > 4000
    Turbulent,
}

impl FlowRegime {
    /// Classify a Reynolds number.
    ///
    /// Zero, negative or non-finite values have no regime and are rejected.
    pub fn classify(reynolds: f64) -> FlowResult<Self> {
        if !(reynolds.is_finite() && reynolds > 0.0) {
            return Err(FlowError::InvalidFlowState {
                what: "Reynolds number must be > 0",
                value: reynolds,
            });
        }

        Ok(if reynolds <= LAMINAR_LIMIT {
            Self::Laminar
        } else if reynolds <= TURBULENT_LIMIT {
            Self::Transitional
        } else {
            Self::Turbulent
        })
    }

    /// Whether results in this regime should be treated as low-confidence.
    pub fn is_uncertain(self) -> bool {
        matches!(self, Self::Transitional)
    }
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Laminar => "laminar",
            Self::Transitional => "transitional",
            Self::Turbulent => "turbulent",
        };
        f.write_str(s)
    }
}

/// Non-fatal advisories attached to a successful result.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum FlowWarning {
    #[error(
        "Transitional flow (Re = {reynolds:.0}): friction factor from the turbulent correlation is low-confidence"
    )]
    TransitionalFlow { reynolds: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_upper_bounds() {
        assert_eq!(FlowRegime::classify(1.0).unwrap(), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(2300.0).unwrap(), FlowRegime::Laminar);
        assert_eq!(
            FlowRegime::classify(2300.000_001).unwrap(),
            FlowRegime::Transitional
        );
        assert_eq!(
            FlowRegime::classify(4000.0).unwrap(),
            FlowRegime::Transitional
        );
        assert_eq!(FlowRegime::classify(4000.1).unwrap(), FlowRegime::Turbulent);
        assert_eq!(FlowRegime::classify(1e8).unwrap(), FlowRegime::Turbulent);
    }

    #[test]
    fn degenerate_reynolds_rejected() {
        for re in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                FlowRegime::classify(re),
                Err(FlowError::InvalidFlowState { .. })
            ));
        }
    }

    #[test]
    fn only_transitional_is_uncertain() {
        assert!(!FlowRegime::Laminar.is_uncertain());
        assert!(FlowRegime::Transitional.is_uncertain());
        assert!(!FlowRegime::Turbulent.is_uncertain());
    }

    #[test]
    fn warning_display() {
        let w = FlowWarning::TransitionalFlow { reynolds: 2671.4 };
        let msg = w.to_string();
        assert!(msg.contains("2671"));
        assert!(msg.contains("low-confidence"));
    }
}
