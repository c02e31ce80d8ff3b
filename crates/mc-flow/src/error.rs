//! Error types for flow calculations.

use mc_core::McError;
use thiserror::Error;

/// Errors that can occur while evaluating pipe flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// Non-positive or missing geometric dimension.
    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    /// Negative or nonsensical physical quantity.
    #[error("Invalid input for {what}: {value}")]
    InvalidInput { what: &'static str, value: f64 },

    /// A pipeline step was invoked before the step it depends on.
    #[error("Precondition violated: {what}")]
    PreconditionViolated { what: &'static str },

    /// Flow state with no defined friction factor (Re or viscosity not positive).
    #[error("Invalid flow state for {what}: {value}")]
    InvalidFlowState { what: &'static str, value: f64 },

    /// The Colebrook iteration hit its cap or left the valid domain.
    #[error("Colebrook solver did not converge after {iterations} iterations (residual = {residual})")]
    SolverDidNotConverge { iterations: usize, residual: f64 },
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<FlowError> for McError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::InvalidGeometry { what } => McError::InvalidGeometry { what },
            FlowError::InvalidInput { what, .. } => McError::InvalidArg { what },
            FlowError::PreconditionViolated { what } => McError::Precondition { what },
            FlowError::InvalidFlowState { what, .. } => McError::InvalidState { what },
            FlowError::SolverDidNotConverge { .. } => McError::Convergence {
                what: "Colebrook friction factor",
            },
        }
    }
}

/// Map a shared positivity/finiteness check onto `InvalidGeometry`.
pub(crate) fn positive_dimension(v: f64, what: &'static str) -> FlowResult<f64> {
    mc_core::ensure_positive(v, what).map_err(|_| FlowError::InvalidGeometry { what })
}

/// Map a shared finiteness check onto `InvalidInput`.
pub(crate) fn finite_input(v: f64, what: &'static str) -> FlowResult<f64> {
    mc_core::ensure_finite(v, what).map_err(|_| FlowError::InvalidInput { what, value: v })
}

/// Map a shared finite-and-non-negative check onto `InvalidInput`.
pub(crate) fn non_negative_input(v: f64, what: &'static str) -> FlowResult<f64> {
    mc_core::ensure_non_negative(v, what).map_err(|_| FlowError::InvalidInput { what, value: v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FlowError::InvalidInput {
            what: "flow rate",
            value: -1.0,
        };
        assert!(err.to_string().contains("flow rate"));

        let err = FlowError::SolverDidNotConverge {
            iterations: 50,
            residual: 0.5,
        };
        assert!(err.to_string().contains("50 iterations"));
    }

    #[test]
    fn error_conversion() {
        let err: McError = FlowError::PreconditionViolated { what: "velocity" }.into();
        assert!(matches!(err, McError::Precondition { what: "velocity" }));

        let err: McError = FlowError::SolverDidNotConverge {
            iterations: 3,
            residual: 1.0,
        }
        .into();
        assert!(matches!(err, McError::Convergence { .. }));

        let err: McError = FlowError::InvalidFlowState {
            what: "Reynolds number must be > 0",
            value: 0.0,
        }
        .into();
        assert!(matches!(err, McError::InvalidState { .. }));
        assert!(err.to_string().starts_with("Invalid state"));
    }

    #[test]
    fn geometry_check_rejects_zero_and_nan() {
        assert_eq!(positive_dimension(0.5, "d"), Ok(0.5));
        assert!(matches!(
            positive_dimension(0.0, "d"),
            Err(FlowError::InvalidGeometry { what: "d" })
        ));
        assert!(positive_dimension(f64::NAN, "d").is_err());
    }
}
