//! Beam calculation errors.

use mc_core::McError;
use thiserror::Error;

/// Result type for beam operations.
pub type BeamResult<T> = Result<T, BeamError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BeamError {
    /// Non-positive beam property.
    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    /// Position or load parameter outside its valid range.
    #[error("Invalid input for {what}: {value}")]
    InvalidInput { what: &'static str, value: f64 },
}

impl From<BeamError> for McError {
    fn from(err: BeamError) -> Self {
        match err {
            BeamError::InvalidGeometry { what } => McError::InvalidGeometry { what },
            BeamError::InvalidInput { what, .. } => McError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BeamError::InvalidInput {
            what: "position x",
            value: 3.5,
        };
        assert!(err.to_string().contains("position x"));
        assert!(err.to_string().contains("3.5"));
    }

    #[test]
    fn error_to_mc_error() {
        let err: McError = BeamError::InvalidGeometry { what: "length" }.into();
        assert!(matches!(err, McError::InvalidGeometry { what: "length" }));
    }
}
