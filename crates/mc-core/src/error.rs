use thiserror::Error;

pub type McResult<T> = Result<T, McError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum McError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid state: {what}")]
    InvalidState { what: &'static str },

    #[error("Precondition violated: {what}")]
    Precondition { what: &'static str },

    #[error("Convergence failed: {what}")]
    Convergence { what: &'static str },
}
