//! mc-core: shared foundation for mechcalc.
//!
//! Contains:
//! - numeric (Real, tolerances, finiteness and sign checks)
//! - constants (physical constants shared by the calculators)
//! - error (shared error type)

pub mod constants;
pub mod error;
pub mod numeric;

// Flat re-exports for the calculator crates
pub use error::{McError, McResult};
pub use numeric::*;
