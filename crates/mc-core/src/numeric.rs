//! Float helpers shared by the calculators.

use crate::McError;

pub type Real = f64;

/// Absolute/relative tolerance pair for comparing computed quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// `|a - b| <= abs`, or failing that `|a - b| <= rel * max(|a|, |b|)`.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Rejects NaN and infinities.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, McError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(McError::NonFinite { what, value: v })
    }
}

/// Accepts finite values strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, McError> {
    ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(McError::InvalidArg { what })
    }
}

/// Accepts finite values greater than or equal to zero.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, McError> {
    ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(McError::InvalidArg { what })
    }
}
