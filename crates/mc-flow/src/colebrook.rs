//! Colebrook-White friction factor.
//!
//! The equation
//!
//! ```text
//! -1/√f - 2·log10( 2.51/(Re·√f) + (ε/D_h)/3.7 ) = 0
//! ```
//!
//! has no closed form. Substituting x = 1/√f gives
//! g(x) = x + 2·log10(a·x + b) with a = 2.51/Re and b = (ε/D_h)/3.7, which is
//! increasing and concave for x > 0. Newton's method on g therefore lands at
//! or below the root after the first step and then climbs to it
//! monotonically, and the iteration count is capped regardless.

use crate::error::{FlowError, FlowResult, non_negative_input};
use mc_core::{Tolerances, nearly_equal};
use std::f64::consts::LN_10;
use tracing::trace;

/// Colebrook solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookConfig {
    /// Starting friction factor, must lie in (0, 1)
    pub initial_guess: f64,
    /// Maximum Newton iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the Colebrook residual
    pub abs_tol: f64,
    /// Relative tolerance on the change in f between iterations
    pub rel_tol: f64,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.04,
            max_iterations: 50,
            abs_tol: 1e-10,
            rel_tol: 1e-8,
        }
    }
}

impl ColebrookConfig {
    pub fn with_initial_guess(self, initial_guess: f64) -> Self {
        Self {
            initial_guess,
            ..self
        }
    }
}

/// Converged Colebrook solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookSolution {
    /// Darcy friction factor
    pub friction_factor: f64,
    /// Newton iterations taken
    pub iterations: usize,
    /// Colebrook residual at `friction_factor`
    pub residual: f64,
}

/// Residual of the Colebrook-White equation at `f`.
///
/// Zero at the root; NaN when `f` is not positive.
pub fn colebrook_residual(f: f64, reynolds: f64, relative_roughness: f64) -> f64 {
    let inv_sqrt_f = 1.0 / f.sqrt();
    -inv_sqrt_f - 2.0 * (2.51 / reynolds * inv_sqrt_f + relative_roughness / 3.7).log10()
}

/// Swamee-Jain explicit approximation to Colebrook-White.
///
/// Within about 1% of the implicit root for 5e3 ≤ Re ≤ 1e8 and
/// 1e-6 ≤ ε/D ≤ 1e-2.
pub fn swamee_jain(reynolds: f64, relative_roughness: f64) -> f64 {
    let a = relative_roughness / 3.7;
    let b = 5.74 / reynolds.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}

/// Solve Colebrook-White for the Darcy friction factor.
pub fn solve_colebrook(
    reynolds: f64,
    relative_roughness: f64,
    config: &ColebrookConfig,
) -> FlowResult<ColebrookSolution> {
    if !(reynolds.is_finite() && reynolds > 0.0) {
        return Err(FlowError::InvalidFlowState {
            what: "Reynolds number must be > 0",
            value: reynolds,
        });
    }
    non_negative_input(relative_roughness, "relative roughness")?;

    let guess = config.initial_guess;
    if !(guess.is_finite() && guess > 0.0 && guess < 1.0) {
        return Err(FlowError::SolverDidNotConverge {
            iterations: 0,
            residual: colebrook_residual(guess, reynolds, relative_roughness),
        });
    }

    let a = 2.51 / reynolds;
    let b = relative_roughness / 3.7;
    let g = |x: f64| x + 2.0 * (a * x + b).log10();
    let dg = |x: f64| 1.0 + 2.0 * a / ((a * x + b) * LN_10);

    // Step-to-step agreement on f is judged relative only.
    let step_tol = Tolerances {
        abs: 0.0,
        rel: config.rel_tol,
    };

    let mut x = 1.0 / guess.sqrt();
    let mut residual = -g(x);

    for iter in 1..=config.max_iterations {
        let mut x_next = x - g(x) / dg(x);
        if !(x_next > 0.0) {
            // The tangent can undershoot past zero from far right of the root.
            x_next = 0.5 * x;
        }

        let f_prev = 1.0 / (x * x);
        let f = 1.0 / (x_next * x_next);
        residual = -g(x_next);

        trace!(iter, f, residual, "colebrook newton step");

        if !(f.is_finite() && residual.is_finite()) {
            return Err(FlowError::SolverDidNotConverge {
                iterations: iter,
                residual,
            });
        }

        if residual.abs() < config.abs_tol || nearly_equal(f, f_prev, step_tol) {
            return Ok(ColebrookSolution {
                friction_factor: f,
                iterations: iter,
                residual,
            });
        }

        x = x_next;
    }

    Err(FlowError::SolverDidNotConverge {
        iterations: config.max_iterations,
        residual,
    })
}
