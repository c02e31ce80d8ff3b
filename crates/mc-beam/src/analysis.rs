//! # Closed-form beam response
//!
//! Reactions, shear, bending moment and deflection at a section `x` for each
//! `LoadCase`.
//!
//! ## Notation
//!
//! - `l` = span, `x` = position from the left end
//! - `a` = load position (or offset), `b = l - a`
//! - `F` = point load, `w` = distributed load, `M` = applied couple
//! - `EI` = flexural rigidity
//!
//! ## References
//!
//! - Shigley's Mechanical Engineering Design, Table A-9
//! - Roark's Formulas for Stress and Strain, Table 8.1

use crate::beam::Beam;
use crate::error::{BeamError, BeamResult};
use crate::load::{LoadCase, within};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Support reactions (positive upward; `m1` is the wall moment of a cantilever).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reactions {
    pub r1: f64,
    pub r2: f64,
    pub m1: f64,
}

/// Response of the beam at one section.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeamResponse {
    pub x: f64,
    pub reactions: Reactions,
    pub shear: f64,
    pub moment: f64,
    pub deflection: f64,
    /// Extreme deflection over the member, where a closed form exists
    pub max_deflection: Option<f64>,
}

/// Evaluate `case` on `beam` at position `x`.
pub fn analyze(beam: &Beam, case: &LoadCase, x: f64) -> BeamResult<BeamResponse> {
    case.validate(beam)?;
    within(x, 0.0, case.extent(beam), "position x")?;

    let l = beam.length();
    let ei = beam.flexural_rigidity();

    let r = match *case {
        LoadCase::CantileverEndLoad { force } => cantilever_end_load(force, l, ei, x),
        LoadCase::CantileverIntermediateLoad { force, a } => {
            cantilever_intermediate_load(force, a, l, ei, x)
        }
        LoadCase::CantileverUniformLoad { w } => cantilever_uniform_load(w, l, ei, x),
        LoadCase::CantileverMomentLoad { moment } => cantilever_moment_load(moment, l, ei, x),
        LoadCase::SimpleCenterLoad { force } => simple_center_load(force, l, ei, x),
        LoadCase::SimpleIntermediateLoad { force, a } => {
            simple_intermediate_load(force, a, l, ei, x)
        }
        LoadCase::SimpleUniformLoad { w } => simple_uniform_load(w, l, ei, x),
        LoadCase::SimpleMomentLoad { moment, a } => simple_moment_load(moment, a, l, ei, x),
        LoadCase::SimpleTwinLoad { force, a } => simple_twin_load(force, a, l, ei, x),
        LoadCase::SimpleOverhangingLoad { force, a } => {
            simple_overhanging_load(force, a, l, ei, x)
        }
    };
    Ok(r)
}

/// Evaluate `case` at `points` evenly spaced sections from end to end.
pub fn sample(beam: &Beam, case: &LoadCase, points: usize) -> BeamResult<Vec<BeamResponse>> {
    if points < 2 {
        return Err(BeamError::InvalidInput {
            what: "sample points (need at least 2)",
            value: points as f64,
        });
    }
    let extent = case.extent(beam);
    let n = (points - 1) as f64;
    let out = (0..points)
        .map(|i| {
            // Pin the last point to the end so rounding cannot leave the member.
            let x = if i == points - 1 {
                extent
            } else {
                extent * i as f64 / n
            };
            analyze(beam, case, x)
        })
        .collect::<BeamResult<Vec<_>>>()?;
    debug!(?case, points, "beam sampled");
    Ok(out)
}

fn response(
    x: f64,
    reactions: Reactions,
    shear: f64,
    moment: f64,
    deflection: f64,
    max_deflection: Option<f64>,
) -> BeamResponse {
    BeamResponse {
        x,
        reactions,
        shear,
        moment,
        deflection,
        max_deflection,
    }
}

// =============================================================================
// CANTILEVERS
// Fixed at x = 0, free at x = l
// =============================================================================

/// - R1 = V = F, M1 = -Fl
/// - M = F(x - l)
/// - y = Fx²(x - 3l)/(6EI), y_max = -Fl³/(3EI)
fn cantilever_end_load(f: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let reactions = Reactions {
        r1: f,
        r2: 0.0,
        m1: -f * l,
    };
    response(
        x,
        reactions,
        f,
        f * (x - l),
        f * x * x * (x - 3.0 * l) / (6.0 * ei),
        Some(-f * l.powi(3) / (3.0 * ei)),
    )
}

/// - R1 = F, M1 = -Fa
/// - V_AB = F, V_BC = 0
/// - M_AB = F(x - a), M_BC = 0
/// - y_AB = Fx²(x - 3a)/(6EI), y_BC = Fa²(a - 3x)/(6EI)
/// - y_max = Fa²(a - 3l)/(6EI)
fn cantilever_intermediate_load(f: f64, a: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let reactions = Reactions {
        r1: f,
        r2: 0.0,
        m1: -f * a,
    };
    let (shear, moment, y) = if x < a {
        (f, f * (x - a), f * x * x * (x - 3.0 * a) / (6.0 * ei))
    } else {
        (0.0, 0.0, f * a * a * (a - 3.0 * x) / (6.0 * ei))
    };
    response(
        x,
        reactions,
        shear,
        moment,
        y,
        Some(f * a * a * (a - 3.0 * l) / (6.0 * ei)),
    )
}

/// - R1 = wl, M1 = -wl²/2
/// - V = w(l - x), M = -w(l - x)²/2
/// - y = wx²(4lx - x² - 6l²)/(24EI), y_max = -wl⁴/(8EI)
fn cantilever_uniform_load(w: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let reactions = Reactions {
        r1: w * l,
        r2: 0.0,
        m1: -w * l * l / 2.0,
    };
    response(
        x,
        reactions,
        w * (l - x),
        -w * (l - x).powi(2) / 2.0,
        w * x * x * (4.0 * l * x - x * x - 6.0 * l * l) / (24.0 * ei),
        Some(-w * l.powi(4) / (8.0 * ei)),
    )
}

/// - R1 = V = 0, M1 = M = M_B
/// - y = M_B·x²/(2EI), y_max = M_B·l²/(2EI)
fn cantilever_moment_load(m: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let reactions = Reactions {
        r1: 0.0,
        r2: 0.0,
        m1: m,
    };
    response(
        x,
        reactions,
        0.0,
        m,
        m * x * x / (2.0 * ei),
        Some(m * l * l / (2.0 * ei)),
    )
}

// =============================================================================
// SIMPLE SUPPORTS
// Pin at x = 0, roller at x = l
// =============================================================================

/// - R1 = R2 = F/2
/// - V_AB = F/2, V_BC = -F/2
/// - M_AB = Fx/2, M_BC = F(l - x)/2
/// - y_AB = Fx(4x² - 3l²)/(48EI), symmetric about midspan
/// - y_max = -Fl³/(48EI)
fn simple_center_load(f: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let r = f / 2.0;
    let reactions = Reactions {
        r1: r,
        r2: r,
        m1: 0.0,
    };
    let half = l / 2.0;
    let shear = if x < half { r } else { -r };
    // Mirror the right half onto the left.
    let xs = if x <= half { x } else { l - x };
    response(
        x,
        reactions,
        shear,
        f * xs / 2.0,
        f * xs * (4.0 * xs * xs - 3.0 * l * l) / (48.0 * ei),
        Some(-f * l.powi(3) / (48.0 * ei)),
    )
}

/// - R1 = Fb/l, R2 = Fa/l
/// - V_AB = R1, V_BC = -R2
/// - M_AB = Fbx/l, M_BC = Fa(l - x)/l
/// - y_AB = Fbx(x² + b² - l²)/(6EIl)
/// - y_BC = Fa(l - x)(x² + a² - 2lx)/(6EIl)
///
/// The maximum lies in the longer segment, at x = √((l² - b²)/3) when a ≥ b.
fn simple_intermediate_load(f: f64, a: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let b = l - a;
    let reactions = Reactions {
        r1: f * b / l,
        r2: f * a / l,
        m1: 0.0,
    };
    let y_ab = |x: f64| f * b * x * (x * x + b * b - l * l) / (6.0 * ei * l);
    let y_bc = |x: f64| f * a * (l - x) * (x * x + a * a - 2.0 * l * x) / (6.0 * ei * l);

    let (shear, moment, y) = if x < a {
        (reactions.r1, f * b * x / l, y_ab(x))
    } else {
        (-reactions.r2, f * a * (l - x) / l, y_bc(x))
    };

    let y_max = if a >= b {
        y_ab(((l * l - b * b) / 3.0).sqrt())
    } else {
        y_bc(l - ((l * l - a * a) / 3.0).sqrt())
    };

    response(x, reactions, shear, moment, y, Some(y_max))
}

/// - R1 = R2 = wl/2
/// - V = wl/2 - wx, M = wx(l - x)/2
/// - y = wx(2lx² - x³ - l³)/(24EI), y_max = -5wl⁴/(384EI)
fn simple_uniform_load(w: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let r = w * l / 2.0;
    let reactions = Reactions {
        r1: r,
        r2: r,
        m1: 0.0,
    };
    response(
        x,
        reactions,
        r - w * x,
        w * x * (l - x) / 2.0,
        w * x * (2.0 * l * x * x - x.powi(3) - l.powi(3)) / (24.0 * ei),
        Some(-5.0 * w * l.powi(4) / (384.0 * ei)),
    )
}

/// - R1 = M_B/l, R2 = -M_B/l
/// - V = M_B/l
/// - M_AB = M_B·x/l, M_BC = M_B(x - l)/l
/// - y_AB = M_B·x(x² + 3a² - 6al + 2l²)/(6EIl)
/// - y_BC = M_B[x³ - 3lx² + x(2l² + 3a²) - 3a²l]/(6EIl)
fn simple_moment_load(m: f64, a: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let r = m / l;
    let reactions = Reactions {
        r1: r,
        r2: -r,
        m1: 0.0,
    };
    let (moment, y) = if x <= a {
        (
            m * x / l,
            m * x * (x * x + 3.0 * a * a - 6.0 * a * l + 2.0 * l * l) / (6.0 * ei * l),
        )
    } else {
        (
            m * (x - l) / l,
            m * (x.powi(3) - 3.0 * l * x * x + x * (2.0 * l * l + 3.0 * a * a) - 3.0 * a * a * l)
                / (6.0 * ei * l),
        )
    };
    response(x, reactions, r, moment, y, None)
}

/// - R1 = R2 = F
/// - V_AB = F, V_BC = 0, V_CD = -F
/// - M_AB = Fx, M_BC = Fa, M_CD = F(l - x)
/// - y_AB = Fx(x² + 3a² - 3la)/(6EI)
/// - y_BC = Fa(3x² + a² - 3lx)/(6EI)
/// - y_max = Fa(4a² - 3l²)/(24EI)
fn simple_twin_load(f: f64, a: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let reactions = Reactions {
        r1: f,
        r2: f,
        m1: 0.0,
    };
    let y_ab = |x: f64| f * x * (x * x + 3.0 * a * a - 3.0 * l * a) / (6.0 * ei);

    let (shear, moment, y) = if x < a {
        (f, f * x, y_ab(x))
    } else if x <= l - a {
        (
            0.0,
            f * a,
            f * a * (3.0 * x * x + a * a - 3.0 * l * x) / (6.0 * ei),
        )
    } else {
        (-f, f * (l - x), y_ab(l - x))
    };

    response(
        x,
        reactions,
        shear,
        moment,
        y,
        Some(f * a * (4.0 * a * a - 3.0 * l * l) / (24.0 * ei)),
    )
}

/// Supports at x = 0 and x = l; load at x = l + a.
///
/// - R1 = -Fa/l, R2 = F(l + a)/l
/// - V_AB = -Fa/l, V_BC = F
/// - M_AB = -Fax/l, M_BC = F(x - l - a)
/// - y_AB = Fax(l² - x²)/(6EIl)
/// - y_BC = F(x - l)[(x - l)² - a(3x - l)]/(6EI)
/// - y_tip = -Fa²(l + a)/(3EI); uplift peaks at x = l/√3
fn simple_overhanging_load(f: f64, a: f64, l: f64, ei: f64, x: f64) -> BeamResponse {
    let reactions = Reactions {
        r1: -f * a / l,
        r2: f * (l + a) / l,
        m1: 0.0,
    };
    let y_ab = |x: f64| f * a * x * (l * l - x * x) / (6.0 * ei * l);

    let (shear, moment, y) = if x < l {
        (reactions.r1, -f * a * x / l, y_ab(x))
    } else {
        let s = x - l;
        (
            f,
            f * (x - l - a),
            f * s * (s * s - a * (3.0 * x - l)) / (6.0 * ei),
        )
    };

    let tip = -f * a * a * (l + a) / (3.0 * ei);
    let uplift = y_ab(l / 3.0_f64.sqrt());
    let y_max = if tip.abs() >= uplift.abs() { tip } else { uplift };

    response(x, reactions, shear, moment, y, Some(y_max))
}
