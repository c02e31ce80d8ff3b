//! Physical constants (SI).

/// Gravitational acceleration for hydrostatic head, m/s².
pub const G_MPS2: f64 = 9.81;
