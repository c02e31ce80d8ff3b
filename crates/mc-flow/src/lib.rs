//! mc-flow: steady, incompressible internal pipe flow.
//!
//! Provides:
//! - cross-section geometry (area, wetted perimeter, hydraulic diameter)
//! - an immutable `Fluid` value
//! - flow-regime classification and the Darcy friction factor, with the
//!   Colebrook-White equation solved by a bounded Newton iteration
//! - frictional, hydrostatic and minor-loss pressure drops
//! - `PipeSegment`, which runs the calculation pipeline as a guarded
//!   state machine
//!
//! All quantities are plain `f64` in SI units.
//!
//! # Example
//!
//! ```no_run
//! use mc_flow::{Fluid, PipeSegment};
//!
//! let water = Fluid::new("water", 1000.0, 8.9e-4, 25.0).unwrap();
//! let mut pipe = PipeSegment::builder()
//!     .diameter(0.0125)
//!     .length(1.0)
//!     .roughness(0.0)
//!     .height_change(1.0)
//!     .build()
//!     .unwrap();
//!
//! let report = pipe.solve(&water, 1.4 / 60_000.0).unwrap();
//! println!("dp_total = {} Pa (Re = {})", report.pressure_drops.total, report.reynolds_number);
//! ```

pub mod colebrook;
pub mod error;
pub mod fluid;
pub mod friction;
pub mod geometry;
pub mod minor_loss;
pub mod pipe;
pub mod pressure_drop;
pub mod regime;

// Re-exports
pub use colebrook::{
    ColebrookConfig, ColebrookSolution, colebrook_residual, solve_colebrook, swamee_jain,
};
pub use error::{FlowError, FlowResult};
pub use fluid::Fluid;
pub use friction::{FrictionFactor, friction_factor, friction_factor_with, relative_roughness};
pub use geometry::{CrossSection, SectionProperties};
pub use minor_loss::MinorLosses;
pub use pipe::{PipeFlowReport, PipeSegment, PipeSegmentBuilder, PipeStage};
pub use pressure_drop::PressureDrops;
pub use regime::{FlowRegime, FlowWarning, LAMINAR_LIMIT, TURBULENT_LIMIT};
