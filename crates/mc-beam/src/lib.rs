//! mc-beam: statics of single-span, statically determinate beams.
//!
//! Closed-form reactions, shear, bending moment and deflection for the
//! standard cantilever and simply supported load cases.
//!
//! ## Sign conventions
//!
//! - Forces `F` and distributed loads `w` are magnitudes acting downward
//! - Reactions: positive upward
//! - Shear: V = dM/dx
//! - Moment: positive sagging
//! - Deflection: positive upward (a downward load gives negative `y`)
//!
//! # Example
//!
//! ```no_run
//! use mc_beam::{Beam, LoadCase, analyze};
//!
//! let beam = Beam::new(2.0, 200e9, 8.0e-6).unwrap();
//! let r = analyze(&beam, &LoadCase::CantileverEndLoad { force: 1000.0 }, 2.0).unwrap();
//! println!("tip deflection = {} m", r.deflection);
//! ```

pub mod analysis;
pub mod beam;
pub mod error;
pub mod load;

pub use analysis::{BeamResponse, Reactions, analyze, sample};
pub use beam::Beam;
pub use error::{BeamError, BeamResult};
pub use load::{LoadCase, Support};
