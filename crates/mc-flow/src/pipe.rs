//! Pipe segment with a guarded calculation pipeline.
//!
//! Geometry is frozen at construction. Derived quantities are produced in a
//! fixed order, each step requiring the previous one:
//!
//! ```text
//! Constructed → VelocitySet → ReynoldsSet → FrictionFactorSet → PressureDropsComputed
//! ```
//!
//! Re-running an earlier step discards everything downstream of it.
//! A segment must not be driven from two threads at once; share the
//! `Fluid` freely.

use crate::colebrook::ColebrookConfig;
use crate::error::{FlowError, FlowResult, finite_input, non_negative_input, positive_dimension};
use crate::fluid::Fluid;
use crate::friction::{FrictionFactor, friction_factor_with};
use crate::geometry::{CrossSection, SectionProperties};
use crate::minor_loss::MinorLosses;
use crate::pressure_drop::{self, PressureDrops};
use crate::regime::FlowWarning;
use mc_core::constants::G_MPS2;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a segment in the calculation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PipeStage {
    Constructed,
    VelocitySet,
    ReynoldsSet,
    FrictionFactorSet,
    PressureDropsComputed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PipeState {
    Constructed,
    VelocitySet {
        velocity: f64,
    },
    ReynoldsSet {
        flow: FlowPoint,
    },
    FrictionFactorSet {
        flow: FlowPoint,
        friction: FrictionFactor,
    },
    PressureDropsComputed {
        flow: FlowPoint,
        friction: FrictionFactor,
        drops: PressureDrops,
    },
}

/// Flow fixed by the Reynolds step.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FlowPoint {
    velocity: f64,
    reynolds: f64,
    /// Density of the fluid Re was computed with; later steps must match it.
    density: f64,
}

impl PipeState {
    fn stage(&self) -> PipeStage {
        match self {
            Self::Constructed => PipeStage::Constructed,
            Self::VelocitySet { .. } => PipeStage::VelocitySet,
            Self::ReynoldsSet { .. } => PipeStage::ReynoldsSet,
            Self::FrictionFactorSet { .. } => PipeStage::FrictionFactorSet,
            Self::PressureDropsComputed { .. } => PipeStage::PressureDropsComputed,
        }
    }

    fn velocity(&self) -> Option<f64> {
        match *self {
            Self::Constructed => None,
            Self::VelocitySet { velocity } => Some(velocity),
            Self::ReynoldsSet { flow }
            | Self::FrictionFactorSet { flow, .. }
            | Self::PressureDropsComputed { flow, .. } => Some(flow.velocity),
        }
    }

    fn flow(&self) -> Option<FlowPoint> {
        match *self {
            Self::ReynoldsSet { flow }
            | Self::FrictionFactorSet { flow, .. }
            | Self::PressureDropsComputed { flow, .. } => Some(flow),
            _ => None,
        }
    }

    fn friction(&self) -> Option<&FrictionFactor> {
        match self {
            Self::FrictionFactorSet { friction, .. }
            | Self::PressureDropsComputed { friction, .. } => Some(friction),
            _ => None,
        }
    }

    fn drops(&self) -> Option<&PressureDrops> {
        match self {
            Self::PressureDropsComputed { drops, .. } => Some(drops),
            _ => None,
        }
    }
}

/// Snapshot of a fully evaluated segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipeFlowReport {
    /// Mean velocity (m/s)
    pub velocity: f64,
    pub reynolds_number: f64,
    pub friction: FrictionFactor,
    pub pressure_drops: PressureDrops,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub warning: Option<FlowWarning>,
}

/// Straight conduit of constant cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSegment {
    /// Length (m)
    length: f64,
    /// Absolute surface roughness (m)
    roughness: f64,
    /// Outlet elevation minus inlet elevation (m)
    height_change: f64,
    cross_section: CrossSection,
    section: SectionProperties,
    minor_losses: MinorLosses,
    solver: ColebrookConfig,
    /// Gravitational acceleration for the hydrostatic term (m/s²)
    gravity: f64,
    state: PipeState,
}

impl PipeSegment {
    /// Create a segment from a validated cross-section.
    pub fn new(
        cross_section: CrossSection,
        length: f64,
        roughness: f64,
        height_change: f64,
    ) -> FlowResult<Self> {
        let length = positive_dimension(length, "pipe length must be > 0")?;
        non_negative_input(roughness, "roughness")?;
        let height_change = finite_input(height_change, "height change")?;
        let section = cross_section.properties()?;

        Ok(Self {
            length,
            roughness,
            height_change,
            cross_section,
            section,
            minor_losses: MinorLosses::new(),
            solver: ColebrookConfig::default(),
            gravity: G_MPS2,
            state: PipeState::Constructed,
        })
    }

    pub fn builder() -> PipeSegmentBuilder {
        PipeSegmentBuilder::default()
    }

    pub fn with_minor_losses(mut self, minor_losses: MinorLosses) -> Self {
        self.minor_losses = minor_losses;
        self.state = PipeState::Constructed;
        self
    }

    pub fn with_solver(mut self, solver: ColebrookConfig) -> Self {
        self.solver = solver;
        self.state = PipeState::Constructed;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> FlowResult<Self> {
        self.gravity = finite_input(gravity, "gravity")?;
        self.state = PipeState::Constructed;
        Ok(self)
    }

    /// v = Q/A. Resets any later results.
    pub fn set_velocity(&mut self, flow_rate: f64) -> FlowResult<f64> {
        let velocity = pressure_drop::velocity(flow_rate, self.section.area)?;
        debug!(flow_rate, velocity, "pipe velocity set");
        self.state = PipeState::VelocitySet { velocity };
        Ok(velocity)
    }

    /// Re = ρ·D_h·v/μ. Requires the velocity.
    pub fn compute_reynolds(&mut self, fluid: &Fluid) -> FlowResult<f64> {
        let velocity = self
            .state
            .velocity()
            .ok_or(FlowError::PreconditionViolated {
                what: "velocity must be set before computing the Reynolds number",
            })?;

        let reynolds = pressure_drop::reynolds(
            fluid.density(),
            self.section.hydraulic_diameter,
            velocity,
            fluid.dynamic_viscosity(),
        )?;
        if reynolds <= 0.0 {
            return Err(FlowError::InvalidFlowState {
                what: "Reynolds number must be > 0",
                value: reynolds,
            });
        }

        debug!(fluid = fluid.name(), reynolds, "pipe Reynolds number set");
        self.state = PipeState::ReynoldsSet {
            flow: FlowPoint {
                velocity,
                reynolds,
                density: fluid.density(),
            },
        };
        Ok(reynolds)
    }

    /// Darcy friction factor. Requires the Reynolds number.
    pub fn compute_friction_factor(&mut self) -> FlowResult<FrictionFactor> {
        let flow = self.state.flow().ok_or(FlowError::PreconditionViolated {
            what: "Reynolds number must be computed before the friction factor",
        })?;

        let friction = friction_factor_with(
            flow.reynolds,
            self.roughness,
            self.section.hydraulic_diameter,
            &self.solver,
        )?;

        self.state = PipeState::FrictionFactorSet { flow, friction };
        Ok(friction)
    }

    /// Frictional, hydrostatic and minor-loss drops. Requires the friction factor.
    pub fn compute_pressure_drops(&mut self, fluid: &Fluid) -> FlowResult<PressureDrops> {
        let flow = self.state.flow().ok_or(FlowError::PreconditionViolated {
            what: "friction factor must be computed before the pressure drops",
        })?;
        let friction = *self
            .state
            .friction()
            .ok_or(FlowError::PreconditionViolated {
                what: "friction factor must be computed before the pressure drops",
            })?;

        let rho = fluid.density();
        if rho != flow.density {
            return Err(FlowError::InvalidInput {
                what: "fluid density differs from the one the Reynolds number was computed with",
                value: rho,
            });
        }
        let velocity = flow.velocity;
        let drops = PressureDrops::new(
            pressure_drop::dp_friction(
                friction.value,
                rho,
                self.length,
                self.section.hydraulic_diameter,
                velocity,
            ),
            pressure_drop::dp_height(rho, self.height_change, self.gravity),
            pressure_drop::dp_minor(self.minor_losses.sum(), rho, velocity),
        );

        debug!(
            dp_friction = drops.friction,
            dp_height = drops.height,
            dp_minor = drops.minor,
            dp_total = drops.total,
            "pipe pressure drops computed"
        );

        self.state = PipeState::PressureDropsComputed {
            flow,
            friction,
            drops,
        };
        Ok(drops)
    }

    /// Friction factor followed by the pressure drops. Requires the Reynolds number.
    pub fn compute_friction_and_pressure_drop(
        &mut self,
        fluid: &Fluid,
    ) -> FlowResult<PressureDrops> {
        self.compute_friction_factor()?;
        self.compute_pressure_drops(fluid)
    }

    /// Re-run Reynolds → friction → pressure drops from the current velocity
    /// and return the total drop. Calling it again yields the same result.
    pub fn compute_total(&mut self, fluid: &Fluid) -> FlowResult<f64> {
        self.compute_reynolds(fluid)?;
        let drops = self.compute_friction_and_pressure_drop(fluid)?;
        Ok(drops.total)
    }

    /// Run the whole pipeline for one flow rate.
    pub fn solve(&mut self, fluid: &Fluid, flow_rate: f64) -> FlowResult<PipeFlowReport> {
        self.set_velocity(flow_rate)?;
        self.compute_total(fluid)?;
        self.report().ok_or(FlowError::PreconditionViolated {
            what: "pressure drops must be computed before reporting",
        })
    }

    /// Snapshot of all results, once the pipeline has completed.
    pub fn report(&self) -> Option<PipeFlowReport> {
        match self.state {
            PipeState::PressureDropsComputed {
                flow,
                friction,
                drops,
            } => Some(PipeFlowReport {
                velocity: flow.velocity,
                reynolds_number: flow.reynolds,
                friction,
                pressure_drops: drops,
                warning: friction.warning(),
            }),
            _ => None,
        }
    }

    pub fn stage(&self) -> PipeStage {
        self.state.stage()
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn roughness(&self) -> f64 {
        self.roughness
    }

    pub fn height_change(&self) -> f64 {
        self.height_change
    }

    pub fn cross_section(&self) -> &CrossSection {
        &self.cross_section
    }

    pub fn cross_sectional_area(&self) -> f64 {
        self.section.area
    }

    pub fn wetted_perimeter(&self) -> f64 {
        self.section.wetted_perimeter
    }

    pub fn hydraulic_diameter(&self) -> f64 {
        self.section.hydraulic_diameter
    }

    pub fn minor_losses(&self) -> &MinorLosses {
        &self.minor_losses
    }

    pub fn velocity(&self) -> Option<f64> {
        self.state.velocity()
    }

    pub fn reynolds_number(&self) -> Option<f64> {
        self.state.flow().map(|f| f.reynolds)
    }

    pub fn friction_factor(&self) -> Option<f64> {
        self.state.friction().map(|f| f.value)
    }

    pub fn friction(&self) -> Option<&FrictionFactor> {
        self.state.friction()
    }

    pub fn dp_friction(&self) -> Option<f64> {
        self.state.drops().map(|d| d.friction)
    }

    pub fn dp_height(&self) -> Option<f64> {
        self.state.drops().map(|d| d.height)
    }

    pub fn dp_minor(&self) -> Option<f64> {
        self.state.drops().map(|d| d.minor)
    }

    pub fn dp_total(&self) -> Option<f64> {
        self.state.drops().map(|d| d.total)
    }

    /// Advisory attached to the current friction factor, if any.
    pub fn warning(&self) -> Option<FlowWarning> {
        self.state.friction().and_then(FrictionFactor::warning)
    }
}

/// Builder taking the cross-section as loose dimensions.
#[derive(Debug, Clone, Default)]
pub struct PipeSegmentBuilder {
    diameter: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    length: Option<f64>,
    roughness: f64,
    height_change: f64,
    minor_losses: MinorLosses,
    solver: ColebrookConfig,
    gravity: Option<f64>,
}

impl PipeSegmentBuilder {
    pub fn diameter(mut self, diameter: f64) -> Self {
        self.diameter = Some(diameter);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn height_change(mut self, height_change: f64) -> Self {
        self.height_change = height_change;
        self
    }

    pub fn minor_losses(mut self, minor_losses: MinorLosses) -> Self {
        self.minor_losses = minor_losses;
        self
    }

    pub fn solver(mut self, solver: ColebrookConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn gravity(mut self, gravity: f64) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn build(self) -> FlowResult<PipeSegment> {
        let cross_section = CrossSection::from_dimensions(self.diameter, self.width, self.height)?;
        let length = self.length.ok_or(FlowError::InvalidGeometry {
            what: "pipe length is required",
        })?;

        let pipe = PipeSegment::new(cross_section, length, self.roughness, self.height_change)?
            .with_minor_losses(self.minor_losses)
            .with_solver(self.solver);

        match self.gravity {
            Some(g) => pipe.with_gravity(g),
            None => Ok(pipe),
        }
    }
}
