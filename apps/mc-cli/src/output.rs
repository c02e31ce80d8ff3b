//! Report rendering: a plain table for terminals, YAML or JSON for scripts.

use clap::ValueEnum;
use mc_beam::{BeamResponse, LoadCase};
use mc_flow::{PipeFlowReport, SectionProperties};
use serde::Serialize;

use crate::case::FlowRate;
use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Yaml,
    Json,
}

#[derive(Debug, Serialize)]
pub struct PipeOutput<'a> {
    pub fluid: &'a str,
    pub flow_rate: FlowRate,
    pub flow_rate_m3_s: f64,
    pub section: SectionProperties,
    pub report: PipeFlowReport,
}

#[derive(Debug, Serialize)]
pub struct BeamOutput {
    pub load: LoadCase,
    pub responses: Vec<BeamResponse>,
}

pub fn emit<T: Serialize>(value: &T, format: Format, table: impl FnOnce(&T)) -> CliResult<()> {
    match format {
        Format::Table => table(value),
        Format::Yaml => {
            let text = serde_yaml::to_string(value).map_err(|e| CliError::Render(e.to_string()))?;
            print!("{text}");
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

pub fn pipe_table(out: &PipeOutput<'_>) {
    let r = &out.report;
    println!("Pipe flow: {}", out.fluid);
    println!(
        "  Flow rate:           {} {} ({:.6e} m³/s)",
        out.flow_rate.value, out.flow_rate.unit, out.flow_rate_m3_s
    );
    println!("  Area:                {:.6e} m²", out.section.area);
    println!(
        "  Hydraulic diameter:  {:.6} m",
        out.section.hydraulic_diameter
    );
    println!("  Velocity:            {:.4} m/s", r.velocity);
    println!("  Reynolds number:     {:.1}", r.reynolds_number);
    println!(
        "  Regime:              {} ({} iterations, residual {:.2e})",
        r.friction.regime, r.friction.iterations, r.friction.residual
    );
    println!("  Friction factor:     {:.6}", r.friction.value);
    println!("  Δp friction:         {:.3} Pa", r.pressure_drops.friction);
    println!("  Δp height:           {:.3} Pa", r.pressure_drops.height);
    println!("  Δp minor:            {:.3} Pa", r.pressure_drops.minor);
    println!("  Δp total:            {:.3} Pa", r.pressure_drops.total);
    if let Some(w) = &r.warning {
        println!("⚠ {w}");
    }
}

pub fn beam_table(out: &BeamOutput) {
    println!("Beam: {:?}", out.load);
    if let Some(first) = out.responses.first() {
        let re = first.reactions;
        println!(
            "  Reactions: R1 = {:.3} N, R2 = {:.3} N, M1 = {:.3} N·m",
            re.r1, re.r2, re.m1
        );
        if let Some(y) = first.max_deflection {
            println!("  Max deflection: {y:.6e} m");
        }
    }
    println!(
        "  {:>10}  {:>14}  {:>14}  {:>14}",
        "x [m]", "V [N]", "M [N·m]", "y [m]"
    );
    for r in &out.responses {
        println!(
            "  {:>10.4}  {:>14.4}  {:>14.4}  {:>14.6e}",
            r.x, r.shear, r.moment, r.deflection
        );
    }
}
