mod case;
mod error;
mod output;

use clap::{Args, Parser, Subcommand};
use mc_beam::{analyze, sample};
use mc_flow::{ColebrookConfig, Fluid, SectionProperties};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use case::{BeamCase, FlowRate, FlowRateUnit, PipeCase, PipeSpec};
use error::CliResult;
use output::{BeamOutput, Format, PipeOutput};

#[derive(Parser)]
#[command(name = "mc-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MechCalc CLI - pipe pressure drop and beam statics", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a pipe segment from a YAML case file
    Pipe {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Evaluate a beam load case from a YAML case file
    Beam {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Evaluate a pipe segment given entirely on the command line
    PipeInline(PipeInlineArgs),
}

#[derive(Args)]
struct PipeInlineArgs {
    /// Volumetric flow rate, in --unit
    #[arg(long)]
    flow_rate: f64,
    /// Flow rate unit (m3/s, L/min, L/s, m3/h)
    #[arg(long, default_value = "L/min")]
    unit: FlowRateUnit,
    /// Circular bore diameter (m)
    #[arg(long)]
    diameter: Option<f64>,
    /// Rectangular duct width (m)
    #[arg(long)]
    width: Option<f64>,
    /// Rectangular duct height (m)
    #[arg(long)]
    height: Option<f64>,
    /// Segment length (m)
    #[arg(long)]
    length: f64,
    /// Absolute wall roughness (m)
    #[arg(long, default_value_t = 0.0)]
    roughness: f64,
    /// Outlet elevation minus inlet elevation (m)
    #[arg(long, default_value_t = 0.0)]
    height_change: f64,
    /// Minor loss coefficient; repeat for several fittings
    #[arg(long = "k")]
    minor_losses: Vec<f64>,
    /// Fluid density (kg/m³)
    #[arg(long, default_value_t = 1000.0)]
    density: f64,
    /// Fluid dynamic viscosity (Pa·s)
    #[arg(long, default_value_t = 8.9e-4)]
    viscosity: f64,
    /// Fluid temperature (°C)
    #[arg(long, default_value_t = 25.0)]
    temperature: f64,
    /// Starting friction factor for the Colebrook solve
    #[arg(long)]
    initial_guess: Option<f64>,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Pipe { case_path } => cmd_pipe(&case_path, cli.format),
        Commands::Beam { case_path } => cmd_beam(&case_path, cli.format),
        Commands::PipeInline(args) => cmd_pipe_inline(args, cli.format),
    }
}

fn cmd_pipe(case_path: &Path, format: Format) -> CliResult<()> {
    info!(path = %case_path.display(), "loading pipe case");
    let case: PipeCase = case::load(case_path)?;
    run_pipe(&case.fluid, &case.pipe, case.flow_rate, case.solver.config(), format)
}

fn cmd_pipe_inline(args: PipeInlineArgs, format: Format) -> CliResult<()> {
    let fluid = Fluid::new("fluid", args.density, args.viscosity, args.temperature)?;
    let spec = PipeSpec {
        diameter: args.diameter,
        width: args.width,
        height: args.height,
        length: args.length,
        roughness: args.roughness,
        height_change: args.height_change,
        minor_losses: args.minor_losses,
        gravity: None,
    };
    let flow_rate = FlowRate {
        value: args.flow_rate,
        unit: args.unit,
    };
    let solver = match args.initial_guess {
        Some(guess) => ColebrookConfig::default().with_initial_guess(guess),
        None => ColebrookConfig::default(),
    };
    run_pipe(&fluid, &spec, flow_rate, solver, format)
}

fn run_pipe(
    fluid: &Fluid,
    spec: &PipeSpec,
    flow_rate: FlowRate,
    solver: ColebrookConfig,
    format: Format,
) -> CliResult<()> {
    let mut pipe = spec.build(solver)?;
    let q = flow_rate.to_si();
    let report = pipe.solve(fluid, q)?;

    let out = PipeOutput {
        fluid: fluid.name(),
        flow_rate,
        flow_rate_m3_s: q,
        section: SectionProperties {
            area: pipe.cross_sectional_area(),
            wetted_perimeter: pipe.wetted_perimeter(),
            hydraulic_diameter: pipe.hydraulic_diameter(),
        },
        report,
    };
    output::emit(&out, format, output::pipe_table)
}

fn cmd_beam(case_path: &Path, format: Format) -> CliResult<()> {
    info!(path = %case_path.display(), "loading beam case");
    let case: BeamCase = case::load(case_path)?;
    case.validate()?;

    let responses = match case.at {
        Some(x) => vec![analyze(&case.beam, &case.load, x)?],
        None => sample(
            &case.beam,
            &case.load,
            case.points.unwrap_or(BeamCase::DEFAULT_POINTS),
        )?,
    };

    let out = BeamOutput {
        load: case.load,
        responses,
    };
    output::emit(&out, format, output::beam_table)
}
