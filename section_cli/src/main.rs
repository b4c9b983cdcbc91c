//! # Sectional CLI
//!
//! Command-line front end for `section_core`.
//!
//! ```text
//! section_cli h-beam --flange-width 200 --web-height 400 --flange-thickness 16 --web-thickness 10
//! section_cli pipe --outer-diameter 100 --inner-diameter 80 --json
//! section_cli box --outer-width 100 --outer-height 200 --thickness 10 --output box.json
//! section_cli file dims.json
//! echo '{"shape":"circle","diameter":50}' | section_cli file -
//! section_cli catalog --shape h-beam --search H400
//! ```
//!
//! Exit code is 0 on success and 1 on invalid input or any other error.
//! Errors are printed to stderr, followed by their JSON form.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use section_core::catalog::catalog;
use section_core::export::{save_catalog, save_record, CalculationRecord};
use section_core::report::PropertyReport;
use section_core::settings::{OutputFormat, ReportSettings};
use section_core::{compute, validate, CalcError, CalcResult, Dimensions, SectionProperties, ShapeKind};

/// Sectional - compute cross-section properties of structural profiles
#[derive(Parser, Debug)]
#[command(name = "section_cli", version)]
#[command(about = "Compute area, inertia, section modulus and radius of gyration for standard profiles")]
struct Cli {
    /// Report settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Output options shared by every computing subcommand
#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Print JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Only validate the dimensions and list any problems
    #[arg(long)]
    check: bool,

    /// Also save the calculation as a JSON record
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Shape(ShapeCommand),
    /// Compute a JSON dimension record from a file, or stdin with `-`
    File {
        path: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// List standard sections
    Catalog {
        /// Restrict to one shape (circle, pipe, box, h-beam, l-angle, channel)
        #[arg(long)]
        shape: Option<String>,
        /// Case-insensitive text the designation must contain
        #[arg(long)]
        search: Option<String>,
        /// Pick the lightest section with at least this Sx (mm³); needs --shape
        #[arg(long)]
        min_sx: Option<f64>,
        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
        /// Save the whole catalog as JSON
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

/// One subcommand per shape, flags named after the JSON fields
#[derive(Subcommand, Debug)]
enum ShapeCommand {
    /// Solid round bar
    Circle {
        /// Diameter D (mm)
        #[arg(long, allow_negative_numbers = true)]
        diameter: Option<f64>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Round pipe
    Pipe {
        /// Outer diameter D (mm)
        #[arg(long, allow_negative_numbers = true)]
        outer_diameter: Option<f64>,
        /// Inner diameter d (mm)
        #[arg(long, allow_negative_numbers = true)]
        inner_diameter: Option<f64>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Solid rectangle
    Rectangle {
        /// Width B (mm)
        #[arg(long, allow_negative_numbers = true)]
        width: Option<f64>,
        /// Height H (mm)
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Square or rectangular tube
    Box {
        /// Outer width B (mm)
        #[arg(long, allow_negative_numbers = true)]
        outer_width: Option<f64>,
        /// Outer height H (mm)
        #[arg(long, allow_negative_numbers = true)]
        outer_height: Option<f64>,
        /// Wall thickness t (mm)
        #[arg(long, allow_negative_numbers = true)]
        thickness: Option<f64>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// H-beam (wide flange)
    HBeam {
        /// Flange width B (mm)
        #[arg(long, allow_negative_numbers = true)]
        flange_width: Option<f64>,
        /// Overall height H (mm)
        #[arg(long, allow_negative_numbers = true)]
        web_height: Option<f64>,
        /// Flange thickness tf (mm)
        #[arg(long, allow_negative_numbers = true)]
        flange_thickness: Option<f64>,
        /// Web thickness tw (mm)
        #[arg(long, allow_negative_numbers = true)]
        web_thickness: Option<f64>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Angle with equal or unequal legs
    LAngle {
        /// Leg A, along X (mm)
        #[arg(long, allow_negative_numbers = true)]
        leg_a: Option<f64>,
        /// Leg B, along Y (mm)
        #[arg(long, allow_negative_numbers = true)]
        leg_b: Option<f64>,
        /// Leg thickness t (mm)
        #[arg(long, allow_negative_numbers = true)]
        leg_thickness: Option<f64>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Channel
    Channel {
        /// Width B, web back to flange tip (mm)
        #[arg(long, allow_negative_numbers = true)]
        channel_width: Option<f64>,
        /// Height H (mm)
        #[arg(long, allow_negative_numbers = true)]
        channel_height: Option<f64>,
        /// Flange thickness tf (mm)
        #[arg(long, allow_negative_numbers = true)]
        channel_flange_thickness: Option<f64>,
        /// Web thickness tw (mm)
        #[arg(long, allow_negative_numbers = true)]
        channel_web_thickness: Option<f64>,
        #[command(flatten)]
        out: OutputArgs,
    },
}

/// JSON shape of a computed section on stdout
#[derive(Serialize)]
struct ComputeOutput<'a> {
    designation: String,
    dimensions: &'a Dimensions,
    properties: &'a SectionProperties,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns `Ok(false)` when `--check` found problems
fn run(cli: Cli) -> CalcResult<bool> {
    let settings = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading report settings");
            ReportSettings::load(path)?
        }
        None => ReportSettings::default(),
    };

    match cli.command {
        Command::File { path, out } => {
            let dims = read_dimensions(&path)?;
            compute_and_print(&dims, &out, settings)
        }
        Command::Catalog {
            shape,
            search,
            min_sx,
            json,
            export,
        } => list_catalog(shape, search, min_sx, json, export, settings),
        Command::Shape(shape) => {
            let (dims, out) = shape.into_dimensions();
            compute_and_print(&dims, &out, settings)
        }
    }
}

impl ShapeCommand {
    /// Dimension record for a shape subcommand. Omitted flags read as zero,
    /// which the validator reports as non-positive.
    fn into_dimensions(self) -> (Dimensions, OutputArgs) {
        let v = |x: Option<f64>| x.unwrap_or(0.0);
        match self {
            ShapeCommand::Circle { diameter, out } => (Dimensions::Circle { diameter: v(diameter) }, out),
            ShapeCommand::Pipe {
                outer_diameter,
                inner_diameter,
                out,
            } => (
                Dimensions::Pipe {
                    outer_diameter: v(outer_diameter),
                    inner_diameter: v(inner_diameter),
                },
                out,
            ),
            ShapeCommand::Rectangle { width, height, out } => (
                Dimensions::Rectangle {
                    width: v(width),
                    height: v(height),
                },
                out,
            ),
            ShapeCommand::Box {
                outer_width,
                outer_height,
                thickness,
                out,
            } => (
                Dimensions::Box {
                    outer_width: v(outer_width),
                    outer_height: v(outer_height),
                    thickness: v(thickness),
                },
                out,
            ),
            ShapeCommand::HBeam {
                flange_width,
                web_height,
                flange_thickness,
                web_thickness,
                out,
            } => (
                Dimensions::HBeam {
                    flange_width: v(flange_width),
                    web_height: v(web_height),
                    flange_thickness: v(flange_thickness),
                    web_thickness: v(web_thickness),
                },
                out,
            ),
            ShapeCommand::LAngle {
                leg_a,
                leg_b,
                leg_thickness,
                out,
            } => (
                Dimensions::LAngle {
                    leg_a: v(leg_a),
                    leg_b: v(leg_b),
                    leg_thickness: v(leg_thickness),
                },
                out,
            ),
            ShapeCommand::Channel {
                channel_width,
                channel_height,
                channel_flange_thickness,
                channel_web_thickness,
                out,
            } => (
                Dimensions::Channel {
                    channel_width: v(channel_width),
                    channel_height: v(channel_height),
                    channel_flange_thickness: v(channel_flange_thickness),
                    channel_web_thickness: v(channel_web_thickness),
                },
                out,
            ),
        }
    }
}

fn read_dimensions(path: &str) -> CalcResult<Dimensions> {
    let text = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        buf
    } else {
        std::fs::read_to_string(Path::new(path))
            .map_err(|e| CalcError::file_error("read", path, e.to_string()))?
    };
    debug!(source = path, bytes = text.len(), "parsing dimension record");
    Ok(serde_json::from_str(&text)?)
}

fn compute_and_print(dims: &Dimensions, out: &OutputArgs, mut settings: ReportSettings) -> CalcResult<bool> {
    if out.json {
        settings.format = OutputFormat::Json;
    }

    if out.check {
        let violations = validate(dims);
        if settings.format == OutputFormat::Json {
            println!("{}", to_json(&violations, &settings)?);
        } else if violations.is_empty() {
            println!("{} {}: OK", dims.shape(), dims.designation());
        } else {
            for v in &violations {
                println!("{}", v);
            }
        }
        return Ok(violations.is_empty());
    }

    let props = compute(dims)?;

    match settings.format {
        OutputFormat::Json => {
            let output = ComputeOutput {
                designation: dims.designation(),
                dimensions: dims,
                properties: &props,
            };
            println!("{}", to_json(&output, &settings)?);
        }
        OutputFormat::Text => {
            let report = PropertyReport::new(dims, &props, &settings);
            print!("{}", report.render_text(&settings));
        }
    }

    if let Some(path) = &out.output {
        let record = CalculationRecord::new(*dims)?;
        save_record(&record, path)?;
        eprintln!("Saved {}", path.display());
    }

    Ok(true)
}

fn list_catalog(
    shape: Option<String>,
    search: Option<String>,
    min_sx: Option<f64>,
    json: bool,
    export: Option<PathBuf>,
    settings: ReportSettings,
) -> CalcResult<bool> {
    if let Some(path) = export {
        save_catalog(catalog(), &path)?;
        eprintln!("Exported {} sections to {}", catalog().len(), path.display());
        return Ok(true);
    }

    let kind = shape.as_deref().map(str::parse::<ShapeKind>).transpose()?;
    let json = json || settings.format == OutputFormat::Json;

    let sections = match min_sx {
        Some(required) => {
            let kind = kind.ok_or_else(|| CalcError::invalid_input("shape", "", "--min-sx needs --shape"))?;
            let pick = catalog()
                .lightest_with_sx(kind, required)
                .ok_or_else(|| CalcError::section_not_found(format!("{} with Sx >= {} mm³", kind, required)))?;
            vec![pick]
        }
        None => catalog().search(kind, search.as_deref().unwrap_or("")),
    };

    if json {
        println!("{}", to_json(&sections, &settings)?);
    } else {
        for s in &sections {
            println!("{:<14} {}", s.id, s);
        }
        eprintln!("{} section(s)", sections.len());
    }
    Ok(true)
}

fn to_json<T: Serialize>(value: &T, settings: &ReportSettings) -> CalcResult<String> {
    let json = if settings.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
