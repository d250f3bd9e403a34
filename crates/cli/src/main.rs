mod commands;
mod io;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use commands::{SampleArgs, SampleKind};
use planar::Vec2;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon classification, containment, tangents and hulls")]
#[command(version = planar::VERSION)]
struct Cmd {
    /// Override the process-wide geometric tolerance
    #[arg(long, global = true)]
    epsilon: Option<f64>,

    /// Write the JSON report here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// -v for debug logs, -vv for trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point set
    Hull {
        /// Points file (.json, .csv with x/y columns, polygon text, or `-`)
        input: PathBuf,
    },
    /// Convexity, simplicity, centroid, area and bounding box
    Classify { input: PathBuf },
    /// Strict point containment (boundary points are outside)
    Contains {
        input: PathBuf,
        /// Query point `x,y`; repeatable
        #[arg(long = "point", value_parser = io::parse_point, allow_hyphen_values = true)]
        points: Vec<Vec2>,
        /// File with additional query points
        #[arg(long)]
        points_file: Option<PathBuf>,
    },
    /// Left/right tangent vertices seen from external points
    Tangents {
        input: PathBuf,
        #[arg(long = "point", value_parser = io::parse_point, allow_hyphen_values = true)]
        points: Vec<Vec2>,
        #[arg(long)]
        points_file: Option<PathBuf>,
    },
    /// Generate a polygon
    Sample {
        #[arg(long, value_enum)]
        kind: SampleKind,
        /// Vertex count (peak count for stars)
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        /// Inner radius for stars (default: radius / 2)
        #[arg(long)]
        radius2: Option<f64>,
        #[arg(long, value_parser = io::parse_point, allow_hyphen_values = true, default_value = "0,0")]
        center: Vec2,
        /// Angle of the first vertex in degrees
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, default_value_t = 0.25)]
        radial_jitter: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Some(eps) = cmd.epsilon {
        let previous = planar::cfg::set_epsilon(eps).context("--epsilon")?;
        tracing::info!(epsilon = eps, previous, "tolerance");
    }

    let report = match cmd.action {
        Action::Hull { input } => {
            tracing::info!(input = %input.display(), "hull");
            serde_json::to_value(commands::hull(io::read_points(&input)?)?)?
        }
        Action::Classify { input } => {
            let mut poly = io::read_polygon(&input)?;
            serde_json::to_value(commands::classify(&mut poly))?
        }
        Action::Contains {
            input,
            points,
            points_file,
        } => {
            let mut poly = io::read_polygon(&input)?;
            let queries = queries(points, points_file.as_deref())?;
            serde_json::to_value(commands::contains(&mut poly, &queries))?
        }
        Action::Tangents {
            input,
            points,
            points_file,
        } => {
            let mut poly = io::read_polygon(&input)?;
            let queries = queries(points, points_file.as_deref())?;
            serde_json::to_value(commands::tangents(&mut poly, &queries))?
        }
        Action::Sample {
            kind,
            vertices,
            radius,
            radius2,
            center,
            angle,
            radial_jitter,
            seed,
            index,
        } => serde_json::to_value(commands::sample(SampleArgs {
            kind,
            vertices,
            radius,
            radius2,
            center,
            angle,
            radial_jitter,
            seed,
            index,
        })?)?,
    };
    io::write_json(cmd.out.as_deref(), &report)
}

fn queries(mut points: Vec<Vec2>, file: Option<&Path>) -> Result<Vec<Vec2>> {
    if let Some(path) = file {
        points.extend(io::read_points(path)?);
    }
    if points.is_empty() {
        bail!("no query points: pass --point x,y or --points-file");
    }
    Ok(points)
}
