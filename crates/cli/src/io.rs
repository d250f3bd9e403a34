//! Point and polygon input, JSON output.
//!
//! Input formats, chosen by extension:
//! - `.csv`: columns `x` and `y` (lazy polars reader, any numeric dtype).
//! - anything else: JSON `[[x, y], ...]`, or the polygon text form
//!   `Polygon([(x, y), ...], is_convex=…)` which keeps its flags.
//! `-` reads JSON or text from stdin.

use anyhow::{bail, Context, Result};
use planar::{Polygon, Vec2};
use polars::prelude::*;
use std::io::Read;
use std::path::Path;

/// Parse `"x,y"` (used as a clap value parser).
pub fn parse_point(s: &str) -> std::result::Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Vec2::new(x, y))
}

/// Points from `path`, ignoring any polygon flags.
pub fn read_points(path: &Path) -> Result<Vec<Vec2>> {
    match read_source(path)? {
        Source::Points(points) => Ok(points),
        Source::Polygon(poly) => Ok(poly.into_vertices()),
    }
}

/// Polygon from `path`; text form keeps its `is_convex` / `is_simple` hints.
pub fn read_polygon(path: &Path) -> Result<Polygon> {
    match read_source(path)? {
        Source::Points(points) => Polygon::new(points)
            .with_context(|| format!("building polygon from {}", path.display())),
        Source::Polygon(poly) => Ok(poly),
    }
}

enum Source {
    Points(Vec<Vec2>),
    Polygon(Polygon),
}

fn read_source(path: &Path) -> Result<Source> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        return read_csv_points(path).map(Source::Points);
    }
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    parse_source(&text).with_context(|| format!("parsing {}", path.display()))
}

fn parse_source(text: &str) -> Result<Source> {
    let trimmed = text.trim();
    if trimmed.starts_with("Polygon(") {
        let poly: Polygon = trimmed.parse()?;
        return Ok(Source::Polygon(poly));
    }
    let pairs: Vec<[f64; 2]> = serde_json::from_str(trimmed)?;
    Ok(Source::Points(pairs.into_iter().map(Vec2::from).collect()))
}

fn read_csv_points(path: &Path) -> Result<Vec<Vec2>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns of {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Vec2::new(x, y)),
            _ => bail!("missing coordinate in row {row} of {}", path.display()),
        }
    }
    Ok(points)
}

/// Pretty JSON to `out` (parent directories created) or stdout.
pub fn write_json(out: Option<&Path>, value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(out = %path.display(), "wrote report");
        }
        None => println!("{text}"),
    }
    Ok(())
}
