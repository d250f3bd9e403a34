//! Subcommand bodies: polygon in, serializable report out.

use anyhow::{Context, Result};
use clap::ValueEnum;
use planar::rand::{draw_convex_radial, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use planar::{convex_hull, Known, Polygon, Vec2};
use serde::Serialize;

#[inline]
fn xy(v: Vec2) -> [f64; 2] {
    [v.x, v.y]
}

#[derive(Debug, Serialize)]
pub struct BoxReport {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

/// Full classification of one polygon.
#[derive(Debug, Serialize)]
pub struct PolygonReport {
    pub vertices: Vec<[f64; 2]>,
    pub len: usize,
    pub is_convex: bool,
    pub is_simple: bool,
    pub signed_area: f64,
    pub area: f64,
    pub centroid: Option<[f64; 2]>,
    pub bbox: BoxReport,
    /// Containment strategy selected once the above is known.
    pub strategy: String,
    pub text: String,
}

pub fn classify(poly: &mut Polygon) -> PolygonReport {
    let is_convex = poly.is_convex();
    let is_simple = poly.is_simple();
    let centroid = poly.centroid().map(xy);
    let bb = poly.bounding_box();
    tracing::info!(len = poly.len(), is_convex, is_simple, "classified");
    PolygonReport {
        vertices: poly.iter().copied().map(xy).collect(),
        len: poly.len(),
        is_convex,
        is_simple,
        signed_area: poly.signed_area(),
        area: poly.area(),
        centroid,
        bbox: BoxReport {
            min: xy(bb.min),
            max: xy(bb.max),
        },
        strategy: format!("{:?}", poly.containment_strategy()),
        text: poly.to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct HullReport {
    pub input_points: usize,
    pub hull: PolygonReport,
}

pub fn hull(points: Vec<Vec2>) -> Result<HullReport> {
    let input_points = points.len();
    let mut poly = convex_hull(points).context("computing convex hull")?;
    tracing::info!(input_points, hull = poly.len(), "hull");
    Ok(HullReport {
        input_points,
        hull: classify(&mut poly),
    })
}

#[derive(Debug, Serialize)]
pub struct ContainsReport {
    pub point: [f64; 2],
    pub inside: bool,
    pub winding_number: i32,
}

#[derive(Debug, Serialize)]
pub struct ContainsBatch {
    /// Strategy in effect for the first query (before any caching it triggers).
    pub strategy: String,
    pub results: Vec<ContainsReport>,
}

pub fn contains(poly: &mut Polygon, points: &[Vec2]) -> ContainsBatch {
    let strategy = format!("{:?}", poly.containment_strategy());
    let results: Vec<ContainsReport> = points
        .iter()
        .map(|&p| ContainsReport {
            point: xy(p),
            inside: poly.contains_point(p),
            winding_number: poly.winding_number(p),
        })
        .collect();
    let inside = results.iter().filter(|r| r.inside).count();
    tracing::info!(queries = results.len(), inside, strategy, "contains");
    ContainsBatch { strategy, results }
}

#[derive(Debug, Serialize)]
pub struct TangentReport {
    pub point: [f64; 2],
    pub left: [f64; 2],
    pub right: [f64; 2],
}

pub fn tangents(poly: &mut Polygon, points: &[Vec2]) -> Vec<TangentReport> {
    let reports: Vec<TangentReport> = points
        .iter()
        .map(|&p| {
            let (l, r) = poly.tangents_to_point(p);
            TangentReport {
                point: xy(p),
                left: xy(l),
                right: xy(r),
            }
        })
        .collect();
    tracing::info!(
        queries = reports.len(),
        convex = matches!(poly.convexity(), Known::Value(true)),
        "tangents"
    );
    reports
}

/// Polygon families `sample` can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    Regular,
    Star,
    Radial,
    Convex,
}

#[derive(Debug, Clone, Copy)]
pub struct SampleArgs {
    pub kind: SampleKind,
    pub vertices: usize,
    pub radius: f64,
    /// Second radius for stars; defaults to half of `radius`.
    pub radius2: Option<f64>,
    pub center: Vec2,
    pub angle: f64,
    pub radial_jitter: f64,
    pub seed: u64,
    pub index: u64,
}

pub fn sample(args: SampleArgs) -> Result<PolygonReport> {
    let mut poly = match args.kind {
        SampleKind::Regular => Polygon::regular(args.vertices, args.radius, args.center, args.angle)?,
        SampleKind::Star => Polygon::star(
            args.vertices,
            args.radius,
            args.radius2.unwrap_or(args.radius * 0.5),
            args.center,
            args.angle,
        )?,
        SampleKind::Radial | SampleKind::Convex => {
            let cfg = RadialCfg {
                vertex_count: VertexCount::Fixed(args.vertices),
                radial_jitter: args.radial_jitter,
                base_radius: args.radius,
                center: args.center,
                ..RadialCfg::default()
            };
            let tok = ReplayToken {
                seed: args.seed,
                index: args.index,
            };
            if args.kind == SampleKind::Convex {
                draw_convex_radial(cfg, tok)?
            } else {
                draw_polygon_radial(cfg, tok)?
            }
        }
    };
    tracing::info!(kind = ?args.kind, len = poly.len(), "sample");
    Ok(classify(&mut poly))
}
