//! Random polygons and point clouds (radial jitter + replay tokens).
//!
//! Purpose
//! - Small, deterministic samplers for tests, benchmarks and the CLI.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter. Sorted by angle around the origin the vertices form a simple
//!   star-shaped polygon; their hull gives a convex one.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! References
//! - Code cross-refs: `Polygon::with_hints`, `hull::convex_hull`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PolygonResult;
use crate::hull::convex_hull;
use crate::polygon::{Hints, Polygon};
use crate::vector::{polar, Vec2};

/// How many vertices a draw gets. Counts below 3 are raised to 3.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn draw<R: Rng>(self, rng: &mut R) -> usize {
        match self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                rng.gen_range(lo..=max.max(lo))
            }
        }
    }
}

/// Shape of a radial polygon draw.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Each vertex angle moves by up to this share of the even spacing
    /// (at most 0.49, so the angular order survives).
    pub angle_jitter_frac: f64,
    /// Each radius is `base_radius` scaled by a factor in `1 ± radial_jitter`
    /// (at most 0.95).
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Rotate the whole draw by a random angle; otherwise the first vertex
    /// starts near angle 0.
    pub random_phase: bool,
    pub center: Vec2,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
            center: Vec2::zeros(),
        }
    }
}

/// Names one draw: `seed` picks a family, `index` a member of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Generator for this draw alone; neighbouring indices give unrelated streams.
    pub fn to_std_rng(self) -> StdRng {
        StdRng::seed_from_u64(splitmix64(splitmix64(self.seed) ^ self.index))
    }
}

// Finalizer of the SplitMix64 generator (Steele, Lea & Flood 2014).
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

// Vertices in increasing angle order around `cfg.center`.
fn radial_points(cfg: &RadialCfg, rng: &mut StdRng) -> Vec<Vec2> {
    let n = cfg.vertex_count.draw(rng);
    let spacing = 360.0 / n as f64;
    let angle_jitter = cfg.angle_jitter_frac.clamp(0.0, 0.49) * spacing;
    let radial_jitter = cfg.radial_jitter.clamp(0.0, 0.95);
    let radius = cfg.base_radius.abs().max(1e-9);
    let phase = if cfg.random_phase {
        rng.gen_range(0.0f64..360.0)
    } else {
        0.0
    };
    let mut unit = move || rng.gen_range(-1.0f64..=1.0);
    (0..n)
        .map(|k| {
            let angle = phase + k as f64 * spacing + unit() * angle_jitter;
            let r = radius * (1.0 + unit() * radial_jitter);
            cfg.center + polar(angle, r)
        })
        .collect()
}

/// Simple star-shaped polygon around `cfg.center` (generally not convex).
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> PolygonResult<Polygon> {
    let mut rng = tok.to_std_rng();
    let pts = radial_points(&cfg, &mut rng);
    Polygon::with_hints(
        pts,
        Hints {
            is_convex: None,
            is_simple: Some(true),
        },
    )
}

/// Convex polygon: hull of a radial draw.
pub fn draw_convex_radial(cfg: RadialCfg, tok: ReplayToken) -> PolygonResult<Polygon> {
    let mut rng = tok.to_std_rng();
    convex_hull(radial_points(&cfg, &mut rng))
}

/// `count` points uniform in the square `center ± half_extent`.
pub fn draw_points(count: usize, center: Vec2, half_extent: f64, tok: ReplayToken) -> Vec<Vec2> {
    let mut rng = tok.to_std_rng();
    let h = half_extent.abs();
    (0..count)
        .map(|_| {
            center
                + Vec2::new(
                    (rng.gen::<f64>() * 2.0 - 1.0) * h,
                    (rng.gen::<f64>() * 2.0 - 1.0) * h,
                )
        })
        .collect()
}
