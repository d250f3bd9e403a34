//! Point containment.
//!
//! Boundary points (on an edge or a vertex, as judged by
//! [`point_on_segment`]) are outside for every strategy. Off that band every
//! strategy decides from exact cross-product signs, so all of them agree.
//! Strategies:
//! - `Triangle`: the three edge cross products share a strict sign.
//! - `YMonotone`: convex polygons split into a left and a right chain of
//!   `(y, x)` pairs from the bottom to the top; binary search on `y`. Only
//!   the chain segments around the query height are tested against the
//!   boundary band.
//! - `ConvexHalfPlane`: strictly inside every edge's half-plane.
//! - `Winding`: non-zero winding rule; an upward edge owns its lower endpoint,
//!   a downward edge its upper one, horizontal edges never count.
//! - `EvenOdd`: crossing parity with the same tie-break. Never selected
//!   automatically; agrees with `Winding` on simple polygons.
//!
//! Dispatch only consults cached classification and never forces it. When the
//! centroid is known a radial prefilter answers far and near points first.

use crate::cfg;
use crate::predicates::{point_on_segment, segment_distance};
use crate::vector::{parallelogram_area, Vec2};

use super::cache::Known;
use super::centroid::doubled_signed_area;
use super::Polygon;

/// Containment algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Triangle,
    YMonotone,
    ConvexHalfPlane,
    Winding,
    EvenOdd,
}

impl Polygon {
    /// `p` lies strictly inside the polygon (non-zero winding rule).
    pub fn contains_point(&mut self, p: Vec2) -> bool {
        if !self.bounding_box().contains_point(p) {
            return false;
        }
        if let Some(Some(c)) = self.cache.centroid.get() {
            let r = self.ensure_radial(c);
            let d2 = (p - c).norm_squared();
            if d2 > r.max_r2 {
                return false;
            }
            if d2 < r.min_r2 {
                return true;
            }
        }
        let strategy = self.containment_strategy();
        self.contains_point_with(p, strategy)
    }

    /// Strategy `contains_point` would use right now, from cached state only.
    pub fn containment_strategy(&self) -> Strategy {
        if self.verts.len() == 3 {
            return Strategy::Triangle;
        }
        match self.cache.convex {
            Known::Value(true) => {
                let split_failed = matches!(self.cache.y_polylines, Known::Value(None));
                let ready = self.cache.centroid.is_known() || self.cache.y_polylines.is_known();
                if ready && !split_failed {
                    Strategy::YMonotone
                } else {
                    Strategy::ConvexHalfPlane
                }
            }
            _ => Strategy::Winding,
        }
    }

    /// Containment with an explicit strategy, skipping the prefilters.
    ///
    /// `YMonotone` and `ConvexHalfPlane` assume a convex polygon; `Triangle` on a
    /// polygon with more than 3 vertices falls back to `Winding`, as does
    /// `YMonotone` when the chain split fails.
    pub fn contains_point_with(&mut self, p: Vec2, strategy: Strategy) -> bool {
        match strategy {
            Strategy::Triangle if self.verts.len() == 3 => {
                triangle_contains(self.verts[0], self.verts[1], self.verts[2], p)
            }
            Strategy::YMonotone => {
                self.ensure_y_polylines();
                match self.cache.y_polylines.value() {
                    Some(Some(chains)) => chains.contains(p),
                    _ => winding_contains(&self.verts, p),
                }
            }
            Strategy::ConvexHalfPlane => convex_contains(&self.verts, p),
            Strategy::EvenOdd => crossing_contains(&self.verts, p),
            Strategy::Triangle | Strategy::Winding => winding_contains(&self.verts, p),
        }
    }

    /// Winding number of the vertex cycle around `p` (boundary not special-cased).
    pub fn winding_number(&self, p: Vec2) -> i32 {
        winding_number(&self.verts, p)
    }

    pub(crate) fn y_polylines(&mut self) -> Option<&YPolylines> {
        self.ensure_y_polylines();
        self.cache.y_polylines.value().and_then(|s| s.as_ref())
    }

    fn ensure_y_polylines(&mut self) {
        if !self.cache.y_polylines.is_known() {
            self.cache.y_polylines = Known::Value(YPolylines::split(&self.verts));
        }
    }

    fn ensure_radial(&mut self, center: Vec2) -> RadialBounds {
        match self.cache.radial.get() {
            Some(r) if r.center == center => r,
            _ => {
                let r = RadialBounds::around(&self.verts, center);
                self.cache.radial = Known::Value(r);
                r
            }
        }
    }
}

/// Squared radii around the centroid: beyond `max_r2` is outside, within
/// `min_r2` is inside. `min_r2` is zero unless the center is strictly inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RadialBounds {
    pub center: Vec2,
    pub min_r2: f64,
    pub max_r2: f64,
}

impl RadialBounds {
    pub fn around(verts: &[Vec2], center: Vec2) -> Self {
        let max_r = verts
            .iter()
            .map(|v| (v - center).norm())
            .fold(0.0, f64::max);
        let mut min_r = 0.0;
        if winding_contains(verts, center) {
            let n = verts.len();
            let nearest = (0..n)
                .map(|i| segment_distance(center, verts[i], verts[(i + 1) % n]))
                .fold(f64::INFINITY, f64::min);
            // Keep quick accepts clear of the boundary tolerance band.
            let eps = cfg::epsilon();
            min_r = (nearest - 2.0 * eps * max_r - eps).max(0.0);
        }
        Self {
            center,
            min_r2: min_r * min_r,
            max_r2: max_r * max_r,
        }
    }
}

pub(crate) fn on_boundary(verts: &[Vec2], p: Vec2) -> bool {
    let n = verts.len();
    (0..n).any(|i| point_on_segment(p, verts[i], verts[(i + 1) % n]))
}

pub(crate) fn winding_number(verts: &[Vec2], p: Vec2) -> i32 {
    let n = verts.len();
    let mut wn = 0;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y && parallelogram_area(b - a, p - a) > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && parallelogram_area(b - a, p - a) < 0.0 {
            wn -= 1;
        }
    }
    wn
}

pub(crate) fn winding_contains(verts: &[Vec2], p: Vec2) -> bool {
    !on_boundary(verts, p) && winding_number(verts, p) != 0
}

pub(crate) fn crossing_contains(verts: &[Vec2], p: Vec2) -> bool {
    if on_boundary(verts, p) {
        return false;
    }
    let n = verts.len();
    let mut inside = false;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        if (a.y <= p.y) != (b.y <= p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

pub(crate) fn triangle_contains(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    if on_boundary(&[a, b, c], p) {
        return false;
    }
    let sides = [
        parallelogram_area(b - a, p - a),
        parallelogram_area(c - b, p - b),
        parallelogram_area(a - c, p - c),
    ];
    sides.iter().all(|&s| s > 0.0) || sides.iter().all(|&s| s < 0.0)
}

pub(crate) fn convex_contains(verts: &[Vec2], p: Vec2) -> bool {
    let area2 = doubled_signed_area(verts);
    if area2 == 0.0 || on_boundary(verts, p) {
        return false;
    }
    let n = verts.len();
    (0..n).all(|i| {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        a == b || parallelogram_area(b - a, p - a) * area2 > 0.0
    })
}

/// Left and right boundary chains of a convex polygon, each a list of `(y, x)`
/// from the lowest to the highest vertex. Horizontal bottom/top edges belong to
/// neither chain.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct YPolylines {
    pub left: Vec<(f64, f64)>,
    pub right: Vec<(f64, f64)>,
}

impl YPolylines {
    /// `None` for zero-area cycles or when a chain is not monotone in `y`.
    pub fn split(verts: &[Vec2]) -> Option<Self> {
        let n = verts.len();
        let area2 = doubled_signed_area(verts);
        if area2 == 0.0 {
            return None;
        }
        let y_min = verts.iter().map(|v| v.y).fold(f64::INFINITY, f64::min);
        let y_max = verts.iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max);
        if y_max <= y_min {
            return None;
        }
        let extreme = |y: f64, leftmost: bool| -> usize {
            let mut best = 0;
            let mut found = false;
            for (i, v) in verts.iter().enumerate() {
                if v.y != y {
                    continue;
                }
                let better = if leftmost {
                    v.x < verts[best].x
                } else {
                    v.x > verts[best].x
                };
                if !found || better {
                    best = i;
                    found = true;
                }
            }
            best
        };
        let walk = |start: usize, end: usize, forward: bool| -> Vec<(f64, f64)> {
            let mut chain = vec![(verts[start].y, verts[start].x)];
            let mut i = start;
            for _ in 0..n {
                if i == end {
                    break;
                }
                i = if forward { (i + 1) % n } else { (i + n - 1) % n };
                chain.push((verts[i].y, verts[i].x));
            }
            chain
        };
        // Counterclockwise: walking forward from the bottom climbs the right side.
        let ccw = area2 > 0.0;
        let left = walk(extreme(y_min, true), extreme(y_max, true), !ccw);
        let right = walk(extreme(y_min, false), extreme(y_max, false), ccw);
        let monotone = |c: &[(f64, f64)]| c.windows(2).all(|w| w[0].0 <= w[1].0);
        if !monotone(&left) || !monotone(&right) {
            return None;
        }
        Some(Self { left, right })
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let (Some(&b_l), Some(&t_l), Some(&b_r), Some(&t_r)) = (
            self.left.first(),
            self.left.last(),
            self.right.first(),
            self.right.last(),
        ) else {
            return false;
        };
        if !(p.y > b_l.0 && p.y < t_l.0) {
            return false;
        }
        if point_on_segment(p, pt(b_l), pt(b_r)) || point_on_segment(p, pt(t_l), pt(t_r)) {
            return false;
        }
        let (Some((xl, kl)), Some((xr, kr))) = (chain_x(&self.left, p.y), chain_x(&self.right, p.y))
        else {
            return false;
        };
        if near_chain(&self.left, kl, p) || near_chain(&self.right, kr, p) {
            return false;
        }
        let (lo, hi) = if xl <= xr { (xl, xr) } else { (xr, xl) };
        lo < p.x && p.x < hi
    }
}

#[inline]
fn pt((y, x): (f64, f64)) -> Vec2 {
    Vec2::new(x, y)
}

// x of the chain at height `y`, with the index of the upper end of the
// segment it was read from.
fn chain_x(chain: &[(f64, f64)], y: f64) -> Option<(f64, usize)> {
    let k = chain.partition_point(|&(cy, _)| cy < y);
    if k == 0 || k >= chain.len() {
        return None;
    }
    let (y0, x0) = chain[k - 1];
    let (y1, x1) = chain[k];
    let dy = y1 - y0;
    if dy <= 0.0 {
        return None;
    }
    Some((x0 + (y - y0) * (x1 - x0) / dy, k))
}

// Boundary band of the segment ending at `k` and of its two neighbours. The
// band reaches past a segment's endpoints, so the segment found by height
// alone is not enough near a vertex.
fn near_chain(chain: &[(f64, f64)], k: usize, p: Vec2) -> bool {
    let hi = (k + 1).min(chain.len() - 1);
    (k.saturating_sub(2)..hi).any(|i| point_on_segment(p, pt(chain[i]), pt(chain[i + 1])))
}
