//! Tangent vertices from an external point.
//!
//! Seen from `p`, the left tangent `L` has every vertex on or right of the ray
//! `p → L`, the right tangent `R` every vertex on or left of `p → R`. Vertices
//! collinear with the tangent ray resolve to the one nearest `p`.
//!
//! - Convex polygons: binary search over the cycle (Sunday's `tangent_PointPolyC`),
//!   checked as a local extremum, with the linear scan as fallback.
//! - Otherwise: linear scan over vertices whose neighbours do not cross `p → v`.
//!
//! Points inside the polygon have no tangents; some pair of vertices is returned.
//!
//! References
//! - D. Sunday, "Tangents to and between Polygons" (geomalgorithms.com)

use crate::predicates::{orient2d, Orientation};
use crate::vector::Vec2;

use super::Polygon;

impl Polygon {
    /// Tangent vertices `(left, right)` as seen from `p`.
    ///
    /// Computes convexity if it is not cached yet.
    pub fn tangents_to_point(&mut self, p: Vec2) -> (Vec2, Vec2) {
        if self.is_convex() {
            convex_tangents(&self.verts, p)
        } else {
            generic_tangents(&self.verts, p)
        }
    }
}

pub(crate) fn convex_tangents(verts: &[Vec2], p: Vec2) -> (Vec2, Vec2) {
    (
        convex_extreme(verts, p, Orientation::CounterClockwise),
        convex_extreme(verts, p, Orientation::Clockwise),
    )
}

pub(crate) fn generic_tangents(verts: &[Vec2], p: Vec2) -> (Vec2, Vec2) {
    (
        linear_extreme(verts, p, Orientation::CounterClockwise),
        linear_extreme(verts, p, Orientation::Clockwise),
    )
}

// `v` replaces `cur`: strictly beyond it towards `dir`, or on the same ray and nearer.
#[inline]
fn prefer(p: Vec2, cur: Vec2, v: Vec2, dir: Orientation) -> bool {
    match orient2d(p, cur, v) {
        Orientation::Collinear => {
            let dc = cur - p;
            let dv = v - p;
            dv.dot(&dc) > 0.0 && dv.norm_squared() < dc.norm_squared()
        }
        o => o == dir,
    }
}

fn linear_extreme(verts: &[Vec2], p: Vec2, dir: Orientation) -> Vec2 {
    let n = verts.len();
    let mut best: Option<Vec2> = None;
    for i in 0..n {
        let v = verts[i];
        let prev = verts[(i + n - 1) % n];
        let next = verts[(i + 1) % n];
        if orient2d(p, v, prev) == dir || orient2d(p, v, next) == dir {
            continue;
        }
        best = match best {
            Some(cur) if !prefer(p, cur, v, dir) => Some(cur),
            _ => Some(v),
        };
    }
    match best {
        Some(v) => v,
        // No local extremum (p inside): fall back to the plain extreme.
        None => verts[1..].iter().fold(verts[0], |cur, &v| {
            if prefer(p, cur, v, dir) {
                v
            } else {
                cur
            }
        }),
    }
}

fn convex_extreme(verts: &[Vec2], p: Vec2, dir: Orientation) -> Vec2 {
    let n = verts.len();
    let at = |i: usize| verts[i % n];
    // Vertex i lies strictly beyond vertex j towards `dir`.
    let higher = |i: usize, j: usize| orient2d(p, at(j), at(i)) == dir;
    let is_extreme = |i: usize| !higher(i + 1, i) && !higher(i + n - 1, i);

    match binary_search(n, &higher).filter(|&i| is_extreme(i)) {
        Some(i) => settle_on_plateau(verts, p, i % n, dir),
        None => linear_extreme(verts, p, dir),
    }
}

fn binary_search(n: usize, higher: &dyn Fn(usize, usize) -> bool) -> Option<usize> {
    if higher(0, 1) && !higher(n - 1, 0) {
        return Some(0);
    }
    let (mut a, mut b) = (0usize, n);
    for _ in 0..2 * usize::BITS {
        if b - a < 2 {
            return None;
        }
        let c = (a + b) / 2;
        let down_c = higher(c, c + 1);
        if down_c && !higher(c - 1, c) {
            return Some(c);
        }
        let up_a = higher(a + 1, a);
        if up_a {
            if down_c || higher(a, c) {
                b = c;
            } else {
                a = c;
            }
        } else if !down_c {
            a = c;
        } else if higher(c, a) {
            b = c;
        } else {
            a = c;
        }
    }
    None
}

// Walk collinear neighbours of the extreme vertex and keep the one nearest `p`.
fn settle_on_plateau(verts: &[Vec2], p: Vec2, start: usize, dir: Orientation) -> Vec2 {
    let n = verts.len();
    let mut best = verts[start];
    for step in [1, n - 1] {
        let mut i = start;
        for _ in 1..n {
            let next = (i + step) % n;
            if orient2d(p, verts[i], verts[next]) != Orientation::Collinear {
                break;
            }
            if prefer(p, best, verts[next], dir) {
                best = verts[next];
            }
            i = next;
        }
    }
    best
}
