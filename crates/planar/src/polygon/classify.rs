//! Convexity and simplicity classification.
//!
//! Convexity
//! - Every consecutive triple (with wrap-around) is a turn. The first non-straight
//!   turn fixes the winding; a later turn of the opposite sign disqualifies.
//! - Straight turns are allowed unless they fold back (dot product < 0).
//! - All-straight polygons are not convex.
//! - A cycle with consistent turns can still wind twice (pentagram, doubled
//!   rectangle). Around a single winding the edge direction's x- and y-signs each
//!   flip exactly twice, so more flips disqualify.
//!
//! Simplicity
//! - Collapse consecutive duplicates (also across the wrap); fewer than 3 distinct
//!   vertices is not simple.
//! - Adjacent edges must not fold back over each other.
//! - Non-adjacent edges may only share endpoints; any crossing, touching or
//!   overlap is a self-intersection. O(n²) with a bounding-box reject.

use crate::bbox::BoundingBox;
use crate::cfg;
use crate::predicates::{segment_contact, turn, Orientation, SegmentContact};
use crate::vector::{almost_equal_vec, Vec2};

/// Convexity of the closed vertex cycle `verts` (len ≥ 3).
pub(crate) fn is_convex_cycle(verts: &[Vec2]) -> bool {
    let n = verts.len();
    if n == 3 {
        return true;
    }
    let mut winding: Option<Orientation> = None;
    for i in 0..n {
        let a = verts[(i + n - 1) % n];
        let b = verts[i];
        let c = verts[(i + 1) % n];
        match turn(a, b, c) {
            Orientation::Collinear => {
                if (b - a).dot(&(c - b)) < 0.0 {
                    return false;
                }
            }
            t => match winding {
                None => winding = Some(t),
                Some(w) if w != t => return false,
                Some(_) => {}
            },
        }
    }
    if winding.is_none() {
        return false;
    }
    winds_once(verts)
}

// Count sign changes of edge x- and y-directions around the cycle.
fn winds_once(verts: &[Vec2]) -> bool {
    let n = verts.len();
    let eps = cfg::epsilon();
    let mut flips = [0usize; 2];
    let mut first = [0i8; 2];
    let mut last = [0i8; 2];
    for i in 0..n {
        let e = verts[(i + 1) % n] - verts[i];
        let len = e.norm();
        for axis in 0..2 {
            let comp = e[axis];
            if comp.abs() <= eps * len {
                continue;
            }
            let s: i8 = if comp > 0.0 { 1 } else { -1 };
            if first[axis] == 0 {
                first[axis] = s;
            } else if last[axis] != s {
                flips[axis] += 1;
            }
            last[axis] = s;
        }
    }
    for axis in 0..2 {
        if first[axis] != 0 && first[axis] != last[axis] {
            flips[axis] += 1;
        }
    }
    flips.iter().all(|&f| f <= 2)
}

/// Simplicity of the closed vertex cycle `verts` (len ≥ 3).
pub(crate) fn is_simple_cycle(verts: &[Vec2]) -> bool {
    if verts.len() == 3 {
        return true;
    }
    let pts = collapse_duplicates(verts);
    let m = pts.len();
    if m < 3 {
        return false;
    }

    for i in 0..m {
        let a = pts[(i + m - 1) % m];
        let b = pts[i];
        let c = pts[(i + 1) % m];
        if turn(a, b, c) == Orientation::Collinear && (b - a).dot(&(c - b)) < 0.0 {
            return false;
        }
    }

    let edges: Vec<(Vec2, Vec2, f64, BoundingBox)> = (0..m)
        .map(|i| {
            let a = pts[i];
            let b = pts[(i + 1) % m];
            (a, b, (b - a).norm(), BoundingBox::new(a, b))
        })
        .collect();
    let eps = cfg::epsilon();
    for i in 0..m {
        for j in (i + 2)..m {
            if i == 0 && j == m - 1 {
                continue;
            }
            let (a, b, len_ab, ba) = edges[i];
            let (c, d, len_cd, bc) = edges[j];
            // Covers the incidence band of either edge, collinear overlap
            // along a shared line, and endpoint coincidence.
            let slack = 2.0 * eps * (len_ab + len_cd) + eps;
            if !ba.overlaps(&bc, slack) {
                continue;
            }
            match segment_contact(a, b, c, d) {
                SegmentContact::Disjoint | SegmentContact::SharedEndpoint => {}
                contact => {
                    tracing::trace!(i, j, ?contact, "self-intersection");
                    return false;
                }
            }
        }
    }
    true
}

/// Drop consecutive coincident vertices, including a trailing run that repeats the first.
pub(crate) fn collapse_duplicates(verts: &[Vec2]) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(verts.len());
    for &v in verts {
        match out.last() {
            Some(&last) if almost_equal_vec(last, v) => {}
            _ => out.push(v),
        }
    }
    while out.len() > 1 && almost_equal_vec(out[0], out[out.len() - 1]) {
        out.pop();
    }
    out
}
