//! Signed area and area centroid (shoelace formula, relative to the first vertex).

use crate::cfg;
use crate::vector::{parallelogram_area, Vec2};

/// Twice the signed area; positive for counterclockwise cycles.
pub(crate) fn doubled_signed_area(verts: &[Vec2]) -> f64 {
    let o = verts[0];
    let n = verts.len();
    (1..n.saturating_sub(1))
        .map(|i| parallelogram_area(verts[i] - o, verts[i + 1] - o))
        .sum()
}

/// Area centroid, or `None` when the enclosed area vanishes relative to the
/// magnitude of the summed terms (zero-area or sliver polygons).
pub(crate) fn area_centroid(verts: &[Vec2]) -> Option<Vec2> {
    let o = verts[0];
    let n = verts.len();
    let mut a2 = 0.0;
    let mut mag = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 1..n - 1 {
        let p = verts[i] - o;
        let q = verts[i + 1] - o;
        let cross = parallelogram_area(p, q);
        a2 += cross;
        mag += cross.abs();
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    if a2 == 0.0 || a2.abs() <= cfg::epsilon() * mag {
        return None;
    }
    Some(o + Vec2::new(cx / (3.0 * a2), cy / (3.0 * a2)))
}
