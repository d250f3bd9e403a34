//! Convex hull of an unordered point set (adaptive quickhull).
//!
//! Model
//! - Drop exact duplicates; fewer than 3 distinct points is an error.
//! - For larger inputs, discard points strictly inside the quadrilateral of the
//!   bounding-box extremes (Akl–Toussaint) before partitioning.
//! - Split at the lexicographically leftmost and rightmost points, then recurse
//!   on the farthest point of each side, discarding everything inside the
//!   triangle it spans. Recursion stops at a single candidate.
//! - Points collinear with a hull edge are not vertices. If every point is
//!   collinear the result is the 3-vertex degenerate polygon through both ends
//!   and one interior point.
//!
//! The hull is counterclockwise and known convex (hence simple).
//!
//! References
//! - Akl & Toussaint, "A fast convex hull algorithm" (1978)
//! - Code cross-refs: `predicates::orient2d`, `Polygon::from_parts`

use crate::error::{PolygonError, PolygonResult};
use crate::polygon::cache::Cache;
use crate::polygon::Polygon;
use crate::predicates::{orient2d, Orientation};
use crate::vector::{almost_equal_vec, lexicographic, parallelogram_area, Vec2};

/// Inputs at least this large are pruned with the extreme-point quadrilateral.
const PRUNE_MIN_POINTS: usize = 64;

/// Convex hull of `points` as a counterclockwise polygon.
pub fn convex_hull<I, P>(points: I) -> PolygonResult<Polygon>
where
    I: IntoIterator<Item = P>,
    P: Into<Vec2>,
{
    let mut pts: Vec<Vec2> = points.into_iter().map(Into::into).collect();
    if let Some(index) = pts
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(PolygonError::NonFinite { index });
    }
    let input = pts.len();
    pts.sort_by(lexicographic);
    pts.dedup();
    let distinct = pts.len();
    if distinct < 3 {
        return Err(PolygonError::DegenerateHull { distinct });
    }
    let left = pts[0];
    let right = pts[distinct - 1];
    if distinct >= PRUNE_MIN_POINTS {
        pts = prune_interior(pts);
    }

    let mut lower = Vec::new();
    let mut upper = Vec::new();
    for &p in &pts {
        match orient2d(left, right, p) {
            Orientation::Clockwise => lower.push(p),
            Orientation::CounterClockwise => upper.push(p),
            Orientation::Collinear => {}
        }
    }

    let verts = if lower.is_empty() && upper.is_empty() {
        vec![left, pts[pts.len() / 2], right]
    } else {
        let mut hull = Vec::with_capacity(lower.len() + upper.len() + 2);
        hull.push(left);
        if !lower.is_empty() {
            expand(&mut hull, left, right, lower);
        }
        hull.push(right);
        if !upper.is_empty() {
            expand(&mut hull, right, left, upper);
        }
        hull
    };
    tracing::debug!(input, distinct, considered = pts.len(), hull = verts.len(), "convex hull");

    let mut cache = Cache::for_len(verts.len());
    cache.set_convex(true);
    Ok(Polygon::from_parts(verts, cache))
}

// Every point of `pts` is strictly right of `a → b`. Pushes the hull vertices
// strictly between `a` and `b`, in order.
fn expand(hull: &mut Vec<Vec2>, a: Vec2, b: Vec2, pts: Vec<Vec2>) {
    if pts.len() == 1 {
        hull.push(pts[0]);
        return;
    }
    let dir = b - a;
    let (_, far) = pts.iter().fold((f64::NEG_INFINITY, pts[0]), |best, &p| {
        let d = -parallelogram_area(dir, p - a);
        if d > best.0 {
            (d, p)
        } else {
            best
        }
    });
    let mut beyond_a = Vec::new();
    let mut beyond_b = Vec::new();
    for p in pts {
        if p == far {
            continue;
        }
        if orient2d(a, far, p) == Orientation::Clockwise {
            beyond_a.push(p);
        } else if orient2d(far, b, p) == Orientation::Clockwise {
            beyond_b.push(p);
        }
    }
    if !beyond_a.is_empty() {
        expand(hull, a, far, beyond_a);
    }
    hull.push(far);
    if !beyond_b.is_empty() {
        expand(hull, far, b, beyond_b);
    }
}

// Drop points strictly inside the quadrilateral leftmost → lowest → rightmost → highest.
fn prune_interior(pts: Vec<Vec2>) -> Vec<Vec2> {
    let by_y = |a: &&Vec2, b: &&Vec2| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal);
    let (Some(&lowest), Some(&highest), Some(&left), Some(&right)) = (
        pts.iter().min_by(by_y),
        pts.iter().max_by(by_y),
        pts.first(),
        pts.last(),
    ) else {
        return pts;
    };
    let quad = [left, lowest, right, highest];
    let area2: f64 = (0..4)
        .map(|i| parallelogram_area(quad[i], quad[(i + 1) % 4]))
        .sum();
    if area2 <= 0.0 {
        return pts;
    }
    let inside = |p: Vec2| {
        (0..4).all(|i| {
            let a = quad[i];
            let b = quad[(i + 1) % 4];
            almost_equal_vec(a, b) || orient2d(a, b, p) == Orientation::CounterClockwise
        })
    };
    let kept: Vec<Vec2> = pts.iter().copied().filter(|&p| !inside(p)).collect();
    tracing::trace!(before = pts.len(), after = kept.len(), "pruned hull interior");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::point_on_segment;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn on_hull_boundary(hull: &Polygon, p: Vec2) -> bool {
        let v = hull.vertices();
        (0..v.len()).any(|i| point_on_segment(p, v[i], v[(i + 1) % v.len()]))
    }

    #[test]
    fn triangle_hull_is_itself() {
        let pts = [vector![-0.5, -1.0], vector![0.0, 2.0], vector![3.0, 0.5]];
        let hull = convex_hull(pts).unwrap();
        assert_eq!(hull, Polygon::new(pts).unwrap());
        assert!(hull.is_convex_known());
    }

    #[test]
    fn regular_polygon_hull_keeps_every_vertex() {
        let reg = Polygon::regular(33, 5.0, Vec2::zeros(), 0.0).unwrap();
        let hull = convex_hull(reg.vertices().iter().copied()).unwrap();
        assert_eq!(hull.len(), 33);
        assert_eq!(hull, reg);
        assert!(hull.signed_area() > 0.0);
    }

    #[test]
    fn random_points_lie_inside_or_on_hull() {
        let mut rng = StdRng::seed_from_u64(7);
        let pts: Vec<Vec2> = (0..500)
            .map(|_| vector![rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)])
            .collect();
        let mut hull = convex_hull(pts.iter().copied()).unwrap();
        assert!(hull.is_convex());
        assert!(hull.signed_area() > 0.0);
        let verts = hull.vertices().to_vec();
        for &p in &pts {
            let is_vertex = verts.contains(&p);
            assert!(is_vertex || hull.contains_point(p) || on_hull_boundary(&hull, p));
        }
        // Every hull vertex is an input point.
        for v in &verts {
            assert!(pts.contains(v));
        }
    }

    #[test]
    fn drops_interior_and_edge_points() {
        let pts = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
            vector![2.0, 2.0],
        ];
        let hull = convex_hull(pts).unwrap();
        let square = Polygon::new([[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]).unwrap();
        assert_eq!(hull, square);
    }

    #[test]
    fn almost_convex_set_drops_one_point() {
        let pts: Vec<Vec2> = [
            (-1.75, -1.0),
            (-1.45, -1.44),
            (-1.0, -1.75),
            (-0.35, -1.97),
            (0.35, -1.97),
            (1.0, -1.75),
            (1.45, -1.44),
            (1.75, -1.0),
            (1.97, -0.35),
            (1.97, 0.35),
            (1.75, 1.0),
            (1.2, 1.2),
            (1.0, 1.75),
            (0.35, 1.97),
            (-0.35, 1.97),
            (-1.0, 1.75),
            (-1.45, 1.44),
            (-1.75, 1.0),
            (-1.97, 0.35),
            (-1.97, -0.35),
        ]
        .iter()
        .map(|&(x, y)| vector![x, y])
        .collect();
        let hull = convex_hull(pts.iter().copied()).unwrap();
        assert_eq!(hull.len(), pts.len() - 1);
        assert!(!hull.vertices().contains(&vector![1.2, 1.2]));
    }

    #[test]
    fn large_input_is_pruned_without_losing_vertices() {
        let mut pts: Vec<Vec2> = Polygon::regular(40, 3.0, vector![1.0, -2.0], 7.0)
            .unwrap()
            .into_vertices();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..300 {
            pts.push(vector![1.0, -2.0] + vector![rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5)]);
        }
        let hull = convex_hull(pts).unwrap();
        assert_eq!(hull.len(), 40);
    }

    #[test]
    fn collinear_input_gives_degenerate_triangle() {
        let pts = [[0.0, 1.0], [2.0, 1.0], [5.0, 1.0], [7.0, 1.0], [12.0, 1.0]];
        let mut hull = convex_hull(pts).unwrap();
        assert_eq!(hull.len(), 3);
        assert!(hull.vertices().contains(&vector![0.0, 1.0]));
        assert!(hull.vertices().contains(&vector![12.0, 1.0]));
        assert!(hull.is_convex());
        assert_eq!(hull.area(), 0.0);
        assert_eq!(hull.centroid(), None);
    }

    #[test]
    fn too_few_distinct_points_is_an_error() {
        assert_eq!(
            convex_hull([[1.0, 1.0], [1.0, 1.0], [2.0, 0.0], [2.0, 0.0]]).unwrap_err(),
            PolygonError::DegenerateHull { distinct: 2 }
        );
        assert_eq!(
            convex_hull(Vec::<Vec2>::new()).unwrap_err(),
            PolygonError::DegenerateHull { distinct: 0 }
        );
        assert!(matches!(
            convex_hull([[0.0, 0.0], [f64::NAN, 1.0], [1.0, 0.0]]),
            Err(PolygonError::NonFinite { index: 1 })
        ));
    }

    #[test]
    fn hull_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(3);
        let pts: Vec<Vec2> = (0..200)
            .map(|_| vector![rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
            .collect();
        let once = convex_hull(pts).unwrap();
        let twice = convex_hull(once.vertices().iter().copied()).unwrap();
        assert_eq!(once, twice);
    }
}
