//! Property checks across the public API: strategy agreement, hull invariants,
//! tangent extremality and cycle equality.

use planar::prelude::*;
use planar::Known;
use proptest::arbitrary::any;
use proptest::strategy::Strategy as _;
use proptest::test_runner::TestCaseError;
use proptest::{prop_assert, prop_assert_eq, prop_assert_ne, proptest};

fn radial_cfg(n_max: usize) -> RadialCfg {
    RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: n_max },
        angle_jitter_frac: 0.4,
        radial_jitter: 0.5,
        base_radius: 2.0,
        random_phase: true,
        center: Vec2::new(0.5, -1.0),
    }
}

fn edge_point(poly: &Polygon, i: usize, t: f64) -> Vec2 {
    let a = poly[i];
    let b = poly[(i + 1) % poly.len()];
    a + (b - a) * t
}

// Point offset from an edge point along the edge normal (left of a → b for positive `d`).
fn off_edge(poly: &Polygon, i: usize, t: f64, d: f64) -> Vec2 {
    let a = poly[i];
    let b = poly[(i + 1) % poly.len()];
    let e = b - a;
    let len = e.norm();
    edge_point(poly, i, t) + Vec2::new(-e.y, e.x) * (d / len)
}

// Points within a few band widths of every vertex and of both ends of every
// edge, on both sides.
fn near_boundary_points(poly: &Polygon) -> Vec<Vec2> {
    let eps = epsilon();
    let n = poly.len();
    let mut out = Vec::new();
    for i in 0..n {
        let v = poly[i];
        let len = (poly[(i + 1) % n] - v).norm();
        for k in [0.5, 2.0, 50.0] {
            let r = k * eps * len.max(1.0);
            for deg in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
                out.push(v + polar(deg + 7.0 * i as f64, r));
            }
        }
        for t in [1e-4, 0.5, 1.0 - 1e-4] {
            for k in [-50.0, -2.0, -0.5, 0.5, 2.0, 50.0] {
                out.push(off_edge(poly, i, t, k * eps * len));
            }
        }
    }
    out
}

fn reversed(poly: &Polygon) -> Polygon {
    Polygon::new(poly.vertices().iter().rev().copied()).unwrap()
}

#[test]
fn convex_strategies_agree() {
    let strategies = [
        Strategy::YMonotone,
        Strategy::ConvexHalfPlane,
        Strategy::Winding,
        Strategy::EvenOdd,
    ];
    let mut checked = 0usize;
    for index in 0..20 {
        let tok = ReplayToken { seed: 2024, index };
        let mut drawn = draw_convex_radial(radial_cfg(60), tok).unwrap();
        let c = drawn.centroid().unwrap();
        let mut probes = draw_points(400, c, 3.0, tok);
        let n = drawn.len();
        for k in 0..100 {
            let i = k % n;
            let t = 0.05 + 0.9 * ((k * 37) % 100) as f64 / 100.0;
            let d = if k % 2 == 0 { 1e-3 } else { -1e-3 };
            probes.push(off_edge(&drawn, i, t, d));
        }
        probes.extend(near_boundary_points(&drawn));
        for mut poly in [reversed(&drawn), drawn] {
            assert!(poly.is_convex());
            poly.centroid().unwrap();
            for &p in &probes {
                let expected = poly.contains_point_with(p, Strategy::Winding);
                for s in strategies {
                    assert_eq!(poly.contains_point_with(p, s), expected, "{s:?} at {p:?} in {poly}");
                }
                assert_eq!(poly.contains_point(p), expected, "dispatch at {p:?} in {poly}");
                checked += 1;
            }
        }
    }
    assert!(checked >= 20_000);
}

#[test]
fn boundary_is_never_contained() {
    for index in 0..20 {
        let tok = ReplayToken { seed: 99, index };
        let mut convex = draw_convex_radial(radial_cfg(40), tok).unwrap();
        let mut simple = draw_polygon_radial(radial_cfg(40), tok).unwrap();
        for poly in [&mut convex, &mut simple] {
            let n = poly.len();
            for i in 0..n {
                let v = poly[i];
                assert!(!poly.contains_point(v));
                for t in [0.05, 0.3, 0.5, 0.77, 0.95] {
                    let q = edge_point(poly, i, t);
                    assert!(!poly.contains_point(q), "edge {i} t={t} in {poly}");
                }
            }
        }
        convex.centroid();
        for i in 0..convex.len() {
            let q = edge_point(&convex, i, 0.5);
            assert!(!convex.contains_point_with(q, Strategy::YMonotone));
            assert!(!convex.contains_point_with(q, Strategy::ConvexHalfPlane));
        }
    }
}

#[test]
fn winding_and_even_odd_agree_on_simple_polygons() {
    for index in 0..20 {
        let tok = ReplayToken { seed: 7, index };
        let mut poly = draw_polygon_radial(radial_cfg(80), tok).unwrap();
        for p in draw_points(500, Vec2::new(0.5, -1.0), 3.5, tok) {
            assert_eq!(
                poly.contains_point_with(p, Strategy::Winding),
                poly.contains_point_with(p, Strategy::EvenOdd),
                "{p:?} in {poly}"
            );
        }
    }
}

#[test]
fn triangle_strategy_agrees_with_winding() {
    for index in 0..50 {
        let tok = ReplayToken { seed: 3, index };
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(3),
            ..radial_cfg(3)
        };
        let drawn = draw_polygon_radial(cfg, tok).unwrap();
        let mut probes = draw_points(200, Vec2::new(0.5, -1.0), 3.0, tok);
        probes.extend(near_boundary_points(&drawn));
        for mut tri in [reversed(&drawn), drawn] {
            assert_eq!(tri.containment_strategy(), Strategy::Triangle);
            for &p in &probes {
                let expected = tri.contains_point_with(p, Strategy::Winding);
                assert_eq!(tri.contains_point(p), expected, "{p:?} in {tri}");
                assert_eq!(
                    tri.contains_point_with(p, Strategy::ConvexHalfPlane),
                    expected,
                    "half-plane {p:?} in {tri}"
                );
            }
        }
    }
}

#[test]
fn tangents_are_extreme() {
    for index in 0..30 {
        let tok = ReplayToken { seed: 11, index };
        let mut convex = draw_convex_radial(radial_cfg(100), tok).unwrap();
        let mut simple = draw_polygon_radial(radial_cfg(100), tok).unwrap();
        for k in 0..24 {
            let p = Vec2::new(0.5, -1.0) + polar(15.0 * k as f64 + 3.7, 6.0 + k as f64);
            for poly in [&mut convex, &mut simple] {
                let (l, r) = poly.tangents_to_point(p);
                assert!(poly.vertices().contains(&l) && poly.vertices().contains(&r));
                for &v in poly.vertices() {
                    assert_ne!(orient2d(p, l, v), Orientation::CounterClockwise, "left from {p:?}");
                    assert_ne!(orient2d(p, r, v), Orientation::Clockwise, "right from {p:?}");
                }
            }
        }
    }
}

#[test]
fn draws_are_reproducible() {
    let tok = ReplayToken { seed: 5, index: 17 };
    let a = draw_convex_radial(radial_cfg(50), tok).unwrap();
    let b = draw_convex_radial(radial_cfg(50), tok).unwrap();
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(draw_points(10, Vec2::zeros(), 1.0, tok), draw_points(10, Vec2::zeros(), 1.0, tok));
}

fn arb_point() -> impl proptest::strategy::Strategy<Value = Vec2> {
    (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Vec2::new(x, y))
}

fn on_boundary(poly: &Polygon, p: Vec2) -> bool {
    let v = poly.vertices();
    (0..v.len()).any(|i| point_on_segment(p, v[i], v[(i + 1) % v.len()]))
}

proptest! {
    #[test]
    fn hull_contains_its_input(pts in proptest::collection::vec(arb_point(), 3..200)) {
        let hull = match convex_hull(pts.iter().copied()) {
            Ok(h) => h,
            Err(PolygonError::DegenerateHull { .. }) => return Ok(()),
            Err(e) => return Err(TestCaseError::fail(e.to_string())),
        };
        prop_assert_eq!(hull.convexity(), Known::Value(true));
        prop_assert!(hull.signed_area() >= 0.0);
        let mut check = Polygon::new(hull.vertices().iter().copied()).unwrap();
        prop_assert!(check.is_convex());
        for v in hull.vertices() {
            prop_assert!(pts.contains(v));
        }
        let mut hull = hull;
        for &p in &pts {
            prop_assert!(
                hull.vertices().contains(&p) || hull.contains_point(p) || on_boundary(&hull, p),
                "{:?} escapes {}", p, hull
            );
        }
    }

    #[test]
    fn hull_is_idempotent(pts in proptest::collection::vec(arb_point(), 3..100)) {
        if let Ok(once) = convex_hull(pts) {
            let twice = convex_hull(once.vertices().iter().copied()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn regular_vertices_are_equidistant(
        n in 3usize..200,
        r in 0.1..100.0f64,
        cx in -50.0..50.0f64,
        cy in -50.0..50.0f64,
        angle in -360.0..360.0f64,
    ) {
        let c = Vec2::new(cx, cy);
        let mut poly = Polygon::regular(n, r, c, angle).unwrap();
        let side = (poly[1] - poly[0]).norm();
        for i in 0..n {
            prop_assert!(((poly[i] - c).norm() - r).abs() <= 1e-9 * r.max(1.0) * 100.0);
            prop_assert!(((poly[(i + 1) % n] - poly[i]).norm() - side).abs() <= 1e-9 * r.max(1.0) * 100.0);
        }
        prop_assert_eq!(poly.centroid(), Some(c));
        prop_assert!(poly.contains_point(c));
    }

    #[test]
    fn equality_under_rotation_and_reversal(
        pts in proptest::collection::vec(arb_point(), 3..30),
        shift in 0usize..30,
        reverse in any::<bool>(),
    ) {
        let poly = Polygon::new(pts.iter().copied()).unwrap();
        let mut moved = pts.clone();
        moved.rotate_left(shift % pts.len());
        if reverse {
            moved.reverse();
        }
        prop_assert_eq!(&poly, &Polygon::new(moved).unwrap());
        let mut shorter = pts.clone();
        shorter.push(pts[0]);
        prop_assert_ne!(&poly, &Polygon::new(shorter).unwrap());
    }

    #[test]
    fn triangles_are_classified_at_construction(a in arb_point(), b in arb_point(), c in arb_point()) {
        let tri = Polygon::new([a, b, c]).unwrap();
        prop_assert_eq!(tri.convexity(), Known::Value(true));
        prop_assert_eq!(tri.simplicity(), Known::Value(true));
        prop_assert_eq!(tri.containment_strategy(), Strategy::Triangle);
    }

    #[test]
    fn text_form_round_trips(pts in proptest::collection::vec(arb_point(), 3..20)) {
        let mut poly = Polygon::new(pts).unwrap();
        poly.is_simple();
        let parsed: Polygon = poly.to_string().parse().unwrap();
        prop_assert_eq!(parsed.vertices(), poly.vertices());
        prop_assert_eq!(parsed.convexity(), poly.convexity());
        prop_assert_eq!(parsed.simplicity(), poly.simplicity());
    }

    #[test]
    fn rigid_motion_keeps_interior_points(
        seed in any::<u64>(),
        angle in -180.0..180.0f64,
        tx in -10.0..10.0f64,
        ty in -10.0..10.0f64,
        s in 0.5..4.0f64,
    ) {
        let mut poly = draw_convex_radial(radial_cfg(30), ReplayToken { seed, index: 0 }).unwrap();
        let c = poly.centroid().unwrap();
        let f = Affine2::translation(Vec2::new(tx, ty)) * Affine2::rotation(angle) * Affine2::scale(Vec2::new(s, s));
        let mut moved = poly.transformed(&f);
        prop_assert_eq!(moved.convexity(), Known::Value(true));
        let mc = moved.centroid().unwrap();
        prop_assert!((mc - f.apply(c)).norm() <= 1e-9 * (1.0 + mc.norm()));
        prop_assert!(moved.contains_point(mc));
        for i in 0..moved.len() {
            prop_assert!(!moved.contains_point(moved[i]));
        }
    }
}
