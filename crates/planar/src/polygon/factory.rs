//! Regular polygons and stars with their classification known up front.

use crate::cfg;
use crate::error::{PolygonError, PolygonResult};
use crate::vector::{cos_sin_deg, polar, Vec2};

use super::cache::{Cache, Known};
use super::Polygon;

impl Polygon {
    /// Regular polygon with `vertex_count` vertices on a circle of `radius`
    /// around `center`; the first vertex sits at `angle_deg`.
    ///
    /// Convex, simple and centroid (= `center`) are known immediately.
    pub fn regular(
        vertex_count: usize,
        radius: f64,
        center: Vec2,
        angle_deg: f64,
    ) -> PolygonResult<Polygon> {
        if vertex_count < 3 {
            return Err(PolygonError::InvalidCount {
                what: "regular polygon vertices",
                min: 3,
                got: vertex_count,
            });
        }
        check_radius(radius)?;
        check_placement(center, angle_deg)?;
        let step = 360.0 / vertex_count as f64;
        let verts: Vec<Vec2> = (0..vertex_count)
            .map(|i| center + polar(angle_deg + step * i as f64, radius))
            .collect();
        let mut cache = Cache::for_len(vertex_count);
        cache.set_convex(true);
        cache.centroid = Known::Value(Some(center));
        tracing::debug!(vertex_count, radius, "regular polygon");
        Ok(Polygon::from_parts(verts, cache))
    }

    /// Star with `peak_count` peaks: `2 * peak_count` vertices alternating
    /// between `radius1` and `radius2` at even angular steps from `angle_deg`.
    ///
    /// With both radii non-zero and of equal sign the star is simple, its centroid
    /// is `center`, and it is convex iff the inner radius reaches the chord
    /// between neighbouring outer vertices. Otherwise only non-convexity is
    /// recorded and the rest is computed on demand.
    pub fn star(
        peak_count: usize,
        radius1: f64,
        radius2: f64,
        center: Vec2,
        angle_deg: f64,
    ) -> PolygonResult<Polygon> {
        if peak_count < 2 {
            return Err(PolygonError::InvalidCount {
                what: "star peaks",
                min: 2,
                got: peak_count,
            });
        }
        for radius in [radius1, radius2] {
            if !radius.is_finite() {
                return Err(PolygonError::InvalidRadius { radius });
            }
        }
        check_placement(center, angle_deg)?;
        let step = 180.0 / peak_count as f64;
        let verts: Vec<Vec2> = (0..2 * peak_count)
            .map(|i| {
                let r = if i % 2 == 0 { radius1 } else { radius2 };
                center + polar(angle_deg + step * i as f64, r)
            })
            .collect();
        let mut cache = Cache::for_len(verts.len());
        if radius1 * radius2 > 0.0 {
            let (outer, inner) = if radius1.abs() >= radius2.abs() {
                (radius1.abs(), radius2.abs())
            } else {
                (radius2.abs(), radius1.abs())
            };
            let chord = outer * cos_sin_deg(step).0;
            cache.set_simple(true);
            cache.set_convex(inner >= chord * (1.0 - cfg::epsilon()));
            cache.centroid = Known::Value(Some(center));
        } else {
            cache.convex = Known::Value(false);
        }
        tracing::debug!(peak_count, radius1, radius2, "star polygon");
        Ok(Polygon::from_parts(verts, cache))
    }
}

fn check_radius(radius: f64) -> PolygonResult<()> {
    if !radius.is_finite() || radius == 0.0 {
        return Err(PolygonError::InvalidRadius { radius });
    }
    Ok(())
}

fn check_placement(center: Vec2, angle_deg: f64) -> PolygonResult<()> {
    if !(center.x.is_finite() && center.y.is_finite() && angle_deg.is_finite()) {
        return Err(PolygonError::NonFinite { index: 0 });
    }
    Ok(())
}
