//! 2D vectors and small helpers on top of `nalgebra::Vector2`.
//!
//! Angles are in degrees throughout the public API.

use std::cmp::Ordering;

use crate::cfg;

/// Point / vector in the plane.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Cosine and sine of an angle in degrees, exact at multiples of 90°.
pub fn cos_sin_deg(deg: f64) -> (f64, f64) {
    let deg = deg.rem_euclid(360.0);
    if deg == 0.0 {
        (1.0, 0.0)
    } else if deg == 90.0 {
        (0.0, 1.0)
    } else if deg == 180.0 {
        (-1.0, 0.0)
    } else if deg == 270.0 {
        (0.0, -1.0)
    } else {
        let rad = deg.to_radians();
        (rad.cos(), rad.sin())
    }
}

/// Vector of length `r` at `angle_deg` from the +x axis.
#[inline]
pub fn polar(angle_deg: f64, r: f64) -> Vec2 {
    let (c, s) = cos_sin_deg(angle_deg);
    Vec2::new(c * r, s * r)
}

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Points closer than `EPSILON` coincide.
#[inline]
pub fn almost_equal_vec(a: Vec2, b: Vec2) -> bool {
    (a - b).norm_squared() < cfg::epsilon2()
}

/// Order by x, then y.
#[inline]
pub(crate) fn lexicographic(a: &Vec2, b: &Vec2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
