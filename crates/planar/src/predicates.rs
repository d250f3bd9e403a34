//! Orientation and incidence predicates.
//!
//! Orientation uses the relative tolerance described in [`crate::cfg`]:
//! a cross product `u × v` counts as zero when `|u × v| <= EPSILON · |u| · |v|`.
//! Zero-length operands are therefore always collinear.
//!
//! Incidence is distance based and scales with the segment: `p` is on `[a, b]`
//! when it lies within `EPSILON · |ab|` of it. Collinear overlaps use the same
//! band along the shared line.
//!
//! References
//! - Code cross-refs: `polygon::classify`, `polygon::contains`, `polygon::tangent`, `hull`

use crate::cfg;
use crate::vector::{almost_equal_vec, parallelogram_area, Vec2};

/// Sign of a turn or of a point relative to a directed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left turn / point left of the line (positive cross product).
    CounterClockwise,
    /// Right turn / point right of the line (negative cross product).
    Clockwise,
    /// Within tolerance of zero.
    Collinear,
}

impl Orientation {
    #[inline]
    fn classify(cross: f64, scale: f64) -> Self {
        let tol = cfg::epsilon() * scale;
        if cross > tol {
            Orientation::CounterClockwise
        } else if cross < -tol {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// Opposite sign; `Collinear` maps to itself.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Side of `c` relative to the directed line `a → b`.
#[inline]
pub fn orient2d(a: Vec2, b: Vec2, c: Vec2) -> Orientation {
    let ab = b - a;
    let ac = c - a;
    Orientation::classify(parallelogram_area(ab, ac), ab.norm() * ac.norm())
}

/// Turn taken at `b` when walking `a → b → c`, from the two edge vectors.
#[inline]
pub fn turn(a: Vec2, b: Vec2, c: Vec2) -> Orientation {
    let e0 = b - a;
    let e1 = c - b;
    Orientation::classify(parallelogram_area(e0, e1), e0.norm() * e1.norm())
}

/// `p` lies on the closed segment `[a, b]` (endpoints included).
///
/// The band is a stadium of radius `EPSILON · |ab|` around the segment, plus
/// the coincidence discs of both endpoints. It is the same for `[a, b]` and
/// `[b, a]`. This is the single boundary predicate used by every containment
/// strategy.
pub fn point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> bool {
    if almost_equal_vec(p, a) || almost_equal_vec(p, b) {
        return true;
    }
    let len2 = (b - a).norm_squared();
    if len2 < cfg::epsilon2() {
        return false;
    }
    segment_distance(p, a, b) <= cfg::epsilon() * len2.sqrt()
}

/// Euclidean distance from `p` to the closed segment `[a, b]`.
///
/// Endpoints are put in lexicographic order first, so the result does not
/// depend on the direction of the segment.
pub fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let (a, b) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Kind of contact between two closed segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentContact {
    Disjoint,
    /// The only common point is an endpoint of both segments.
    SharedEndpoint,
    /// An endpoint of one segment lies in the interior of the other.
    Touching,
    /// Proper crossing of the two interiors.
    Crossing,
    /// Collinear with a common stretch of positive length.
    Overlapping,
}

/// Classify the contact between `[a, b]` and `[c, d]`.
pub fn segment_contact(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> SegmentContact {
    use Orientation::Collinear;
    let o1 = orient2d(a, b, c);
    let o2 = orient2d(a, b, d);
    let o3 = orient2d(c, d, a);
    let o4 = orient2d(c, d, b);

    if o1 != Collinear && o2 != Collinear && o1 != o2 && o3 != Collinear && o4 != Collinear && o3 != o4
    {
        return SegmentContact::Crossing;
    }
    if o1 == Collinear && o2 == Collinear {
        return collinear_contact(a, b, c, d);
    }
    if o3 == Collinear && o4 == Collinear {
        return collinear_contact(c, d, a, b);
    }

    let shared = |p: Vec2, q0: Vec2, q1: Vec2| almost_equal_vec(p, q0) || almost_equal_vec(p, q1);
    let probes = [
        (c, point_on_segment(c, a, b), shared(c, a, b)),
        (d, point_on_segment(d, a, b), shared(d, a, b)),
        (a, point_on_segment(a, c, d), shared(a, c, d)),
        (b, point_on_segment(b, c, d), shared(b, c, d)),
    ];
    let mut contact = SegmentContact::Disjoint;
    for (_, hit, at_endpoint) in probes {
        if hit {
            if !at_endpoint {
                return SegmentContact::Touching;
            }
            contact = SegmentContact::SharedEndpoint;
        }
    }
    contact
}

// `c` and `d` are known to lie on the line through `a`, `b`.
fn collinear_contact(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> SegmentContact {
    let (origin, dir) = if (b - a).norm_squared() >= (d - c).norm_squared() {
        (a, b - a)
    } else {
        (c, d - c)
    };
    let len2 = dir.norm_squared();
    if len2 < cfg::epsilon2() {
        // Both segments collapse to points.
        return if almost_equal_vec(a, c) {
            SegmentContact::SharedEndpoint
        } else {
            SegmentContact::Disjoint
        };
    }
    let t = |p: Vec2| (p - origin).dot(&dir) / len2;
    let (ta, tb, tc, td) = (t(a), t(b), t(c), t(d));
    let lo = ta.min(tb).max(tc.min(td));
    let hi = ta.max(tb).min(tc.max(td));
    let len = len2.sqrt();
    let overlap = (hi - lo) * len;
    let tol = cfg::epsilon() * len;
    if overlap > tol {
        SegmentContact::Overlapping
    } else if overlap >= -tol {
        let shared = [a, b]
            .iter()
            .any(|&p| almost_equal_vec(p, c) || almost_equal_vec(p, d));
        if shared {
            SegmentContact::SharedEndpoint
        } else {
            SegmentContact::Touching
        }
    } else {
        SegmentContact::Disjoint
    }
}
