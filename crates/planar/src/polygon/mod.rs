//! Polygons with lazily classified structure.
//!
//! Purpose
//! - Own an ordered, mutable vertex cycle (≥ 3 vertices) and memoize derived
//!   properties: convexity, simplicity, centroid, bounding box, and the
//!   structures the containment engine builds on demand.
//! - Queries that may populate the cache take `&mut self`; `*_known()` and the
//!   strategy choice only read it.
//!
//! Cache discipline
//! - Triangles are convex and simple from construction, regardless of hints.
//! - Known-convex implies known-simple; known-non-simple implies non-convex.
//! - `set_vertex` resets everything; `transform` keeps what an invertible
//!   affine map preserves.
//!
//! References
//! - Code cross-refs: `classify`, `centroid`, `contains`, `tangent`, `crate::hull`

pub mod cache;
mod centroid;
mod classify;
mod contains;
mod factory;
mod tangent;
mod text;


use crate::bbox::BoundingBox;
use crate::error::{PolygonError, PolygonResult};
use crate::transform::Affine2;
use crate::vector::Vec2;

use cache::{Cache, Known};

pub use contains::Strategy;

/// Trusted classification supplied by the caller at construction.
///
/// `is_convex: Some(true)` also marks the polygon simple; `is_simple: Some(false)`
/// also marks it non-convex. Ignored for triangles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hints {
    pub is_convex: Option<bool>,
    pub is_simple: Option<bool>,
}

/// Closed polygon over an ordered vertex cycle.
#[derive(Clone, Debug)]
pub struct Polygon {
    verts: Vec<Vec2>,
    cache: Cache,
}

impl Polygon {
    /// Polygon over `points` in order. Needs at least 3 finite points.
    pub fn new<I, P>(points: I) -> PolygonResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec2>,
    {
        Self::with_hints(points, Hints::default())
    }

    /// Like [`Polygon::new`], trusting `hints` without verification.
    pub fn with_hints<I, P>(points: I, hints: Hints) -> PolygonResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec2>,
    {
        let verts: Vec<Vec2> = points.into_iter().map(Into::into).collect();
        if verts.len() < 3 {
            return Err(PolygonError::TooFewVertices { got: verts.len() });
        }
        if let Some(index) = verts.iter().position(|v| !is_finite(*v)) {
            return Err(PolygonError::NonFinite { index });
        }
        let mut cache = Cache::for_len(verts.len());
        if verts.len() > 3 {
            if let Some(simple) = hints.is_simple {
                cache.set_simple(simple);
            }
            if let Some(convex) = hints.is_convex {
                cache.set_convex(convex);
            }
        }
        Ok(Self { verts, cache })
    }

    /// Assemble from already validated parts.
    pub(crate) fn from_parts(verts: Vec<Vec2>, cache: Cache) -> Self {
        debug_assert!(verts.len() >= 3);
        Self { verts, cache }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always `false`; polygons hold at least 3 vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.verts
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Option<Vec2> {
        self.verts.get(index).copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.verts.iter()
    }

    pub fn into_vertices(self) -> Vec<Vec2> {
        self.verts
    }

    /// Replace vertex `index`; every cached property is invalidated.
    pub fn set_vertex(&mut self, index: usize, p: impl Into<Vec2>) -> PolygonResult<()> {
        let len = self.verts.len();
        if index >= len {
            return Err(PolygonError::IndexOutOfRange { index, len });
        }
        let p = p.into();
        if !is_finite(p) {
            return Err(PolygonError::NonFinite { index });
        }
        self.verts[index] = p;
        self.cache = Cache::for_len(len);
        Ok(())
    }

    #[inline]
    pub fn is_convex_known(&self) -> bool {
        self.cache.convex.is_known()
    }

    #[inline]
    pub fn is_simple_known(&self) -> bool {
        self.cache.simple.is_known()
    }

    #[inline]
    pub fn is_centroid_known(&self) -> bool {
        self.cache.centroid.is_known()
    }

    /// Cached convexity without computing it.
    #[inline]
    pub fn convexity(&self) -> Known<bool> {
        self.cache.convex
    }

    /// Cached simplicity without computing it.
    #[inline]
    pub fn simplicity(&self) -> Known<bool> {
        self.cache.simple
    }

    pub fn is_convex(&mut self) -> bool {
        if let Some(convex) = self.cache.convex.get() {
            return convex;
        }
        let convex = classify::is_convex_cycle(&self.verts);
        tracing::trace!(len = self.verts.len(), convex, "classified convexity");
        self.cache.set_convex(convex);
        convex
    }

    /// Simplicity; tries the linear convexity test before the quadratic one.
    pub fn is_simple(&mut self) -> bool {
        if let Some(simple) = self.cache.simple.get() {
            return simple;
        }
        if !self.cache.convex.is_known() && self.is_convex() {
            return true;
        }
        let simple = classify::is_simple_cycle(&self.verts);
        tracing::trace!(len = self.verts.len(), simple, "classified simplicity");
        self.cache.set_simple(simple);
        simple
    }

    /// Area centroid; `None` for non-simple or zero-area polygons.
    pub fn centroid(&mut self) -> Option<Vec2> {
        if let Some(c) = self.cache.centroid.get() {
            return c;
        }
        let c = if self.is_simple() {
            centroid::area_centroid(&self.verts)
        } else {
            None
        };
        self.cache.centroid = Known::Value(c);
        c
    }

    pub fn bounding_box(&mut self) -> BoundingBox {
        if let Some(bb) = self.cache.bbox.get() {
            return bb;
        }
        let bb = BoundingBox::around(self.verts[0], &self.verts[1..]);
        self.cache.bbox = Known::Value(bb);
        bb
    }

    /// Signed area (positive for counterclockwise cycles).
    pub fn signed_area(&self) -> f64 {
        0.5 * centroid::doubled_signed_area(&self.verts)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Apply `f` to every vertex in place.
    ///
    /// An invertible map keeps convexity and simplicity and carries a known
    /// centroid along; a degenerate one resets the cache.
    pub fn transform(&mut self, f: &Affine2) {
        for v in &mut self.verts {
            *v = f.apply(*v);
        }
        if f.is_degenerate() {
            self.cache = Cache::for_len(self.verts.len());
            return;
        }
        if let Some(c) = self.cache.centroid.get() {
            self.cache.centroid = Known::Value(c.map(|c| f.apply(c)));
        }
        self.cache.bbox = Known::Unknown;
        self.cache.radial = Known::Unknown;
        self.cache.y_polylines = Known::Unknown;
    }

    pub fn transformed(&self, f: &Affine2) -> Polygon {
        let mut out = self.clone();
        out.transform(f);
        out
    }
}

#[inline]
fn is_finite(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

/// Same cycle up to rotation and reversal; cached state is ignored.
impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        cyclic_eq(&self.verts, &other.verts)
    }
}

fn cyclic_eq(a: &[Vec2], b: &[Vec2]) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    if n == 0 {
        return true;
    }
    (0..n).filter(|&k| b[k] == a[0]).any(|k| {
        (0..n).all(|i| a[i] == b[(k + i) % n]) || (0..n).all(|i| a[i] == b[(k + n - i) % n])
    })
}

impl std::ops::Index<usize> for Polygon {
    type Output = Vec2;
    #[inline]
    fn index(&self, index: usize) -> &Vec2 {
        &self.verts[index]
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Vec2;
    type IntoIter = std::slice::Iter<'a, Vec2>;
    fn into_iter(self) -> Self::IntoIter {
        self.verts.iter()
    }
}
