//! Lazily computed polygon properties.
//!
//! Every entry is either `Unknown` or a computed/trusted value. Vertex mutation
//! resets the whole cache; affine transforms keep the entries they preserve.

use crate::bbox::BoundingBox;
use crate::vector::Vec2;

use super::contains::{RadialBounds, YPolylines};

/// Tri-state cache slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Known<T> {
    Unknown,
    Value(T),
}

impl<T> Default for Known<T> {
    fn default() -> Self {
        Known::Unknown
    }
}

impl<T> Known<T> {
    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, Known::Value(_))
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Known::Value(v) => Some(v),
            Known::Unknown => None,
        }
    }
}

impl<T: Copy> Known<T> {
    #[inline]
    pub fn get(&self) -> Option<T> {
        self.value().copied()
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Cache {
    pub convex: Known<bool>,
    pub simple: Known<bool>,
    pub centroid: Known<Option<Vec2>>,
    pub bbox: Known<BoundingBox>,
    pub radial: Known<RadialBounds>,
    /// `Value(None)` records that the split was attempted and failed.
    pub y_polylines: Known<Option<YPolylines>>,
}

impl Cache {
    /// Fresh cache for a polygon with `len` vertices; triangles are convex and simple.
    pub fn for_len(len: usize) -> Self {
        let mut cache = Cache::default();
        if len == 3 {
            cache.convex = Known::Value(true);
            cache.simple = Known::Value(true);
        }
        cache
    }

    /// Record a convexity result; convex implies simple.
    pub fn set_convex(&mut self, convex: bool) {
        self.convex = Known::Value(convex);
        if convex {
            self.simple = Known::Value(true);
        }
    }

    /// Record a simplicity result; non-simple implies non-convex.
    pub fn set_simple(&mut self, simple: bool) {
        self.simple = Known::Value(simple);
        if !simple {
            self.convex = Known::Value(false);
        }
    }
}
