//! Axis-aligned bounding boxes.

use crate::vector::Vec2;

/// Closed axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Box spanned by two corners in any order.
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest box containing every point; `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(Self::around(*first, rest))
    }

    /// Smallest box containing `first` and every point of `rest`.
    pub fn around(first: Vec2, rest: &[Vec2]) -> Self {
        rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| acc.expanded_to(*p),
        )
    }

    #[inline]
    fn expanded_to(self, p: Vec2) -> Self {
        Self {
            min: Vec2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Vec2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Degenerate along at least one axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Closed containment (edges of the box included).
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Boxes share at least one point once each side is grown by `slack`.
    #[inline]
    pub fn overlaps(&self, other: &BoundingBox, slack: f64) -> bool {
        self.min.x <= other.max.x + slack
            && other.min.x <= self.max.x + slack
            && self.min.y <= other.max.y + slack
            && other.min.y <= self.max.y + slack
    }
}
