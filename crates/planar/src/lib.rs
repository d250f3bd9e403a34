//! 2D polygon analysis and classification.
//!
//! Polygons own a mutable vertex cycle and classify themselves lazily:
//! convexity, simplicity, centroid and bounding box are computed on first use,
//! cached, and invalidated on mutation. Point containment and tangent queries
//! pick their algorithm from whatever is already known; `convex_hull` builds a
//! convex polygon from an unordered point set.
//!
//! Numerics
//! - All approximate predicates share one process-wide tolerance (`cfg`).
//! - Points on a polygon's boundary are never contained.

pub mod bbox;
pub mod cfg;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod predicates;
pub mod rand;
pub mod transform;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bbox::BoundingBox;
pub use error::{PolygonError, PolygonResult};
pub use hull::convex_hull;
pub use polygon::cache::Known;
pub use polygon::{Hints, Polygon, Strategy};
pub use transform::Affine2;
pub use vector::{parallelogram_area, polar, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bbox::BoundingBox;
    pub use crate::cfg::{almost_equal, epsilon, set_epsilon};
    pub use crate::error::{PolygonError, PolygonResult};
    pub use crate::hull::convex_hull;
    pub use crate::polygon::{Hints, Polygon, Strategy};
    pub use crate::predicates::{orient2d, point_on_segment, Orientation};
    pub use crate::rand::{
        draw_convex_radial, draw_points, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::transform::Affine2;
    pub use crate::vector::{almost_equal_vec, polar, Vec2};
}
