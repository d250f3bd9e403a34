//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while constructing or mutating polygons.
///
/// Degenerate geometry is not an error: an undefined centroid is `None`, and
/// tangents from an interior point still return two vertices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonError {
    #[error("polygon needs at least 3 vertices, got {got}")]
    TooFewVertices { got: usize },
    #[error("convex hull needs at least 3 distinct points, got {distinct}")]
    DegenerateHull { distinct: usize },
    #[error("{what}: at least {min} required, got {got}")]
    InvalidCount {
        what: &'static str,
        min: usize,
        got: usize,
    },
    #[error("radius must be finite and non-zero, got {radius}")]
    InvalidRadius { radius: f64 },
    #[error("non-finite coordinate at point {index}")]
    NonFinite { index: usize },
    #[error("vertex index {index} out of range for polygon with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("tolerance must be finite and positive, got {value}")]
    InvalidEpsilon { value: f64 },
    #[error("cannot parse polygon: {reason}")]
    Parse { reason: String },
}

pub type PolygonResult<T> = Result<T, PolygonError>;
