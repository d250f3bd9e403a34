//! 2D affine maps `x ↦ M x + t`.

use nalgebra::Matrix2;

use crate::cfg;
use crate::vector::{cos_sin_deg, Vec2};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vec2,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vec2::zeros(),
        }
    }
    #[inline]
    pub fn translation(t: Vec2) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    /// Per-axis scale about the origin.
    #[inline]
    pub fn scale(s: Vec2) -> Self {
        Self {
            m: Matrix2::new(s.x, 0.0, 0.0, s.y),
            t: Vec2::zeros(),
        }
    }
    /// Counterclockwise rotation about the origin, angle in degrees.
    #[inline]
    pub fn rotation(angle_deg: f64) -> Self {
        let (c, s) = cos_sin_deg(angle_deg);
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vec2::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.m * p + self.t
    }
    /// `self ∘ other`: apply `other` first.
    #[inline]
    pub fn compose(&self, other: &Affine2) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m.determinant()
    }
    /// Collapses area (|det| within `EPSILON²` of zero).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.determinant().abs() <= cfg::epsilon2()
    }
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.determinant() > 0.0
    }
}

impl std::ops::Mul for Affine2 {
    type Output = Affine2;
    #[inline]
    fn mul(self, rhs: Affine2) -> Self::Output {
        self.compose(&rhs)
    }
}
