//! Process-wide tolerance.
//!
//! Policy
//! - A single `EPSILON` governs every approximate predicate in the crate
//!   (orientation signs, on-segment tests, duplicate detection, degenerate area).
//! - It is read on every predicate call and only changes through an explicit
//!   [`set_epsilon`] call; there is no scoped or per-polygon override.
//! - Orientation tests apply it relatively: two vectors `u`, `v` are treated as
//!   parallel when `|u × v| <= EPSILON · |u| · |v|` (sine of the angle within
//!   `EPSILON`). Point coincidence compares squared distance against `EPSILON²`.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{PolygonError, PolygonResult};

/// Default tolerance.
pub const DEFAULT_EPSILON: f64 = 1e-5;

// Bit pattern of the active epsilon; zero means "not configured" (never a valid epsilon).
static EPSILON_BITS: AtomicU64 = AtomicU64::new(0);

/// Active tolerance.
#[inline]
pub fn epsilon() -> f64 {
    match EPSILON_BITS.load(Ordering::Relaxed) {
        0 => DEFAULT_EPSILON,
        bits => f64::from_bits(bits),
    }
}

/// Square of the active tolerance.
#[inline]
pub fn epsilon2() -> f64 {
    let e = epsilon();
    e * e
}

/// Replace the process-wide tolerance, returning the previous value.
///
/// Rejects non-finite and non-positive values. Cached polygon properties computed
/// under the old tolerance are not recomputed.
pub fn set_epsilon(value: f64) -> PolygonResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PolygonError::InvalidEpsilon { value });
    }
    let prev = EPSILON_BITS.swap(value.to_bits(), Ordering::Relaxed);
    tracing::debug!(epsilon = value, "tolerance reconfigured");
    Ok(match prev {
        0 => DEFAULT_EPSILON,
        bits => f64::from_bits(bits),
    })
}

/// `|a - b| < EPSILON`.
#[inline]
pub fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < epsilon()
}
