//! Angle normalization.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension (radians) | [0, 2π) | [`wrap_0_2pi`] |
//! | Right ascension (degrees) | [0, 360) | [`wrap_0_360`] |
//! | Longitude-like angles | [-π, π) | [`wrap_pm_pi`] |
//! | Declination / latitude | [-π/2, π/2] | [`clamp_dec`] |
//!
//! Wrapping keeps the direction on the sphere; clamping saturates at the
//! poles because a declination cannot go past ±90°.
//!
//! The wrappers use `libm::fmod` (a remainder that keeps the dividend's sign)
//! and then shift negative results up by one turn. A tiny negative input can
//! round up to exactly one full turn after the shift, so the upper bound is
//! re-checked.

use crate::constants::{HALF_PI, PI, TWOPI};
use crate::math::fmod;

/// Wraps radians into [0, 2π).
#[inline]
pub fn wrap_0_2pi(angle: f64) -> f64 {
    let mut a = fmod(angle, TWOPI);
    if a < 0.0 {
        a += TWOPI;
    }
    if a >= TWOPI {
        a = 0.0;
    }
    a
}

/// Wraps degrees into [0, 360).
#[inline]
pub fn wrap_0_360(deg: f64) -> f64 {
    let mut a = fmod(deg, 360.0);
    if a < 0.0 {
        a += 360.0;
    }
    if a >= 360.0 {
        a = 0.0;
    }
    a
}

/// Wraps radians into [-π, π).
#[inline]
pub fn wrap_pm_pi(angle: f64) -> f64 {
    let mut a = fmod(angle + PI, TWOPI);
    if a < 0.0 {
        a += TWOPI;
    }
    a - PI
}

/// Clamps radians into [-π/2, π/2].
#[inline]
pub fn clamp_dec(angle: f64) -> f64 {
    angle.clamp(-HALF_PI, HALF_PI)
}
