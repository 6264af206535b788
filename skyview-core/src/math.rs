#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// `asin` with its argument clamped into [-1, 1].
///
/// Rounding can push a sine a few ULP past ±1; without the clamp `asin`
/// returns NaN right at the poles.
#[inline]
pub fn asin_safe(sin_value: f64) -> f64 {
    sin_value.clamp(-1.0, 1.0).asin()
}
