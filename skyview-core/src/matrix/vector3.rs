//! 3D Cartesian directions.
//!
//! Two frames flow through this type:
//!
//! - **View space**: camera relative, `-Z` into the screen, `+X` right,
//!   `+Y` up. The projection crate maps these to screen coordinates.
//! - **Celestial frames**: `+X` toward the vernal equinox, `+Z` toward the
//!   north celestial pole. [`from_spherical`](Vector3::from_spherical) and
//!   [`to_spherical`](Vector3::to_spherical) use this convention (longitude
//!   from +X toward +Y, latitude above the XY plane).
//!
//! Directions are expected to be unit length. Input from outside the crate
//! goes through [`try_normalize`](Vector3::try_normalize), which rejects
//! zero-length and non-finite vectors instead of propagating NaN.
//!
//! ```
//! use skyview_core::Vector3;
//!
//! let v = Vector3::new(3.0, 4.0, 0.0).try_normalize().unwrap();
//! assert!((v.magnitude() - 1.0).abs() < 1e-15);
//!
//! assert!(Vector3::zeros().try_normalize().is_err());
//! assert!(Vector3::new(f64::NAN, 0.0, 1.0).try_normalize().is_err());
//! ```

use crate::{CoreError, CoreResult, MathErrorKind};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Unit vector in the same direction; the zero vector is returned
    /// unchanged.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            *self / mag
        }
    }

    /// Unit vector in the same direction, or an error for zero-length or
    /// non-finite input.
    pub fn try_normalize(&self) -> CoreResult<Self> {
        if !self.is_finite() {
            return Err(CoreError::math_error(
                "Vector3::try_normalize",
                MathErrorKind::NotFinite,
                "vector has a non-finite component",
            ));
        }
        // Pre-scale by the largest component so tiny or huge vectors do not
        // underflow/overflow in the squared magnitude.
        let scale = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if scale == 0.0 {
            return Err(CoreError::math_error(
                "Vector3::try_normalize",
                MathErrorKind::ZeroLength,
                "vector has zero length",
            ));
        }
        let scaled = *self / scale;
        Ok(scaled / scaled.magnitude())
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Unit vector for longitude `lon` (from +X toward +Y) and latitude
    /// `lat` (above the XY plane), both in radians.
    pub fn from_spherical(lon: f64, lat: f64) -> Self {
        let (sin_lon, cos_lon) = libm::sincos(lon);
        let (sin_lat, cos_lat) = libm::sincos(lat);
        Self::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// `(lon, lat)` in radians with `lon` in (-π, π] and `lat` in
    /// [-π/2, π/2]. Magnitude is ignored; the zero vector maps to `(0, 0)`.
    pub fn to_spherical(&self) -> (f64, f64) {
        let d2 = self.x * self.x + self.y * self.y;

        let lon = if d2 == 0.0 {
            0.0
        } else {
            libm::atan2(self.y, self.x)
        };
        let lat = if self.z == 0.0 {
            0.0
        } else {
            libm::atan2(self.z, libm::sqrt(d2))
        };

        (lon, lat)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}, {:.6}]", self.x, self.y, self.z)
    }
}
