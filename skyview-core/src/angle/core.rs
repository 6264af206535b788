//! Typed angle.
//!
//! [`Angle`] stores radians, the unit every projection formula works in, and
//! converts to degrees or hours only at the display and parsing edges.
//!
//! ```
//! use skyview_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-12);
//!
//! let fov = Angle::from_degrees(60.0);
//! assert!((fov.half().degrees() - 30.0).abs() < 1e-12);
//! ```

use crate::constants::{DEG_PER_HOUR, HALF_PI, PI};

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    pub const PI: Self = Self { rad: PI };

    pub const HALF_PI: Self = Self { rad: HALF_PI };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Right-ascension hours; 1h = 15°.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * DEG_PER_HOUR).to_radians(),
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEG_PER_HOUR
    }

    #[inline]
    pub fn half(self) -> Self {
        Self { rad: self.rad / 2.0 }
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }
}

impl std::ops::Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.rad + rhs.rad)
    }
}

impl std::ops::Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.rad - rhs.rad)
    }
}

impl std::ops::Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.rad)
    }
}

impl std::ops::Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.rad * rhs)
    }
}

impl std::fmt::Display for Angle {
    /// Decimal degrees with six places; use [`HmsFmt`](super::HmsFmt) or
    /// [`DmsFmt`](super::DmsFmt) for sexagesimal notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
