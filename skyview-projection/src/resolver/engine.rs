use std::fmt;

use skyview_core::angle::wrap_0_2pi;
use skyview_core::Vector3;

use crate::error::EngineError;

/// Reference frames the engine converts between. [`Frame::View`] is the
/// camera frame the projections work in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Frame {
    View,
    Observed,
    Cirs,
    Icrf,
    Jnow,
}

impl Frame {
    pub fn tag(self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Observed => "OBSERVED",
            Self::Cirs => "CIRS",
            Self::Icrf => "ICRF",
            Self::Jnow => "JNOW",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The sky engine as seen by the click resolver.
///
/// Observer location, time and refraction all live behind
/// [`convert_frame`](Self::convert_frame); the resolver only reads the
/// camera state and calls the conversion primitives once per click.
pub trait SkyEngine {
    /// Full field of view in radians.
    fn fov(&self) -> f64;

    /// Numeric projection id. Unknown ids are treated as perspective.
    fn projection(&self) -> i32;

    /// Rotate a direction from one frame to another.
    fn convert_frame(&self, from: Frame, to: Frame, v: Vector3) -> Result<Vector3, EngineError>;

    /// `(ra, dec)` in radians for a Cartesian direction.
    fn cartesian_to_spherical(&self, v: Vector3) -> Result<(f64, f64), EngineError>;

    /// Wrap an angle into [0, 2π).
    fn normalize_angle(&self, angle: f64) -> f64 {
        wrap_0_2pi(angle)
    }
}

impl<E: SkyEngine + ?Sized> SkyEngine for &E {
    fn fov(&self) -> f64 {
        (**self).fov()
    }

    fn projection(&self) -> i32 {
        (**self).projection()
    }

    fn convert_frame(&self, from: Frame, to: Frame, v: Vector3) -> Result<Vector3, EngineError> {
        (**self).convert_frame(from, to, v)
    }

    fn cartesian_to_spherical(&self, v: Vector3) -> Result<(f64, f64), EngineError> {
        (**self).cartesian_to_spherical(v)
    }

    fn normalize_angle(&self, angle: f64) -> f64 {
        (**self).normalize_angle(angle)
    }
}
